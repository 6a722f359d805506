//! # Treasury
//!
//! Owner-controlled custody with no ledger of its own: it simply holds
//! whatever tokens are sent to its address and moves or approves them on the
//! owner's instruction. A convenience entry point pulls the treasury's own
//! accrued credit out of a distribution vault it has been registered with.
//!
//! Like the vault, the treasury is handed to a multisig governor after
//! deployment, so every operation here ends up quorum-gated.

#![no_std]
use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, token, vec, Address, Env,
    IntoVal, Symbol, Val, Vec,
};


/// Ledger-sequence TTL granted to token allowances (about 30 days of 5s
/// ledgers). Soroban approvals require an expiration, unlike the unbounded
/// allowances of other chains.
pub const APPROVE_TTL_LEDGERS: u32 = 518_400;

/// All errors emitted by the Treasury contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TreasuryError {
    /// Contract has already been initialised; `initialize` cannot be called again.
    AlreadyInitialized = 1,
    /// Contract has not been initialised yet.
    NotInitialized = 2,
    /// Caller is not the owner.
    NotAuthorized = 3,
    /// Amount is negative.
    InvalidAmount = 4,
}

/// Top-level storage keys used by the Treasury contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Marks the contract as initialised; value is the owner `Address`.
    Owner,
    /// Stellar Asset Contract backing `transfer_native`.
    NativeAsset,
}

/// Event data emitted when ownership moves to a new account.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contract]
pub struct Treasury;

#[contractimpl]
impl Treasury {
    /// Initialize the treasury, designating the owner and the native asset
    /// contract. One-shot.
    ///
    /// # Errors
    /// - `AlreadyInitialized` - `initialize` was already called
    pub fn initialize(env: Env, owner: Address, native_asset: Address) -> Result<(), TreasuryError> {
        owner.require_auth();

        if env.storage().persistent().has(&DataKey::Owner) {
            return Err(TreasuryError::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Owner, &owner);
        env.storage()
            .persistent()
            .set(&DataKey::NativeAsset, &native_asset);
        Ok(())
    }

    /// Transfer ownership to `new_owner` (owner only).
    ///
    /// Deployment tooling uses this to hand control to a deployed
    /// multisig governor once initial configuration completes.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TreasuryError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        env.storage().persistent().set(&DataKey::Owner, &new_owner);
        OwnershipTransferred {
            previous_owner: caller,
            new_owner,
        }
        .publish(&env);
        Ok(())
    }

    /// Move `amount` of a held token to `recipient` (owner only).
    ///
    /// Pure custody pass-through: no accounting beyond the token's own.
    ///
    /// # Errors
    /// - `NotAuthorized` - caller is not the owner
    /// - `InvalidAmount` - amount is negative
    pub fn transfer(
        env: Env,
        caller: Address,
        asset: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        if amount < 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );
        Ok(())
    }

    /// Move `amount` of the native asset to `recipient` (owner only).
    pub fn transfer_native(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        if amount < 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        let native = Self::native_asset_or_fail(&env)?;
        token::Client::new(&env, &native).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );
        Ok(())
    }

    /// Grant `spender` an allowance of `amount` over a held token (owner
    /// only). The allowance expires after [`APPROVE_TTL_LEDGERS`] ledgers.
    pub fn approve(
        env: Env,
        caller: Address,
        asset: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        if amount < 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        let live_until = env.ledger().sequence() + APPROVE_TTL_LEDGERS;
        token::Client::new(&env, &asset).approve(
            &env.current_contract_address(),
            &spender,
            &amount,
            &live_until,
        );
        Ok(())
    }

    /// Pull the treasury's own accrued credit for each listed asset out of a
    /// distribution vault (owner only).
    ///
    /// The asset list is explicit because a contract cannot enumerate a
    /// foreign ledger's keys; pulling an asset with nothing accrued is the
    /// vault's safe zero-amount withdrawal.
    pub fn withdraw_from(
        env: Env,
        caller: Address,
        ledger: Address,
        assets: Vec<Address>,
    ) -> Result<(), TreasuryError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        for asset in assets.iter() {
            let call_args: Vec<Val> = vec![
                &env,
                env.current_contract_address().into_val(&env),
                asset.into_val(&env),
            ];
            let _: i128 = env.invoke_contract(&ledger, &Symbol::new(&env, "withdraw"), call_args);
        }
        Ok(())
    }

    /// Return the owner address.
    pub fn owner(env: Env) -> Result<Address, TreasuryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner)
            .ok_or(TreasuryError::NotInitialized)
    }

    /// Return the configured native asset contract.
    pub fn native_asset(env: Env) -> Result<Address, TreasuryError> {
        Self::native_asset_or_fail(&env)
    }

    /// Fails with `NotAuthorized` unless `caller` is the current owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), TreasuryError> {
        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner)
            .ok_or(TreasuryError::NotInitialized)?;
        if *caller != owner {
            return Err(TreasuryError::NotAuthorized);
        }
        Ok(())
    }

    fn native_asset_or_fail(env: &Env) -> Result<Address, TreasuryError> {
        env.storage()
            .persistent()
            .get(&DataKey::NativeAsset)
            .ok_or(TreasuryError::NotInitialized)
    }
}
