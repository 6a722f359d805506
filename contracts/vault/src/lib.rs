//! # Distribution Vault
//!
//! A multi-asset pull-payment ledger. Depositors send tokens straight to the
//! contract address; accounts holding the distributor role allocate that
//! value to beneficiaries; beneficiaries withdraw their own accrued credit.
//! The owner (typically a multisig governor after the ownership handoff) can
//! pause withdrawals, redirect a beneficiary's credit while paused, sweep
//! untracked residue, and discard stale credit.
//!
//! Accounting invariant: for every asset, the sum of beneficiary balances
//! equals the tracked total, and the tracked total never exceeds the vault's
//! actual held balance of that asset.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod access;
mod distribute;
mod pause;
mod storage;
mod withdraw;

pub use storage::VaultError;


#[contract]
pub struct Vault;

#[contractimpl]
impl Vault {
    /// Initialize the vault and designate the owner.
    ///
    /// One-shot: deployment tooling calls this exactly once.
    ///
    /// # Errors
    /// - `AlreadyInitialized` - `initialize` was already called
    pub fn initialize(env: Env, owner: Address) -> Result<(), VaultError> {
        access::initialize(&env, owner)
    }

    /// Transfer ownership to `new_owner` (owner only).
    ///
    /// Deployment tooling uses this to hand control to a deployed
    /// multisig governor once initial configuration completes.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VaultError> {
        access::transfer_ownership(&env, caller, new_owner)
    }

    /// Grant the distributor role to `account` (owner only).
    ///
    /// Idempotent if the account already holds the role.
    pub fn add_distributor(env: Env, caller: Address, account: Address) -> Result<(), VaultError> {
        access::add_distributor(&env, caller, account)
    }

    /// Credit `amount` of `asset` to `beneficiary` (distributor only).
    ///
    /// # Arguments
    /// * `caller` - The distributor (must authorize)
    /// * `asset` - Token contract address of the distributed asset
    /// * `beneficiary` - Account whose accrued credit grows
    /// * `amount` - The amount to credit
    ///
    /// # Errors
    /// - `NotAuthorized` - caller lacks the distributor role
    /// - `InvalidAmount` - amount is negative
    /// - `DistributionOverflow` - credit would exceed the vault's held balance
    pub fn distribute(
        env: Env,
        caller: Address,
        asset: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), VaultError> {
        distribute::distribute(&env, caller, asset, beneficiary, amount)
    }

    /// Withdraw the caller's full accrued balance of `asset`.
    ///
    /// Safe to call with nothing accrued: a zero-amount withdrawal succeeds
    /// and emits a zero-amount record.
    ///
    /// # Returns
    /// The amount moved out of the vault.
    ///
    /// # Errors
    /// - `EnforcedPause` - withdrawals are paused
    pub fn withdraw(env: Env, beneficiary: Address, asset: Address) -> Result<i128, VaultError> {
        withdraw::withdraw(&env, beneficiary, asset)
    }

    /// Redirect `beneficiary`'s accrued balance of `asset` to `recipient`
    /// (owner only, and only while paused).
    ///
    /// # Errors
    /// - `NotAuthorized` - caller is not the owner
    /// - `ExpectedPause` - the vault is not paused
    pub fn withdraw_from(
        env: Env,
        caller: Address,
        asset: Address,
        beneficiary: Address,
        recipient: Address,
    ) -> Result<i128, VaultError> {
        withdraw::withdraw_from(&env, caller, asset, beneficiary, recipient)
    }

    /// Sweep the untracked residue of `asset` to `recipient` (owner only).
    ///
    /// Moves only `held balance - total distributed`; tracked beneficiary
    /// credit is never touched.
    pub fn withdraw_crumbs(
        env: Env,
        caller: Address,
        asset: Address,
        recipient: Address,
    ) -> Result<i128, VaultError> {
        withdraw::withdraw_crumbs(&env, caller, asset, recipient)
    }

    /// Zero `beneficiary`'s accrued balance of `asset` without moving funds
    /// (owner only).
    pub fn reset(
        env: Env,
        caller: Address,
        asset: Address,
        beneficiary: Address,
    ) -> Result<(), VaultError> {
        withdraw::reset(&env, caller, asset, beneficiary)
    }

    /// Pause self-service withdrawals (owner only).
    ///
    /// # Errors
    /// - `EnforcedPause` - already paused
    pub fn pause(env: Env, caller: Address) -> Result<(), VaultError> {
        pause::pause(&env, caller)
    }

    /// Unpause self-service withdrawals (owner only).
    ///
    /// # Errors
    /// - `ExpectedPause` - not currently paused
    pub fn unpause(env: Env, caller: Address) -> Result<(), VaultError> {
        pause::unpause(&env, caller)
    }

    /// Return `beneficiary`'s accrued, unwithdrawn balance of `asset`.
    pub fn balance_of(env: Env, asset: Address, beneficiary: Address) -> i128 {
        storage::balance_of(&env, &asset, &beneficiary)
    }

    /// Return the tracked total of `asset` across all beneficiaries.
    pub fn total_distributed(env: Env, asset: Address) -> i128 {
        storage::total_distributed(&env, &asset)
    }

    /// Return `true` if `account` holds the distributor role.
    pub fn is_distributor(env: Env, account: Address) -> bool {
        access::is_distributor(&env, &account)
    }

    /// Return the pause flag.
    pub fn paused(env: Env) -> bool {
        storage::paused(&env)
    }

    /// Return the owner address.
    pub fn owner(env: Env) -> Result<Address, VaultError> {
        storage::owner(&env)
    }
}
