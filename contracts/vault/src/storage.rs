use soroban_sdk::{contracterror, contracttype, Address, Env, Vec};

/// All errors emitted by the Vault contract.
///
/// Errors are surfaced as `u32` codes in the Soroban result envelope so
/// that callers can pattern-match them programmatically.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    /// Contract has already been initialised; `initialize` cannot be called again.
    AlreadyInitialized = 1,
    /// Contract has not been initialised yet.
    NotInitialized = 2,
    /// Caller lacks the owner or distributor privilege required by the operation.
    NotAuthorized = 3,
    /// Amount is negative.
    InvalidAmount = 4,
    /// Distribution would push the tracked total above the vault's held balance.
    DistributionOverflow = 5,
    /// Arithmetic overflow on a balance or total.
    Overflow = 6,
    /// Operation requires the vault to be unpaused.
    EnforcedPause = 7,
    /// Operation requires the vault to be paused.
    ExpectedPause = 8,
}

/// Top-level storage keys used by the Vault contract.
///
/// Soroban persistent storage is a flat key-value map; all entries are
/// namespaced under typed variants of this enum to avoid collisions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Marks the contract as initialised; value is the owner `Address`.
    Owner,
    /// Accounts allowed to credit beneficiary balances.
    Distributors,
    /// Emergency pause flag (absent = unpaused).
    Paused,
    /// Accrued, unwithdrawn credit per (asset, beneficiary).
    Balance(Address, Address),
    /// Running total of tracked credit per asset.
    TotalDistributed(Address),
}

pub fn owner(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn distributors(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Distributors)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_distributors(env: &Env, distributors: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::Distributors, distributors);
}

pub fn paused(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().persistent().set(&DataKey::Paused, &paused);
}

pub fn balance_of(env: &Env, asset: &Address, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(asset.clone(), beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, asset: &Address, beneficiary: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(asset.clone(), beneficiary.clone()), &amount);
}

pub fn total_distributed(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalDistributed(asset.clone()))
        .unwrap_or(0)
}

pub fn set_total_distributed(env: &Env, asset: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalDistributed(asset.clone()), &amount);
}
