use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::GovernorError;

/// Storage keys for the owner-set configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigKey {
    /// Marks the contract as initialised; value is the owner `Vec<Address>`.
    Owners,
    /// Approvals required before a batch executes (u32).
    Quorum,
    /// Stellar Asset Contract used to forward per-call `value` amounts.
    NativeAsset,
}

/// Persist the owner set, quorum, and optional native asset. One-time.
///
/// The owner list must be non-empty and contain no duplicates, and the
/// quorum must be between 1 and the number of owners.
///
/// # Errors
/// - [`GovernorError::AlreadyInitialized`] on any call after the first.
/// - [`GovernorError::InvalidConfiguration`] if the list or quorum is invalid.
pub fn initialize(
    env: &Env,
    owners: Vec<Address>,
    quorum: u32,
    native_asset: Option<Address>,
) -> Result<(), GovernorError> {
    if env.storage().persistent().has(&ConfigKey::Owners) {
        return Err(GovernorError::AlreadyInitialized);
    }
    if owners.is_empty() {
        return Err(GovernorError::InvalidConfiguration);
    }
    if quorum == 0 || quorum > owners.len() {
        return Err(GovernorError::InvalidConfiguration);
    }

    // Duplicate check
    for i in 0..owners.len() {
        for j in (i + 1)..owners.len() {
            if owners.get(i).unwrap() == owners.get(j).unwrap() {
                return Err(GovernorError::InvalidConfiguration);
            }
        }
    }

    env.storage().persistent().set(&ConfigKey::Owners, &owners);
    env.storage().persistent().set(&ConfigKey::Quorum, &quorum);
    if let Some(asset) = native_asset {
        env.storage().persistent().set(&ConfigKey::NativeAsset, &asset);
    }
    Ok(())
}

pub fn owners(env: &Env) -> Result<Vec<Address>, GovernorError> {
    env.storage()
        .persistent()
        .get(&ConfigKey::Owners)
        .ok_or(GovernorError::NotInitialized)
}

pub fn quorum(env: &Env) -> Result<u32, GovernorError> {
    env.storage()
        .persistent()
        .get(&ConfigKey::Quorum)
        .ok_or(GovernorError::NotInitialized)
}

pub fn native_asset(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&ConfigKey::NativeAsset)
}

pub fn is_owner(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<ConfigKey, Vec<Address>>(&ConfigKey::Owners)
        .map_or(false, |owners| owners.contains(account))
}

/// Fails with `NotAnOwner` unless `caller` is in the owner set.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), GovernorError> {
    if !owners(env)?.contains(caller) {
        return Err(GovernorError::NotAnOwner);
    }
    Ok(())
}
