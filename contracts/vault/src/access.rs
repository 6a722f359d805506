use soroban_sdk::{contractevent, Address, Env};

use crate::storage::{self, VaultError};

/// Event data emitted when ownership moves to a new account.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Event data emitted when an account is first granted the distributor role.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DistributorAdded {
    pub account: Address,
}

/// One-time setup designating the owner.
///
/// # Errors
/// - [`VaultError::AlreadyInitialized`] on any call after the first.
pub fn initialize(env: &Env, owner: Address) -> Result<(), VaultError> {
    owner.require_auth();

    if storage::is_initialized(env) {
        return Err(VaultError::AlreadyInitialized);
    }
    storage::set_owner(env, &owner);
    Ok(())
}

/// Hand ownership to `new_owner`. Used by deployment tooling to place the
/// vault under multisig control once configuration completes.
pub fn transfer_ownership(env: &Env, caller: Address, new_owner: Address) -> Result<(), VaultError> {
    caller.require_auth();
    require_owner(env, &caller)?;

    storage::set_owner(env, &new_owner);
    OwnershipTransferred {
        previous_owner: caller,
        new_owner,
    }
    .publish(env);
    Ok(())
}

/// Grant the distributor role. Idempotent if `account` already holds it.
pub fn add_distributor(env: &Env, caller: Address, account: Address) -> Result<(), VaultError> {
    caller.require_auth();
    require_owner(env, &caller)?;

    let mut distributors = storage::distributors(env);
    if !distributors.contains(&account) {
        distributors.push_back(account.clone());
        storage::set_distributors(env, &distributors);
        DistributorAdded { account }.publish(env);
    }
    Ok(())
}

pub fn is_distributor(env: &Env, account: &Address) -> bool {
    storage::distributors(env).contains(account)
}

/// Fails with `NotAuthorized` unless `caller` is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
    if *caller != storage::owner(env)? {
        return Err(VaultError::NotAuthorized);
    }
    Ok(())
}

/// Fails with `NotAuthorized` unless `caller` holds the distributor role.
pub fn require_distributor(env: &Env, caller: &Address) -> Result<(), VaultError> {
    if !storage::is_initialized(env) {
        return Err(VaultError::NotInitialized);
    }
    if !is_distributor(env, caller) {
        return Err(VaultError::NotAuthorized);
    }
    Ok(())
}
