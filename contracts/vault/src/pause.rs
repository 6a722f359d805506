use soroban_sdk::{contractevent, Address, Env};

use crate::access;
use crate::storage::{self, VaultError};

/// Event data emitted when the vault is paused.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Paused {}

/// Event data emitted when the vault is unpaused.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Unpaused {}

/// Freeze self-service withdrawals and enable the administrative
/// `withdraw_from` path.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` is not the owner.
/// - [`VaultError::EnforcedPause`] if already paused.
pub fn pause(env: &Env, caller: Address) -> Result<(), VaultError> {
    caller.require_auth();
    access::require_owner(env, &caller)?;
    when_not_paused(env)?;

    storage::set_paused(env, true);
    Paused {}.publish(env);
    Ok(())
}

/// Restore self-service withdrawals.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` is not the owner.
/// - [`VaultError::ExpectedPause`] if not currently paused.
pub fn unpause(env: &Env, caller: Address) -> Result<(), VaultError> {
    caller.require_auth();
    access::require_owner(env, &caller)?;
    when_paused(env)?;

    storage::set_paused(env, false);
    Unpaused {}.publish(env);
    Ok(())
}

/// Guard: the operation is only available while unpaused.
pub fn when_not_paused(env: &Env) -> Result<(), VaultError> {
    if storage::paused(env) {
        return Err(VaultError::EnforcedPause);
    }
    Ok(())
}

/// Guard: the operation is only available while paused.
pub fn when_paused(env: &Env) -> Result<(), VaultError> {
    if !storage::paused(env) {
        return Err(VaultError::ExpectedPause);
    }
    Ok(())
}
