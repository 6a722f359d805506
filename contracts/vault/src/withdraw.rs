use soroban_sdk::{contractevent, token, Address, Env};

use crate::access;
use crate::pause;
use crate::storage::{self, VaultError};

/// Event data emitted per withdrawal. A crumb sweep uses the vault's own
/// address as `beneficiary`. External indexers rely on the exact field order.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Withdrawal {
    pub beneficiary: Address,
    pub recipient: Address,
    pub asset: Address,
    pub amount: i128,
}

/// Event data emitted when a beneficiary's credit is discarded without a
/// transfer. Distinct from [`Withdrawal`] so indexers can tell the two apart.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Reset {
    pub beneficiary: Address,
    pub asset: Address,
}

/// Pull the caller's full accrued balance of `asset`.
///
/// The balance is zeroed and the tracked total decremented before the token
/// leaves the vault (checks-effects-interactions); a failed transfer reverts
/// the whole operation. A zero remaining balance still emits a zero-amount
/// `Withdrawal` record so the call stays idempotent and observable.
///
/// # Errors
/// - [`VaultError::EnforcedPause`] while the vault is paused.
pub fn withdraw(env: &Env, beneficiary: Address, asset: Address) -> Result<i128, VaultError> {
    beneficiary.require_auth();
    if !storage::is_initialized(env) {
        return Err(VaultError::NotInitialized);
    }
    pause::when_not_paused(env)?;

    settle(env, asset, beneficiary.clone(), beneficiary)
}

/// Redirect a beneficiary's full accrued balance to an arbitrary recipient.
///
/// Emergency/administrative path: owner-only and only available while the
/// vault is paused, so it can never race self-service withdrawals.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` is not the owner.
/// - [`VaultError::ExpectedPause`] unless the vault is paused.
pub fn withdraw_from(
    env: &Env,
    caller: Address,
    asset: Address,
    beneficiary: Address,
    recipient: Address,
) -> Result<i128, VaultError> {
    caller.require_auth();
    access::require_owner(env, &caller)?;
    pause::when_paused(env)?;

    settle(env, asset, beneficiary, recipient)
}

/// Sweep the untracked residue of `asset` (the held balance in excess of
/// the tracked total) to `recipient`. Tracked beneficiary credit is never
/// touched. The emitted record carries the vault's own address as the
/// beneficiary.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` is not the owner.
pub fn withdraw_crumbs(
    env: &Env,
    caller: Address,
    asset: Address,
    recipient: Address,
) -> Result<i128, VaultError> {
    caller.require_auth();
    access::require_owner(env, &caller)?;

    let vault = env.current_contract_address();
    let held = token::Client::new(env, &asset).balance(&vault);
    let crumbs = held - storage::total_distributed(env, &asset);

    if crumbs > 0 {
        token::Client::new(env, &asset).transfer(&vault, &recipient, &crumbs);
    }

    Withdrawal {
        beneficiary: vault,
        recipient,
        asset,
        amount: crumbs,
    }
    .publish(env);
    Ok(crumbs)
}

/// Zero a beneficiary's accrued balance without moving funds, discarding
/// stale or duplicate credit. The tracked total drops by the same amount.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` is not the owner.
pub fn reset(
    env: &Env,
    caller: Address,
    asset: Address,
    beneficiary: Address,
) -> Result<(), VaultError> {
    caller.require_auth();
    access::require_owner(env, &caller)?;

    let amount = storage::balance_of(env, &asset, &beneficiary);
    let total = storage::total_distributed(env, &asset);
    let new_total = total.checked_sub(amount).ok_or(VaultError::Overflow)?;

    storage::set_balance(env, &asset, &beneficiary, 0);
    storage::set_total_distributed(env, &asset, new_total);

    Reset { beneficiary, asset }.publish(env);
    Ok(())
}

/// Shared settlement path for `withdraw` and `withdraw_from`: zero the
/// beneficiary's balance, decrement the total, then transfer out.
fn settle(
    env: &Env,
    asset: Address,
    beneficiary: Address,
    recipient: Address,
) -> Result<i128, VaultError> {
    let amount = storage::balance_of(env, &asset, &beneficiary);
    let total = storage::total_distributed(env, &asset);
    let new_total = total.checked_sub(amount).ok_or(VaultError::Overflow)?;

    storage::set_balance(env, &asset, &beneficiary, 0);
    storage::set_total_distributed(env, &asset, new_total);

    if amount > 0 {
        token::Client::new(env, &asset).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );
    }

    Withdrawal {
        beneficiary,
        recipient,
        asset,
        amount,
    }
    .publish(env);
    Ok(amount)
}
