use soroban_sdk::{contractevent, token, Address, Env};

use crate::access;
use crate::storage::{self, VaultError};

/// Event data emitted per distribution. External indexers rely on the
/// exact field order.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Distribute {
    pub beneficiary: Address,
    pub asset: Address,
    pub amount: i128,
}

/// Credit `amount` of `asset` to `beneficiary`.
///
/// The tracked total per asset must never exceed the vault's actual held
/// balance, so the credit is checked against the live token balance at call
/// time, not merely against arithmetic overflow. Distribution stays available
/// while the vault is paused; only withdrawals freeze.
///
/// # Errors
/// - [`VaultError::NotAuthorized`] if `caller` lacks the distributor role.
/// - [`VaultError::InvalidAmount`] if `amount` is negative.
/// - [`VaultError::DistributionOverflow`] if the credit would exceed the
///   held balance of `asset`.
pub fn distribute(
    env: &Env,
    caller: Address,
    asset: Address,
    beneficiary: Address,
    amount: i128,
) -> Result<(), VaultError> {
    caller.require_auth();
    access::require_distributor(env, &caller)?;

    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }

    let total = storage::total_distributed(env, &asset);
    let new_total = total.checked_add(amount).ok_or(VaultError::Overflow)?;

    let held = token::Client::new(env, &asset).balance(&env.current_contract_address());
    if new_total > held {
        return Err(VaultError::DistributionOverflow);
    }

    let balance = storage::balance_of(env, &asset, &beneficiary);
    let new_balance = balance.checked_add(amount).ok_or(VaultError::Overflow)?;

    storage::set_balance(env, &asset, &beneficiary, new_balance);
    storage::set_total_distributed(env, &asset, new_total);

    Distribute {
        beneficiary,
        asset,
        amount,
    }
    .publish(env);
    Ok(())
}
