use soroban_sdk::{
    contractevent, contracttype, token, xdr::ToXdr, Address, BytesN, Env, Symbol, Val, Vec,
};

use crate::owners;
use crate::GovernorError;

/// Storage keys for pending-call records, keyed by content hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKey {
    /// Owners who have approved this exact batch content.
    Approvals(BytesN<32>),
    /// Set once the batch content has executed; never cleared.
    Executed(BytesN<32>),
}

/// Event data emitted per recorded vote. External indexers rely on the
/// exact field order.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Approved {
    pub content_hash: BytesN<32>,
    pub owner: Address,
}

/// Event data emitted when a batch reaches quorum and executes.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Executed {
    pub content_hash: BytesN<32>,
}

/// Content-address of a batched call: SHA-256 over the canonical XDR
/// encoding of the four parallel arrays. Two logically identical batches
/// hash identically regardless of who submits them.
pub fn hash_transaction(
    env: &Env,
    targets: &Vec<Address>,
    values: &Vec<i128>,
    functions: &Vec<Symbol>,
    args: &Vec<Vec<Val>>,
) -> BytesN<32> {
    let payload = (
        targets.clone(),
        values.clone(),
        functions.clone(),
        args.clone(),
    )
        .to_xdr(env);
    env.crypto().sha256(&payload).to_bytes()
}

pub fn approvals(env: &Env, content_hash: &BytesN<32>) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&ProposalKey::Approvals(content_hash.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn is_executed(env: &Env, content_hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .get(&ProposalKey::Executed(content_hash.clone()))
        .unwrap_or(false)
}

/// Record the caller's approval for this exact batch content; execute the
/// batch once the approval count reaches quorum.
///
/// The executed flag is committed and `Executed` emitted before any external
/// call, so a reentrant identical submission observes `AlreadyExecuted`.
/// A sub-call failure traps and rolls the entire transaction back, approval
/// bookkeeping included: either the whole batch commits or none of it does.
///
/// # Errors
/// - [`GovernorError::NotAnOwner`] if `caller` is not in the owner set.
/// - [`GovernorError::InvalidBatch`] if the arrays are empty, differ in
///   length, or any value is negative.
/// - [`GovernorError::NativeAssetNotSet`] if a positive value is supplied
///   and no native asset was configured.
/// - [`GovernorError::AlreadyExecuted`] if this content has already run.
/// - [`GovernorError::AlreadyApproved`] if `caller` already approved it.
pub fn execute_transaction(
    env: &Env,
    caller: Address,
    targets: Vec<Address>,
    values: Vec<i128>,
    functions: Vec<Symbol>,
    args: Vec<Vec<Val>>,
) -> Result<BytesN<32>, GovernorError> {
    caller.require_auth();
    owners::require_owner(env, &caller)?;

    let len = targets.len();
    if len == 0 || values.len() != len || functions.len() != len || args.len() != len {
        return Err(GovernorError::InvalidBatch);
    }
    for value in values.iter() {
        if value < 0 {
            return Err(GovernorError::InvalidBatch);
        }
        if value > 0 && owners::native_asset(env).is_none() {
            return Err(GovernorError::NativeAssetNotSet);
        }
    }

    let content_hash = hash_transaction(env, &targets, &values, &functions, &args);
    if is_executed(env, &content_hash) {
        return Err(GovernorError::AlreadyExecuted);
    }

    let mut approvers = approvals(env, &content_hash);
    if approvers.contains(&caller) {
        return Err(GovernorError::AlreadyApproved);
    }
    approvers.push_back(caller.clone());
    env.storage()
        .persistent()
        .set(&ProposalKey::Approvals(content_hash.clone()), &approvers);

    Approved {
        content_hash: content_hash.clone(),
        owner: caller,
    }
    .publish(env);

    if approvers.len() >= owners::quorum(env)? {
        // Consume the record before touching any target
        env.storage()
            .persistent()
            .set(&ProposalKey::Executed(content_hash.clone()), &true);
        Executed {
            content_hash: content_hash.clone(),
        }
        .publish(env);

        run_batch(env, &targets, &values, &functions, &args)?;
    }

    Ok(content_hash)
}

/// Invoke each (target, value, function, args) entry in array order. A
/// positive value forwards that amount of the native asset to the target
/// ahead of the invocation.
fn run_batch(
    env: &Env,
    targets: &Vec<Address>,
    values: &Vec<i128>,
    functions: &Vec<Symbol>,
    args: &Vec<Vec<Val>>,
) -> Result<(), GovernorError> {
    for i in 0..targets.len() {
        let target = targets.get(i).unwrap();
        let value = values.get(i).unwrap();

        if value > 0 {
            let native = owners::native_asset(env).ok_or(GovernorError::NativeAssetNotSet)?;
            token::Client::new(env, &native).transfer(
                &env.current_contract_address(),
                &target,
                &value,
            );
        }

        let _: Val = env.invoke_contract(
            &target,
            &functions.get(i).unwrap(),
            args.get(i).unwrap(),
        );
    }
    Ok(())
}
