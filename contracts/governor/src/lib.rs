//! # Governor Multisig
//!
//! Threshold governor gating privileged operations behind N-of-M owner
//! approval. Owners submit the same batched cross-contract call; approvals
//! are tallied by a content address (SHA-256 of the canonical encoding of
//! the batch), so logically identical submissions share one tally. The
//! quorum-th approval executes the batch atomically in the same invocation.
//!
//! Contracts such as the distribution vault and treasury transfer their
//! ownership to a deployed governor instance, after which every owner-gated
//! call on them requires quorum here.

#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

mod owners;
mod proposal;

#[cfg(test)]
mod governor_test;

/// All errors emitted by the GovernorMultisig contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernorError {
    /// Contract has already been initialised; `initialize` cannot be called again.
    AlreadyInitialized = 1,
    /// Contract has not been initialised yet.
    NotInitialized = 2,
    /// Owner set empty or duplicated, or quorum out of the 1..=owners range.
    InvalidConfiguration = 3,
    /// Caller is not in the owner set.
    NotAnOwner = 4,
    /// Batch arrays are empty, differ in length, or carry a negative value.
    InvalidBatch = 5,
    /// Caller already approved this exact batch content.
    AlreadyApproved = 6,
    /// This batch content has already executed; resubmission fails loudly.
    AlreadyExecuted = 7,
    /// A positive value was supplied but no native asset is configured.
    NativeAssetNotSet = 8,
}

#[contract]
pub struct GovernorMultisig;

#[contractimpl]
impl GovernorMultisig {
    /// Establish the owner set and quorum. One-shot.
    ///
    /// # Arguments
    /// * `owners` - Unique owner accounts
    /// * `quorum` - Distinct approvals required to execute a batch,
    ///   1 <= quorum <= owners.len()
    /// * `native_asset` - Optional Stellar Asset Contract used to forward
    ///   per-call `value` amounts; batches with all-zero values never need it
    ///
    /// # Errors
    /// - `AlreadyInitialized` - `initialize` was already called
    /// - `InvalidConfiguration` - empty or duplicated owners, or bad quorum
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        quorum: u32,
        native_asset: Option<Address>,
    ) -> Result<(), GovernorError> {
        owners::initialize(&env, owners, quorum, native_asset)
    }

    /// Approve the given batched call and execute it if this approval
    /// reaches quorum.
    ///
    /// The four arrays are parallel: entry `i` invokes `functions[i]` on
    /// `targets[i]` with `args[i]`, forwarding `values[i]` of the native
    /// asset when positive. Approvals are tallied against the content hash
    /// of the whole batch, so owners submit the identical call data
    /// independently.
    ///
    /// # Returns
    /// The batch's content hash.
    ///
    /// # Errors
    /// - `NotAnOwner` - caller is not a current owner
    /// - `InvalidBatch` - array lengths differ, batch empty, negative value
    /// - `AlreadyApproved` - caller already voted for this content
    /// - `AlreadyExecuted` - this content has already run
    /// - `NativeAssetNotSet` - positive value with no native asset configured
    pub fn execute_transaction(
        env: Env,
        caller: Address,
        targets: Vec<Address>,
        values: Vec<i128>,
        functions: Vec<Symbol>,
        args: Vec<Vec<Val>>,
    ) -> Result<BytesN<32>, GovernorError> {
        proposal::execute_transaction(&env, caller, targets, values, functions, args)
    }

    /// Compute the content hash a batch would be tallied under, without
    /// voting. Deterministic preview for owners and driving tooling.
    pub fn hash_transaction(
        env: Env,
        targets: Vec<Address>,
        values: Vec<i128>,
        functions: Vec<Symbol>,
        args: Vec<Vec<Val>>,
    ) -> BytesN<32> {
        proposal::hash_transaction(&env, &targets, &values, &functions, &args)
    }

    /// Return the owner set.
    pub fn owners(env: Env) -> Result<Vec<Address>, GovernorError> {
        owners::owners(&env)
    }

    /// Return the number of owners.
    pub fn owners_count(env: Env) -> Result<u32, GovernorError> {
        Ok(owners::owners(&env)?.len())
    }

    /// Return the approval quorum.
    pub fn quorum(env: Env) -> Result<u32, GovernorError> {
        owners::quorum(&env)
    }

    /// Return `true` if `account` is in the owner set.
    pub fn is_owner(env: Env, account: Address) -> bool {
        owners::is_owner(&env, &account)
    }

    /// Return the owners who have approved the batch content, oldest first.
    pub fn approvals(env: Env, content_hash: BytesN<32>) -> Vec<Address> {
        proposal::approvals(&env, &content_hash)
    }

    /// Return the number of approvals recorded for the batch content.
    pub fn approval_count(env: Env, content_hash: BytesN<32>) -> u32 {
        proposal::approvals(&env, &content_hash).len()
    }

    /// Return `true` if the batch content has already executed.
    pub fn is_executed(env: Env, content_hash: BytesN<32>) -> bool {
        proposal::is_executed(&env, &content_hash)
    }

    /// Return the configured native asset, if any.
    pub fn native_asset(env: Env) -> Option<Address> {
        owners::native_asset(&env)
    }
}
