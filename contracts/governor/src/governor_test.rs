use crate::{GovernorError, GovernorMultisig, GovernorMultisigClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short,
    testutils::{Address as _, Events},
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

// ============================================================================
// Test target contract
// ============================================================================

/// Minimal owner-gated contract the governor drives in these tests, standing
/// in for any governed component.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TickerError {
    NotOwner = 1,
    Boom = 2,
}

#[contract]
pub struct Ticker;

#[contractimpl]
impl Ticker {
    pub fn init(env: Env, owner: Address) {
        env.storage().persistent().set(&symbol_short!("OWNER"), &owner);
    }

    pub fn set_count(env: Env, caller: Address, count: u32) -> Result<(), TickerError> {
        caller.require_auth();
        let owner: Address = env
            .storage()
            .persistent()
            .get(&symbol_short!("OWNER"))
            .unwrap();
        if caller != owner {
            return Err(TickerError::NotOwner);
        }
        env.storage().persistent().set(&symbol_short!("COUNT"), &count);
        Ok(())
    }

    pub fn count(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&symbol_short!("COUNT"))
            .unwrap_or(0)
    }

    pub fn fail(_env: Env) -> Result<(), TickerError> {
        Err(TickerError::Boom)
    }
}

// ============================================================================
// Test helpers
// ============================================================================

fn setup_governor(
    owner_count: u32,
    quorum: u32,
) -> (Env, Address, GovernorMultisigClient<'static>, Vec<Address>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(GovernorMultisig, ());
    let client = GovernorMultisigClient::new(&env, &contract_id);

    let mut owners = Vec::new(&env);
    for _ in 0..owner_count {
        owners.push_back(Address::generate(&env));
    }
    client.initialize(&owners, &quorum, &None);
    (env, contract_id, client, owners)
}

/// Register a Ticker owned by the governor so only quorum can drive it.
fn setup_ticker(env: &Env, governor_id: &Address) -> (Address, TickerClient<'static>) {
    let ticker_id = env.register(Ticker, ());
    let ticker = TickerClient::new(env, &ticker_id);
    ticker.init(governor_id);
    (ticker_id, ticker)
}

fn set_count_batch(
    env: &Env,
    governor_id: &Address,
    ticker_id: &Address,
    count: u32,
) -> (Vec<Address>, Vec<i128>, Vec<Symbol>, Vec<Vec<Val>>) {
    (
        vec![env, ticker_id.clone()],
        vec![env, 0i128],
        vec![env, Symbol::new(env, "set_count")],
        vec![
            env,
            vec![env, governor_id.clone().into_val(env), count.into_val(env)],
        ],
    )
}

fn has_topic(env: &Env, contract_id: &Address, name: &str) -> bool {
    let want = Symbol::new(env, name);
    for (cid, topics, _) in env.events().all().iter() {
        if cid == *contract_id {
            if let Some(first) = topics.get(0) {
                if let Ok(sym) = Symbol::try_from_val(env, &first) {
                    if sym == want {
                        return true;
                    }
                }
            }
        }
    }
    false
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_initialize_rejects_invalid_configuration() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(GovernorMultisig, ());
    let client = GovernorMultisigClient::new(&env, &contract_id);

    let a = Address::generate(&env);
    let b = Address::generate(&env);

    let empty: Vec<Address> = Vec::new(&env);
    assert_eq!(
        client.try_initialize(&empty, &1, &None),
        Err(Ok(GovernorError::InvalidConfiguration))
    );

    let owners = vec![&env, a.clone(), b.clone()];
    assert_eq!(
        client.try_initialize(&owners, &0, &None),
        Err(Ok(GovernorError::InvalidConfiguration))
    );
    assert_eq!(
        client.try_initialize(&owners, &3, &None),
        Err(Ok(GovernorError::InvalidConfiguration))
    );

    let duplicated = vec![&env, a.clone(), b.clone(), a.clone()];
    assert_eq!(
        client.try_initialize(&duplicated, &2, &None),
        Err(Ok(GovernorError::InvalidConfiguration))
    );
}

#[test]
fn test_initialize_is_one_shot() {
    let (env, _contract_id, client, owners) = setup_governor(3, 2);

    assert_eq!(client.owners_count(), 3);
    assert_eq!(client.quorum(), 2);
    assert!(client.is_owner(&owners.get(0).unwrap()));
    assert!(!client.is_owner(&Address::generate(&env)));

    assert_eq!(
        client.try_initialize(&owners, &2, &None),
        Err(Ok(GovernorError::AlreadyInitialized))
    );
}

#[test]
fn test_execute_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(GovernorMultisig, ());
    let client = GovernorMultisigClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    let targets: Vec<Address> = vec![&env, Address::generate(&env)];
    let values: Vec<i128> = vec![&env, 0];
    let functions: Vec<Symbol> = vec![&env, Symbol::new(&env, "noop")];
    let args: Vec<Vec<Val>> = vec![&env, Vec::new(&env)];

    assert_eq!(
        client.try_execute_transaction(&caller, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::NotInitialized))
    );
}

// ============================================================================
// Authorization & batch shape
// ============================================================================

#[test]
fn test_execute_requires_owner() {
    let (env, governor_id, client, _) = setup_governor(3, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let stranger = Address::generate(&env);

    let (targets, values, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    assert_eq!(
        client.try_execute_transaction(&stranger, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::NotAnOwner))
    );
}

#[test]
fn test_mismatched_arrays_rejected() {
    let (env, governor_id, client, owners) = setup_governor(3, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let owner = owners.get(0).unwrap();

    let (targets, _, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);

    // values shorter than the other arrays
    let short_values: Vec<i128> = Vec::new(&env);
    assert_eq!(
        client.try_execute_transaction(&owner, &targets, &short_values, &functions, &args),
        Err(Ok(GovernorError::InvalidBatch))
    );

    // empty batch
    let no_targets: Vec<Address> = Vec::new(&env);
    let no_values: Vec<i128> = Vec::new(&env);
    let no_functions: Vec<Symbol> = Vec::new(&env);
    let no_args: Vec<Vec<Val>> = Vec::new(&env);
    assert_eq!(
        client.try_execute_transaction(&owner, &no_targets, &no_values, &no_functions, &no_args),
        Err(Ok(GovernorError::InvalidBatch))
    );
}

#[test]
fn test_negative_value_rejected() {
    let (env, governor_id, client, owners) = setup_governor(3, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let owner = owners.get(0).unwrap();

    let (targets, _, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let values: Vec<i128> = vec![&env, -1];
    assert_eq!(
        client.try_execute_transaction(&owner, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::InvalidBatch))
    );
}

#[test]
fn test_positive_value_requires_native_asset() {
    let (env, governor_id, client, owners) = setup_governor(1, 1);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let owner = owners.get(0).unwrap();

    let (targets, _, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let values: Vec<i128> = vec![&env, 100];
    assert_eq!(
        client.try_execute_transaction(&owner, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::NativeAssetNotSet))
    );
}

// ============================================================================
// Quorum & replay
// ============================================================================

#[test]
fn test_quorum_flow_executes_exactly_once() {
    // owners = {A, B, C}, quorum = 2
    let (env, governor_id, client, owners) = setup_governor(3, 2);
    let (ticker_id, ticker) = setup_ticker(&env, &governor_id);
    let a = owners.get(0).unwrap();
    let b = owners.get(1).unwrap();
    let c = owners.get(2).unwrap();

    // Owners cannot drive the governed contract directly
    assert_eq!(
        ticker.try_set_count(&a, &7),
        Err(Ok(TickerError::NotOwner))
    );

    let (targets, values, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);

    // A approves: below quorum, nothing executes
    let hash = client.execute_transaction(&a, &targets, &values, &functions, &args);
    assert_eq!(ticker.count(), 0);
    assert!(!client.is_executed(&hash));
    assert_eq!(client.approval_count(&hash), 1);

    // B approves: quorum reached, side effects applied exactly once
    let hash_b = client.execute_transaction(&b, &targets, &values, &functions, &args);
    assert_eq!(hash, hash_b);
    assert_eq!(ticker.count(), 7);
    assert!(client.is_executed(&hash));
    assert_eq!(client.approvals(&hash), vec![&env, a.clone(), b.clone()]);

    // C resubmits the identical content afterwards: loud failure, no re-run
    assert_eq!(
        client.try_execute_transaction(&c, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::AlreadyExecuted))
    );
    assert_eq!(ticker.count(), 7);
}

#[test]
fn test_owner_cannot_approve_twice() {
    let (env, governor_id, client, owners) = setup_governor(3, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let a = owners.get(0).unwrap();

    let (targets, values, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let hash = client.execute_transaction(&a, &targets, &values, &functions, &args);
    assert_eq!(
        client.try_execute_transaction(&a, &targets, &values, &functions, &args),
        Err(Ok(GovernorError::AlreadyApproved))
    );
    assert_eq!(client.approval_count(&hash), 1);
}

#[test]
fn test_distinct_contents_tally_independently() {
    let (env, governor_id, client, owners) = setup_governor(3, 2);
    let (ticker_id, ticker) = setup_ticker(&env, &governor_id);
    let a = owners.get(0).unwrap();
    let b = owners.get(1).unwrap();

    let (t1, v1, f1, a1) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let (t2, v2, f2, a2) = set_count_batch(&env, &governor_id, &ticker_id, 8);

    let hash1 = client.execute_transaction(&a, &t1, &v1, &f1, &a1);
    let hash2 = client.execute_transaction(&a, &t2, &v2, &f2, &a2);

    assert_ne!(hash1, hash2);
    assert_eq!(client.approval_count(&hash1), 1);
    assert_eq!(client.approval_count(&hash2), 1);
    assert_eq!(ticker.count(), 0);

    // Quorum on the second content executes only the second content
    client.execute_transaction(&b, &t2, &v2, &f2, &a2);
    assert_eq!(ticker.count(), 8);
    assert!(!client.is_executed(&hash1));
}

#[test]
fn test_hash_is_deterministic_content_address() {
    let (env, governor_id, client, _) = setup_governor(3, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);

    let (targets, values, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let h1 = client.hash_transaction(&targets, &values, &functions, &args);
    let h2 = client.hash_transaction(&targets, &values, &functions, &args);
    assert_eq!(h1, h2);

    let (t3, v3, f3, a3) = set_count_batch(&env, &governor_id, &ticker_id, 9);
    assert_ne!(h1, client.hash_transaction(&t3, &v3, &f3, &a3));
}

// ============================================================================
// Execution semantics
// ============================================================================

#[test]
fn test_failed_batch_rolls_back_entirely() {
    let (env, governor_id, client, owners) = setup_governor(2, 2);
    let (ticker_id, ticker) = setup_ticker(&env, &governor_id);
    let a = owners.get(0).unwrap();
    let b = owners.get(1).unwrap();

    // Two entries: the first would succeed, the second always fails
    let targets = vec![&env, ticker_id.clone(), ticker_id.clone()];
    let values: Vec<i128> = vec![&env, 0, 0];
    let functions = vec![
        &env,
        Symbol::new(&env, "set_count"),
        Symbol::new(&env, "fail"),
    ];
    let args: Vec<Vec<Val>> = vec![
        &env,
        vec![&env, governor_id.clone().into_val(&env), 7u32.into_val(&env)],
        Vec::new(&env),
    ];

    let hash = client.execute_transaction(&a, &targets, &values, &functions, &args);
    assert_eq!(client.approval_count(&hash), 1);

    // The quorum-th approval triggers execution; the failing entry reverts
    // the whole transaction, the approval included
    assert!(client
        .try_execute_transaction(&b, &targets, &values, &functions, &args)
        .is_err());
    assert_eq!(ticker.count(), 0);
    assert!(!client.is_executed(&hash));
    assert_eq!(client.approval_count(&hash), 1);
}

#[test]
fn test_value_forwards_native_asset_before_invocation() {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let native = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();

    let governor_id = env.register(GovernorMultisig, ());
    let client = GovernorMultisigClient::new(&env, &governor_id);
    let owner = Address::generate(&env);
    client.initialize(&vec![&env, owner.clone()], &1, &Some(native.clone()));

    StellarAssetClient::new(&env, &native).mint(&governor_id, &1000);

    let (ticker_id, ticker) = setup_ticker(&env, &governor_id);
    let (targets, _, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);
    let values: Vec<i128> = vec![&env, 100];

    client.execute_transaction(&owner, &targets, &values, &functions, &args);

    assert_eq!(ticker.count(), 7);
    assert_eq!(TokenClient::new(&env, &native).balance(&ticker_id), 100);
    assert_eq!(TokenClient::new(&env, &native).balance(&governor_id), 900);
}

#[test]
fn test_vote_and_execution_events() {
    let (env, governor_id, client, owners) = setup_governor(2, 2);
    let (ticker_id, _) = setup_ticker(&env, &governor_id);
    let a = owners.get(0).unwrap();
    let b = owners.get(1).unwrap();

    let (targets, values, functions, args) = set_count_batch(&env, &governor_id, &ticker_id, 7);

    client.execute_transaction(&a, &targets, &values, &functions, &args);
    assert!(has_topic(&env, &governor_id, "approved"));
    assert!(!has_topic(&env, &governor_id, "executed"));

    client.execute_transaction(&b, &targets, &values, &functions, &args);
    assert!(has_topic(&env, &governor_id, "executed"));
}
