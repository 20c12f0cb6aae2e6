//! Exercises the public entry points and the `deploy_v2` path with the real
//! simple_account WASM:
//!
//! ```text
//! stellar contract build
//! cargo test -p account-factory --features wasm-tests
//! ```
extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, BytesN, Env};

use crate::ledger;
use crate::{AccountFactory, AccountFactoryClient, FactoryError};

mod simple_account_wasm {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/simple_account.wasm"
    );
}

fn create_factory<'a>(env: &Env, native_token: &Address) -> AccountFactoryClient<'a> {
    let wasm_hash = env
        .deployer()
        .upload_contract_wasm(simple_account_wasm::WASM);
    let factory_id = env.register(AccountFactory, (wasm_hash, native_token.clone()));
    AccountFactoryClient::new(env, &factory_id)
}

fn key(env: &Env, byte: u8) -> BytesN<32> {
    BytesN::from_array(env, &[byte; 32])
}

#[test]
fn test_create_account_deploys_wasm_once() {
    let env = Env::default();
    env.mock_all_auths();
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let factory = create_factory(&env, &sac.address());
    let owner = key(&env, 1);
    let salt = key(&env, 9);

    let first = factory.create_account(&owner, &salt);
    let second = factory.create_account(&owner, &salt);

    assert_eq!(first, second);
    assert_eq!(first, factory.get_created_address(&owner, &salt));
    assert!(factory.is_deployed(&first));
    assert_eq!(simple_account_wasm::Client::new(&env, &first).owner(), owner);
}

#[test]
fn test_escrow_reaches_wasm_account() {
    let env = Env::default();
    env.mock_all_auths();
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let factory = create_factory(&env, &sac.address());
    let owner = key(&env, 1);
    let salt = key(&env, 9);

    let funder = Address::generate(&env);
    token::StellarAssetClient::new(&env, &sac.address()).mint(&funder, &5);
    factory.fund_wallet(&funder, &owner, &5);

    let account = factory.create_account(&owner, &salt);

    assert_eq!(token::Client::new(&env, &sac.address()).balance(&account), 5);
    assert_eq!(factory.balance_of(&owner), 5);
    assert_eq!(factory.escrow_of(&owner), 0);
}

#[test]
fn test_invalid_owner_rejected_at_entry_point() {
    let env = Env::default();
    let factory = create_factory(&env, &Address::generate(&env));

    assert_eq!(
        factory.try_create_account(&key(&env, 0), &key(&env, 9)),
        Err(Ok(FactoryError::InvalidArgument))
    );
}

#[test]
fn test_failed_create_rolls_back_deployment() {
    let env = Env::default();
    env.mock_all_auths();
    // No token contract lives here, so releasing escrow fails after the deploy.
    let factory = create_factory(&env, &Address::generate(&env));
    let owner = key(&env, 1);
    let salt = key(&env, 9);
    env.as_contract(&factory.address, || {
        ledger::credit(&env, &owner, 5).unwrap();
    });
    let predicted = factory.get_created_address(&owner, &salt);

    assert!(factory.try_create_account(&owner, &salt).is_err());

    assert!(!factory.is_deployed(&predicted));
    assert_eq!(factory.account_of(&owner), None);
    assert_eq!(factory.escrow_of(&owner), 5);
    assert!(simple_account_wasm::Client::new(&env, &predicted)
        .try_owner()
        .is_err());
}
