//! Account Factory contract.
//!
//! This contract creates simple_account contract instances at deterministic
//! addresses derived from the factory address, the owner's public key, a
//! caller-chosen salt and the account WASM hash. Creation is get-or-create:
//! asking twice for the same owner and salt returns the same account.
//!
//! Owners can be funded before their account exists. The factory escrows
//! those funds and hands them to the owner's first account when it is
//! deployed.
#![no_std]

mod address;
mod deploy;
mod error;
mod factory;
mod ledger;
mod registry;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

use crate::deploy::WasmDeployer;
pub use crate::error::FactoryError;

#[contract]
pub struct AccountFactory;

#[contractimpl]
impl AccountFactory {
    /// Initialize the factory with the simple_account WASM hash and the
    /// native asset contract used for funding.
    pub fn __constructor(env: Env, wasm_hash: BytesN<32>, native_token: Address) {
        storage::write_config(&env, &wasm_hash, &native_token);
    }

    /// Create the simple_account contract for `owner` and `salt`, or return
    /// the existing one.
    ///
    /// No authorization required - anyone can deploy a contract for any public key.
    /// The address is bound to the owner key, and only the private key holder
    /// can use the deployed contract.
    ///
    /// # Arguments
    /// * `owner` - The 32-byte ed25519 public key that will own the contract
    /// * `salt` - Caller-chosen salt; distinct salts give distinct accounts
    ///
    /// # Returns
    /// The address of the contract account (C...)
    pub fn create_account(
        env: Env,
        owner: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Address, FactoryError> {
        storage::bump_instance(&env);
        factory::create_account(&env, &WasmDeployer, owner, salt)
    }

    /// Compute the contract address for `owner` and `salt` without deploying.
    /// Useful for checking if a contract already exists, for UI display, or
    /// for funding an account before it is deployed.
    pub fn get_created_address(
        env: Env,
        owner: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Address, FactoryError> {
        factory::created_address(&env, &owner, &salt)
    }

    /// Transfer `amount` of the native asset from `from` to `owner`'s wallet.
    pub fn fund_wallet(
        env: Env,
        from: Address,
        owner: BytesN<32>,
        amount: i128,
    ) -> Result<(), FactoryError> {
        storage::bump_instance(&env);
        factory::fund_wallet(&env, from, owner, amount)
    }

    /// Native asset balance of `owner`'s wallet, escrow included.
    /// Funds sent directly to an undeployed account address only show up
    /// once that account is deployed as the owner's primary account.
    pub fn balance_of(env: Env, owner: BytesN<32>) -> Result<i128, FactoryError> {
        factory::balance_of(&env, &owner)
    }

    /// Funds escrowed for `owner` that have not reached an account yet.
    pub fn escrow_of(env: Env, owner: BytesN<32>) -> i128 {
        ledger::balance(&env, &owner)
    }

    /// The primary account of `owner`, if one has been deployed.
    pub fn account_of(env: Env, owner: BytesN<32>) -> Option<Address> {
        registry::primary(&env, &owner)
    }

    /// Owner key of an account deployed by this factory.
    pub fn owner_of(env: Env, account: Address) -> Option<BytesN<32>> {
        registry::owner_of(&env, &account)
    }

    /// Whether this factory has deployed an account at `account`.
    pub fn is_deployed(env: Env, account: Address) -> bool {
        registry::is_deployed(&env, &account)
    }

    /// Get the WASM hash used by this factory.
    pub fn wasm_hash(env: Env) -> Result<BytesN<32>, FactoryError> {
        storage::wasm_hash(&env)
    }

    /// Get the native asset contract used to fund wallets.
    pub fn native_token(env: Env) -> Result<Address, FactoryError> {
        storage::native_token(&env)
    }
}

#[cfg(all(test, feature = "wasm-tests"))]
mod test_wasm;
