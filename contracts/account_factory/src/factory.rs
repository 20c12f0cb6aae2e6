//! Account lifecycle: get-or-create deployment, funding and balances.
//!
//! Each function runs within a single contract invocation. Any error aborts
//! the invocation, so the host rolls back every write made before it.

use soroban_sdk::{log, symbol_short, token, Address, BytesN, Env};

use crate::address;
use crate::deploy::Deploy;
use crate::error::FactoryError;
use crate::ledger;
use crate::registry;
use crate::storage;

pub fn created_address(
    env: &Env,
    owner: &BytesN<32>,
    salt: &BytesN<32>,
) -> Result<Address, FactoryError> {
    address::validate_owner(owner)?;
    let wasm_hash = storage::wasm_hash(env)?;
    let account_salt = address::account_salt(env, owner, salt, &wasm_hash);
    Ok(address::derive(env, &account_salt))
}

/// Deploy the account for `(owner, salt)` unless it already exists, and
/// return its address either way.
///
/// The first account deployed for an owner becomes their primary account and
/// receives whatever was escrowed for them.
///
/// # Errors
/// * `InvalidArgument` - if `owner` is not a usable public key
/// * `DeploymentFailed` - if the deployer placed the account anywhere other
///   than the derived address
pub fn create_account<D: Deploy>(
    env: &Env,
    deployer: &D,
    owner: BytesN<32>,
    salt: BytesN<32>,
) -> Result<Address, FactoryError> {
    address::validate_owner(&owner)?;
    let wasm_hash = storage::wasm_hash(env)?;
    let account_salt = address::account_salt(env, &owner, &salt, &wasm_hash);
    let expected = address::derive(env, &account_salt);

    if registry::is_deployed(env, &expected) {
        log!(env, "account already deployed", expected);
        return Ok(expected);
    }

    let deployed = deployer.deploy(env, wasm_hash, account_salt, &owner);
    if deployed != expected {
        log!(env, "deployed address mismatch", expected, deployed);
        return Err(FactoryError::DeploymentFailed);
    }

    let is_primary = registry::record(env, &deployed, &owner);
    if is_primary {
        reconcile(env, &owner, &deployed)?;
    }

    env.events()
        .publish((symbol_short!("created"), owner), (salt, deployed.clone()));
    Ok(deployed)
}

/// Move the owner's escrow into the custody of their new primary account.
fn reconcile(env: &Env, owner: &BytesN<32>, account: &Address) -> Result<(), FactoryError> {
    let escrow = ledger::take(env, owner)?;
    if escrow == 0 {
        return Ok(());
    }
    let native = storage::native_token(env)?;
    token::Client::new(env, &native).transfer(&env.current_contract_address(), account, &escrow);
    log!(env, "escrow released", account, escrow);
    Ok(())
}

/// Fund `owner` from `from`. Goes straight to the primary account when it
/// exists, otherwise the factory holds it in escrow.
pub fn fund_wallet(
    env: &Env,
    from: Address,
    owner: BytesN<32>,
    amount: i128,
) -> Result<(), FactoryError> {
    from.require_auth();
    address::validate_owner(&owner)?;
    if amount <= 0 {
        return Err(FactoryError::InvalidArgument);
    }

    let native = token::Client::new(env, &storage::native_token(env)?);
    match registry::primary(env, &owner) {
        Some(account) => native.transfer(&from, &account, &amount),
        None => {
            ledger::credit(env, &owner, amount)?;
            native.transfer(&from, &env.current_contract_address(), &amount);
        }
    }

    env.events()
        .publish((symbol_short!("funded"), owner), amount);
    Ok(())
}

/// Escrowed funds plus the primary account's balance. Escrow is emptied when
/// the primary account is deployed, so nothing is counted twice.
///
/// Funds sent straight to a derived address before deployment bypass the
/// escrow. They are not counted until that address becomes the primary
/// account, at which point the balance grows by the full amount.
pub fn balance_of(env: &Env, owner: &BytesN<32>) -> Result<i128, FactoryError> {
    address::validate_owner(owner)?;
    let escrow = ledger::balance(env, owner);
    let held = match registry::primary(env, owner) {
        Some(account) => token::Client::new(env, &storage::native_token(env)?).balance(&account),
        None => 0,
    };
    Ok(escrow + held)
}
