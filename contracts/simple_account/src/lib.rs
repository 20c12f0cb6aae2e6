//! Simple account contract.
//!
//! This contract is owned by a single ed25519 public key that is also used for
//! authentication. It is deployed by the account factory at an address derived
//! from the owner key, and holds funds in its own custody: any sender may
//! transfer value to it, only the owner (or a relayer the owner designated)
//! may move value out.
#![no_std]

use soroban_sdk::{
    auth::Context, contract, contracterror, contractimpl, contracttype, log, panic_with_error,
    symbol_short, token, Address, BytesN, Env, Vec,
};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct SimpleAccount;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccountError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Relayer,
}

fn read_owner(env: &Env) -> Result<BytesN<32>, AccountError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(AccountError::NotInitialized)
}

/// The caller must be this account itself (which routes through
/// `__check_auth`, i.e. an owner signature) or the designated relayer.
fn authorize(env: &Env, caller: &Address) -> Result<(), AccountError> {
    let relayer: Option<Address> = env.storage().instance().get(&DataKey::Relayer);
    if *caller != env.current_contract_address() && relayer.as_ref() != Some(caller) {
        return Err(AccountError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

#[contractimpl]
impl SimpleAccount {
    /// Initialize the account with the owner's ed25519 public key.
    /// Can only be called once during contract deployment.
    pub fn __constructor(env: Env, public_key: BytesN<32>) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, AccountError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Owner, &public_key);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        log!(&env, "account initialized", public_key);
    }

    /// The owner public key. Fixed at deployment.
    pub fn owner(env: Env) -> Result<BytesN<32>, AccountError> {
        read_owner(&env)
    }

    /// The relayer allowed to move funds on the owner's behalf, if any.
    pub fn relayer(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Relayer)
    }

    /// Designate (or clear, with `None`) an address allowed to move funds on
    /// the owner's behalf. Requires the owner's signature.
    pub fn set_relayer(env: Env, relayer: Option<Address>) -> Result<(), AccountError> {
        read_owner(&env)?;
        env.current_contract_address().require_auth();

        match &relayer {
            Some(r) => env.storage().instance().set(&DataKey::Relayer, r),
            None => env.storage().instance().remove(&DataKey::Relayer),
        }
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        env.events().publish((symbol_short!("relayer"),), relayer);
        Ok(())
    }

    /// Move `amount` of `token` out of this account's custody.
    ///
    /// # Errors
    /// * `InvalidArgument` - if `amount` is not positive
    /// * `Unauthorized` - if `caller` is neither this account nor its relayer
    pub fn transfer(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidArgument);
        }
        authorize(&env, &caller)?;

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);
        env.events()
            .publish((symbol_short!("transfer"), token), (to, amount));
        Ok(())
    }

    /// Balance of `token` held by this account.
    pub fn balance(env: Env, token: Address) -> i128 {
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }

    /// Verify authentication for contract invocations.
    /// This is called by the Soroban host when this contract's address
    /// is used as a source for `require_auth`.
    #[allow(non_snake_case)]
    pub fn __check_auth(
        env: Env,
        signature_payload: BytesN<32>,
        signature: BytesN<64>,
        _auth_context: Vec<Context>,
    ) -> Result<(), AccountError> {
        let public_key = read_owner(&env)?;
        env.crypto()
            .ed25519_verify(&public_key, &signature_payload.into(), &signature);
        Ok(())
    }
}
