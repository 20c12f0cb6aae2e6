//! Deterministic account addresses.
//!
//! The host derives a deployed contract's address from the deployer and a
//! salt only, without the code. Two owners picking the same salt would
//! therefore collide, so the salt handed to the host is itself a hash binding
//! the owner key, the caller's salt and the account code:
//!
//! ```text
//! account_salt = sha256(ACCOUNT_SALT_TAG || owner || salt || wasm_hash)
//! address      = host_derive(factory, account_salt)
//! ```

use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::error::FactoryError;

/// Domain separation for account salts. Changing it moves every address.
pub const ACCOUNT_SALT_TAG: &[u8] = b"simple-account:v1";

/// Owner keys are ed25519 public keys; the all-zero key is never valid.
pub fn validate_owner(owner: &BytesN<32>) -> Result<(), FactoryError> {
    if owner.to_array() == [0u8; 32] {
        return Err(FactoryError::InvalidArgument);
    }
    Ok(())
}

pub fn account_salt(
    env: &Env,
    owner: &BytesN<32>,
    salt: &BytesN<32>,
    wasm_hash: &BytesN<32>,
) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, ACCOUNT_SALT_TAG);
    preimage.append(&Bytes::from(owner.clone()));
    preimage.append(&Bytes::from(salt.clone()));
    preimage.append(&Bytes::from(wasm_hash.clone()));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Address the current contract would deploy to with `account_salt`.
/// Must run in the factory's own context.
pub fn derive(env: &Env, account_salt: &BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(account_salt.clone())
        .deployed_address()
}
