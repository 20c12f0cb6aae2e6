use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::error::FactoryError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Hash of the simple_account WASM deployed for every owner (instance).
    WasmHash,
    /// Native asset contract used for funding (instance).
    NativeToken,
    /// Account address -> owner key, present once deployed (persistent).
    Deployed(Address),
    /// Owner key -> first account deployed for it (persistent).
    Primary(BytesN<32>),
    /// Owner key -> funds escrowed before the primary account exists (persistent).
    Escrow(BytesN<32>),
}

pub fn write_config(env: &Env, wasm_hash: &BytesN<32>, native_token: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::WasmHash, wasm_hash);
    instance.set(&DataKey::NativeToken, native_token);
    bump_instance(env);
}

pub fn wasm_hash(env: &Env) -> Result<BytesN<32>, FactoryError> {
    env.storage()
        .instance()
        .get(&DataKey::WasmHash)
        .ok_or(FactoryError::NotInitialized)
}

pub fn native_token(env: &Env) -> Result<Address, FactoryError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(FactoryError::NotInitialized)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
