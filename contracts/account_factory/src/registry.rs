use soroban_sdk::{Address, BytesN, Env};

use crate::storage::{bump_persistent, DataKey};

/// Extends the entry's TTL on a hit, like `primary`, so a deployed account
/// never reads as missing.
pub fn is_deployed(env: &Env, account: &Address) -> bool {
    let key = DataKey::Deployed(account.clone());
    let deployed = env.storage().persistent().has(&key);
    if deployed {
        bump_persistent(env, &key);
    }
    deployed
}

pub fn owner_of(env: &Env, account: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::Deployed(account.clone()))
}

pub fn primary(env: &Env, owner: &BytesN<32>) -> Option<Address> {
    let key = DataKey::Primary(owner.clone());
    let account = env.storage().persistent().get(&key);
    if account.is_some() {
        bump_persistent(env, &key);
    }
    account
}

/// Record a freshly deployed account. Returns `true` when it became the
/// owner's primary account.
pub fn record(env: &Env, account: &Address, owner: &BytesN<32>) -> bool {
    let deployed = DataKey::Deployed(account.clone());
    env.storage().persistent().set(&deployed, owner);
    bump_persistent(env, &deployed);

    let primary = DataKey::Primary(owner.clone());
    if env.storage().persistent().has(&primary) {
        return false;
    }
    env.storage().persistent().set(&primary, account);
    bump_persistent(env, &primary);
    true
}
