//! Escrow of funds sent to an owner before their primary account exists.

use soroban_sdk::{BytesN, Env};

use crate::error::FactoryError;
use crate::storage::{bump_persistent, DataKey};

pub fn balance(env: &Env, owner: &BytesN<32>) -> i128 {
    let key = DataKey::Escrow(owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

fn write(env: &Env, owner: &BytesN<32>, amount: i128) {
    let key = DataKey::Escrow(owner.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}

/// Returns the new balance.
pub fn credit(env: &Env, owner: &BytesN<32>, amount: i128) -> Result<i128, FactoryError> {
    if amount <= 0 {
        return Err(FactoryError::InvalidArgument);
    }
    let updated = balance(env, owner)
        .checked_add(amount)
        .ok_or(FactoryError::InvalidArgument)?;
    write(env, owner, updated);
    Ok(updated)
}

/// Returns the new balance. The entry is untouched on error.
pub fn debit(env: &Env, owner: &BytesN<32>, amount: i128) -> Result<i128, FactoryError> {
    if amount <= 0 {
        return Err(FactoryError::InvalidArgument);
    }
    let current = balance(env, owner);
    if amount > current {
        return Err(FactoryError::InsufficientFunds);
    }
    let updated = current - amount;
    write(env, owner, updated);
    Ok(updated)
}

/// Debit the whole escrow and return what was held.
pub fn take(env: &Env, owner: &BytesN<32>) -> Result<i128, FactoryError> {
    let held = balance(env, owner);
    if held > 0 {
        debit(env, owner, held)?;
    }
    Ok(held)
}
