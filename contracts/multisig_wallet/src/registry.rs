//! Owner registry: the ordered owner set and the approval threshold.
//!
//! The ordered list backs `get_owners`, the per-owner flag keeps membership
//! checks to a single storage read. Both are written together on every
//! mutation.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

/// Threshold applied when a wallet is initialized without an explicit one:
/// a strict majority of the initial owners.
pub fn majority_threshold(owner_count: u32) -> u32 {
    owner_count / 2 + 1
}

pub(crate) fn initialize(env: &Env, owners: &Vec<Address>, threshold: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::InvalidConfiguration);
    }

    if threshold == 0 || threshold > owners.len() {
        return Err(WalletError::InvalidConfiguration);
    }

    for i in 0..owners.len() {
        for j in (i + 1)..owners.len() {
            if owners.get_unchecked(i) == owners.get_unchecked(j) {
                return Err(WalletError::InvalidConfiguration);
            }
        }
    }

    for owner in owners.iter() {
        env.storage().instance().set(&DataKey::Owner(owner), &true);
    }
    env.storage().instance().set(&DataKey::Owners, owners);
    env.storage().instance().set(&DataKey::Threshold, &threshold);

    Ok(())
}

pub(crate) fn is_owner(env: &Env, identity: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Owner(identity.clone()))
}

pub(crate) fn snapshot(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or_else(|| Vec::new(env))
}

pub(crate) fn count(env: &Env) -> u32 {
    snapshot(env).len()
}

pub(crate) fn threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .unwrap_or(0)
}

/// Appends `identity` and returns the new owner count.
pub(crate) fn add(env: &Env, identity: &Address) -> Result<u32, WalletError> {
    if is_owner(env, identity) {
        return Err(WalletError::DuplicateOwner);
    }

    let mut owners = snapshot(env);
    owners.push_back(identity.clone());

    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage()
        .instance()
        .set(&DataKey::Owner(identity.clone()), &true);

    Ok(owners.len())
}

/// Drops `identity`, keeping the order of the remaining owners, and returns
/// the new owner count.
pub(crate) fn remove(env: &Env, identity: &Address) -> Result<u32, WalletError> {
    if !is_owner(env, identity) {
        return Err(WalletError::UnknownOwner);
    }

    let owners = snapshot(env);
    if owners.len() - 1 < threshold(env) {
        return Err(WalletError::InvariantViolation);
    }

    let mut remaining = Vec::new(env);
    for owner in owners.iter() {
        if owner != *identity {
            remaining.push_back(owner);
        }
    }

    env.storage().instance().set(&DataKey::Owners, &remaining);
    env.storage()
        .instance()
        .remove(&DataKey::Owner(identity.clone()));

    Ok(remaining.len())
}

/// Replaces the threshold and returns the previous value.
pub(crate) fn set_threshold(env: &Env, value: u32) -> Result<u32, WalletError> {
    if value == 0 || value > count(env) {
        return Err(WalletError::InvalidConfiguration);
    }

    let previous = threshold(env);
    env.storage().instance().set(&DataKey::Threshold, &value);

    Ok(previous)
}
