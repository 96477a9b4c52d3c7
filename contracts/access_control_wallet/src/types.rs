use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Wallet,
}

/// Membership change requested through this layer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnerChange {
    Add(Address),
    Remove(Address),
}
