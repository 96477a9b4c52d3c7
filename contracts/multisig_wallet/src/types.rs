use soroban_sdk::{contracttype, Address};

/// Ledgers per day at ~5s close time.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Proposals are kept for audit, so they live longer than the instance bump.
pub(crate) const PROPOSAL_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_LIFETIME_THRESHOLD: u32 = PROPOSAL_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Token,
    Threshold,
    Owners,
    Owner(Address),
    ProposalCount,
    Proposal(u64),
    Approvals(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    Transfer(Payment),
    AddOwner(Address),
    RemoveOwner(Address),
    ChangeThreshold(u32),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    Open = 0,
    Executed = 1,
    Revoked = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub kind: ProposalKind,
    pub proposer: Address,
    pub created_at: u64,
    pub created_seq: u32,
    pub status: ProposalStatus,
    /// Timestamp of the move to `Executed` or `Revoked`.
    pub closed_at: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approval {
    pub owner: Address,
    pub approved_at: u64,
}
