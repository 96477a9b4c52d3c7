use soroban_sdk::{contractevent, Address};

use crate::types::ProposalKind;

#[contractevent(topics = ["wallet", "init"])]
pub struct WalletInitialized {
    pub owner_count: u32,
    pub threshold: u32,
    pub token: Address,
}

#[contractevent(topics = ["wallet", "deposit"])]
pub struct Deposit {
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent(topics = ["wallet", "submitted"])]
pub struct ProposalSubmitted {
    pub id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
}

#[contractevent(topics = ["wallet", "approved"])]
pub struct ProposalApproved {
    pub id: u64,
    pub owner: Address,
    pub approval_count: u32,
    pub threshold: u32,
}

#[contractevent(topics = ["wallet", "revoked"])]
pub struct ApprovalRevoked {
    pub id: u64,
    pub owner: Address,
    pub approval_count: u32,
}

#[contractevent(topics = ["wallet", "cancelled"])]
pub struct ProposalCancelled {
    pub id: u64,
    pub proposer: Address,
}

#[contractevent(topics = ["wallet", "executed"])]
pub struct ProposalExecuted {
    pub id: u64,
    pub executor: Address,
    pub kind: ProposalKind,
}

#[contractevent(topics = ["wallet", "owner_add"])]
pub struct OwnerAdded {
    pub owner: Address,
    pub owner_count: u32,
}

#[contractevent(topics = ["wallet", "owner_rem"])]
pub struct OwnerRemoved {
    pub owner: Address,
    pub owner_count: u32,
}

#[contractevent(topics = ["wallet", "threshold"])]
pub struct ThresholdChanged {
    pub old: u32,
    pub new: u32,
}
