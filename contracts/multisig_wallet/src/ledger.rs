//! Proposal ledger. Append-only: proposals are never deleted, only moved to
//! a terminal status.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::registry;
use crate::types::{
    Approval, DataKey, Proposal, ProposalKind, ProposalStatus, PROPOSAL_BUMP_AMOUNT,
    PROPOSAL_LIFETIME_THRESHOLD,
};

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

fn save(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump(env, &key);
}

fn save_approvals(env: &Env, id: u64, approvals: &Vec<Approval>) {
    let key = DataKey::Approvals(id);
    env.storage().persistent().set(&key, approvals);
    bump(env, &key);
}

pub(crate) fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

pub(crate) fn get(env: &Env, id: u64) -> Result<Proposal, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(WalletError::UnknownProposal)
}

pub(crate) fn approvals(env: &Env, id: u64) -> Vec<Approval> {
    env.storage()
        .persistent()
        .get(&DataKey::Approvals(id))
        .unwrap_or_else(|| Vec::new(env))
}

/// Records a new `Open` proposal. The proposer's submission counts as its
/// first approval.
pub(crate) fn create(env: &Env, kind: ProposalKind, proposer: &Address) -> u64 {
    let id = count(env) + 1;
    env.storage().instance().set(&DataKey::ProposalCount, &id);

    let now = env.ledger().timestamp();
    let proposal = Proposal {
        id,
        kind,
        proposer: proposer.clone(),
        created_at: now,
        created_seq: env.ledger().sequence(),
        status: ProposalStatus::Open,
        closed_at: None,
    };
    save(env, &proposal);

    let mut approvals = Vec::new(env);
    approvals.push_back(Approval {
        owner: proposer.clone(),
        approved_at: now,
    });
    save_approvals(env, id, &approvals);

    id
}

pub(crate) fn require_open(env: &Env, id: u64) -> Result<Proposal, WalletError> {
    let proposal = get(env, id)?;
    if proposal.status != ProposalStatus::Open {
        return Err(WalletError::NotOpen);
    }
    Ok(proposal)
}

pub(crate) fn is_open(env: &Env, id: u64) -> bool {
    get(env, id)
        .map(|proposal| proposal.status == ProposalStatus::Open)
        .unwrap_or(false)
}

pub(crate) fn has_approved(env: &Env, id: u64, identity: &Address) -> bool {
    approvals(env, id)
        .iter()
        .any(|approval| approval.owner == *identity)
}

pub(crate) fn approve(env: &Env, id: u64, identity: &Address) -> Result<(), WalletError> {
    require_open(env, id)?;

    let mut approvals = approvals(env, id);
    if approvals.iter().any(|approval| approval.owner == *identity) {
        return Err(WalletError::AlreadyApproved);
    }

    approvals.push_back(Approval {
        owner: identity.clone(),
        approved_at: env.ledger().timestamp(),
    });
    save_approvals(env, id, &approvals);

    Ok(())
}

/// Withdraws `identity`'s approval. An emptied approval set does not close
/// the proposal.
pub(crate) fn revoke(env: &Env, id: u64, identity: &Address) -> Result<(), WalletError> {
    require_open(env, id)?;

    let mut approvals = approvals(env, id);
    let index = approvals
        .iter()
        .position(|approval| approval.owner == *identity)
        .ok_or(WalletError::NotApproved)?;

    approvals.remove(index as u32);
    save_approvals(env, id, &approvals);

    Ok(())
}

/// Approvals held by identities that are owners right now. Approvals left
/// behind by a removed owner do not count toward quorum.
pub(crate) fn approval_count(env: &Env, id: u64) -> u32 {
    approvals(env, id)
        .iter()
        .filter(|approval| registry::is_owner(env, &approval.owner))
        .count() as u32
}

fn close(env: &Env, id: u64, status: ProposalStatus) -> Result<Proposal, WalletError> {
    let mut proposal = get(env, id)?;
    match proposal.status {
        ProposalStatus::Executed => return Err(WalletError::AlreadyExecuted),
        ProposalStatus::Revoked => return Err(WalletError::NotOpen),
        ProposalStatus::Open => {}
    }

    proposal.status = status;
    proposal.closed_at = Some(env.ledger().timestamp());
    save(env, &proposal);

    Ok(proposal)
}

pub(crate) fn mark_executed(env: &Env, id: u64) -> Result<Proposal, WalletError> {
    close(env, id, ProposalStatus::Executed)
}

pub(crate) fn mark_revoked(env: &Env, id: u64) -> Result<Proposal, WalletError> {
    close(env, id, ProposalStatus::Revoked)
}
