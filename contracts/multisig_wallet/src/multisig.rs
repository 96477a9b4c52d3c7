use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::{
    ApprovalRevoked, Deposit, OwnerAdded, OwnerRemoved, ProposalApproved, ProposalCancelled,
    ProposalExecuted, ProposalSubmitted, ThresholdChanged, WalletInitialized,
};
use crate::ledger;
use crate::registry;
use crate::types::{
    Approval, DataKey, Payment, Proposal, ProposalKind, ProposalStatus, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    // `None` threshold applies the majority policy.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: Option<u32>,
        token: Address,
    ) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        let threshold =
            threshold.unwrap_or_else(|| registry::majority_threshold(owners.len()));
        registry::initialize(&env, &owners, threshold)?;

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Initialized, &true);
        Self::bump_instance(&env);

        WalletInitialized {
            owner_count: owners.len(),
            threshold,
            token,
        }
        .publish(&env);

        Ok(())
    }

    // Plain token transfers to the wallet are credited the same, minus the event.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, WalletError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let token = Self::token_client(&env)?;
        let wallet = env.current_contract_address();
        token.transfer(&from, &wallet, &amount);

        let balance = token.balance(&wallet);
        Self::bump_instance(&env);

        Deposit {
            from,
            amount,
            balance,
        }
        .publish(&env);

        Ok(balance)
    }

    pub fn submit_transfer(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<u64, WalletError> {
        Self::submit(&env, &caller, ProposalKind::Transfer(Payment { to, amount }))
    }

    pub fn submit_add_owner(env: Env, caller: Address, owner: Address) -> Result<u64, WalletError> {
        Self::submit(&env, &caller, ProposalKind::AddOwner(owner))
    }

    pub fn submit_remove_owner(
        env: Env,
        caller: Address,
        owner: Address,
    ) -> Result<u64, WalletError> {
        Self::submit(&env, &caller, ProposalKind::RemoveOwner(owner))
    }

    pub fn submit_change_threshold(
        env: Env,
        caller: Address,
        value: u32,
    ) -> Result<u64, WalletError> {
        Self::submit(&env, &caller, ProposalKind::ChangeThreshold(value))
    }

    /// Add `caller`'s approval to an open proposal. Approving twice is an
    /// error, not a no-op.
    pub fn approve(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        ledger::approve(&env, proposal_id, &caller)?;
        Self::bump_instance(&env);

        ProposalApproved {
            id: proposal_id,
            owner: caller,
            approval_count: ledger::approval_count(&env, proposal_id),
            threshold: registry::threshold(&env),
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw `caller`'s approval. The proposal stays open even when no
    /// approvals remain.
    pub fn revoke(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        ledger::revoke(&env, proposal_id, &caller)?;
        Self::bump_instance(&env);

        ApprovalRevoked {
            id: proposal_id,
            owner: caller,
            approval_count: ledger::approval_count(&env, proposal_id),
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw an open proposal for good. Proposer only.
    pub fn cancel(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let proposal = ledger::get(&env, proposal_id)?;
        if proposal.proposer != caller {
            return Err(WalletError::NotProposer);
        }

        ledger::mark_revoked(&env, proposal_id)?;
        Self::bump_instance(&env);

        ProposalCancelled {
            id: proposal_id,
            proposer: caller,
        }
        .publish(&env);

        Ok(())
    }

    // Dispatch checks run before any write; a rejected execute stays retryable.
    pub fn execute(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let proposal = ledger::get(&env, proposal_id)?;
        match proposal.status {
            ProposalStatus::Executed => return Err(WalletError::AlreadyExecuted),
            ProposalStatus::Revoked => return Err(WalletError::NotOpen),
            ProposalStatus::Open => {}
        }

        if ledger::approval_count(&env, proposal_id) < registry::threshold(&env) {
            return Err(WalletError::InsufficientApprovals);
        }

        Self::dispatch(&env, &proposal.kind)?;

        ledger::mark_executed(&env, proposal_id)?;
        Self::bump_instance(&env);

        ProposalExecuted {
            id: proposal_id,
            executor: caller,
            kind: proposal.kind,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::snapshot(&env))
    }

    pub fn is_owner(env: Env, identity: Address) -> bool {
        registry::is_owner(&env, &identity)
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::count(&env))
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::threshold(&env))
    }

    pub fn custody_token(env: Env) -> Result<Address, WalletError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(WalletError::NotInitialized)
    }

    /// Custody balance: the wallet's own balance in the custody token.
    pub fn balance(env: Env) -> Result<i128, WalletError> {
        let token = Self::token_client(&env)?;
        Ok(token.balance(&env.current_contract_address()))
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, WalletError> {
        Self::require_initialized(&env)?;
        ledger::get(&env, proposal_id)
    }

    pub fn get_approvals(env: Env, proposal_id: u64) -> Result<Vec<Approval>, WalletError> {
        Self::require_initialized(&env)?;
        ledger::get(&env, proposal_id)?;
        Ok(ledger::approvals(&env, proposal_id))
    }

    /// Approvals on `proposal_id` that currently count toward quorum.
    pub fn approval_count(env: Env, proposal_id: u64) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        ledger::get(&env, proposal_id)?;
        Ok(ledger::approval_count(&env, proposal_id))
    }

    pub fn is_approved_by(
        env: Env,
        proposal_id: u64,
        identity: Address,
    ) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        ledger::get(&env, proposal_id)?;
        Ok(ledger::has_approved(&env, proposal_id, &identity))
    }

    pub fn is_open(env: Env, proposal_id: u64) -> bool {
        ledger::is_open(&env, proposal_id)
    }

    pub fn get_proposal_count(env: Env) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        Ok(ledger::count(&env))
    }

    fn submit(env: &Env, caller: &Address, kind: ProposalKind) -> Result<u64, WalletError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        Self::require_owner(env, caller)?;

        if let ProposalKind::Transfer(payment) = &kind {
            if payment.amount <= 0 {
                return Err(WalletError::InvalidAmount);
            }
        }

        let proposal_id = ledger::create(env, kind.clone(), caller);
        Self::bump_instance(env);

        ProposalSubmitted {
            id: proposal_id,
            proposer: caller.clone(),
            kind,
        }
        .publish(env);

        Ok(proposal_id)
    }

    fn dispatch(env: &Env, kind: &ProposalKind) -> Result<(), WalletError> {
        match kind {
            ProposalKind::Transfer(payment) => {
                let token = Self::token_client(env)?;
                let wallet = env.current_contract_address();

                if token.balance(&wallet) < payment.amount {
                    return Err(WalletError::InsufficientFunds);
                }

                token.transfer(&wallet, &payment.to, &payment.amount);
            }
            ProposalKind::AddOwner(owner) => {
                let owner_count = registry::add(env, owner)?;
                OwnerAdded {
                    owner: owner.clone(),
                    owner_count,
                }
                .publish(env);
            }
            ProposalKind::RemoveOwner(owner) => {
                let owner_count = registry::remove(env, owner)?;
                OwnerRemoved {
                    owner: owner.clone(),
                    owner_count,
                }
                .publish(env);
            }
            ProposalKind::ChangeThreshold(value) => {
                let old = registry::set_threshold(env, *value)?;
                ThresholdChanged { old, new: *value }.publish(env);
            }
        }

        Ok(())
    }

    fn token_client(env: &Env) -> Result<token::Client<'_>, WalletError> {
        let token_address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(WalletError::NotInitialized)?;
        Ok(token::Client::new(env, &token_address))
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
        if !registry::is_owner(env, caller) {
            return Err(WalletError::NotOwner);
        }
        Ok(())
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
