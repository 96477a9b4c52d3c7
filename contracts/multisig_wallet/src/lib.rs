#![no_std]

//! Multi-signature custody wallet.
//!
//! A fixed set of owners jointly controls the wallet's token balance and its
//! own membership. Any owner may submit a proposal (a transfer, an owner
//! addition or removal, or a threshold change); it executes once the number
//! of approving owners reaches the threshold, and never more than once.

mod errors;
mod events;
mod ledger;
mod multisig;
mod registry;
mod types;

pub use errors::WalletError;
pub use multisig::{MultiSigWallet, MultiSigWalletClient};
pub use registry::majority_threshold;
pub use types::{Approval, Payment, Proposal, ProposalKind, ProposalStatus};
