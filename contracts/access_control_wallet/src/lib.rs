#![no_std]

//! Access-control layer in front of a multisig wallet.
//!
//! Bound to one wallet at initialization. Only current owners of that wallet
//! may open an owner-set change through it, and the change still goes through
//! the wallet's normal approval and execution flow.

mod access_control;
mod errors;
mod events;
mod types;
mod wallet;

pub use access_control::{AccessControlWallet, AccessControlWalletClient};
pub use errors::AccessControlError;
pub use types::OwnerChange;
pub use wallet::{WalletClient, WalletInterface};
