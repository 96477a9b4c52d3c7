use soroban_sdk::{contractclient, Address, Env, Vec};

/// The part of the multisig wallet's surface this layer calls into.
#[contractclient(name = "WalletClient")]
pub trait WalletInterface {
    fn get_owners(env: Env) -> Vec<Address>;
    fn is_owner(env: Env, identity: Address) -> bool;
    fn owner_count(env: Env) -> u32;
    fn submit_add_owner(env: Env, caller: Address, owner: Address) -> u64;
    fn submit_remove_owner(env: Env, caller: Address, owner: Address) -> u64;
}
