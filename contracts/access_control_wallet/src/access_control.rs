use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::errors::AccessControlError;
use crate::events::{AccessControlBound, OwnerChangeRequested};
use crate::types::{DataKey, OwnerChange, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use crate::wallet::WalletClient;

#[contract]
pub struct AccessControlWallet;

#[contractimpl]
impl AccessControlWallet {
    /// Bind this layer to `wallet` for good.
    ///
    /// The wallet must already be initialized; an address that does not
    /// answer `owner_count` with at least one owner is rejected.
    pub fn initialize(env: Env, wallet: Address) -> Result<(), AccessControlError> {
        if env.storage().instance().has(&DataKey::Wallet) {
            return Err(AccessControlError::AlreadyInitialized);
        }

        let owner_count = match WalletClient::new(&env, &wallet).try_owner_count() {
            Ok(Ok(count)) => count,
            _ => 0,
        };
        if owner_count == 0 {
            return Err(AccessControlError::InvalidConfiguration);
        }

        env.storage().instance().set(&DataKey::Wallet, &wallet);
        Self::bump_instance(&env);

        AccessControlBound {
            wallet,
            owner_count,
        }
        .publish(&env);

        Ok(())
    }

    pub fn wallet(env: Env) -> Result<Address, AccessControlError> {
        env.storage()
            .instance()
            .get(&DataKey::Wallet)
            .ok_or(AccessControlError::NotInitialized)
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, AccessControlError> {
        Ok(Self::wallet_client(&env)?.get_owners())
    }

    pub fn is_owner(env: Env, identity: Address) -> Result<bool, AccessControlError> {
        Ok(Self::wallet_client(&env)?.is_owner(&identity))
    }

    /// Open an `AddOwner` proposal on the bound wallet in `caller`'s name.
    ///
    /// Returns the wallet's proposal id. The owner is only added once the
    /// proposal reaches the wallet's threshold and is executed there.
    pub fn add_owner(
        env: Env,
        caller: Address,
        identity: Address,
    ) -> Result<u64, AccessControlError> {
        Self::request(&env, &caller, OwnerChange::Add(identity))
    }

    /// Open a `RemoveOwner` proposal on the bound wallet in `caller`'s name.
    pub fn remove_owner(
        env: Env,
        caller: Address,
        identity: Address,
    ) -> Result<u64, AccessControlError> {
        Self::request(&env, &caller, OwnerChange::Remove(identity))
    }

    fn request(
        env: &Env,
        caller: &Address,
        change: OwnerChange,
    ) -> Result<u64, AccessControlError> {
        let wallet = Self::wallet_client(env)?;
        caller.require_auth();

        // Membership is read from the wallet on every call, never cached here.
        if !wallet.is_owner(caller) {
            return Err(AccessControlError::AccessDenied);
        }

        // The wallet checks `caller`'s authorization and ownership again.
        let proposal_id = match &change {
            OwnerChange::Add(identity) => wallet.submit_add_owner(caller, identity),
            OwnerChange::Remove(identity) => wallet.submit_remove_owner(caller, identity),
        };
        Self::bump_instance(env);

        OwnerChangeRequested {
            caller: caller.clone(),
            change,
            proposal_id,
        }
        .publish(env);

        Ok(proposal_id)
    }

    fn wallet_client(env: &Env) -> Result<WalletClient<'_>, AccessControlError> {
        let wallet: Address = env
            .storage()
            .instance()
            .get(&DataKey::Wallet)
            .ok_or(AccessControlError::NotInitialized)?;
        Ok(WalletClient::new(env, &wallet))
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
