use soroban_sdk::{contractevent, Address};

use crate::types::OwnerChange;

#[contractevent(topics = ["access", "bound"])]
pub struct AccessControlBound {
    pub wallet: Address,
    pub owner_count: u32,
}

#[contractevent(topics = ["access", "requested"])]
pub struct OwnerChangeRequested {
    pub caller: Address,
    pub change: OwnerChange,
    pub proposal_id: u64,
}
