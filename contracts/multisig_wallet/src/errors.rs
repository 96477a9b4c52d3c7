use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfiguration = 3,
    NotOwner = 4,
    UnknownProposal = 5,
    NotOpen = 6,
    AlreadyExecuted = 7,
    AlreadyApproved = 8,
    NotApproved = 9,
    InsufficientApprovals = 10,
    InsufficientFunds = 11,
    DuplicateOwner = 12,
    UnknownOwner = 13,
    InvariantViolation = 14,
    InvalidAmount = 15,
    NotProposer = 16,
}
