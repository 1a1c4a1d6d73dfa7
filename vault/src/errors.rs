use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Amount validation errors
    ZeroAmount = 4041,
    InsufficientShares = 4042,
    InvalidAmount = 4043,

    // Strategy errors
    StrategyAlreadySet = 4048,
    StrategyNotSet = 4049,
}
