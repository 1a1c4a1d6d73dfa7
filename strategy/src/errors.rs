use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Input validation
    ZeroAmount = 5001,
    InvalidConfig = 5002,
    InvalidAmount = 5003,
    AdapterNotFound = 5004,
    UnauthorizedVault = 5005,

    // Allocation
    InvalidRatio = 5010,

    // Liquidity
    InsufficientLiquidity = 5020,

    // Reported through events only, never raised
    AdapterQueryFailure = 5030,

    // Accounting
    AccountingInvariant = 5090,
}
