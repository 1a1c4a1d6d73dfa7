use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfig {
    pub admin: Address, // Address allowed to change allocation ratios
    pub vault: Address, // The vault that owns all capital managed by this strategy
    pub token: Address, // Underlying asset deployed into every lending market
}

/// Per lending market record of capital placed and its last observed value
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdapterPosition {
    pub market: Address,         // Lending market contract
    pub ratio_bps: u32,          // Target share of managed value (basis points)
    pub principal_deployed: i128, // Net principal currently placed in the market
    pub last_value: i128,        // Booked value at the last observation, including accrued interest
    pub last_update: u64,        // Timestamp of the last successful observation
    pub stale: bool,             // True when the last observation attempt failed
}

/// Point-in-time view of what a market holds for the strategy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionSnapshot {
    pub market: Address,
    pub redeemable_now: i128, // Amount obtainable without waiting, never above booked_value
    pub booked_value: i128,   // Accounting value including amounts currently lent out
}

/// Realized profit waiting to be exposed to share price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingLot {
    pub amount: i128,   // Profit realized by a harvest
    pub timestamp: u64, // When the harvest realized it
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyState {
    pub total_managed_value: i128,       // Idle cash plus the booked value of every market
    pub total_available_liquidity: i128, // Idle cash plus what every market can redeem now
    pub last_harvest: u64,               // Timestamp of the last harvest
    pub rebalance_pending: bool,         // Ratios changed since the last rebalance
}

/// Outcome of a single harvest cycle
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestReport {
    pub profit: i128,              // Gain realized this cycle (starts vesting now)
    pub loss: i128,                // Loss recognized this cycle (applied immediately)
    pub total_managed_value: i128, // Measured value after the cycle
    pub unvested_profit: i128,     // Profit still locked after the cycle
    pub stale_adapters: u32,       // Markets whose value could not be refreshed
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawRequest {
    Amount(i128), // Withdraw exactly this much or nothing
    Max,          // Withdraw everything managed, unvested profit included
}
