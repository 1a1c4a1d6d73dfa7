// Token precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places

// Allocation ratios are expressed in basis points
pub const BPS_DENOMINATOR: u32 = 10_000;

// Time constants
pub const ONE_HOUR_SECONDS: u64 = 3600;
pub const VESTING_WINDOW_SECONDS: u64 = ONE_HOUR_SECONDS * 6; // realized profit unlocks over 6 hours

// Limits
pub const MAX_ADAPTERS: u32 = 10; // Max lending markets a strategy can allocate across
