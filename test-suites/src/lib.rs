pub mod setup;
pub mod test_fixture;

pub const SCALAR_7: i128 = 10_000_000;

/// The host error a failed call surfaces when the strategy is short on liquidity
pub fn insufficient_liquidity() -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(strategy::StrategyError::InsufficientLiquidity as u32)
}
