use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::constants::MAX_ADAPTERS;
use crate::errors::StrategyError;
use crate::storage;
use crate::types::{AdapterPosition, StrategyConfig, StrategyState};
use super::router::require_valid_ratios;
use super::vesting::VestingSchedule;

/// Store the strategy configuration and open one position per market
///
/// ### Panics
/// * `InvalidConfig` if the market list is empty, too long, or repeats a market
/// * `InvalidRatio` if the ratios do not match the market list
pub fn execute_initialize(
    e: &Env,
    admin: &Address,
    vault: &Address,
    token: &Address,
    markets: &Vec<Address>,
    ratios: &Vec<u32>,
) {
    require_valid_markets(e, markets);
    require_valid_ratios(e, ratios, markets.len());

    let now = e.ledger().timestamp();
    storage::set_config(
        e,
        &StrategyConfig {
            admin: admin.clone(),
            vault: vault.clone(),
            token: token.clone(),
        },
    );
    storage::set_market_list(e, markets);
    for (market, ratio) in markets.iter().zip(ratios.iter()) {
        storage::set_position(e, &AdapterPosition::new(&market, ratio, now));
    }
    storage::set_state(
        e,
        &StrategyState {
            total_managed_value: 0,
            total_available_liquidity: 0,
            last_harvest: now,
            rebalance_pending: false,
        },
    );
    VestingSchedule::new(e).store(e);
}

fn require_valid_markets(e: &Env, markets: &Vec<Address>) {
    if markets.is_empty() || markets.len() > MAX_ADAPTERS {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
    for (i, market) in markets.iter().enumerate() {
        for other in markets.iter().skip(i + 1) {
            if market == other {
                panic_with_error!(e, StrategyError::InvalidConfig);
            }
        }
    }
}
