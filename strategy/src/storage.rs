use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol, Vec,
};
use crate::types::{AdapterPosition, StrategyConfig, StrategyState, VestingLot};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

/********** Storage Types **********/

const CONFIG_KEY: &str = "Config";
const MARKET_LIST_KEY: &str = "MarketList";
const STATE_KEY: &str = "State";
const VESTING_KEY: &str = "Vesting";

#[derive(Clone)]
#[contracttype]
pub enum StrategyDataKey {
    // A map of lending market to the strategy's position in it
    Position(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Config **********/

/// Fetch the strategy configuration
///
/// ### Panics
/// If the strategy config is not set
pub fn get_config(e: &Env) -> StrategyConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

/// Set the strategy configuration
///
/// ### Arguments
/// * `config` - The strategy configuration
pub fn set_config(e: &Env, config: &StrategyConfig) {
    e.storage()
        .instance()
        .set::<Symbol, StrategyConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Market List **********/

/// Fetch the ordered list of lending markets
pub fn get_market_list(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Vec<Address>>(&Symbol::new(e, MARKET_LIST_KEY))
        .unwrap_optimized()
}

/// Set the ordered list of lending markets
///
/// ### Arguments
/// * `markets` - The lending market addresses, in ratio order
pub fn set_market_list(e: &Env, markets: &Vec<Address>) {
    e.storage()
        .instance()
        .set::<Symbol, Vec<Address>>(&Symbol::new(e, MARKET_LIST_KEY), markets);
}

/********** Positions **********/

/// Fetch the strategy's position in a lending market
///
/// ### Arguments
/// * `market` - The lending market address
///
/// ### Panics
/// If the market is not part of the strategy
pub fn get_position(e: &Env, market: &Address) -> AdapterPosition {
    let key = StrategyDataKey::Position(market.clone());
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    e.storage()
        .persistent()
        .get::<StrategyDataKey, AdapterPosition>(&key)
        .unwrap_optimized()
}

/// Checks if a lending market is part of the strategy
///
/// ### Arguments
/// * `market` - The lending market address
pub fn has_position(e: &Env, market: &Address) -> bool {
    let key = StrategyDataKey::Position(market.clone());
    e.storage().persistent().has(&key)
}

/// Set the strategy's position in a lending market
///
/// ### Arguments
/// * `position` - The position, keyed by its market
pub fn set_position(e: &Env, position: &AdapterPosition) {
    let key = StrategyDataKey::Position(position.market.clone());
    e.storage()
        .persistent()
        .set::<StrategyDataKey, AdapterPosition>(&key, position);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Strategy State **********/

/// Fetch the aggregate strategy state
pub fn get_state(e: &Env) -> StrategyState {
    e.storage()
        .instance()
        .get(&Symbol::new(e, STATE_KEY))
        .unwrap_optimized()
}

/// Set the aggregate strategy state
///
/// ### Arguments
/// * `state` - The new strategy state
pub fn set_state(e: &Env, state: &StrategyState) {
    e.storage()
        .instance()
        .set::<Symbol, StrategyState>(&Symbol::new(e, STATE_KEY), state);
}

/********** Vesting Lots **********/

/// Fetch the outstanding vesting lots or return an empty Vec
pub fn get_vesting_lots(e: &Env) -> Vec<VestingLot> {
    e.storage()
        .instance()
        .get::<Symbol, Vec<VestingLot>>(&Symbol::new(e, VESTING_KEY))
        .unwrap_or(Vec::new(e))
}

/// Set the outstanding vesting lots
///
/// ### Arguments
/// * `lots` - The vesting lots, oldest first
pub fn set_vesting_lots(e: &Env, lots: &Vec<VestingLot>) {
    e.storage()
        .instance()
        .set::<Symbol, Vec<VestingLot>>(&Symbol::new(e, VESTING_KEY), lots);
}
