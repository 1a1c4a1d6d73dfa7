use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env, Vec};

use crate::engine::{self, StrategyBook};
use crate::errors::StrategyError;
use crate::storage;
use crate::types::{
    AdapterPosition, HarvestReport, PositionSnapshot, StrategyConfig, StrategyState,
    WithdrawRequest,
};

#[contract]
pub struct StrategyContract;

#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// Fetch the strategy configuration
    fn config(e: Env) -> StrategyConfig;

    /// Fetch the aggregate strategy state as of the last state change
    fn state(e: Env) -> StrategyState;

    /// Fetch every lending market position, in ratio order
    fn positions(e: Env) -> Vec<AdapterPosition>;

    /// Fetch the target allocation ratios, in basis points
    fn ratios(e: Env) -> Vec<u32>;

    /// Compare what a market can hand back now with what the strategy has booked for it
    ///
    /// ### Arguments
    /// * `market` - The lending market address
    ///
    /// ### Panics
    /// If the market is not part of the strategy
    fn snapshot(e: Env, market: Address) -> PositionSnapshot;

    /// Idle cash plus what every market can redeem right now
    fn max_withdrawable(e: Env) -> i128;

    /// Profit realized by past harvests that is not yet exposed to share price
    fn unvested_profit(e: Env) -> i128;

    /// The value the vault prices its shares against: managed value minus
    /// unvested profit
    fn estimated_total_assets(e: Env) -> i128;

    /// (Vault only) Pull `amount` of the underlying from the vault and place it
    /// across the lending markets
    ///
    /// ### Arguments
    /// * `from` - The vault address
    /// * `amount` - The amount to pull
    ///
    /// ### Returns
    /// The amount deployed into lending markets, the rest stays idle
    ///
    /// ### Panics
    /// * `UnauthorizedVault` if `from` is not the vault
    /// * `ZeroAmount` if `amount` is not positive
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// (Vault only) Pay out funds. All-or-nothing: either the full amount is
    /// released or the call reverts.
    ///
    /// ### Arguments
    /// * `to` - The receiver of the funds
    /// * `request` - A fixed amount or `Max` for everything the strategy manages
    ///
    /// ### Returns
    /// The amount paid out
    ///
    /// ### Panics
    /// * `ZeroAmount` if a fixed amount is not positive
    /// * `InvalidAmount` if the amount exceeds `estimated_total_assets`
    /// * `InsufficientLiquidity` if the markets cannot hand back enough right now
    fn withdraw(e: Env, to: Address, request: WithdrawRequest) -> i128;

    /// Measure every market, realize profit into the vesting schedule or book a
    /// loss, and apply any pending ratio change. Permissionless.
    fn harvest(e: Env) -> HarvestReport;

    /// (Admin only) Set new target ratios. Capital moves on the next deposit,
    /// harvest or rebalance.
    ///
    /// ### Arguments
    /// * `ratios` - One ratio per market in basis points, summing to at most 10000
    ///
    /// ### Panics
    /// * `InvalidRatio` if the ratios are malformed
    fn set_allocation_ratios(e: Env, ratios: Vec<u32>);

    /// (Admin only) Move capital to the target ratios now
    ///
    /// ### Returns
    /// The amount deployed into lending markets
    fn rebalance(e: Env) -> i128;
}

#[contractimpl]
impl StrategyContract {
    /// Constructor for initializing the contract when deployed
    ///
    /// ### Arguments
    /// * `admin` - The address allowed to change allocation ratios
    /// * `vault` - The vault this strategy manages capital for
    /// * `token` - The underlying asset
    /// * `markets` - The lending markets, in ratio order
    /// * `ratios` - Initial ratio per market in basis points
    pub fn __constructor(
        e: Env,
        admin: Address,
        vault: Address,
        token: Address,
        markets: Vec<Address>,
        ratios: Vec<u32>,
    ) {
        engine::execute_initialize(&e, &admin, &vault, &token, &markets, &ratios);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Strategy for StrategyContract {
    fn config(e: Env) -> StrategyConfig {
        storage::extend_instance(&e);
        storage::get_config(&e)
    }

    fn state(e: Env) -> StrategyState {
        storage::extend_instance(&e);
        storage::get_state(&e)
    }

    fn positions(e: Env) -> Vec<AdapterPosition> {
        storage::extend_instance(&e);
        StrategyBook::load(&e).positions
    }

    fn ratios(e: Env) -> Vec<u32> {
        storage::extend_instance(&e);
        let mut ratios = Vec::new(&e);
        for position in StrategyBook::load(&e).positions.iter() {
            ratios.push_back(position.ratio_bps);
        }
        ratios
    }

    fn snapshot(e: Env, market: Address) -> PositionSnapshot {
        storage::extend_instance(&e);
        if !storage::has_position(&e, &market) {
            panic_with_error!(e, StrategyError::AdapterNotFound);
        }
        storage::get_position(&e, &market).snapshot(&e)
    }

    fn max_withdrawable(e: Env) -> i128 {
        storage::extend_instance(&e);
        engine::max_withdrawable(&e)
    }

    fn unvested_profit(e: Env) -> i128 {
        storage::extend_instance(&e);
        let now = e.ledger().timestamp();
        engine::VestingSchedule::load(&e).unvested_remainder(&e, now)
    }

    fn estimated_total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        let now = e.ledger().timestamp();
        StrategyBook::load(&e).estimated_total_assets(&e, now)
    }

    fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        engine::execute_deposit(&e, &from, amount)
    }

    fn withdraw(e: Env, to: Address, request: WithdrawRequest) -> i128 {
        storage::extend_instance(&e);
        storage::get_config(&e).vault.require_auth();
        engine::execute_withdraw(&e, &to, &request)
    }

    fn harvest(e: Env) -> HarvestReport {
        storage::extend_instance(&e);
        engine::execute_harvest(&e)
    }

    fn set_allocation_ratios(e: Env, ratios: Vec<u32>) {
        storage::extend_instance(&e);
        storage::get_config(&e).admin.require_auth();
        engine::execute_set_ratios(&e, &ratios);
    }

    fn rebalance(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_config(&e).admin.require_auth();
        engine::execute_rebalance(&e)
    }
}
