use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

use crate::constants::BPS_DENOMINATOR;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use super::book::StrategyBook;

/// Reject a ratio set that does not cover every market one-to-one, has an
/// entry above 100%, or sums above 100%.
pub fn require_valid_ratios(e: &Env, ratios: &Vec<u32>, adapter_count: u32) {
    if ratios.len() != adapter_count {
        panic_with_error!(e, StrategyError::InvalidRatio);
    }
    let mut sum: u32 = 0;
    for ratio in ratios.iter() {
        if ratio > BPS_DENOMINATOR {
            panic_with_error!(e, StrategyError::InvalidRatio);
        }
        sum += ratio;
    }
    if sum > BPS_DENOMINATOR {
        panic_with_error!(e, StrategyError::InvalidRatio);
    }
}

pub fn execute_set_ratios(e: &Env, ratios: &Vec<u32>) {
    let mut book = StrategyBook::load(e);
    require_valid_ratios(e, ratios, book.positions.len());

    for (index, ratio) in ratios.iter().enumerate() {
        let index = index as u32;
        let mut position = book.positions.get_unchecked(index);
        position.ratio_bps = ratio;
        book.positions.set(index, position);
    }
    // applied by the next deposit, harvest or forced rebalance
    book.state.rebalance_pending = true;
    book.store(e);

    StrategyEvents::set_ratios(e, ratios.clone());
}

/// Pull `amount` from the vault and place it per the current ratios
///
/// ### Returns
/// The amount deployed into lending markets
///
/// ### Panics
/// * `UnauthorizedVault` if `from` is not the strategy's vault
/// * `ZeroAmount` if `amount` is not positive
pub fn execute_deposit(e: &Env, from: &Address, amount: i128) -> i128 {
    let now = e.ledger().timestamp();
    let mut book = StrategyBook::load(e);
    if *from != book.config.vault {
        panic_with_error!(e, StrategyError::UnauthorizedVault);
    }
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }

    TokenClient::new(e, &book.config.token).transfer(from, &e.current_contract_address(), &amount);
    book.state.total_managed_value += amount;

    let deployed = rebalance(e, &mut book);
    book.vesting.prune(now);
    book.refresh_liquidity(e);
    book.require_invariants(e, now);
    book.store(e);

    StrategyEvents::deposit(e, amount, deployed, book.state.total_managed_value);
    deployed
}

/// Move capital to match the stored ratios, including draining markets that
/// sit above their target.
///
/// ### Returns
/// The amount deployed into lending markets
pub fn execute_rebalance(e: &Env) -> i128 {
    let now = e.ledger().timestamp();
    let mut book = StrategyBook::load(e);
    book.state.rebalance_pending = true;

    let deployed = rebalance(e, &mut book);
    book.vesting.prune(now);
    book.refresh_liquidity(e);
    book.require_invariants(e, now);
    book.store(e);
    deployed
}

/// Place idle cash so each market approaches `total * ratio / 10000`.
///
/// Only shortfalls are deployed, so running it again on the same book moves
/// nothing. Markets above target are drawn down only while a ratio change is
/// pending, and never by more than they can redeem now. The change stays
/// pending until every market is at or below its target. Whatever the ratios
/// leave unallocated stays idle.
///
/// ### Returns
/// The amount deployed into lending markets
pub(crate) fn rebalance(e: &Env, book: &mut StrategyBook) -> i128 {
    let mut idle = book.idle(e);
    let total = idle + book.booked_value();
    let count = book.positions.len();

    let mut targets: Vec<i128> = Vec::new(e);
    for position in book.positions.iter() {
        targets.push_back(total.fixed_mul_floor(
            e,
            &(position.ratio_bps as i128),
            &(BPS_DENOMINATOR as i128),
        ));
    }

    if book.state.rebalance_pending {
        let mut over_target = false;
        for index in 0..count {
            let mut position = book.positions.get_unchecked(index);
            let target = targets.get_unchecked(index);
            let excess = position.last_value - target;
            if excess <= 0 {
                continue;
            }
            let pulled = position.pull(e, excess.min(position.redeemable(e)));
            if pulled > 0 {
                idle += pulled;
                log!(e, "rebalance pull", position.market.clone(), pulled);
                StrategyEvents::rebalance(e, position.market.clone(), -pulled);
            }
            if position.last_value > target {
                over_target = true;
            }
            book.positions.set(index, position);
        }
        // a market that could not be drained keeps the change pending
        book.state.rebalance_pending = over_target;
    }

    let mut shortfall_total: i128 = 0;
    for index in 0..count {
        let shortfall = targets.get_unchecked(index) - book.positions.get_unchecked(index).last_value;
        if shortfall > 0 {
            shortfall_total += shortfall;
        }
    }
    if shortfall_total == 0 || idle <= 0 {
        return 0;
    }

    let mut deployed_total: i128 = 0;
    for index in 0..count {
        let mut position = book.positions.get_unchecked(index);
        let shortfall = targets.get_unchecked(index) - position.last_value;
        if position.ratio_bps == 0 || shortfall <= 0 {
            continue;
        }
        // not enough cash for every shortfall: fill each pro rata
        let amount = if shortfall_total <= idle {
            shortfall
        } else {
            shortfall.fixed_mul_floor(e, &idle, &shortfall_total)
        };
        let deployed = position.deploy(e, &book.config.token, amount);
        if deployed > 0 {
            deployed_total += deployed;
            log!(e, "rebalance deploy", position.market.clone(), deployed);
            StrategyEvents::rebalance(e, position.market.clone(), deployed);
        }
        book.positions.set(index, position);
    }
    deployed_total
}
