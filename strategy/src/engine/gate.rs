use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::types::WithdrawRequest;
use super::book::StrategyBook;

/// Idle cash plus everything the markets can redeem right now
pub fn max_withdrawable(e: &Env) -> i128 {
    StrategyBook::load(e).max_withdrawable(e)
}

/// Release funds to `to`. Either the whole amount is paid or the call reverts.
///
/// ### Arguments
/// * `to` - The receiver of the funds
/// * `request` - A fixed amount, or `Max` for everything the strategy manages,
///   profit still vesting included
///
/// ### Returns
/// The amount paid out
///
/// ### Panics
/// * `ZeroAmount` if a fixed amount is not positive
/// * `InvalidAmount` if the amount exceeds the reported value
/// * `InsufficientLiquidity` if the markets cannot hand back enough right now
pub fn execute_withdraw(e: &Env, to: &Address, request: &WithdrawRequest) -> i128 {
    let now = e.ledger().timestamp();
    let mut book = StrategyBook::load(e);
    let reported = book.estimated_total_assets(e, now);

    let amount = match request {
        WithdrawRequest::Amount(amount) => {
            if *amount <= 0 {
                panic_with_error!(e, StrategyError::ZeroAmount);
            }
            if *amount > reported {
                panic_with_error!(e, StrategyError::InvalidAmount);
            }
            *amount
        }
        // the last holder exits with the locked profit too
        WithdrawRequest::Max => book.state.total_managed_value,
    };
    if amount == 0 {
        return 0;
    }

    let idle = book.idle(e);
    let mut redeemable: Vec<i128> = Vec::new(e);
    let mut liquid = idle;
    for position in book.positions.iter() {
        let value = position.redeemable(e);
        liquid += value;
        redeemable.push_back(value);
    }
    if amount > liquid {
        panic_with_error!(e, StrategyError::InsufficientLiquidity);
    }

    let mut remaining = amount - idle.min(amount);
    for index in withdraw_order(e, &redeemable).iter() {
        if remaining == 0 {
            break;
        }
        let available = redeemable.get_unchecked(index);
        if available <= 0 {
            continue;
        }
        let mut position = book.positions.get_unchecked(index);
        remaining -= position.pull(e, remaining.min(available));
        book.positions.set(index, position);
    }
    // a market handed back less than it reported
    if remaining > 0 {
        panic_with_error!(e, StrategyError::InsufficientLiquidity);
    }

    TokenClient::new(e, &book.config.token).transfer(&e.current_contract_address(), to, &amount);
    book.state.total_managed_value -= amount;
    book.vesting.prune(now);
    book.vesting.cap_unvested(e, now, book.state.total_managed_value);
    book.refresh_liquidity(e);
    book.require_invariants(e, now);
    book.store(e);

    StrategyEvents::withdraw(e, to.clone(), amount, book.state.total_managed_value);
    amount
}

/// Position indices sorted by redeemable amount, largest first. Ties keep
/// ratio order.
fn withdraw_order(e: &Env, redeemable: &Vec<i128>) -> Vec<u32> {
    let mut order: Vec<u32> = Vec::new(e);
    let mut taken: Vec<bool> = Vec::new(e);
    for _ in 0..redeemable.len() {
        taken.push_back(false);
    }
    for _ in 0..redeemable.len() {
        let mut best: Option<u32> = None;
        for index in 0..redeemable.len() {
            if taken.get_unchecked(index) {
                continue;
            }
            match best {
                Some(b) if redeemable.get_unchecked(b) >= redeemable.get_unchecked(index) => {}
                _ => best = Some(index),
            }
        }
        if let Some(b) = best {
            taken.set(b, true);
            order.push_back(b);
        }
    }
    order
}
