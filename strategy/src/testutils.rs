#![cfg(feature = "testutils")]

use crate::{StrategyClient, StrategyContract};
use soroban_sdk::{vec, Address, Env, Vec};

/// Deploy a strategy over `markets` with the given target ratios
pub fn create_strategy<'a>(
    e: &Env,
    admin: &Address,
    vault: &Address,
    token: &Address,
    markets: &Vec<Address>,
    ratios: &Vec<u32>,
) -> StrategyClient<'a> {
    let address = e.register(
        StrategyContract {},
        (
            admin.clone(),
            vault.clone(),
            token.clone(),
            markets.clone(),
            ratios.clone(),
        ),
    );
    StrategyClient::new(e, &address)
}

/// Everything into the first market, nothing elsewhere
pub fn single_market_ratios(e: &Env, market_count: u32) -> Vec<u32> {
    let mut ratios = vec![e, 10_000u32];
    for _ in 1..market_count {
        ratios.push_back(0);
    }
    ratios
}

/// Split evenly across the first two markets
pub fn split_ratios(e: &Env, market_count: u32) -> Vec<u32> {
    let mut ratios = vec![e, 5_000u32, 5_000u32];
    for _ in 2..market_count {
        ratios.push_back(0);
    }
    ratios
}
