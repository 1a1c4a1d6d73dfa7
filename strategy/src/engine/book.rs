use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Env, Vec};

use crate::errors::StrategyError;
use crate::storage;
use crate::types::{AdapterPosition, StrategyConfig, StrategyState};
use super::vesting::VestingSchedule;

/// Everything the strategy owns, loaded once per call and written back at
/// the end of it. Nothing here is observable to other callers until `store`.
pub struct StrategyBook {
    pub config: StrategyConfig,
    pub positions: Vec<AdapterPosition>, // in ratio order
    pub state: StrategyState,
    pub vesting: VestingSchedule,
}

impl StrategyBook {
    pub fn load(e: &Env) -> StrategyBook {
        let config = storage::get_config(e);
        let mut positions = Vec::new(e);
        for market in storage::get_market_list(e).iter() {
            positions.push_back(storage::get_position(e, &market));
        }
        StrategyBook {
            config,
            positions,
            state: storage::get_state(e),
            vesting: VestingSchedule::load(e),
        }
    }

    pub fn store(&self, e: &Env) {
        for position in self.positions.iter() {
            storage::set_position(e, &position);
        }
        storage::set_state(e, &self.state);
        self.vesting.store(e);
    }

    /// Underlying held by the strategy and not deployed to any market
    pub fn idle(&self, e: &Env) -> i128 {
        TokenClient::new(e, &self.config.token).balance(&e.current_contract_address())
    }

    /// Sum of every market's booked value
    pub fn booked_value(&self) -> i128 {
        self.positions.iter().map(|p| p.last_value).sum()
    }

    /// Value reported to the vault: managed value net of profit still vesting
    pub fn estimated_total_assets(&self, e: &Env, now: u64) -> i128 {
        (self.state.total_managed_value - self.vesting.unvested_remainder(e, now)).max(0)
    }

    /// Idle cash plus what every market can hand back right now
    pub fn max_withdrawable(&self, e: &Env) -> i128 {
        let redeemable: i128 = self.positions.iter().map(|p| p.redeemable(e)).sum();
        self.idle(e) + redeemable
    }

    pub fn refresh_liquidity(&mut self, e: &Env) {
        self.state.total_available_liquidity = self.max_withdrawable(e);
    }

    /// Abort the call if accounting ever drifts into an impossible state
    pub fn require_invariants(&self, e: &Env, now: u64) {
        if self.state.total_managed_value < 0 {
            panic_with_error!(e, StrategyError::AccountingInvariant);
        }
        if self.vesting.unvested_remainder(e, now) > self.state.total_managed_value {
            panic_with_error!(e, StrategyError::AccountingInvariant);
        }
        for position in self.positions.iter() {
            if position.last_value < 0 || position.principal_deployed < 0 {
                panic_with_error!(e, StrategyError::AccountingInvariant);
            }
        }
    }
}
