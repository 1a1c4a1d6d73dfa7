use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{log, vec, Address, Env, IntoVal, Symbol};

use crate::dependencies::LendingMarketClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::types::{AdapterPosition, PositionSnapshot};

impl AdapterPosition {
    pub fn new(market: &Address, ratio_bps: u32, now: u64) -> AdapterPosition {
        AdapterPosition {
            market: market.clone(),
            ratio_bps,
            principal_deployed: 0,
            last_value: 0,
            last_update: now,
            stale: false,
        }
    }

    /// Refresh the booked value from the market.
    ///
    /// A failed or nonsensical read keeps the previous value and flags the
    /// position stale; a single unreachable market never halts the strategy.
    ///
    /// ### Returns
    /// The value now booked for this market
    pub fn current_value(&mut self, e: &Env, now: u64) -> i128 {
        let client = LendingMarketClient::new(e, &self.market);
        match client.try_total_value(&e.current_contract_address()) {
            Ok(Ok(value)) if value >= 0 => {
                self.last_value = value;
                self.last_update = now;
                self.stale = false;
            }
            _ => {
                self.stale = true;
                self.report_failure(e);
            }
        }
        self.last_value
    }

    /// Amount the market can hand back right now, clamped into `[0, last_value]`.
    /// An unreachable market has nothing redeemable.
    pub fn redeemable(&self, e: &Env) -> i128 {
        let client = LendingMarketClient::new(e, &self.market);
        match client.try_redeemable_value(&e.current_contract_address()) {
            Ok(Ok(value)) => value.clamp(0, self.last_value.max(0)),
            _ => {
                self.report_failure(e);
                0
            }
        }
    }

    pub fn snapshot(&self, e: &Env) -> PositionSnapshot {
        PositionSnapshot {
            market: self.market.clone(),
            redeemable_now: self.redeemable(e),
            booked_value: self.last_value,
        }
    }

    /// Supply `amount` of `token` to the market.
    ///
    /// ### Returns
    /// The amount the market accepted, 0 if the market rejected the call
    pub fn deploy(&mut self, e: &Env, token: &Address, amount: i128) -> i128 {
        if amount <= 0 {
            return 0;
        }
        authorize_transfer(e, token, &self.market, amount);
        let client = LendingMarketClient::new(e, &self.market);
        match client.try_deposit(&e.current_contract_address(), &amount) {
            Ok(Ok(deployed)) => {
                let deployed = deployed.max(0);
                self.principal_deployed += deployed;
                self.last_value += deployed;
                deployed
            }
            _ => {
                self.report_failure(e);
                0
            }
        }
    }

    /// Pull up to `amount` back from the market.
    ///
    /// ### Returns
    /// The amount received, 0 if the market rejected the call
    pub fn pull(&mut self, e: &Env, amount: i128) -> i128 {
        if amount <= 0 {
            return 0;
        }
        let client = LendingMarketClient::new(e, &self.market);
        match client.try_withdraw(&e.current_contract_address(), &amount) {
            Ok(Ok(received)) => {
                let received = received.max(0);
                self.principal_deployed = (self.principal_deployed - received).max(0);
                self.last_value = (self.last_value - received).max(0);
                received
            }
            _ => {
                self.report_failure(e);
                0
            }
        }
    }

    fn report_failure(&self, e: &Env) {
        log!(e, "lending market unreachable", self.market.clone(), self.last_value);
        StrategyEvents::adapter_query_failed(
            e,
            self.market.clone(),
            StrategyError::AdapterQueryFailure as u32,
            self.last_value,
        );
    }
}

/// Pre-authorize the market pulling `amount` of `token` from this contract
fn authorize_transfer(e: &Env, token: &Address, to: &Address, amount: i128) {
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (e.current_contract_address(), to.clone(), amount).into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
}
