use soroban_sdk::{log, Env};

use crate::events::StrategyEvents;
use crate::types::HarvestReport;
use super::book::StrategyBook;
use super::router;

/// Reconcile the books against what the markets actually hold.
///
/// Measure: refresh every market's value and add idle cash. Realize: a gain
/// over the recorded managed value becomes a vesting lot stamped `now`; a
/// shortfall is booked as a loss at once. A pending ratio change is applied
/// afterwards.
pub fn execute_harvest(e: &Env) -> HarvestReport {
    let now = e.ledger().timestamp();
    let mut book = StrategyBook::load(e);

    // measure
    let mut measured = book.idle(e);
    let mut stale_adapters: u32 = 0;
    for index in 0..book.positions.len() {
        let mut position = book.positions.get_unchecked(index);
        measured += position.current_value(e, now);
        if position.stale {
            stale_adapters += 1;
        }
        book.positions.set(index, position);
    }

    // realize
    let recorded = book.state.total_managed_value;
    let mut profit: i128 = 0;
    let mut loss: i128 = 0;
    if measured > recorded {
        profit = measured - recorded;
        book.vesting.add_lot(profit, now);
    } else if measured < recorded {
        loss = recorded - measured;
        log!(e, "harvest loss", loss);
    }
    book.state.total_managed_value = measured;
    book.vesting.prune(now);
    book.vesting.cap_unvested(e, now, measured);
    book.state.last_harvest = now;

    if book.state.rebalance_pending {
        router::rebalance(e, &mut book);
    }
    book.refresh_liquidity(e);
    book.require_invariants(e, now);
    book.store(e);

    let unvested_profit = book.vesting.unvested_remainder(e, now);
    StrategyEvents::harvest(
        e,
        profit,
        loss,
        book.state.total_managed_value,
        unvested_profit,
    );
    HarvestReport {
        profit,
        loss,
        total_managed_value: book.state.total_managed_value,
        unvested_profit,
        stale_adapters,
    }
}
