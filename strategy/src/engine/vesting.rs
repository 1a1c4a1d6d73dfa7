use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Env, Vec};

use crate::constants::VESTING_WINDOW_SECONDS;
use crate::storage;
use crate::types::VestingLot;

/// Linear release of realized profit.
///
/// Each harvest that realizes a gain adds a lot. A lot is exposed to share
/// price linearly over `VESTING_WINDOW_SECONDS`, so reported value climbs
/// smoothly instead of stepping up on harvest.
#[derive(Clone)]
pub struct VestingSchedule {
    pub lots: Vec<VestingLot>, // oldest first
}

impl VestingSchedule {
    pub fn new(e: &Env) -> VestingSchedule {
        VestingSchedule { lots: Vec::new(e) }
    }

    pub fn load(e: &Env) -> VestingSchedule {
        VestingSchedule {
            lots: storage::get_vesting_lots(e),
        }
    }

    pub fn store(&self, e: &Env) {
        storage::set_vesting_lots(e, &self.lots);
    }

    /// Record newly realized profit. Lots realized at the same timestamp are merged.
    pub fn add_lot(&mut self, amount: i128, now: u64) {
        if amount <= 0 {
            return;
        }
        if let Some(last) = self.lots.last() {
            if last.timestamp == now {
                let index = self.lots.len() - 1;
                self.lots.set(
                    index,
                    VestingLot {
                        amount: last.amount + amount,
                        timestamp: now,
                    },
                );
                return;
            }
        }
        self.lots.push_back(VestingLot {
            amount,
            timestamp: now,
        });
    }

    /// Sum of the amounts of every outstanding lot
    pub fn total_amount(&self) -> i128 {
        self.lots.iter().map(|lot| lot.amount).sum()
    }

    /// Profit already exposed to share price at `now`
    pub fn vested_amount(&self, e: &Env, now: u64) -> i128 {
        self.lots.iter().map(|lot| lot_vested(e, &lot, now)).sum()
    }

    /// Profit still locked at `now`
    pub fn unvested_remainder(&self, e: &Env, now: u64) -> i128 {
        self.total_amount() - self.vested_amount(e, now)
    }

    /// Drop lots whose window has fully elapsed
    pub fn prune(&mut self, now: u64) {
        let mut remaining = Vec::new(self.lots.env());
        for lot in self.lots.iter() {
            if now.saturating_sub(lot.timestamp) < VESTING_WINDOW_SECONDS {
                remaining.push_back(lot);
            }
        }
        self.lots = remaining;
    }

    /// Shrink the locked profit so it never exceeds `cap`.
    ///
    /// Only reachable when a loss wipes out more than the value reported to the
    /// vault. The surviving remainder restarts its window at `now`.
    pub fn cap_unvested(&mut self, e: &Env, now: u64, cap: i128) {
        let unvested = self.unvested_remainder(e, now);
        if unvested <= cap {
            return;
        }
        self.lots = Vec::new(e);
        self.add_lot(cap, now);
    }
}

fn lot_vested(e: &Env, lot: &VestingLot, now: u64) -> i128 {
    let elapsed = now.saturating_sub(lot.timestamp);
    if elapsed >= VESTING_WINDOW_SECONDS {
        return lot.amount;
    }
    lot.amount
        .fixed_mul_floor(e, &(elapsed as i128), &(VESTING_WINDOW_SECONDS as i128))
}
