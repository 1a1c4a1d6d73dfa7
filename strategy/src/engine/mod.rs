mod accountant;
mod book;
mod config;
mod gate;
mod position;
mod router;
mod vesting;

pub use accountant::execute_harvest;
pub use book::StrategyBook;
pub use config::execute_initialize;
pub use gate::{execute_withdraw, max_withdrawable};
pub use router::{execute_deposit, execute_rebalance, execute_set_ratios};
pub use vesting::VestingSchedule;
