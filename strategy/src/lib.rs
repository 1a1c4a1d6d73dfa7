#![no_std]

mod constants;
mod contract;
mod dependencies;
mod engine;
mod errors;
mod events;
pub mod storage;
pub mod testutils;
mod types;

pub use constants::*;
pub use contract::*;
pub use dependencies::LendingMarketClient;
pub use engine::VestingSchedule;
pub use errors::StrategyError;
pub use types::*;
