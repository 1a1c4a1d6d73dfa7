#![no_std]

mod contract;
mod errors;
mod storage;

pub use contract::{MockLendingMarket, MockLendingMarketClient};
pub use errors::MarketError;
