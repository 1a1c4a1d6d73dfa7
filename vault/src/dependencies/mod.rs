mod strategy_client;
pub use strategy_client::{Client as StrategyClient, WithdrawRequest};
