mod lending_market;
pub use lending_market::Client as LendingMarketClient;
