use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when the vault deposits into the strategy
    ///
    /// - topics - `["deposit"]`
    /// - data - `[amount: i128, deployed: i128, total_managed_value: i128]`
    ///
    /// ### Arguments
    /// * amount - The amount received from the vault
    /// * deployed - The amount placed into lending markets by the rebalance that followed
    /// * total_managed_value - The managed value after the deposit
    pub fn deposit(e: &Env, amount: i128, deployed: i128, total_managed_value: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events()
            .publish(topics, (amount, deployed, total_managed_value));
    }

    /// Emitted when funds leave the strategy
    ///
    /// - topics - `["withdraw", to: Address]`
    /// - data - `[amount: i128, total_managed_value: i128]`
    ///
    /// ### Arguments
    /// * to - The receiver of the funds
    /// * amount - The amount paid out
    /// * total_managed_value - The managed value after the withdrawal
    pub fn withdraw(e: &Env, to: Address, amount: i128, total_managed_value: i128) {
        let topics = (Symbol::new(e, "withdraw"), to);
        e.events().publish(topics, (amount, total_managed_value));
    }

    /// Emitted after every harvest cycle
    ///
    /// - topics - `["harvest"]`
    /// - data - `[profit: i128, loss: i128, total_managed_value: i128, unvested_profit: i128]`
    pub fn harvest(
        e: &Env,
        profit: i128,
        loss: i128,
        total_managed_value: i128,
        unvested_profit: i128,
    ) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(
            topics,
            (profit, loss, total_managed_value, unvested_profit),
        );
    }

    /// Emitted when the target allocation changes
    ///
    /// - topics - `["set_ratios"]`
    /// - data - `ratios: Vec<u32>`
    pub fn set_ratios(e: &Env, ratios: Vec<u32>) {
        let topics = (Symbol::new(e, "set_ratios"),);
        e.events().publish(topics, ratios);
    }

    /// Emitted for every capital move between the strategy and a market
    ///
    /// - topics - `["rebalance", market: Address]`
    /// - data - `amount: i128` (positive = deployed, negative = pulled back)
    pub fn rebalance(e: &Env, market: Address, amount: i128) {
        let topics = (Symbol::new(e, "rebalance"), market);
        e.events().publish(topics, amount);
    }

    /// Emitted when a market could not be reached. The strategy keeps
    /// using the last value it observed for that market.
    ///
    /// - topics - `["adapter_query_failed", market: Address]`
    /// - data - `[code: u32, last_value: i128]`
    ///
    /// ### Arguments
    /// * market - The market that failed
    /// * code - Always `AdapterQueryFailure`
    /// * last_value - The value the strategy keeps booking for the market
    pub fn adapter_query_failed(e: &Env, market: Address, code: u32, last_value: i128) {
        let topics = (Symbol::new(e, "adapter_query_failed"), market);
        e.events().publish(topics, (code, last_value));
    }
}
