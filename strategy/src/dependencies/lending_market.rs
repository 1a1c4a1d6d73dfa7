use soroban_sdk::{contractclient, Address, Env};

/// Lending market interface consumed by the strategy. Every market adapter
/// must expose these four calls.
#[contractclient(name = "Client")]
pub trait LendingMarket {
    /// Pull `amount` of the underlying from `from` into the market
    ///
    /// # Returns
    /// The amount actually supplied
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// Return up to `amount` of `to`'s supply. May return less than requested
    /// when the market's liquidity is borrowed out.
    ///
    /// # Returns
    /// The amount actually transferred to `to`
    fn withdraw(e: Env, to: Address, amount: i128) -> i128;

    /// Principal plus accrued return booked for `owner`
    fn total_value(e: Env, owner: Address) -> i128;

    /// Part of `owner`'s booked value that can be withdrawn right now
    fn redeemable_value(e: Env, owner: Address) -> i128;
}
