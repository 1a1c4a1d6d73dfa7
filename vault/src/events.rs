use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when tokens are deposited into the vault
    ///
    /// - topics - `["deposit"]`
    /// - data - `[receiver: Address, tokens: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * receiver - The address receiving the minted shares
    /// * tokens - The amount of tokens deposited
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, receiver: Address, tokens: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (receiver, tokens, shares));
    }

    /// Emitted when shares are redeemed for tokens
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[owner: Address, shares: i128, tokens: i128]`
    ///
    /// ### Arguments
    /// * owner - The address whose shares were burned
    /// * shares - The amount of shares burned
    /// * tokens - The amount of tokens paid out
    pub fn withdraw(e: &Env, owner: Address, shares: i128, tokens: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (owner, shares, tokens));
    }

    /// Emitted when the vault is linked to its strategy
    ///
    /// - topics - `["set_strategy"]`
    /// - data - `strategy: Address`
    pub fn set_strategy(e: &Env, strategy: Address) {
        let topics = (Symbol::new(e, "set_strategy"),);
        e.events().publish(topics, strategy);
    }
}
