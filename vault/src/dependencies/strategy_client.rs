use soroban_sdk::{contractclient, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawRequest {
    Amount(i128),
    Max,
}

/// The slice of the strategy interface the vault relies on
#[contractclient(name = "Client")]
pub trait Strategy {
    fn estimated_total_assets(e: Env) -> i128;

    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    fn withdraw(e: Env, to: Address, request: WithdrawRequest) -> i128;
}
