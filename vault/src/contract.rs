use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, token, vec, Address, Env, IntoVal,
    Symbol,
};

use crate::{
    dependencies::{StrategyClient, WithdrawRequest},
    errors::VaultError,
    events::VaultEvents,
    storage,
};

const SCALAR_7: i128 = 10_000_000;

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /// Returns the address of the underlying token managed by this vault
    fn token(e: Env) -> Address;

    /// Returns the strategy every deposit is routed into
    ///
    /// # Panics
    /// - `StrategyNotSet` if the strategy has not been linked yet
    fn strategy(e: Env) -> Address;

    /// Returns the total number of shares in circulation
    fn total_shares(e: Env) -> i128;

    /// Returns the share balance of `user`
    fn balance(e: Env, user: Address) -> i128;

    /// Returns the value backing all shares, as reported by the strategy
    ///
    /// Profit still vesting inside the strategy is excluded, so this value
    /// cannot jump when a harvest realizes a gain.
    fn total_assets(e: Env) -> i128;

    /// Returns the value of one share in underlying tokens
    ///
    /// # Returns
    /// Price per share with 7 decimal places, `SCALAR_7` when no shares exist
    fn price_per_share(e: Env) -> i128;

    /// (Admin only) Link the vault to its strategy. Can only be done once.
    ///
    /// # Panics
    /// - `StrategyAlreadySet` if a strategy is already linked
    fn set_strategy(e: Env, strategy: Address);

    /// Deposits underlying tokens and mints shares to receiver
    ///
    /// Transfers `tokens` from `receiver` into the strategy and credits the
    /// equivalent amount of shares at the current price.
    ///
    /// # Arguments
    /// * `tokens` - Amount of underlying tokens to deposit (must be > 0)
    /// * `receiver` - Address paying the tokens and receiving the shares
    ///
    /// # Returns
    /// Amount of shares minted to receiver
    ///
    /// # Panics
    /// - `ZeroAmount` if tokens <= 0
    /// - `InvalidAmount` if the deposit is too small to mint a share
    fn deposit(e: Env, tokens: i128, receiver: Address) -> i128;

    /// Burns `shares` and pays the equivalent tokens to `owner`
    ///
    /// All-or-nothing: if the strategy cannot free enough liquidity the call
    /// reverts and the shares are kept.
    ///
    /// # Returns
    /// Amount of underlying tokens transferred to owner
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if owner holds fewer than `shares`
    /// - `InvalidAmount` if the shares are worth nothing
    fn withdraw(e: Env, shares: i128, owner: Address) -> i128;

    /// Burns every share `owner` holds and pays out the equivalent tokens
    ///
    /// # Returns
    /// Amount of underlying tokens transferred to owner
    fn withdraw_max(e: Env, owner: Address) -> i128;
}

#[contractimpl]
impl VaultContract {
    /// Initializes the vault
    ///
    /// # Arguments
    /// * `token` - Address of the underlying token contract
    /// * `admin` - Address allowed to link the strategy
    pub fn __constructor(e: Env, token: Address, admin: Address) {
        storage::set_token(&e, &token);
        storage::set_admin(&e, &admin);
        storage::set_total_shares(&e, &0);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    fn strategy(e: Env) -> Address {
        storage::extend_instance(&e);
        require_strategy(&e)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_shares(&e)
    }

    fn balance(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &user)
    }

    fn total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        total_assets(&e)
    }

    fn price_per_share(e: Env) -> i128 {
        storage::extend_instance(&e);
        let total_shares = storage::get_total_shares(&e);
        if total_shares == 0 {
            return SCALAR_7;
        }
        total_assets(&e).fixed_div_floor(&e, &total_shares, &SCALAR_7)
    }

    fn set_strategy(e: Env, strategy: Address) {
        storage::get_admin(&e).require_auth();
        if storage::get_strategy(&e).is_some() {
            panic_with_error!(e, VaultError::StrategyAlreadySet);
        }
        storage::set_strategy(&e, &strategy);

        VaultEvents::set_strategy(&e, strategy);
        storage::extend_instance(&e);
    }

    fn deposit(e: Env, tokens: i128, receiver: Address) -> i128 {
        receiver.require_auth();
        if tokens <= 0 {
            panic_with_error!(e, VaultError::ZeroAmount);
        }

        let strategy = StrategyClient::new(&e, &require_strategy(&e));
        let token = storage::get_token(&e);
        let total_shares = storage::get_total_shares(&e);

        // Calculate shares to mint: shares = tokens * (total shares / total assets)
        let shares = {
            let total_assets = strategy.estimated_total_assets();

            if total_shares == 0 || total_assets == 0 {
                // First deposit gets 1:1 ratio
                tokens
            } else {
                tokens.fixed_mul_floor(&e, &total_shares, &total_assets)
            }
        };
        if shares <= 0 {
            panic_with_error!(e, VaultError::InvalidAmount);
        }

        // Transfer tokens from caller to vault (receiver authorizes, not vault)
        token::Client::new(&e, &token).transfer(&receiver, &e.current_contract_address(), &tokens);

        // Authorize the strategy pulling the tokens from the vault
        e.authorize_as_current_contract(vec![
            &e,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: token.clone(),
                    fn_name: Symbol::new(&e, "transfer"),
                    args: (
                        e.current_contract_address(),
                        strategy.address.clone(),
                        tokens,
                    )
                        .into_val(&e),
                },
                sub_invocations: vec![&e],
            }),
        ]);
        strategy.deposit(&e.current_contract_address(), &tokens);

        storage::set_shares(&e, &receiver, &(storage::get_shares(&e, &receiver) + shares));
        storage::set_total_shares(&e, &(total_shares + shares));

        VaultEvents::deposit(&e, receiver.clone(), tokens, shares);

        storage::extend_instance(&e);
        shares
    }

    fn withdraw(e: Env, shares: i128, owner: Address) -> i128 {
        owner.require_auth();
        let tokens = burn_and_redeem(&e, shares, &owner);
        storage::extend_instance(&e);
        tokens
    }

    fn withdraw_max(e: Env, owner: Address) -> i128 {
        owner.require_auth();
        let shares = storage::get_shares(&e, &owner);
        let tokens = burn_and_redeem(&e, shares, &owner);
        storage::extend_instance(&e);
        tokens
    }
}

fn require_strategy(e: &Env) -> Address {
    match storage::get_strategy(e) {
        Some(strategy) => strategy,
        None => panic_with_error!(e, VaultError::StrategyNotSet),
    }
}

fn total_assets(e: &Env) -> i128 {
    match storage::get_strategy(e) {
        Some(strategy) => StrategyClient::new(e, &strategy).estimated_total_assets(),
        None => 0,
    }
}

fn burn_and_redeem(e: &Env, shares: i128, owner: &Address) -> i128 {
    if shares <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let balance = storage::get_shares(e, owner);
    if balance < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }

    let strategy = StrategyClient::new(e, &require_strategy(e));
    let total_shares = storage::get_total_shares(e);

    // The last holder takes everything, so no dust is stranded by rounding
    let request = if shares == total_shares {
        WithdrawRequest::Max
    } else {
        // tokens = shares * (total assets / total shares)
        let total_assets = strategy.estimated_total_assets();
        let tokens = shares.fixed_mul_floor(e, &total_assets, &total_shares);
        if tokens <= 0 {
            panic_with_error!(e, VaultError::InvalidAmount);
        }
        WithdrawRequest::Amount(tokens)
    };
    let tokens = strategy.withdraw(owner, &request);

    storage::set_shares(e, owner, &(balance - shares));
    storage::set_total_shares(e, &(total_shares - shares));

    VaultEvents::withdraw(e, owner.clone(), shares, tokens);
    tokens
}
