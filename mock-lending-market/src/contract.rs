use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env};

use crate::errors::MarketError;
use crate::storage;

/// A lending market with a single asset and no interest model. Interest and
/// bad debt are booked by hand through `accrue`, and liquidity is drained and
/// restored through `borrow` and `repay`.
#[contract]
pub struct MockLendingMarket;

#[contractimpl]
impl MockLendingMarket {
    pub fn __constructor(e: Env, admin: Address, token: Address) {
        storage::set_admin(&e, &admin);
        storage::set_token(&e, &token);
        storage::set_offline(&e, false);
        storage::extend_instance(&e);
    }

    /// Supply `amount` from `from`
    ///
    /// ### Returns
    /// The amount accepted
    pub fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        require_online(&e);
        from.require_auth();
        if amount <= 0 {
            return 0;
        }
        TokenClient::new(&e, &storage::get_token(&e)).transfer(
            &from,
            &e.current_contract_address(),
            &amount,
        );
        storage::set_supplied(&e, &from, storage::get_supplied(&e, &from) + amount);
        amount
    }

    /// Redeem up to `amount` to `to`. Pays out less than requested when the
    /// market is short on cash.
    ///
    /// ### Returns
    /// The amount paid out
    pub fn withdraw(e: Env, to: Address, amount: i128) -> i128 {
        require_online(&e);
        to.require_auth();
        let paid = amount.min(redeemable(&e, &to)).max(0);
        if paid == 0 {
            return 0;
        }
        TokenClient::new(&e, &storage::get_token(&e)).transfer(
            &e.current_contract_address(),
            &to,
            &paid,
        );
        storage::set_supplied(&e, &to, storage::get_supplied(&e, &to) - paid);
        paid
    }

    /// Value owed to `owner`, including amounts currently lent out
    pub fn total_value(e: Env, owner: Address) -> i128 {
        require_online(&e);
        storage::get_supplied(&e, &owner)
    }

    /// Value `owner` could redeem right now
    pub fn redeemable_value(e: Env, owner: Address) -> i128 {
        require_online(&e);
        redeemable(&e, &owner)
    }

    /// (Admin only) Book interest (`delta > 0`) or bad debt (`delta < 0`) for a
    /// supplier. Interest must be backed by minting tokens to the market.
    pub fn accrue(e: Env, owner: Address, delta: i128) {
        storage::get_admin(&e).require_auth();
        let supplied = (storage::get_supplied(&e, &owner) + delta).max(0);
        storage::set_supplied(&e, &owner, supplied);
    }

    /// Lend `amount` of the market's cash to `borrower`
    ///
    /// ### Panics
    /// * `InsufficientLiquidity` if the market holds less than `amount`
    pub fn borrow(e: Env, borrower: Address, amount: i128) {
        require_online(&e);
        borrower.require_auth();
        let token = TokenClient::new(&e, &storage::get_token(&e));
        if amount > token.balance(&e.current_contract_address()) {
            panic_with_error!(e, MarketError::InsufficientLiquidity);
        }
        token.transfer(&e.current_contract_address(), &borrower, &amount);
        storage::set_borrowed(&e, &borrower, storage::get_borrowed(&e, &borrower) + amount);
    }

    /// Return up to `amount` of `borrower`'s debt
    ///
    /// ### Returns
    /// The amount repaid
    pub fn repay(e: Env, borrower: Address, amount: i128) -> i128 {
        require_online(&e);
        borrower.require_auth();
        let repaid = amount.min(storage::get_borrowed(&e, &borrower)).max(0);
        if repaid == 0 {
            return 0;
        }
        TokenClient::new(&e, &storage::get_token(&e)).transfer(
            &borrower,
            &e.current_contract_address(),
            &repaid,
        );
        storage::set_borrowed(&e, &borrower, storage::get_borrowed(&e, &borrower) - repaid);
        repaid
    }

    /// Outstanding debt of `borrower`
    pub fn borrowed(e: Env, borrower: Address) -> i128 {
        storage::get_borrowed(&e, &borrower)
    }

    /// (Admin only) Take the market offline. Every supplier and borrower call
    /// fails with `Offline` until it is brought back.
    pub fn set_offline(e: Env, offline: bool) {
        storage::get_admin(&e).require_auth();
        storage::set_offline(&e, offline);
    }
}

fn require_online(e: &Env) {
    storage::extend_instance(e);
    if storage::is_offline(e) {
        panic_with_error!(e, MarketError::Offline);
    }
}

fn redeemable(e: &Env, owner: &Address) -> i128 {
    let cash = TokenClient::new(e, &storage::get_token(e)).balance(&e.current_contract_address());
    storage::get_supplied(e, owner).min(cash).max(0)
}
