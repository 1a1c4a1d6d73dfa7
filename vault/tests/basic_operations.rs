//! Basic vault operations integration tests
//!
//! Tests core functionality: deposits, withdrawals, share calculations,
//! profit vesting through the strategy, and error conditions.

use mock_lending_market::{MockLendingMarket, MockLendingMarketClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Error,
};
use strategy::{testutils::create_strategy, StrategyClient, StrategyError, VESTING_WINDOW_SECONDS};
use vault::{VaultContract, VaultContractClient};

const SCALAR_7: i128 = 10_000_000;

// ================================
// Test Setup Utilities
// ================================

struct Setup<'a> {
    env: Env,
    user1: Address,
    user2: Address,
    borrower: Address,
    token: TokenClient<'a>,
    token_admin: StellarAssetClient<'a>,
    market: MockLendingMarketClient<'a>,
    strategy: StrategyClient<'a>,
    vault: VaultContractClient<'a>,
}

fn setup_vault<'a>() -> Setup<'a> {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    env.ledger().set_min_temp_entry_ttl(17280);
    env.ledger().set_min_persistent_entry_ttl(2073600);
    env.ledger().set_timestamp(1_700_000_000);

    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let borrower = Address::generate(&env);

    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let market_address = env.register(MockLendingMarket, (admin.clone(), token.clone()));
    let vault_address = env.register(VaultContract, (token.clone(), admin.clone()));
    let strategy = create_strategy(
        &env,
        &admin,
        &vault_address,
        &token,
        &vec![&env, market_address.clone()],
        &vec![&env, 10_000u32],
    );
    let vault = VaultContractClient::new(&env, &vault_address);
    vault.set_strategy(&strategy.address);

    // Fund users
    let token_admin = StellarAssetClient::new(&env, &token);
    token_admin.mint(&user1, &(50_000 * SCALAR_7));
    token_admin.mint(&user2, &(30_000 * SCALAR_7));

    Setup {
        env: env.clone(),
        user1,
        user2,
        borrower,
        token: TokenClient::new(&env, &token),
        token_admin,
        market: MockLendingMarketClient::new(&env, &market_address),
        strategy,
        vault,
    }
}

impl Setup<'_> {
    /// Book interest in the market and let it vest fully
    fn earn(&self, amount: i128) {
        self.token_admin.mint(&self.market.address, &amount);
        self.market.accrue(&self.strategy.address, &amount);
        self.strategy.harvest();
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + VESTING_WINDOW_SECONDS);
    }
}

// ================================
// Basic Functionality Tests
// ================================

#[test]
fn test_vault_initialization_and_getters() {
    let s = setup_vault();

    assert_eq!(s.vault.token(), s.token.address);
    assert_eq!(s.vault.strategy(), s.strategy.address);
    assert_eq!(s.vault.total_shares(), 0);
    assert_eq!(s.vault.total_assets(), 0);
    assert_eq!(s.vault.price_per_share(), SCALAR_7);
    assert_eq!(s.vault.balance(&s.user1), 0);
}

#[test]
fn test_first_deposit_one_to_one_ratio() {
    let s = setup_vault();
    let deposit_amount = 1_000 * SCALAR_7;

    let shares = s.vault.deposit(&deposit_amount, &s.user1);

    assert_eq!(shares, deposit_amount);
    assert_eq!(s.vault.balance(&s.user1), deposit_amount);
    assert_eq!(s.vault.total_shares(), deposit_amount);
    assert_eq!(s.vault.total_assets(), deposit_amount);
    assert_eq!(s.vault.price_per_share(), SCALAR_7);
    assert_eq!(s.token.balance(&s.user1), 49_000 * SCALAR_7);
    // capital sits in the market, not the vault
    assert_eq!(s.token.balance(&s.vault.address), 0);
    assert_eq!(s.market.total_value(&s.strategy.address), deposit_amount);
}

#[test]
fn test_multiple_deposits_different_users() {
    let s = setup_vault();

    let shares1 = s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    let shares2 = s.vault.deposit(&(500 * SCALAR_7), &s.user2);

    assert_eq!(shares1, 1_000 * SCALAR_7);
    assert_eq!(shares2, 500 * SCALAR_7);
    assert_eq!(s.vault.total_shares(), 1_500 * SCALAR_7);
    assert_eq!(s.vault.total_assets(), 1_500 * SCALAR_7);
}

#[test]
fn test_deposit_after_vault_appreciation() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.earn(250 * SCALAR_7);

    assert_eq!(s.vault.total_assets(), 1_250 * SCALAR_7);
    assert_eq!(s.vault.price_per_share(), 1_2500000);

    // 1000 tokens at 1.25 per share
    let shares2 = s.vault.deposit(&(1_000 * SCALAR_7), &s.user2);
    assert_eq!(shares2, 800 * SCALAR_7);
    assert_eq!(s.vault.price_per_share(), 1_2500000);
}

#[test]
fn test_unvested_profit_does_not_move_price() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.token_admin.mint(&s.market.address, &(100 * SCALAR_7));
    s.market.accrue(&s.strategy.address, &(100 * SCALAR_7));

    s.strategy.harvest();
    assert_eq!(s.vault.price_per_share(), SCALAR_7);

    // late depositor cannot capture the locked profit
    let shares2 = s.vault.deposit(&(1_000 * SCALAR_7), &s.user2);
    assert_eq!(shares2, 1_000 * SCALAR_7);
}

#[test]
fn test_last_holder_takes_locked_profit() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.token_admin.mint(&s.market.address, &(100 * SCALAR_7));
    s.market.accrue(&s.strategy.address, &(100 * SCALAR_7));
    s.strategy.harvest();
    s.env
        .ledger()
        .set_timestamp(s.env.ledger().timestamp() + VESTING_WINDOW_SECONDS / 2);

    let tokens = s.vault.withdraw_max(&s.user1);

    assert_eq!(tokens, 1_100 * SCALAR_7);
    assert_eq!(s.token.balance(&s.user1), 50_100 * SCALAR_7);
    assert_eq!(s.strategy.unvested_profit(), 0);
    assert_eq!(s.strategy.state().total_managed_value, 0);

    // nothing is left behind for the next depositor
    let shares2 = s.vault.deposit(&(1_000 * SCALAR_7), &s.user2);
    assert_eq!(shares2, 1_000 * SCALAR_7);
    s.env
        .ledger()
        .set_timestamp(s.env.ledger().timestamp() + VESTING_WINDOW_SECONDS);
    assert_eq!(s.vault.price_per_share(), SCALAR_7);
    assert_eq!(s.vault.total_assets(), 1_000 * SCALAR_7);
}

#[test]
fn test_partial_withdraw_keeps_price() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user2);
    s.earn(200 * SCALAR_7);
    let price = s.vault.price_per_share();

    let tokens = s.vault.withdraw(&(400 * SCALAR_7), &s.user1);

    assert_eq!(tokens, 440 * SCALAR_7);
    assert_eq!(s.vault.balance(&s.user1), 600 * SCALAR_7);
    assert_eq!(s.vault.total_shares(), 1_600 * SCALAR_7);
    assert!((s.vault.price_per_share() - price).abs() <= 1);
}

#[test]
fn test_full_withdrawal_cycle() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.earn(100 * SCALAR_7);

    let tokens = s.vault.withdraw_max(&s.user1);

    assert_eq!(tokens, 1_100 * SCALAR_7);
    assert_eq!(s.token.balance(&s.user1), 50_100 * SCALAR_7);
    assert_eq!(s.vault.balance(&s.user1), 0);
    assert_eq!(s.vault.total_shares(), 0);
    assert_eq!(s.vault.total_assets(), 0);
    assert_eq!(s.vault.price_per_share(), SCALAR_7);
}

#[test]
fn test_loss_lowers_price_immediately() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.market.accrue(&s.strategy.address, &(-100 * SCALAR_7));

    s.strategy.harvest();

    assert_eq!(s.vault.total_assets(), 900 * SCALAR_7);
    assert_eq!(s.vault.price_per_share(), 0_9000000);
}

#[test]
fn test_withdraw_blocked_while_market_illiquid() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.market.borrow(&s.borrower, &(1_000 * SCALAR_7));

    let result = s.vault.try_withdraw_max(&s.user1);

    assert_eq!(
        result,
        Err(Ok(Error::from_contract_error(
            StrategyError::InsufficientLiquidity as u32
        )))
    );
    assert_eq!(s.vault.balance(&s.user1), 1_000 * SCALAR_7);
    assert_eq!(s.token.balance(&s.user1), 49_000 * SCALAR_7);

    s.market.repay(&s.borrower, &(1_000 * SCALAR_7));
    assert_eq!(s.vault.withdraw_max(&s.user1), 1_000 * SCALAR_7);
}

// ================================
// Error Condition Tests
// ================================

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_zero_deposit_fails() {
    let s = setup_vault();
    s.vault.deposit(&0, &s.user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_zero_withdraw_fails() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.vault.withdraw(&0, &s.user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4042)")]
fn test_withdraw_more_shares_than_held() {
    let s = setup_vault();
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user1);
    s.vault.deposit(&(1_000 * SCALAR_7), &s.user2);
    s.vault.withdraw(&(1_000 * SCALAR_7 + 1), &s.user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_withdraw_max_without_shares() {
    let s = setup_vault();
    s.vault.withdraw_max(&s.user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4048)")]
fn test_strategy_can_only_be_set_once() {
    let s = setup_vault();
    s.vault.set_strategy(&Address::generate(&s.env));
}

#[test]
#[should_panic(expected = "Error(Contract, #4049)")]
fn test_deposit_before_strategy_is_set() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let vault_address = env.register(VaultContract, (token.clone(), admin));
    StellarAssetClient::new(&env, &token).mint(&user, &(10 * SCALAR_7));

    VaultContractClient::new(&env, &vault_address).deposit(&(10 * SCALAR_7), &user);
}

// ================================
// Edge Case Tests
// ================================

#[test]
fn test_minimal_amounts() {
    let s = setup_vault();
    let shares = s.vault.deposit(&1, &s.user1);
    assert_eq!(shares, 1);
    assert_eq!(s.vault.withdraw_max(&s.user1), 1);
}

#[test]
fn test_large_amounts() {
    let s = setup_vault();
    let large = 1_000_000_000 * SCALAR_7;
    s.token_admin.mint(&s.user1, &large);

    let shares = s.vault.deposit(&large, &s.user1);

    assert_eq!(shares, large);
    assert_eq!(s.vault.total_assets(), large);
}
