use mock_lending_market::{MockLendingMarket, MockLendingMarketClient};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Vec as SorobanVec};
use strategy::testutils::create_strategy;
use strategy::StrategyClient;
use vault::VaultClient;

pub const MARKET_COUNT: usize = 4;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub users: Vec<Address>,
    pub borrower: Address,
    pub vault: VaultClient<'a>,
    pub strategy: StrategyClient<'a>,
    pub markets: Vec<MockLendingMarketClient<'a>>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl TestFixture<'_> {
    /// Deploy a token, four lending markets, the vault and a strategy over
    /// the markets with the given starting ratios
    pub fn create<'a>(ratios: [u32; MARKET_COUNT]) -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();
        e.ledger().set_timestamp(1_700_000_000);

        let admin = Address::generate(&e);
        let borrower = Address::generate(&e);

        let token_id = e.register_stellar_asset_contract_v2(admin.clone()).address();

        let mut markets = vec![];
        let mut market_ids = SorobanVec::new(&e);
        for _ in 0..MARKET_COUNT {
            let market_id = e.register(MockLendingMarket {}, (admin.clone(), token_id.clone()));
            market_ids.push_back(market_id.clone());
            markets.push(MockLendingMarketClient::new(&e, &market_id));
        }

        let vault_id = e.register(vault::VaultContract {}, (token_id.clone(), admin.clone()));
        let vault_client = VaultClient::new(&e, &vault_id);

        let strategy_client = create_strategy(
            &e,
            &admin,
            &vault_id,
            &token_id,
            &market_ids,
            &SorobanVec::from_array(&e, ratios),
        );
        vault_client.set_strategy(&strategy_client.address);

        TestFixture {
            env: e.clone(),
            admin,
            users: vec![],
            borrower,
            vault: vault_client,
            strategy: strategy_client,
            markets,
            token: TokenClient::new(&e, &token_id),
            token_admin: StellarAssetClient::new(&e, &token_id),
        }
    }

    /// Create a funded user and remember it in `users`
    pub fn create_user(&mut self, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &balance);
        self.users.push(user.clone());
        user
    }

    pub fn set_ratios(&self, ratios: [u32; MARKET_COUNT]) {
        self.strategy
            .set_allocation_ratios(&SorobanVec::from_array(&self.env, ratios));
    }

    /********** Market Helpers ***********/

    /// Value the strategy holds in a market, lent out amounts included
    pub fn market_value(&self, index: usize) -> i128 {
        self.markets[index].total_value(&self.strategy.address)
    }

    /// Book interest (or bad debt if negative) for the strategy in a market.
    /// Interest is backed by tokens minted into the market.
    pub fn accrue(&self, index: usize, amount: i128) {
        let market = &self.markets[index];
        if amount > 0 {
            self.token_admin.mint(&market.address, &amount);
        }
        market.accrue(&self.strategy.address, &amount);
    }

    /// Grow every funded market by `rate` (SCALAR_7 precision)
    pub fn earn_yield(&self, rate: i128) {
        for index in 0..MARKET_COUNT {
            let value = self.market_value(index);
            if value > 0 {
                let interest = value.fixed_mul_floor(rate, crate::SCALAR_7).unwrap();
                self.accrue(index, interest);
            }
        }
    }

    /// Lend out every token a market holds, leaving it fully illiquid
    pub fn borrow_all(&self, index: usize) -> i128 {
        let market = &self.markets[index];
        let cash = self.token.balance(&market.address);
        if cash > 0 {
            market.borrow(&self.borrower, &cash);
        }
        cash
    }

    /// Return everything the borrower owes a market
    pub fn repay(&self, index: usize) -> i128 {
        let market = &self.markets[index];
        let owed = market.borrowed(&self.borrower);
        market.repay(&self.borrower, &owed)
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = li.timestamp.saturating_add(time);
        });
    }
}
