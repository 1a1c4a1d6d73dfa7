use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

const ADMIN: &str = "Admin";
const TOKEN: &str = "Token";
const OFFLINE: &str = "Offline";

#[derive(Clone)]
#[contracttype]
pub enum MarketDataKey {
    Supplied(Address), // value owed to a supplier, interest included
    Borrowed(Address), // outstanding debt of a borrower
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, ADMIN)).unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN), admin);
}

pub fn get_token(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, TOKEN)).unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN), token);
}

pub fn is_offline(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, OFFLINE))
        .unwrap_or(false)
}

pub fn set_offline(e: &Env, offline: bool) {
    e.storage().instance().set(&Symbol::new(e, OFFLINE), &offline);
}

fn get_balance(e: &Env, key: &MarketDataKey) -> i128 {
    match e.storage().persistent().get::<MarketDataKey, i128>(key) {
        Some(amount) => {
            e.storage()
                .persistent()
                .extend_ttl(key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
            amount
        }
        None => 0,
    }
}

fn set_balance(e: &Env, key: &MarketDataKey, amount: i128) {
    e.storage().persistent().set(key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

pub fn get_supplied(e: &Env, supplier: &Address) -> i128 {
    get_balance(e, &MarketDataKey::Supplied(supplier.clone()))
}

pub fn set_supplied(e: &Env, supplier: &Address, amount: i128) {
    set_balance(e, &MarketDataKey::Supplied(supplier.clone()), amount);
}

pub fn get_borrowed(e: &Env, borrower: &Address) -> i128 {
    get_balance(e, &MarketDataKey::Borrowed(borrower.clone()))
}

pub fn set_borrowed(e: &Env, borrower: &Address, amount: i128) {
    set_balance(e, &MarketDataKey::Borrowed(borrower.clone()), amount);
}
