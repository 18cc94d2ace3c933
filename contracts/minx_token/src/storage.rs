use soroban_sdk::{contracttype, Address, Env};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers

const INSTANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS - DAY_IN_LEDGERS;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

const ENTRY_LIFETIME_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS - DAY_IN_LEDGERS;
const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Balance(Address),
    Allowance(AllowanceKey),
    TotalSupply,
    Deployer,
}

pub fn has_deployer(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Deployer)
}

pub fn set_deployer(env: &Env, deployer: &Address) {
    env.storage().instance().set(&DataKey::Deployer, deployer);
}

pub fn write_metadata(env: &Env, metadata: TokenMetadata) {
    TokenUtils::new(env).metadata().set_metadata(&metadata);
}

/// Metadata is written once by `initialize`; `None` means the contract was
/// never initialized.
pub fn read_metadata(env: &Env) -> Option<TokenMetadata> {
    if !has_deployer(env) {
        return None;
    }
    Some(TokenUtils::new(env).metadata().get_metadata())
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    read_entry(env, &DataKey::Balance(id.clone()))
}

/// Zero balances are removed rather than stored.
pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    write_entry(env, &DataKey::Balance(id.clone()), amount);
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    read_entry(env, &allowance_key(owner, spender))
}

/// Zero allowances are removed rather than stored.
pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    write_entry(env, &allowance_key(owner, spender), amount);
}

/// Bumps the instance entry (supply, deployer, metadata) back to a week once
/// it has less than six days left.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn allowance_key(owner: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey { owner: owner.clone(), spender: spender.clone() })
}

fn read_entry(env: &Env, key: &DataKey) -> i128 {
    let persistent = env.storage().persistent();
    match persistent.get::<DataKey, i128>(key) {
        Some(amount) => {
            persistent.extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
            amount
        }
        None => 0,
    }
}

fn write_entry(env: &Env, key: &DataKey, amount: i128) {
    let persistent = env.storage().persistent();
    if amount == 0 {
        persistent.remove(key);
        return;
    }
    persistent.set(key, &amount);
    persistent.extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}
