#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

pub mod config;
mod errors;
mod events;
mod ledger;
mod storage;

#[cfg(test)]
mod test;

pub use errors::TokenError;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

#[contract]
pub struct MinxToken;

#[contractimpl]
impl MinxToken {
    /// Stores the metadata and credits the whole `initial_supply` to
    /// `deployer`. Can only run once.
    pub fn initialize(
        env: Env,
        deployer: Address,
        decimals: u32,
        name: String,
        symbol: String,
        initial_supply: i128,
    ) -> Result<(), TokenError> {
        if storage::has_deployer(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        ledger::ensure_nonnegative(initial_supply)?;
        deployer.require_auth();

        storage::set_deployer(&env, &deployer);
        storage::write_metadata(&env, TokenMetadata { decimal: decimals, name, symbol });
        storage::write_total_supply(&env, initial_supply);
        storage::write_balance(&env, &deployer, initial_supply);
        storage::extend_instance_ttl(&env);

        log!(&env, "initialized", deployer, initial_supply);
        Ok(())
    }

    /// Initializes with the MINX deployment values from [`config`].
    pub fn initialize_default(env: Env, deployer: Address) -> Result<(), TokenError> {
        let name = String::from_str(&env, config::NAME);
        let symbol = String::from_str(&env, config::SYMBOL);
        Self::initialize(env, deployer, config::DECIMALS, name, symbol, config::INITIAL_SUPPLY)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::read_allowance(&env, &owner, &spender)
    }

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::approve(&env, &owner, &spender, amount)
    }

    /// Adds `delta` to the allowance and returns the new total.
    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<i128, TokenError> {
        owner.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::increase_allowance(&env, &owner, &spender, delta)
    }

    /// Subtracts `delta` from the allowance and returns the new total.
    /// Rejected when the allowance is smaller than `delta`.
    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<i128, TokenError> {
        owner.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::decrease_allowance(&env, &owner, &spender, delta)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::burn_from(&env, &spender, &from, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::read_total_supply(&env)
    }
}

fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    storage::extend_instance_ttl(env);
    storage::read_metadata(env).ok_or(TokenError::NotInitialized)
}
