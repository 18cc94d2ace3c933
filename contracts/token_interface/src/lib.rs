#![no_std]

use soroban_sdk::{contractclient, Address, Env, String};

/// Ledger interface of the MINX token.
/// Contracts that hold, spend or burn MINX on behalf of an owner call the
/// token through the generated `TokenClient`. Failed preconditions trap the
/// calling invocation; use the `try_*` variants to observe the error instead.
#[contractclient(name = "TokenClient")]
pub trait TokenInterface {
    fn allowance(env: Env, owner: Address, spender: Address) -> i128;
    fn approve(env: Env, owner: Address, spender: Address, amount: i128);
    fn increase_allowance(env: Env, owner: Address, spender: Address, delta: i128) -> i128;
    fn decrease_allowance(env: Env, owner: Address, spender: Address, delta: i128) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn burn_from(env: Env, spender: Address, from: Address, amount: i128);
    fn decimals(env: Env) -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn total_supply(env: Env) -> i128;
}
