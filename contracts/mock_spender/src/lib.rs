#![no_std]

use minx_token_interface::TokenClient;
use soroban_sdk::{contract, contractimpl, Address, Env};

/// A contract acting as a delegated spender. It only ever uses the allowance
/// an owner granted to this contract's own address.
#[contract]
pub struct MockSpender;

#[contractimpl]
impl MockSpender {
    /// Moves `amount` of `from`'s tokens to `to` out of this contract's allowance.
    pub fn spend(env: Env, token: Address, from: Address, to: Address, amount: i128) {
        let me = env.current_contract_address();
        TokenClient::new(&env, &token).transfer_from(&me, &from, &to, &amount);
    }

    /// Burns `amount` of `from`'s tokens out of this contract's allowance.
    pub fn spend_and_burn(env: Env, token: Address, from: Address, amount: i128) {
        let me = env.current_contract_address();
        TokenClient::new(&env, &token).burn_from(&me, &from, &amount);
    }

    /// Remaining allowance `from` granted to this contract.
    pub fn remaining(env: Env, token: Address, from: Address) -> i128 {
        let me = env.current_contract_address();
        TokenClient::new(&env, &token).allowance(&from, &me)
    }
}
