#![cfg(test)]

// ---------------------------------------------------------------------------
// MINX token test suite
//
// Structure
// ─────────
// events     — TokenEvents helpers in isolation (stub contract, no ledger)
// deployment — initialization, metadata reads, double-init guard
// transfer   — direct transfers and their failure modes
// allowance  — approve / increase / decrease
// delegated  — transfer_from and burn_from, account and contract spenders
// burn       — supply reduction
// rollback   — rejected calls leave storage and the event log untouched
// lifetime   — reads and writes keep the instance entry alive
// scenario   — the full deployment walk-through, in order
// ---------------------------------------------------------------------------

mod scenario;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _},
    Address, Env, IntoVal, Val, Vec,
};

use crate::{MinxToken, MinxTokenClient};

/// One whole MINX in smallest units.
pub(crate) const UNIT: i128 = 1_000_000;

pub(crate) type ContractEvent = (Address, Vec<Val>, Val);

/// Registers the token and initializes it with the MINX deployment values.
/// Returns `(env, client, deployer)`; every auth is mocked.
pub(crate) fn setup<'a>() -> (Env, MinxTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, MinxToken);
    let client = MinxTokenClient::new(&env, &contract_id);
    let deployer = Address::generate(&env);
    client.initialize_default(&deployer);

    (env, client, deployer)
}

/// Asserts that the balances of `holders` add up to the total supply.
/// `holders` must list every account that has ever received tokens.
pub(crate) fn assert_supply_matches(client: &MinxTokenClient<'_>, holders: &[&Address]) {
    let sum: i128 = holders.iter().map(|holder| client.balance(holder)).sum();
    assert_eq!(sum, client.total_supply(), "sum of balances must equal total supply");
}

/// The last `n` contract events, oldest first.
pub(crate) fn last_events(env: &Env, n: u32) -> Vec<ContractEvent> {
    let all = env.events().all();
    assert!(all.len() >= n, "expected at least {} events, found {}", n, all.len());
    all.slice(all.len() - n..)
}

pub(crate) fn transfer_event(
    env: &Env,
    token: &Address,
    from: &Address,
    to: Option<&Address>,
    value: i128,
) -> ContractEvent {
    (
        token.clone(),
        (symbol_short!("transfer"), from.clone(), to.cloned()).into_val(env),
        value.into_val(env),
    )
}

pub(crate) fn approval_event(
    env: &Env,
    token: &Address,
    owner: &Address,
    spender: &Address,
    value: i128,
) -> ContractEvent {
    (
        token.clone(),
        (symbol_short!("approval"), owner.clone(), spender.clone()).into_val(env),
        value.into_val(env),
    )
}
