//! The deployment walk-through run as one ordered sequence: each step starts
//! from the state the previous step left behind.

use soroban_sdk::{testutils::Address as _, vec, Address, String};

use super::{
    approval_event, assert_supply_matches, last_events, setup, transfer_event, UNIT,
};

#[test]
fn deployment_walkthrough() {
    let (env, client, deployer) = setup();
    let acct1 = Address::generate(&env);
    let acct2 = Address::generate(&env);
    let holders = [&deployer, &acct1, &acct2];

    // Metadata and initial distribution.
    assert_eq!(client.name(), String::from_str(&env, "InnovaMinex"));
    assert_eq!(client.symbol(), String::from_str(&env, "MINX"));
    assert_eq!(client.decimals(), 6);
    assert_eq!(client.total_supply(), 300_000_000_000_000);
    assert_eq!(client.balance(&deployer), 300_000_000_000_000);

    // Transfer 10 MINX to acct1.
    client.transfer(&deployer, &acct1, &(10 * UNIT));
    assert_eq!(
        last_events(&env, 1),
        vec![&env, transfer_event(&env, &client.address, &deployer, Some(&acct1), 10 * UNIT)]
    );
    assert_eq!(client.balance(&deployer), 299_999_990_000_000);
    assert_eq!(client.balance(&acct1), 10_000_000);
    assert_supply_matches(&client, &holders);

    // Approve acct1 for 10, then +5, then -3.
    client.approve(&deployer, &acct1, &(10 * UNIT));
    assert_eq!(client.allowance(&deployer, &acct1), 10_000_000);

    client.increase_allowance(&deployer, &acct1, &(5 * UNIT));
    assert_eq!(
        last_events(&env, 1),
        vec![&env, approval_event(&env, &client.address, &deployer, &acct1, 15 * UNIT)]
    );
    assert_eq!(client.allowance(&deployer, &acct1), 15_000_000);

    client.decrease_allowance(&deployer, &acct1, &(3 * UNIT));
    assert_eq!(
        last_events(&env, 1),
        vec![&env, approval_event(&env, &client.address, &deployer, &acct1, 12 * UNIT)]
    );
    assert_eq!(client.allowance(&deployer, &acct1), 12_000_000);

    // acct1 sends the whole remaining allowance from the deployer to acct2.
    let deployer_before = client.balance(&deployer);
    let acct2_before = client.balance(&acct2);
    client.transfer_from(&acct1, &deployer, &acct2, &(12 * UNIT));
    assert_eq!(
        last_events(&env, 2),
        vec![
            &env,
            approval_event(&env, &client.address, &deployer, &acct1, 0),
            transfer_event(&env, &client.address, &deployer, Some(&acct2), 12 * UNIT),
        ]
    );
    assert_eq!(client.allowance(&deployer, &acct1), 0);
    assert_eq!(client.balance(&deployer), deployer_before - 12 * UNIT);
    assert_eq!(client.balance(&acct2), acct2_before + 12 * UNIT);
    assert_supply_matches(&client, &holders);

    // Burn 10 MINX from the deployer.
    let deployer_before = client.balance(&deployer);
    client.burn(&deployer, &(10 * UNIT));
    assert_eq!(
        last_events(&env, 1),
        vec![&env, transfer_event(&env, &client.address, &deployer, None, 10 * UNIT)]
    );
    assert_eq!(client.balance(&deployer), deployer_before - 10 * UNIT);
    assert_eq!(client.total_supply(), 300_000_000_000_000 - 10 * UNIT);
    assert_supply_matches(&client, &holders);
}
