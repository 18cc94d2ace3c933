//! Balance, allowance and supply transitions.
//!
//! Every operation validates all of its preconditions against a snapshot of
//! the affected entries before the first write, so a rejected call never
//! leaves a partial update behind. The host rolls back the whole invocation
//! on `Err` as well, events included.
//!
//! Authorization is the caller's job (`lib.rs`); nothing here calls
//! `require_auth`.

use soroban_sdk::{log, Address, Env};

use crate::{errors::TokenError, events::TokenEvents, storage};

pub fn ensure_nonnegative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    ensure_nonnegative(amount)?;
    let (from_balance, to_balance) = moved_balances(env, from, to, amount)?;

    commit_move(env, from, to, from_balance, to_balance);
    TokenEvents::transfer(env, from, Some(to), amount);
    Ok(())
}

/// Delegated transfer. The allowance event is published before the transfer
/// event and always carries the remaining allowance, zero included.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    ensure_nonnegative(amount)?;
    let allowance = spent_allowance(env, from, spender, amount)?;
    let (from_balance, to_balance) = moved_balances(env, from, to, amount)?;

    storage::write_allowance(env, from, spender, allowance);
    TokenEvents::approval(env, from, spender, allowance);

    commit_move(env, from, to, from_balance, to_balance);
    TokenEvents::transfer(env, from, Some(to), amount);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    ensure_nonnegative(amount)?;
    let (balance, supply) = burned_balances(env, from, amount)?;

    commit_burn(env, from, balance, supply, amount);
    Ok(())
}

pub fn burn_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    ensure_nonnegative(amount)?;
    let allowance = spent_allowance(env, from, spender, amount)?;
    let (balance, supply) = burned_balances(env, from, amount)?;

    storage::write_allowance(env, from, spender, allowance);
    TokenEvents::approval(env, from, spender, allowance);

    commit_burn(env, from, balance, supply, amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    ensure_nonnegative(amount)?;
    storage::write_allowance(env, owner, spender, amount);
    TokenEvents::approval(env, owner, spender, amount);
    Ok(())
}

/// Returns the new allowance.
pub fn increase_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    delta: i128,
) -> Result<i128, TokenError> {
    ensure_nonnegative(delta)?;
    let allowance = storage::read_allowance(env, owner, spender)
        .checked_add(delta)
        .ok_or(TokenError::Overflow)?;

    storage::write_allowance(env, owner, spender, allowance);
    TokenEvents::approval(env, owner, spender, allowance);
    Ok(allowance)
}

/// Returns the new allowance.
pub fn decrease_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    delta: i128,
) -> Result<i128, TokenError> {
    ensure_nonnegative(delta)?;
    let allowance = spent_allowance(env, owner, spender, delta)?;

    storage::write_allowance(env, owner, spender, allowance);
    TokenEvents::approval(env, owner, spender, allowance);
    Ok(allowance)
}

/// Allowance left after `spender` uses `amount` of it.
fn spent_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    let allowance = storage::read_allowance(env, owner, spender);
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(allowance - amount)
}

/// Balance left after debiting `amount`.
fn debited_balance(env: &Env, id: &Address, amount: i128) -> Result<i128, TokenError> {
    let balance = storage::read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(balance - amount)
}

/// `(from, to)` balances after the move, computed against current state.
/// With `from == to` both values describe the same entry and the second
/// write in `commit_move` leaves it unchanged.
fn moved_balances(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(i128, i128), TokenError> {
    let from_balance = debited_balance(env, from, amount)?;
    let to_balance = if from == to {
        from_balance + amount
    } else {
        storage::read_balance(env, to).checked_add(amount).ok_or(TokenError::Overflow)?
    };
    Ok((from_balance, to_balance))
}

fn commit_move(env: &Env, from: &Address, to: &Address, from_balance: i128, to_balance: i128) {
    storage::write_balance(env, from, from_balance);
    storage::write_balance(env, to, to_balance);
}

/// `(holder balance, total supply)` after burning `amount`.
fn burned_balances(env: &Env, from: &Address, amount: i128) -> Result<(i128, i128), TokenError> {
    let balance = debited_balance(env, from, amount)?;
    let supply = storage::read_total_supply(env)
        .checked_sub(amount)
        .filter(|supply| *supply >= 0)
        .ok_or(TokenError::Overflow)?;
    Ok((balance, supply))
}

fn commit_burn(env: &Env, from: &Address, balance: i128, supply: i128, amount: i128) {
    storage::write_balance(env, from, balance);
    storage::write_total_supply(env, supply);
    log!(env, "burned", from.clone(), amount, supply);
    TokenEvents::transfer(env, from, None, amount);
}
