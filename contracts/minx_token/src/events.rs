use soroban_sdk::{symbol_short, Address, Env};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits a `transfer` event after balances move.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `value`
    ///
    /// `to` is `None` when the tokens left circulation (burns).
    pub fn transfer(env: &Env, from: &Address, to: Option<&Address>, value: i128) {
        env.events().publish((symbol_short!("transfer"), from.clone(), to.cloned()), value);
    }

    /// Emits an `approval` event carrying the allowance as it stands after
    /// the call, not the delta that was applied.
    ///
    /// Topics: `("approval", owner, spender)`
    /// Data:   `value`
    pub fn approval(env: &Env, owner: &Address, spender: &Address, value: i128) {
        env.events().publish((symbol_short!("approval"), owner.clone(), spender.clone()), value);
    }
}
