use soroban_sdk::{Address, Env};

use crate::types::error::RouterError;

// Operations the router consumes from pair and token contracts
pub trait PairAdapter {
    // Current pair reserves in canonical slot order
    fn reserves(&self, e: &Env, pair: &Address) -> Result<(i128, i128), RouterError>;

    // Canonical slot order of the pair assets
    fn tokens(&self, e: &Env, pair: &Address) -> Result<(Address, Address), RouterError>;

    // Move `amount` of `asset` from `from` into the pair under the router allowance
    fn deposit(
        &self,
        e: &Env,
        asset: &Address,
        from: &Address,
        pair: &Address,
        amount: i128,
    ) -> Result<(), RouterError>;

    // Ask the pair to deliver the requested slot outputs to `to`
    fn swap(
        &self,
        e: &Env,
        pair: &Address,
        amount_0_out: i128,
        amount_1_out: i128,
        to: &Address,
    ) -> Result<(), RouterError>;
}
