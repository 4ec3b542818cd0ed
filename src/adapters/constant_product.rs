use soroban_sdk::{contractclient, token::TokenClient, Address, Env, Error};

use super::adapter::PairAdapter;
use crate::types::error::RouterError;

#[contractclient(name = "PairClient")]
#[allow(dead_code)]
pub trait ConstantProductPairTrait {
    fn token_0(e: Env) -> Address;
    fn token_1(e: Env) -> Address;
    fn get_reserves(e: Env) -> (i128, i128);
    fn swap(e: Env, amount_0_out: i128, amount_1_out: i128, to: Address) -> Result<(), Error>;
}

// Adapter for x·y=k pairs that expect the input to be transferred before `swap`
pub struct ConstantProductAdapter;

impl PairAdapter for ConstantProductAdapter {
    fn reserves(&self, e: &Env, pair: &Address) -> Result<(i128, i128), RouterError> {
        match PairClient::new(e, pair).try_get_reserves() {
            Ok(Ok(reserves)) => Ok(reserves),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }

    fn tokens(&self, e: &Env, pair: &Address) -> Result<(Address, Address), RouterError> {
        let client = PairClient::new(e, pair);
        match (client.try_token_0(), client.try_token_1()) {
            (Ok(Ok(token_0)), Ok(Ok(token_1))) => Ok((token_0, token_1)),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }

    fn deposit(
        &self,
        e: &Env,
        asset: &Address,
        from: &Address,
        pair: &Address,
        amount: i128,
    ) -> Result<(), RouterError> {
        let router = e.current_contract_address();
        match TokenClient::new(e, asset).try_transfer_from(&router, from, pair, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }

    fn swap(
        &self,
        e: &Env,
        pair: &Address,
        amount_0_out: i128,
        amount_1_out: i128,
        to: &Address,
    ) -> Result<(), RouterError> {
        match PairClient::new(e, pair).try_swap(&amount_0_out, &amount_1_out, to) {
            Ok(Ok(())) => Ok(()),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }
}
