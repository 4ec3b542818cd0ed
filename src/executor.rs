use soroban_sdk::{Address, Env};

use crate::adapters::adapter::PairAdapter;
use crate::amount::calc_amount_out;
use crate::types::{
    error::RouterError,
    hop::PairHop,
    receipt::{HopQuote, HopReceipt},
};

// Executes single route legs against pair contracts
//
// Every hop follows the push-then-pull order: the input must already sit on
// the pair balance when its output is requested. Only the first hop input is
// pushed explicitly, later inputs arrive as the previous hop output.
pub struct HopExecutor<'a, A: PairAdapter> {
    e: &'a Env,
    adapter: &'a A,
    fee_denominator: u32,
}

impl<'a, A: PairAdapter> HopExecutor<'a, A> {
    pub fn new(e: &'a Env, adapter: &'a A, fee_denominator: u32) -> Self {
        HopExecutor {
            e,
            adapter,
            fee_denominator,
        }
    }

    // Push the first hop input from the caller balance into the pair
    pub fn fund(
        &self,
        asset: &Address,
        from: &Address,
        hop: &PairHop,
        amount: i128,
    ) -> Result<(), RouterError> {
        self.adapter
            .deposit(self.e, asset, from, &hop.pair, amount)
    }

    // Request the hop output and deliver it to `to`
    //
    // # Arguments
    //
    // * `hop` - Resolved route leg
    // * `amount_in` - Amount already deposited into the pair
    // * `to` - Next pair address or the route recipient
    pub fn execute(
        &self,
        hop: &PairHop,
        amount_in: i128,
        to: &Address,
    ) -> Result<HopReceipt, RouterError> {
        let amount_out = self.amount_out(hop, amount_in)?;
        //direction selects the slot being sold, the output comes from the other one
        let (amount_0_out, amount_1_out) = if hop.direction {
            (0, amount_out)
        } else {
            (amount_out, 0)
        };
        self.adapter
            .swap(self.e, &hop.pair, amount_0_out, amount_1_out, to)?;
        Ok(HopReceipt {
            pair: hop.pair.clone(),
            to: to.clone(),
            amount_in,
            amount_out,
        })
    }

    // Simulate the hop against current reserves without touching balances
    pub fn quote(&self, hop: &PairHop, amount_in: i128) -> Result<HopQuote, RouterError> {
        let amount_out = self.amount_out(hop, amount_in)?;
        let (token_0, token_1) = self.adapter.tokens(self.e, &hop.pair)?;
        let (asset_in, asset_out) = if hop.direction {
            (token_0, token_1)
        } else {
            (token_1, token_0)
        };
        Ok(HopQuote {
            pair: hop.pair.clone(),
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        })
    }

    fn amount_out(&self, hop: &PairHop, amount_in: i128) -> Result<i128, RouterError> {
        let (reserve_0, reserve_1) = self.adapter.reserves(self.e, &hop.pair)?;
        let (reserve_in, reserve_out) = if hop.direction {
            (reserve_0, reserve_1)
        } else {
            (reserve_1, reserve_0)
        };
        calc_amount_out(
            self.e,
            amount_in,
            reserve_in,
            reserve_out,
            hop.fee,
            self.fee_denominator,
        )
    }
}
