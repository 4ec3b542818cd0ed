use soroban_sdk::{Bytes, Env, Vec};

use crate::adapters::adapter::PairAdapter;
use crate::events::Events;
use crate::executor::HopExecutor;
use crate::extensions::env_extensions::EnvExtensions;
use crate::route::decoder::decode_route;
use crate::types::{
    config::RouterConfig,
    error::RouterError,
    hop::{Hop, PairHop},
    receipt::{HopQuote, Settlement},
};

// Execute the packed route hop by hop
//
// The first hop input is pulled from the configured caller, each hop output
// is delivered straight into the next pair, and the last one goes to the
// configured recipient. Any error leaves partial effects for the host to
// roll back together with the whole invocation.
//
// # Arguments
//
// * `adapter` - Pair and token operations
// * `config` - Deployment configuration
// * `route` - Packed route bytes
//
// # Returns
//
// * Initial amount, final delivered amount and the number of executed hops
pub fn execute_route<A: PairAdapter>(
    e: &Env,
    adapter: &A,
    config: &RouterConfig,
    route: &Bytes,
) -> Result<Settlement, RouterError> {
    let (amount_in, mut hops) = decode_route(route)?;
    let executor = HopExecutor::new(e, adapter, config.fee_denominator);
    let events = Events::new(e);

    let mut current = match hops.next() {
        Some(hop) => resolve_hop(e, hop)?,
        None => return Err(RouterError::MalformedRoute),
    };
    executor.fund(&config.asset, &config.caller, &current, amount_in)?;

    let mut amount = amount_in;
    let mut executed = 0u32;
    loop {
        let next = hops.next().map(|hop| resolve_hop(e, hop)).transpose()?;
        let to = match &next {
            Some(next) => next.pair.clone(),
            None => config.recipient.clone(),
        };
        let receipt = executor.execute(&current, amount, &to)?;
        events.hop(&receipt);
        //hop output becomes the next hop input unmodified
        amount = receipt.amount_out;
        executed += 1;
        match next {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(Settlement {
        amount_in,
        amount_out: amount,
        hops: executed,
    })
}

// Simulate the packed route against current reserves
pub fn quote_route<A: PairAdapter>(
    e: &Env,
    adapter: &A,
    fee_denominator: u32,
    route: &Bytes,
) -> Result<Vec<HopQuote>, RouterError> {
    let (mut amount, hops) = decode_route(route)?;
    let executor = HopExecutor::new(e, adapter, fee_denominator);
    let mut quotes = Vec::new(e);
    for hop in hops {
        let quote = executor.quote(&resolve_hop(e, hop)?, amount)?;
        amount = quote.amount_out;
        quotes.push_back(quote);
    }
    Ok(quotes)
}

// Map the truncated pair reference to the registered pair contract
fn resolve_hop(e: &Env, hop: Hop) -> Result<PairHop, RouterError> {
    let pair = e.get_pair(&hop.pair).ok_or(RouterError::UnknownPair)?;
    Ok(PairHop {
        pair,
        direction: hop.direction,
        fee: hop.fee,
    })
}
