use soroban_sdk::{Bytes, Env, Vec};

use super::AMOUNT_SIZE;
use crate::types::{error::RouterError, hop::Hop};

const MAX_AMOUNT: i128 = (1i128 << (AMOUNT_SIZE * 8)) - 1;

// Pack the initial selling amount and hops into the route wire format
//
// # Errors
//
// MalformedRoute if there are no hops, the amount is outside 1..2^80,
// or a fee does not fit two bytes
pub fn encode_route(e: &Env, amount_in: i128, hops: &Vec<Hop>) -> Result<Bytes, RouterError> {
    if hops.is_empty() || amount_in <= 0 || amount_in > MAX_AMOUNT {
        return Err(RouterError::MalformedRoute);
    }
    let mut route = Bytes::new(e);
    let amount = (amount_in as u128).to_be_bytes();
    route.extend_from_slice(&amount[(16 - AMOUNT_SIZE) as usize..]);
    for hop in hops.iter() {
        let fee = u16::try_from(hop.fee).map_err(|_| RouterError::MalformedRoute)?;
        route.append(&hop.pair.clone().into());
        route.push_back(hop.direction as u8);
        route.extend_from_slice(&fee.to_be_bytes());
    }
    Ok(route)
}
