use soroban_sdk::{Bytes, BytesN};

use super::{AMOUNT_SIZE, HOP_SIZE, PAIR_SIZE};
use crate::types::{error::RouterError, hop::Hop};

// One-pass reader over the hop blocks of a validated route
pub struct RouteDecoder {
    data: Bytes,
    offset: u32,
}

// Validate the packed route layout and read the initial selling amount
//
// # Arguments
//
// * `route` - Packed route: 10-byte amount followed by 23-byte hop blocks
//
// # Returns
//
// * Initial selling amount and the hop reader
//
// # Errors
//
// MalformedRoute if the length is not 10 + 23·k (k ≥ 1) or the amount is zero
pub fn decode_route(route: &Bytes) -> Result<(i128, RouteDecoder), RouterError> {
    let len = route.len();
    if len < AMOUNT_SIZE + HOP_SIZE || (len - AMOUNT_SIZE) % HOP_SIZE != 0 {
        return Err(RouterError::MalformedRoute);
    }
    let mut amount = [0u8; 16];
    route
        .slice(0..AMOUNT_SIZE)
        .copy_into_slice(&mut amount[(16 - AMOUNT_SIZE) as usize..]);
    //80-bit value always fits i128
    let amount_in = u128::from_be_bytes(amount) as i128;
    if amount_in == 0 {
        return Err(RouterError::MalformedRoute);
    }
    Ok((
        amount_in,
        RouteDecoder {
            data: route.clone(),
            offset: AMOUNT_SIZE,
        },
    ))
}

impl RouteDecoder {
    // Number of hop blocks not consumed yet
    pub fn remaining(&self) -> u32 {
        (self.data.len() - self.offset) / HOP_SIZE
    }
}

impl Iterator for RouteDecoder {
    type Item = Hop;

    fn next(&mut self) -> Option<Hop> {
        if self.offset >= self.data.len() {
            return None;
        }
        let mut block = [0u8; HOP_SIZE as usize];
        self.data
            .slice(self.offset..self.offset + HOP_SIZE)
            .copy_into_slice(&mut block);
        self.offset += HOP_SIZE;

        let pair_size = PAIR_SIZE as usize;
        let mut pair = [0u8; PAIR_SIZE as usize];
        pair.copy_from_slice(&block[..pair_size]);
        Some(Hop {
            pair: BytesN::from_array(self.data.env(), &pair),
            direction: block[pair_size] != 0,
            fee: u16::from_be_bytes([block[pair_size + 1], block[pair_size + 2]]) as u32,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}
