use soroban_sdk::{Env, U256};

use crate::types::error::RouterError;

// Estimate amount_out for a constant-product pair charging `fee / fee_denominator` on input
//
// # Arguments
//
// * `amount_in` - Amount deposited into the pair
// * `reserve_in` - Pair reserve of the sold asset
// * `reserve_out` - Pair reserve of the bought asset
// * `fee` - Pair fee
// * `fee_denominator` - Fee scale used by the pair
//
// # Returns
//
// * floor(amount_in·(d-fee)·reserve_out / (reserve_in·d + amount_in·(d-fee)))
//
// # Errors
//
// DivisionByZero if reserve_in or fee_denominator is zero
// ArithmeticOverflow if any input is negative, fee exceeds the denominator,
// or the numerator cannot be represented in 256 bits
pub fn calc_amount_out(
    e: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee: u32,
    fee_denominator: u32,
) -> Result<i128, RouterError> {
    if amount_in < 0 || reserve_in < 0 || reserve_out < 0 {
        return Err(RouterError::ArithmeticOverflow);
    }
    if reserve_in == 0 || fee_denominator == 0 {
        return Err(RouterError::DivisionByZero);
    }
    let fee_factor = fee_denominator
        .checked_sub(fee)
        .ok_or(RouterError::ArithmeticOverflow)?;

    let amount_in = amount_in as u128;
    let reserve_in = reserve_in as u128;
    let reserve_out = reserve_out as u128;

    //effective_in < 2^160 and reserve_in·d < 2^160, so only the numerator can exceed 256 bits
    let effective_in = U256::from_u128(e, amount_in).mul(&U256::from_u32(e, fee_factor));
    let reserve_out_wide = U256::from_u128(e, reserve_out);
    if bit_len(amount_in) + bit_len(fee_factor as u128) + bit_len(reserve_out) > 256
        && reserve_out_wide > u256_max(e).div(&effective_in)
    {
        return Err(RouterError::ArithmeticOverflow);
    }

    let numerator = effective_in.mul(&reserve_out_wide);
    let denominator = U256::from_u128(e, reserve_in)
        .mul(&U256::from_u32(e, fee_denominator))
        .add(&effective_in);

    let amount_out = numerator
        .div(&denominator)
        .to_u128()
        .ok_or(RouterError::ArithmeticOverflow)?;
    i128::try_from(amount_out).map_err(|_| RouterError::ArithmeticOverflow)
}

fn u256_max(e: &Env) -> U256 {
    U256::from_parts(e, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

fn bit_len(value: u128) -> u32 {
    128 - value.leading_zeros()
}
