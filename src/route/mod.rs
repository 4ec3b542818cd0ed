pub mod decoder;
pub mod encoder;

// Big-endian initial selling amount
pub const AMOUNT_SIZE: u32 = 10;
// Truncated pair reference
pub const PAIR_SIZE: u32 = 20;
// Pair reference + direction flag + big-endian fee
pub const HOP_SIZE: u32 = PAIR_SIZE + 1 + 2;
