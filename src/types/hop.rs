use soroban_sdk::{contracttype, Address, BytesN};

// Single route leg as it appears in the packed route
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Hop {
    // Truncated pair reference
    pub pair: BytesN<20>,
    // true - sell slot 0 and buy slot 1, false - the opposite
    pub direction: bool,
    // Pair fee, in fee denominator units
    pub fee: u32,
}

// Hop with the pair reference resolved to the pair contract
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairHop {
    pub pair: Address,
    pub direction: bool,
    pub fee: u32,
}
