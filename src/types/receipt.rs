use soroban_sdk::{contracttype, Address};

// Simulated route leg returned by quotes
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct HopQuote {
    pub pair: Address,
    // Sold asset
    pub asset_in: Address,
    // Bought asset
    pub asset_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}

// Executed route leg
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct HopReceipt {
    pub pair: Address,
    // Address that received the hop output
    pub to: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}

// Result of a settled route
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub amount_in: i128,
    pub amount_out: i128,
    pub hops: u32,
}
