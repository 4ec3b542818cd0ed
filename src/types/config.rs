use soroban_sdk::{contracttype, Address, BytesN};

// Fixed deployment configuration
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RouterConfig {
    // Account allowed to register pairs and withdraw stranded tokens
    pub owner: Address,
    // The only account allowed to execute swaps
    pub caller: Address,
    // Receiver of the last hop output
    pub recipient: Address,
    // Token sold by the first hop
    pub asset: Address,
    // Fee scale shared with the deployed pairs
    pub fee_denominator: u32,
}

// Storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Pair(BytesN<20>),
}
