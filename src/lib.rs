#![no_std]

mod adapters;
mod amount;
mod events;
mod executor;
mod extensions;
pub mod route;
mod router;
#[cfg(test)]
mod tests;
pub mod types;

use adapters::constant_product::ConstantProductAdapter;
use events::Events;
use extensions::env_extensions::EnvExtensions;
use router::{execute_route, quote_route};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Bytes, BytesN, Env, Vec};
use types::{config::RouterConfig, error::RouterError, receipt::HopQuote};

#[contract]
pub struct PathRouter;

#[contractimpl]
impl PathRouter {
    // Initialize contract
    //
    // # Arguments
    //
    // * `owner` - Account allowed to register pairs and withdraw stranded tokens
    // * `caller` - The only account allowed to execute swaps
    // * `recipient` - Receiver of the final route output
    // * `asset` - Token sold by the first hop of every route
    // * `fee_denominator` - Fee scale of the deployed pairs
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    // Panics if the fee denominator is zero
    pub fn init(
        e: Env,
        owner: Address,
        caller: Address,
        recipient: Address,
        asset: Address,
        fee_denominator: u32,
    ) {
        if e.is_initialized() {
            e.panic_with_error(RouterError::AlreadyInitialized);
        }
        owner.require_auth();
        if fee_denominator == 0 {
            e.panic_with_error(RouterError::InvalidConfig);
        }
        Events::new(&e).init(&owner, &recipient, &asset);
        e.set_config(&RouterConfig {
            owner,
            caller,
            recipient,
            asset,
            fee_denominator,
        });
        e.bump_instance();
    }

    // Register pair contract so routes can reference it
    //
    // # Arguments
    //
    // * `pair` - Pair contract address
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the owner
    //
    // # Returns
    //
    // * Truncated pair reference to be used in packed routes
    pub fn register_pair(e: Env, pair: Address) -> BytesN<20> {
        e.panic_if_not_owner();
        e.bump_instance();
        let pair_ref = e.pair_ref(&pair);
        e.set_pair(&pair_ref, &pair);
        Events::new(&e).register_pair(&pair_ref, &pair);
        pair_ref
    }

    // Derive the truncated pair reference without registering the pair
    pub fn pair_ref(e: Env, pair: Address) -> BytesN<20> {
        e.pair_ref(&pair)
    }

    // Retrieve deployment configuration
    pub fn config(e: Env) -> RouterConfig {
        e.require_config()
    }

    // Execute packed multi-hop route
    //
    // # Arguments
    //
    // * `caller` - Address of the configured caller account
    // * `route` - 10-byte selling amount followed by 23-byte hop blocks
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller doesn't match the configured caller
    // Panics if the route is malformed or references an unknown pair
    // Panics if any hop amount cannot be computed
    // Panics if any pair or token call fails
    pub fn swap(e: Env, caller: Address, route: Bytes) {
        let config = e.require_config();
        if caller != config.caller {
            e.panic_with_error(RouterError::UnauthorizedCaller);
        }
        caller.require_auth();
        e.bump_instance();

        match execute_route(&e, &ConstantProductAdapter, &config, &route) {
            Ok(settlement) => Events::new(&e).swap(&caller, &settlement),
            Err(err) => {
                log!(&e, "route aborted", err as u32);
                e.panic_with_error(err);
            }
        }
    }

    // Simulate packed route against current pair reserves
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the route is malformed, references an unknown pair or cannot be computed
    //
    // # Returns
    //
    // * Per-hop assets and amounts
    pub fn quote(e: Env, route: Bytes) -> Vec<HopQuote> {
        let config = e.require_config();
        match quote_route(&e, &ConstantProductAdapter, config.fee_denominator, &route) {
            Ok(quotes) => quotes,
            Err(err) => e.panic_with_error(err),
        }
    }

    // Recover assets sent to the router by mistake
    //
    // Routes never leave a balance on the router since every hop pays the next pair directly.
    //
    // # Arguments
    //
    // * `to` - Receiver of the recovered assets
    // * `asset` - Asset to recover
    // * `amount` - Amount to recover
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the owner didn't authorize the call
    pub fn withdraw(e: Env, to: Address, asset: Address, amount: i128) {
        e.panic_if_not_owner();
        e.bump_instance();
        TokenClient::new(&e, &asset).transfer(&e.current_contract_address(), &to, &amount);
    }
}
