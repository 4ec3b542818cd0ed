extern crate std;
use core::cell::RefCell;
use std::vec::Vec as StdVec;

use crate::adapters::adapter::PairAdapter;
use crate::extensions::env_extensions::EnvExtensions;
use crate::router::{execute_route, quote_route};
use crate::tests::route_test_context::{setup, RouteTestContext, FEE_DENOMINATOR};
use crate::types::{error::RouterError, hop::Hop, receipt::Settlement};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

#[derive(Clone, Debug, PartialEq)]
enum Effect {
    Deposit {
        asset: Address,
        from: Address,
        pair: Address,
        amount: i128,
    },
    Swap {
        pair: Address,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
    },
}

// In-memory pair collaborator that records every state-mutating request
struct RecordingAdapter {
    pairs: StdVec<(Address, (i128, i128))>,
    effects: RefCell<StdVec<Effect>>,
    // 1-based index of the state-mutating call to reject
    fail_on: Option<usize>,
}

impl RecordingAdapter {
    fn new(pairs: StdVec<(Address, (i128, i128))>, fail_on: Option<usize>) -> Self {
        RecordingAdapter {
            pairs,
            effects: RefCell::new(StdVec::new()),
            fail_on,
        }
    }

    fn record(&self, effect: Effect) -> Result<(), RouterError> {
        let mut effects = self.effects.borrow_mut();
        if self.fail_on == Some(effects.len() + 1) {
            return Err(RouterError::ExternalCallFailure);
        }
        effects.push(effect);
        Ok(())
    }

    fn effects(&self) -> StdVec<Effect> {
        self.effects.borrow().clone()
    }
}

impl PairAdapter for RecordingAdapter {
    fn reserves(&self, _e: &Env, pair: &Address) -> Result<(i128, i128), RouterError> {
        self.pairs
            .iter()
            .find(|(address, _)| address == pair)
            .map(|(_, reserves)| *reserves)
            .ok_or(RouterError::ExternalCallFailure)
    }

    fn tokens(&self, _e: &Env, pair: &Address) -> Result<(Address, Address), RouterError> {
        //pair address doubles as both slot assets, enough for quoting
        Ok((pair.clone(), pair.clone()))
    }

    fn deposit(
        &self,
        _e: &Env,
        asset: &Address,
        from: &Address,
        pair: &Address,
        amount: i128,
    ) -> Result<(), RouterError> {
        self.record(Effect::Deposit {
            asset: asset.clone(),
            from: from.clone(),
            pair: pair.clone(),
            amount,
        })
    }

    fn swap(
        &self,
        _e: &Env,
        pair: &Address,
        amount_0_out: i128,
        amount_1_out: i128,
        to: &Address,
    ) -> Result<(), RouterError> {
        self.record(Effect::Swap {
            pair: pair.clone(),
            amount_0_out,
            amount_1_out,
            to: to.clone(),
        })
    }
}

struct TwoPairs {
    ctx: RouteTestContext<'static>,
    first: Address,
    second: Address,
}

fn two_pairs() -> TwoPairs {
    let ctx = setup();
    let first = Address::generate(&ctx.env);
    let second = Address::generate(&ctx.env);
    ctx.router_client.register_pair(&first);
    ctx.router_client.register_pair(&second);
    TwoPairs { ctx, first, second }
}

fn pair_reserves(pairs: &TwoPairs) -> StdVec<(Address, (i128, i128))> {
    std::vec![
        (pairs.first.clone(), (1_000_000, 500_000)),
        (pairs.second.clone(), (2_000_000, 300_000)),
    ]
}

fn two_hop_route(pairs: &TwoPairs) -> soroban_sdk::Bytes {
    let ctx = &pairs.ctx;
    ctx.route(1000, [ctx.hop(&pairs.first, true, 30), ctx.hop(&pairs.second, false, 25)])
}

#[test]
fn forward_output_into_next_pair() {
    let pairs = two_pairs();
    let ctx = &pairs.ctx;
    let adapter = RecordingAdapter::new(pair_reserves(&pairs), None);
    let route = two_hop_route(&pairs);

    let settlement = ctx.env.as_contract(&ctx.router, || {
        execute_route(&ctx.env, &adapter, &ctx.env.require_config(), &route)
    });
    assert_eq!(
        settlement,
        Ok(Settlement {
            amount_in: 1000,
            amount_out: 3306,
            hops: 2,
        })
    );
    assert_eq!(
        adapter.effects(),
        std::vec![
            Effect::Deposit {
                asset: ctx.weth.clone(),
                from: ctx.caller.clone(),
                pair: pairs.first.clone(),
                amount: 1000,
            },
            Effect::Swap {
                pair: pairs.first.clone(),
                amount_0_out: 0,
                amount_1_out: 498,
                to: pairs.second.clone(),
            },
            Effect::Swap {
                pair: pairs.second.clone(),
                amount_0_out: 3306,
                amount_1_out: 0,
                to: ctx.recipient.clone(),
            },
        ]
    );
}

#[test]
fn stop_at_first_failed_call() {
    let pairs = two_pairs();
    let ctx = &pairs.ctx;
    //deposit and first hop pass, second hop swap fails
    let adapter = RecordingAdapter::new(pair_reserves(&pairs), Some(3));
    let route = two_hop_route(&pairs);

    let result = ctx.env.as_contract(&ctx.router, || {
        execute_route(&ctx.env, &adapter, &ctx.env.require_config(), &route)
    });
    assert_eq!(result, Err(RouterError::ExternalCallFailure));
    assert_eq!(adapter.effects().len(), 2);
}

#[test]
fn failed_deposit_skips_all_hops() {
    let pairs = two_pairs();
    let ctx = &pairs.ctx;
    let adapter = RecordingAdapter::new(pair_reserves(&pairs), Some(1));
    let route = two_hop_route(&pairs);

    let result = ctx.env.as_contract(&ctx.router, || {
        execute_route(&ctx.env, &adapter, &ctx.env.require_config(), &route)
    });
    assert_eq!(result, Err(RouterError::ExternalCallFailure));
    assert!(adapter.effects().is_empty());
}

#[test]
fn unknown_pair_aborts_before_funding() {
    let pairs = two_pairs();
    let ctx = &pairs.ctx;
    let adapter = RecordingAdapter::new(pair_reserves(&pairs), None);
    let unknown = Hop {
        pair: BytesN::from_array(&ctx.env, &[7; 20]),
        direction: true,
        fee: 30,
    };
    let route = ctx.route(1000, [unknown, ctx.hop(&pairs.second, false, 25)]);

    let result = ctx.env.as_contract(&ctx.router, || {
        execute_route(&ctx.env, &adapter, &ctx.env.require_config(), &route)
    });
    assert_eq!(result, Err(RouterError::UnknownPair));
    assert!(adapter.effects().is_empty());
}

#[test]
fn quote_chains_amounts_without_effects() {
    let pairs = two_pairs();
    let ctx = &pairs.ctx;
    let adapter = RecordingAdapter::new(pair_reserves(&pairs), None);
    let route = two_hop_route(&pairs);

    let quotes = ctx.env.as_contract(&ctx.router, || {
        quote_route(&ctx.env, &adapter, FEE_DENOMINATOR, &route)
    })
    .unwrap();
    assert_eq!(quotes.len(), 2);
    let first = quotes.get(0).unwrap();
    let second = quotes.get(1).unwrap();
    assert_eq!((first.amount_in, first.amount_out), (1000, 498));
    assert_eq!((second.amount_in, second.amount_out), (498, 3306));
    assert!(adapter.effects().is_empty());
}
