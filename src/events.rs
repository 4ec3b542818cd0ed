use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::types::receipt::{HopReceipt, Settlement};

// Router event publisher
pub struct Events(Env);

impl Events {
    pub fn new(e: &Env) -> Self {
        Events(e.clone())
    }

    pub fn init(&self, owner: &Address, recipient: &Address, asset: &Address) {
        self.0.events().publish(
            (symbol_short!("init"), owner.clone()),
            (recipient.clone(), asset.clone()),
        );
    }

    pub fn register_pair(&self, pair_ref: &BytesN<20>, pair: &Address) {
        self.0
            .events()
            .publish((symbol_short!("pair"), pair_ref.clone()), pair.clone());
    }

    pub fn hop(&self, receipt: &HopReceipt) {
        self.0.events().publish(
            (symbol_short!("hop"), receipt.pair.clone()),
            (receipt.amount_in, receipt.amount_out, receipt.to.clone()),
        );
    }

    pub fn swap(&self, caller: &Address, settlement: &Settlement) {
        self.0.events().publish(
            (symbol_short!("swap"), caller.clone()),
            (settlement.amount_in, settlement.amount_out, settlement.hops),
        );
    }
}
