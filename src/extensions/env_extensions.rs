use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env};

use crate::route::PAIR_SIZE;
use crate::types::{
    config::{DataKey, RouterConfig},
    error::RouterError,
};

pub trait EnvExtensions {
    fn get_config(&self) -> Option<RouterConfig>;

    fn set_config(&self, config: &RouterConfig);

    fn get_pair(&self, pair_ref: &BytesN<20>) -> Option<Address>;

    fn set_pair(&self, pair_ref: &BytesN<20>, pair: &Address);

    fn pair_ref(&self, pair: &Address) -> BytesN<20>;

    fn bump_instance(&self);

    fn require_config(&self) -> RouterConfig;

    fn panic_if_not_owner(&self);

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        self.storage().instance().has(&DataKey::Config)
    }

    fn get_config(&self) -> Option<RouterConfig> {
        self.storage().instance().get(&DataKey::Config)
    }

    fn set_config(&self, config: &RouterConfig) {
        self.storage().instance().set(&DataKey::Config, config);
    }

    fn get_pair(&self, pair_ref: &BytesN<20>) -> Option<Address> {
        let key = DataKey::Pair(pair_ref.clone());
        let pair = self.storage().persistent().get(&key);
        if pair.is_some() {
            self.storage()
                .persistent()
                .extend_ttl(&key, LPH * 24 * 10, LPH * 24 * 30);
        }
        pair
    }

    fn set_pair(&self, pair_ref: &BytesN<20>, pair: &Address) {
        let key = DataKey::Pair(pair_ref.clone());
        self.storage().persistent().set(&key, pair);
        self.storage()
            .persistent()
            .extend_ttl(&key, LPH * 24 * 10, LPH * 24 * 30);
    }

    //last 20 bytes of keccak256 over the address XDR
    fn pair_ref(&self, pair: &Address) -> BytesN<20> {
        let digest = self.crypto().keccak256(&pair.clone().to_xdr(self)).to_array();
        let mut pair_ref = [0u8; PAIR_SIZE as usize];
        pair_ref.copy_from_slice(&digest[digest.len() - PAIR_SIZE as usize..]);
        BytesN::from_array(self, &pair_ref)
    }

    fn require_config(&self) -> RouterConfig {
        match self.get_config() {
            Some(config) => config,
            None => self.panic_with_error(RouterError::NotInitialized),
        }
    }

    fn panic_if_not_owner(&self) {
        self.require_config().owner.require_auth();
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

const LPH: u32 = 720;
