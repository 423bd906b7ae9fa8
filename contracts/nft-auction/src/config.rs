use soroban_sdk::{Address, Env};

use crate::errors::AuctionError;
use crate::event::{ENGINE, INIT};
use crate::types::{DataKey, EngineConfig};

pub struct ConfigManager;

impl ConfigManager {
    /// Store the engine configuration. Only the first call succeeds.
    pub fn init(env: &Env, payment_token: Address) -> Result<(), AuctionError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(AuctionError::AlreadyInitialized);
        }

        let config = EngineConfig {
            payment_token: payment_token.clone(),
        };
        env.storage().instance().set(&DataKey::Config, &config);

        env.events().publish((ENGINE, INIT), payment_token);
        Ok(())
    }

    pub fn get(env: &Env) -> Result<EngineConfig, AuctionError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(AuctionError::NotInitialized)
    }
}
