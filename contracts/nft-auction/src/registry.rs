use soroban_sdk::Env;

use crate::errors::AuctionError;
use crate::types::{AssetKey, Auction, DataKey};

/// Store of live auctions, at most one per asset.
pub struct AuctionRegistry;

impl AuctionRegistry {
    pub fn get(env: &Env, key: &AssetKey) -> Option<Auction> {
        env.storage()
            .persistent()
            .get(&DataKey::Auction(key.clone()))
    }

    pub fn contains(env: &Env, key: &AssetKey) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Auction(key.clone()))
    }

    /// Insert a new auction. Never overwrites a live one.
    pub fn insert(env: &Env, key: &AssetKey, auction: &Auction) -> Result<(), AuctionError> {
        if Self::contains(env, key) {
            return Err(AuctionError::AuctionAlreadyExists);
        }
        Self::save(env, key, auction);
        Ok(())
    }

    /// Overwrite the record of an auction that is already live.
    pub fn save(env: &Env, key: &AssetKey, auction: &Auction) {
        env.storage()
            .persistent()
            .set(&DataKey::Auction(key.clone()), auction);
    }

    /// Drop the record for `key`. This is the only way a record leaves the
    /// registry.
    pub fn remove(env: &Env, key: &AssetKey) {
        env.storage()
            .persistent()
            .remove(&DataKey::Auction(key.clone()));
    }
}
