use soroban_sdk::{contractclient, Address, Env};

use crate::errors::AuctionError;
use crate::types::AssetKey;

/// What the engine needs from the collection contract that tracks an asset.
#[allow(dead_code)]
#[contractclient(name = "AssetCollectionClient")]
pub trait AssetCollection {
    /// Current holder of `token_id`.
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Whether `operator` may move `token_id` for its holder.
    fn is_approved(env: Env, token_id: u32, operator: Address) -> bool;

    /// Move `token_id` from `from` to `to` on behalf of `spender`. Fails if
    /// `from` is not the current holder.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Adapter over [`AssetCollection`]. Custody is an explicit transfer to the
/// engine's own address on creation and away from it on settlement.
pub struct AssetCustodian;

impl AssetCustodian {
    /// Reject unless `caller` is the holder of record. A collection that
    /// fails to answer counts as "not the owner".
    pub fn ensure_owner(env: &Env, key: &AssetKey, caller: &Address) -> Result<(), AuctionError> {
        let collection = AssetCollectionClient::new(env, &key.collection);
        match collection.try_owner_of(&key.token_id) {
            Ok(Ok(owner)) if owner == *caller => Ok(()),
            _ => Err(AuctionError::NotAssetOwner),
        }
    }

    /// Reject unless the engine may move the asset for its holder.
    pub fn ensure_approved(env: &Env, key: &AssetKey) -> Result<(), AuctionError> {
        let collection = AssetCollectionClient::new(env, &key.collection);
        match collection.try_is_approved(&key.token_id, &env.current_contract_address()) {
            Ok(Ok(true)) => Ok(()),
            _ => Err(AuctionError::NotApproved),
        }
    }

    /// Move the asset from `from` into engine custody.
    pub fn take_custody(env: &Env, key: &AssetKey, from: &Address) {
        let engine = env.current_contract_address();
        AssetCollectionClient::new(env, &key.collection).transfer_from(
            &engine,
            from,
            &engine,
            &key.token_id,
        );
    }

    /// Hand the asset held by the engine to `to`.
    pub fn release_custody(env: &Env, key: &AssetKey, to: &Address) {
        let engine = env.current_contract_address();
        AssetCollectionClient::new(env, &key.collection).transfer_from(
            &engine,
            &engine,
            to,
            &key.token_id,
        );
    }
}
