#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol,
};

mod transfer;

const ADMIN_KEY: Symbol = symbol_short!("ADMIN");

/// Topic shared by every event this collection publishes.
pub const COLLECT: Symbol = symbol_short!("COLLECT");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    TokenExists = 3,
    TokenNotFound = 4,
    NotTokenOwner = 5,
    IncorrectOwner = 6,
    NotApproved = 7,
    SelfTransfer = 8,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner(u32),    // Current holder of a token
    Approval(u32), // Single operator allowed to move a token on the holder's behalf
}

/// Minimal non-fungible collection. Each token id has exactly one holder and
/// at most one approved operator.
#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {
    pub fn initialize(env: Env, admin: Address) -> Result<(), CollectionError> {
        if env.storage().instance().has(&ADMIN_KEY) {
            return Err(CollectionError::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN_KEY, &admin);
        Ok(())
    }

    /// Mint `token_id` to `to`. Only the collection admin may mint.
    pub fn mint(env: Env, to: Address, token_id: u32) -> Result<(), CollectionError> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        let key = DataKey::Owner(token_id);
        if env.storage().persistent().has(&key) {
            return Err(CollectionError::TokenExists);
        }
        env.storage().persistent().set(&key, &to);

        env.events()
            .publish((COLLECT, symbol_short!("MINT"), to), token_id);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, CollectionError> {
        env.storage()
            .instance()
            .get(&ADMIN_KEY)
            .ok_or(CollectionError::NotInitialized)
    }

    pub fn exists(env: Env, token_id: u32) -> bool {
        env.storage().persistent().has(&DataKey::Owner(token_id))
    }
}

#[cfg(test)]
mod test;
