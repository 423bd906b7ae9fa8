use crate::{CollectionError, DataKey, NftCollectionArgs, NftCollectionClient, COLLECT};
use soroban_sdk::{contractimpl, symbol_short, Address, Env};

#[contractimpl]
impl super::NftCollection {
    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, CollectionError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(CollectionError::TokenNotFound)
    }

    /// Let `operator` move `token_id` once. Replaces any earlier approval.
    pub fn approve(
        env: Env,
        owner: Address,
        operator: Address,
        token_id: u32,
    ) -> Result<(), CollectionError> {
        owner.require_auth();

        if Self::owner_of(env.clone(), token_id)? != owner {
            return Err(CollectionError::NotTokenOwner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Approval(token_id), &operator);

        env.events().publish(
            (COLLECT, symbol_short!("APPROVE"), owner),
            (operator, token_id),
        );
        Ok(())
    }

    pub fn is_approved(env: Env, token_id: u32, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, Address>(&DataKey::Approval(token_id))
            .map_or(false, |approved| approved == operator)
    }

    /// Move `token_id` from `from` to `to`. `spender` is either the holder
    /// itself or the approved operator.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), CollectionError> {
        spender.require_auth();

        if from == to {
            return Err(CollectionError::SelfTransfer);
        }

        let owner = Self::owner_of(env.clone(), token_id)?;
        if owner != from {
            return Err(CollectionError::IncorrectOwner);
        }

        if spender != owner && !Self::is_approved(env.clone(), token_id, spender.clone()) {
            return Err(CollectionError::NotApproved);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), &to);
        env.storage()
            .persistent()
            .remove(&DataKey::Approval(token_id));

        env.events()
            .publish((COLLECT, symbol_short!("TRANSFER"), from, to), token_id);
        Ok(())
    }
}
