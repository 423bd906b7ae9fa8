#![cfg(test)]

use crate::{CollectionError, NftCollection, NftCollectionClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

struct Collection {
    env: Env,
    admin: Address,
    client: NftCollectionClient<'static>,
}

impl Collection {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(NftCollection, ());
        let client = NftCollectionClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin);

        Collection { env, admin, client }
    }
}

#[test]
fn test_initialize_twice_fails() {
    let Collection { client, admin, .. } = Collection::new();

    assert_eq!(client.get_admin(), admin);
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(CollectionError::AlreadyInitialized))
    );
}

#[test]
fn test_mint_and_owner_of() {
    let Collection { env, client, .. } = Collection::new();
    let alice = Address::generate(&env);

    assert!(!client.exists(&7));
    client.mint(&alice, &7);

    assert!(client.exists(&7));
    assert_eq!(client.owner_of(&7), alice);
    assert_eq!(client.try_mint(&alice, &7), Err(Ok(CollectionError::TokenExists)));
    assert_eq!(client.try_owner_of(&8), Err(Ok(CollectionError::TokenNotFound)));
}

#[test]
fn test_approve_requires_owner() {
    let Collection { env, client, .. } = Collection::new();
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);
    client.mint(&alice, &1);

    assert_eq!(
        client.try_approve(&mallory, &mallory, &1),
        Err(Ok(CollectionError::NotTokenOwner))
    );
    assert!(!client.is_approved(&1, &mallory));
}

#[test]
fn test_operator_transfer_clears_approval() {
    let Collection { env, client, .. } = Collection::new();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let operator = Address::generate(&env);
    client.mint(&alice, &1);

    client.approve(&alice, &operator, &1);
    assert!(client.is_approved(&1, &operator));

    client.transfer_from(&operator, &alice, &bob, &1);

    assert_eq!(client.owner_of(&1), bob);
    assert!(!client.is_approved(&1, &operator));
    assert_eq!(
        client.try_transfer_from(&operator, &bob, &alice, &1),
        Err(Ok(CollectionError::NotApproved))
    );
}

#[test]
fn test_transfer_from_incorrect_owner() {
    let Collection { env, client, .. } = Collection::new();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice, &3);
    client.approve(&alice, &bob, &3);

    assert_eq!(
        client.try_transfer_from(&bob, &bob, &alice, &3),
        Err(Ok(CollectionError::IncorrectOwner))
    );
    assert_eq!(
        client.try_transfer_from(&alice, &alice, &alice, &3),
        Err(Ok(CollectionError::SelfTransfer))
    );
    assert_eq!(client.owner_of(&3), alice);
}

#[test]
fn test_owner_can_transfer_without_approval() {
    let Collection { env, client, admin } = Collection::new();
    let alice = Address::generate(&env);
    client.mint(&alice, &5);

    client.transfer_from(&alice, &alice, &admin, &5);
    assert_eq!(client.owner_of(&5), admin);
}
