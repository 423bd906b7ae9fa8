use crate::bid::record_bid;
use crate::checks::validate_terms;
use crate::config::ConfigManager;
use crate::custody::AssetCustodian;
use crate::errors::AuctionError;
use crate::escrow::EscrowLedger;
use crate::event::{AuctionClosed, AuctionCreated, BidMade, AUCTION, BID, CLOSE, CREATE};
use crate::registry::AuctionRegistry;
use crate::traits::AuctionTrait;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct AuctionContract;

// Every operation finishes its own storage writes before it calls into a
// collection or token contract.
#[contractimpl]
impl AuctionTrait for AuctionContract {
    fn initialize(env: Env, payment_token: Address) -> Result<(), AuctionError> {
        ConfigManager::init(&env, payment_token)
    }

    fn create_auction(
        env: Env,
        seller: Address,
        key: AssetKey,
        min_bid: i128,
        deadline: u64,
    ) -> Result<(), AuctionError> {
        seller.require_auth();
        ConfigManager::get(&env)?;

        AssetCustodian::ensure_owner(&env, &key, &seller)?;
        validate_terms(env.ledger().timestamp(), min_bid, deadline)?;
        AssetCustodian::ensure_approved(&env, &key)?;

        let auction = Auction::new(seller.clone(), min_bid, deadline);
        AuctionRegistry::insert(&env, &key, &auction)?;

        AssetCustodian::take_custody(&env, &key, &seller);

        log!(
            &env,
            "auction created: token {}, min bid {}, deadline {}",
            key.token_id,
            min_bid,
            deadline
        );
        env.events().publish(
            (AUCTION, CREATE, seller.clone()),
            AuctionCreated {
                key,
                seller,
                min_bid,
                deadline,
            },
        );
        Ok(())
    }

    fn make_bid(env: Env, bidder: Address, key: AssetKey, amount: i128) -> Result<(), AuctionError> {
        bidder.require_auth();
        let config = ConfigManager::get(&env)?;

        let mut auction =
            AuctionRegistry::get(&env, &key).ok_or(AuctionError::AuctionNotFound)?;

        let superseded = record_bid(&mut auction, env.ledger().timestamp(), bidder.clone(), amount)?;
        AuctionRegistry::save(&env, &key, &auction);

        if let Some(previous) = superseded {
            EscrowLedger::credit(&env, &previous.bidder, previous.amount);
        }

        EscrowLedger::deposit(&env, &config.payment_token, &bidder, amount);

        log!(
            &env,
            "bid accepted: token {}, bidder {}, amount {}",
            key.token_id,
            bidder,
            amount
        );
        env.events().publish(
            (AUCTION, BID, bidder.clone()),
            BidMade {
                key,
                bidder,
                amount,
            },
        );
        Ok(())
    }

    fn close_auction(env: Env, key: AssetKey) -> Result<(), AuctionError> {
        let auction = AuctionRegistry::get(&env, &key).ok_or(AuctionError::AuctionNotFound)?;
        auction.check_can_close(env.ledger().timestamp())?;

        // The record is gone before the collection is called
        AuctionRegistry::remove(&env, &key);

        let (recipient, amount) = match auction.highest_bidder {
            Some(winner) => {
                EscrowLedger::credit(&env, &auction.seller, auction.highest_bid);
                (winner, auction.highest_bid)
            }
            None => (auction.seller, 0),
        };

        AssetCustodian::release_custody(&env, &key, &recipient);

        log!(
            &env,
            "auction closed: token {}, recipient {}, amount {}",
            key.token_id,
            recipient,
            amount
        );
        env.events().publish(
            (AUCTION, CLOSE, recipient.clone()),
            AuctionClosed {
                key,
                recipient,
                amount,
            },
        );
        Ok(())
    }

    fn get_auction_data(env: Env, key: AssetKey) -> Option<Auction> {
        AuctionRegistry::get(&env, &key)
    }

    fn withdraw(env: Env, account: Address) -> Result<i128, AuctionError> {
        account.require_auth();
        let config = ConfigManager::get(&env)?;

        EscrowLedger::withdraw(&env, &config.payment_token, &account)
    }

    fn balance(env: Env, account: Address) -> i128 {
        EscrowLedger::balance(&env, &account)
    }

    fn payment_token(env: Env) -> Result<Address, AuctionError> {
        Ok(ConfigManager::get(&env)?.payment_token)
    }
}
