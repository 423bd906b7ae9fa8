use crate::errors::AuctionError;
use crate::types::*;
use soroban_sdk::{Address, Env};

/// Interface for the auction engine.
pub trait AuctionTrait {
    /// Configure the token bids are paid in. Callable once.
    fn initialize(env: Env, payment_token: Address) -> Result<(), AuctionError>;

    /// Take custody of `key` from `seller` and open an auction for it.
    ///
    /// # Errors
    /// * `NotAssetOwner` - `seller` does not hold the asset
    /// * `InvalidDeadline` - `deadline` is not in the future
    /// * `InvalidMinimumBid` - `min_bid` is not positive
    /// * `NotApproved` - the engine may not move the asset
    /// * `AuctionAlreadyExists` - a live auction already exists for `key`
    fn create_auction(
        env: Env,
        seller: Address,
        key: AssetKey,
        min_bid: i128,
        deadline: u64,
    ) -> Result<(), AuctionError>;

    /// Place a bid of `amount`, paid from `bidder` into escrow. The bid it
    /// replaces is credited to its bidder's withdrawable balance.
    ///
    /// # Errors
    /// * `AuctionNotFound` - no live auction for `key`
    /// * `AuctionEnded` - the deadline has been reached
    /// * `AlreadyHighestBidder` - `bidder` already leads
    /// * `BidTooLow` - `amount` is under the minimum bid
    /// * `BidNotHighEnough` - `amount` does not beat the current bid
    fn make_bid(env: Env, bidder: Address, key: AssetKey, amount: i128) -> Result<(), AuctionError>;

    /// Settle an ended auction: the asset goes to the winner (or back to the
    /// seller when nobody bid) and the winning bid is credited to the seller.
    ///
    /// # Errors
    /// * `AuctionNotFound` - no live auction for `key`
    /// * `AuctionStillActive` - the deadline has not been reached
    fn close_auction(env: Env, key: AssetKey) -> Result<(), AuctionError>;

    fn get_auction_data(env: Env, key: AssetKey) -> Option<Auction>;

    /// Pay out everything credited to `account`.
    ///
    /// # Errors
    /// * `NothingToWithdraw` - the balance is zero
    fn withdraw(env: Env, account: Address) -> Result<i128, AuctionError>;

    fn balance(env: Env, account: Address) -> i128;

    fn payment_token(env: Env) -> Result<Address, AuctionError>;
}
