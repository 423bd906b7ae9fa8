use soroban_sdk::Address;

use crate::errors::AuctionError;
use crate::types::{Auction, SupersededBid};

/// Apply a bid to `auction` after checking it, and hand back the bid it
/// replaced. The caller owns crediting that bid to the escrow ledger.
pub fn record_bid(
    auction: &mut Auction,
    now: u64,
    bidder: Address,
    amount: i128,
) -> Result<Option<SupersededBid>, AuctionError> {
    auction.check_can_bid(now, &bidder, amount)?;

    let superseded = auction
        .highest_bidder
        .replace(bidder)
        .map(|previous| SupersededBid {
            bidder: previous,
            amount: auction.highest_bid,
        });
    auction.highest_bid = amount;

    Ok(superseded)
}
