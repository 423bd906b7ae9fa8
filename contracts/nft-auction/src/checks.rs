use soroban_sdk::Address;

use crate::errors::AuctionError;
use crate::types::Auction;

impl Auction {
    pub fn new(seller: Address, min_bid: i128, deadline: u64) -> Self {
        Auction {
            seller,
            min_bid,
            deadline,
            highest_bidder: None,
            highest_bid: 0,
        }
    }

    /// Bidding is open strictly before the deadline.
    pub fn is_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bidder.is_some()
    }

    pub fn is_highest_bidder(&self, account: &Address) -> bool {
        self.highest_bidder.as_ref() == Some(account)
    }

    pub fn check_can_bid(&self, now: u64, bidder: &Address, amount: i128) -> Result<(), AuctionError> {
        if !self.is_open(now) {
            return Err(AuctionError::AuctionEnded);
        }

        if self.is_highest_bidder(bidder) {
            return Err(AuctionError::AlreadyHighestBidder);
        }

        if amount < self.min_bid {
            return Err(AuctionError::BidTooLow);
        }

        // A competing bid must beat the current one outright; matching it is not enough
        if self.has_bid() && amount <= self.highest_bid {
            return Err(AuctionError::BidNotHighEnough);
        }

        Ok(())
    }

    /// Settlement opens at the deadline.
    pub fn check_can_close(&self, now: u64) -> Result<(), AuctionError> {
        if self.is_open(now) {
            return Err(AuctionError::AuctionStillActive);
        }
        Ok(())
    }
}

/// Validate the terms of a new auction against the current ledger time.
pub fn validate_terms(now: u64, min_bid: i128, deadline: u64) -> Result<(), AuctionError> {
    if deadline <= now {
        return Err(AuctionError::InvalidDeadline);
    }

    if min_bid <= 0 {
        return Err(AuctionError::InvalidMinimumBid);
    }

    Ok(())
}
