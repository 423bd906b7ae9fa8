use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::types::AssetKey;

// Topic for auction lifecycle events.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

// Topic for escrow balance events.
pub const ESCROW: Symbol = symbol_short!("ESCROW");

// Topic for engine configuration events.
pub const ENGINE: Symbol = symbol_short!("ENGINE");

pub const INIT: Symbol = symbol_short!("INIT");

pub const CREATE: Symbol = symbol_short!("CREATE");

pub const BID: Symbol = symbol_short!("BID");

pub const CLOSE: Symbol = symbol_short!("CLOSE");

pub const CREDIT: Symbol = symbol_short!("CREDIT");

pub const WITHDRAW: Symbol = symbol_short!("WITHDRAW");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub key: AssetKey,
    pub seller: Address,
    pub min_bid: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidMade {
    pub key: AssetKey,
    pub bidder: Address,
    pub amount: i128,
}

/// `recipient` is the winner, or the seller when nobody bid (then `amount` is 0).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClosed {
    pub key: AssetKey,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceCredited {
    pub account: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub account: Address,
    pub amount: i128,
}
