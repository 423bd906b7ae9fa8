use soroban_sdk::{contracttype, Address};

/// Identity of one non-fungible item: the collection contract that tracks it
/// plus its token id inside that collection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetKey {
    pub collection: Address,
    pub token_id: u32,
}

/// A live auction. The record exists only while the engine holds the asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Holder of the asset when the auction was created.
    pub seller: Address,
    /// Smallest acceptable first bid. Always positive.
    pub min_bid: i128,
    /// Ledger timestamp at which bidding stops and settlement opens.
    pub deadline: u64,
    pub highest_bidder: Option<Address>,
    /// Zero until the first bid is accepted.
    pub highest_bid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    /// Token every bid is paid in and every escrow balance is withdrawn in.
    pub payment_token: Address,
}

/// Keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,            // Instance: engine configuration
    Auction(AssetKey), // Persistent: live auction for an asset
    Balance(Address),  // Persistent: withdrawable escrow balance
}

/// A bid that lost its place to a higher one. Its amount is owed back to the
/// bidder and must be credited to the escrow ledger.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupersededBid {
    pub bidder: Address,
    pub amount: i128,
}
