use soroban_sdk::contracterror;

/// Every way an engine operation can be rejected. A rejected operation leaves
/// no trace in storage.
///
/// Codes are grouped by family: 1xx authorization, 2xx time, 3xx
/// uniqueness, 4xx bid validity, 5xx withdrawal.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidMinimumBid = 3,

    NotAssetOwner = 101,
    NotApproved = 102,

    InvalidDeadline = 201,
    AuctionEnded = 202,
    AuctionStillActive = 203,

    AuctionAlreadyExists = 301,
    AuctionNotFound = 302,

    BidTooLow = 401,
    BidNotHighEnough = 402,
    AlreadyHighestBidder = 403,

    NothingToWithdraw = 501,
}
