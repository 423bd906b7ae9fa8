#![no_std]

//! Single-asset English auction engine with escrowed bids.
//!
//! A seller hands one non-fungible asset to the engine, bidders raise the
//! price with funds held in escrow, and once the deadline passes anyone can
//! settle: the asset goes to the highest bidder and the proceeds are credited
//! to the seller. Outbid and settled funds are never pushed; every party pulls
//! what it is owed with `withdraw`.

pub mod auction;
pub mod bid;
pub mod checks;
pub mod config;
pub mod custody;
pub mod errors;
pub mod escrow;
pub mod event;
pub mod registry;
pub mod traits;
pub mod types;
