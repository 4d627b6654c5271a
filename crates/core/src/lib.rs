//! Domain types and pure logic for the order/ledger system.
//!
//! Nothing in this crate talks to the network or the spreadsheet; it holds
//! the order model, the storage marker encoding, and the status filters the
//! listing pages are built on.

pub mod error;
pub mod filter;
pub mod ledger;
pub mod marker;
pub mod order;
pub mod types;
