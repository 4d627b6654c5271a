//! Spreadsheet gateway: row-level access to the remote tabular store.
//!
//! The repository layer talks to the [`TabularStore`] trait; this crate
//! provides the production Google Sheets implementation ([`SheetsStore`])
//! and an in-memory one ([`MemoryStore`]) with the same observable
//! semantics for tests and local development.

pub mod auth;
pub mod client;
pub mod error;
pub mod memory;
pub mod store;

pub use auth::ServiceAccountKey;
pub use client::{SheetsStore, SPREADSHEET_KEY};
pub use error::GatewayError;
pub use memory::MemoryStore;
pub use store::{Record, TabularStore};
