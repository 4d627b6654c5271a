//! Repository layer over the tabular store.
//!
//! [`OrderRepo`] maps orders to rows in the primary worksheet and owns
//! identifier assignment and status writes; [`LedgerRecorder`] appends the
//! derived revenue and cost rows. Both take the store handle as their
//! first argument, so any [`queijo_sheets::TabularStore`] works.

pub mod error;
pub mod ledger;
pub mod orders;
pub mod schema;

pub use error::StoreError;
pub use ledger::LedgerRecorder;
pub use orders::OrderRepo;
