//! HTTP surface for the order/ledger system.
//!
//! The former form pages map to JSON endpoints; state is request-scoped,
//! there is no process-wide page or draft state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
