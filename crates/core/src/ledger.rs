//! Ledger entry DTOs.
//!
//! Revenue rows are derived from an [`crate::order::Order`] at the moment
//! payment is confirmed; cost entries arrive as free-form drafts. Both
//! ledgers are append-only: no identifier, no update path.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for registering a cost. The recorded-at timestamp is stamped by
/// the ledger recorder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CostDraft {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    pub category: String,
}
