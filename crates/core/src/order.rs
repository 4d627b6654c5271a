//! Order model and creation DTO.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// The product catalogue is a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "Queijo")]
    Queijo,
    #[serde(rename = "Doce de Leite")]
    DoceDeLeite,
}

impl Product {
    /// Label as stored in the `produto` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Queijo => "Queijo",
            Product::DoceDeLeite => "Doce de Leite",
        }
    }

    /// Parse a stored product label.
    ///
    /// Historical rows carry emoji prefixes ("🧀 Queijo"), so any leading
    /// non-alphabetic characters are stripped before the case-insensitive
    /// match. Returns `None` for labels outside the catalogue.
    pub fn parse(value: &str) -> Option<Self> {
        let label = value
            .trim_start_matches(|c: char| !c.is_alphabetic())
            .trim();
        if label.eq_ignore_ascii_case("queijo") {
            Some(Product::Queijo)
        } else if label.eq_ignore_ascii_case("doce de leite") {
            Some(Product::DoceDeLeite)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order as stored in the primary sheet.
///
/// Status flags are proper booleans here; the `SIM`/`NÃO` storage markers
/// are applied only when a row is encoded or decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: DbId,
    pub client: String,
    pub product: Product,
    pub quantity: u32,
    pub amount: f64,
    pub ordered_at: Timestamp,
    pub delivered: bool,
    pub paid: bool,
}

/// DTO for registering a new order. Identity, timestamps, and status flags
/// are assigned by the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(length(min = 1, message = "client must not be empty"))]
    pub client: String,
    pub product: Product,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
}
