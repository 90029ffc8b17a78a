//! Product model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::money::round2;

/// VAT rate applied when a product is created without an explicit rate.
pub const DEFAULT_VAT_RATE: f64 = 0.20;

/// Represents a stocked item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Stock-keeping unit: unique business key, immutable after creation
    pub sku: String,

    /// Human-readable product name
    pub name: String,

    /// Free-text category
    pub category: String,

    /// Unit price excluding tax, non-negative
    pub unit_price_ht: f64,

    /// Fractional VAT rate in [0, 1]
    pub vat_rate: f64,

    /// Units on hand, non-negative
    pub quantity: u32,

    /// Timestamp when the product was created (UTC), immutable
    pub created_at: Timestamp,
}

impl Product {
    /// Unit price including tax, rounded to two decimals.
    pub fn unit_price_ttc(&self) -> f64 {
        round2(self.unit_price_ht * (1.0 + self.vat_rate))
    }
}
