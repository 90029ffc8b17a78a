//! Seed file format for initial stock imports.

use serde::Deserialize;

/// Top-level structure of the JSON seed document.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    /// Product descriptors to import
    pub products: Vec<SeedProduct>,
}

/// One product descriptor from the seed document.
///
/// Every field is required; a missing or mistyped field fails the whole
/// import before any write occurs.
#[derive(Debug, Deserialize)]
pub struct SeedProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price_ht: f64,
    pub quantity: u32,
    pub vat_rate: f64,
}
