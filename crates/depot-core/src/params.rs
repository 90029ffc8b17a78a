//! Parameter structures for depot operations.
//!
//! Shared, framework-free parameter structs passed between the interface
//! layer (CLI prompts, flags) and the core service. Keeping them free of
//! clap- or UI-specific derives lets the same operations back any future
//! interface without touching the core.

use std::path::PathBuf;

use jiff::Timestamp;

/// Identifies an entity by its store-assigned id.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    pub id: u64,
}

/// Parameters for adding a single product.
#[derive(Debug, Clone)]
pub struct AddProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price_ht: f64,
    pub quantity: u32,
    /// Defaults to [`crate::models::DEFAULT_VAT_RATE`] when absent
    pub vat_rate: Option<f64>,
}

/// Parameters for updating a product.
///
/// Every field is optional: absent means "keep the current value". The sku
/// is deliberately not updatable; it is the immutable business key.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub id: u64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price_ht: Option<f64>,
    pub quantity: Option<u32>,
    pub vat_rate: Option<f64>,
}

/// Parameters for selling a product.
#[derive(Debug, Clone, Copy)]
pub struct SellProduct {
    pub product_id: u64,
    pub quantity: u32,
}

/// Parameters for seeding the store from a JSON file.
#[derive(Debug, Clone)]
pub struct InitializeStock {
    pub path: PathBuf,
    /// Destructively reset the schema before importing when true; ensure
    /// it exists otherwise
    pub reset: bool,
}

/// Parameters for exporting sales to a CSV file.
#[derive(Debug, Clone)]
pub struct ExportSales {
    pub path: PathBuf,
}

/// A fully resolved product draft, ready for insertion.
///
/// Produced by the service after validation and defaulting; the store
/// assigns the id and returns the persisted [`crate::models::Product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price_ht: f64,
    pub vat_rate: f64,
    pub quantity: u32,
    pub created_at: Timestamp,
}
