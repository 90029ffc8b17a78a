//! Sale model definition and total computation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::money::round2;

/// Represents a completed sale transaction.
///
/// A sale is an immutable snapshot: sku, unit price and VAT rate are copied
/// from the product at sale time, and the three totals are stored rather
/// than recomputed on read, so the record stays accurate even if the
/// product is later repriced or renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Product this sale drew stock from
    pub product_id: u64,

    /// Product sku at sale time
    pub sku: String,

    /// Units sold, strictly positive
    pub quantity: u32,

    /// Unit price excluding tax at sale time
    pub unit_price_ht: f64,

    /// VAT rate at sale time
    pub vat_rate: f64,

    /// quantity x unit_price_ht
    pub total_ht: f64,

    /// total_ht x vat_rate
    pub total_vat: f64,

    /// total_ht + total_vat
    pub total_ttc: f64,

    /// Timestamp of the transaction (UTC)
    pub sold_at: Timestamp,
}

/// The three monetary totals of a sale, each rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleTotals {
    pub total_ht: f64,
    pub total_vat: f64,
    pub total_ttc: f64,
}

impl SaleTotals {
    /// Computes sale totals from a quantity and the product's current price
    /// and VAT rate.
    ///
    /// total_ttc is derived from the rounded HT and VAT amounts so the
    /// stored invariant `total_ttc == total_ht + total_vat` holds to the
    /// cent.
    pub fn compute(quantity: u32, unit_price_ht: f64, vat_rate: f64) -> Self {
        let total_ht = round2(f64::from(quantity) * unit_price_ht);
        let total_vat = round2(total_ht * vat_rate);
        let total_ttc = round2(total_ht + total_vat);
        Self {
            total_ht,
            total_vat,
            total_ttc,
        }
    }
}
