//! Aggregate dashboard read model.

use serde::{Deserialize, Serialize};

/// Read-only aggregate view over the whole store.
///
/// Computed by the store in a single pass; never cached between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// Number of distinct products
    pub product_count: u64,

    /// Total units on hand across all products
    pub units_on_hand: u64,

    /// Inventory value at cost: sum of unit_price_ht x quantity
    pub stock_value_ht: f64,

    /// Inventory value at retail including tax
    pub stock_value_ttc: f64,

    /// Number of recorded sales
    pub sale_count: u64,

    /// Revenue including tax: sum of total_ttc over all sales
    pub revenue_ttc: f64,
}
