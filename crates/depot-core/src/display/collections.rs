//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Product, Sale};

/// Newtype wrapper rendering a product list as a markdown table, ordered
/// as the store returned it (sku ascending). Handles empty collections
/// gracefully.
pub struct ProductTable(pub Vec<Product>);

impl ProductTable {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of products in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ProductTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "(empty inventory)");
        }

        writeln!(
            f,
            "| ID | SKU | Name | Category | Price HT | VAT | Price TTC | Stock |"
        )?;
        writeln!(f, "|---|---|---|---|---|---|---|---|")?;
        for product in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {} |",
                product.id,
                product.sku,
                product.name,
                product.category,
                product.unit_price_ht,
                product.vat_rate,
                product.unit_price_ttc(),
                product.quantity,
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper rendering a sale list as a markdown table in insertion
/// order.
pub struct SaleTable(pub Vec<Sale>);

impl SaleTable {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sales in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SaleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "(no recorded sales)");
        }

        writeln!(
            f,
            "| ID | Product | SKU | Qty | Total HT | Total VAT | Total TTC |"
        )?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for sale in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} |",
                sale.id,
                sale.product_id,
                sale.sku,
                sale.quantity,
                sale.total_ht,
                sale.total_vat,
                sale.total_ttc,
            )?;
        }
        Ok(())
    }
}
