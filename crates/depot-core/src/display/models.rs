//! Display implementations for domain models.
//!
//! All output is markdown-first: the CLI renders it richly through
//! termimad and falls back to the same text without styling.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DashboardReport, Product, Sale};

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} ({})", self.id, self.name, self.sku)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Price HT: {:.2}", self.unit_price_ht)?;
        writeln!(f, "- VAT rate: {:.2}", self.vat_rate)?;
        writeln!(f, "- Price TTC: {:.2}", self.unit_price_ttc())?;
        writeln!(f, "- Stock: {}", self.quantity)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Sale {}: {} x {} ({})",
            self.id, self.quantity, self.sku, self.product_id
        )?;
        writeln!(f)?;
        writeln!(f, "- Unit price HT: {:.2}", self.unit_price_ht)?;
        writeln!(f, "- VAT rate: {:.2}", self.vat_rate)?;
        writeln!(f, "- Total HT: {:.2}", self.total_ht)?;
        writeln!(f, "- Total VAT: {:.2}", self.total_vat)?;
        writeln!(f, "- Total TTC: {:.2}", self.total_ttc)?;
        writeln!(f, "- Sold: {}", LocalDateTime(&self.sold_at))?;
        Ok(())
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        writeln!(f, "## Inventory")?;
        writeln!(f)?;
        writeln!(f, "- Products: {}", self.product_count)?;
        writeln!(f, "- Units on hand: {}", self.units_on_hand)?;
        writeln!(f, "- Stock value HT: {:.2}", self.stock_value_ht)?;
        writeln!(f, "- Stock value TTC: {:.2}", self.stock_value_ttc)?;
        writeln!(f)?;
        writeln!(f, "## Sales")?;
        writeln!(f)?;
        writeln!(f, "- Recorded sales: {}", self.sale_count)?;
        writeln!(f, "- Revenue TTC: {:.2}", self.revenue_ttc)?;
        Ok(())
    }
}
