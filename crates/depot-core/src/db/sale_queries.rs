//! Sale recording and aggregate queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{product_from_row, sale_from_row};
use crate::{
    error::{DatabaseResultExt, DepotError, Result},
    models::{round2, DashboardReport, Sale, SaleTotals},
};

const SELECT_PRODUCT_SQL: &str = "SELECT id, sku, name, category, unit_price_ht, vat_rate, quantity, created_at FROM products WHERE id = ?1";
const INSERT_SALE_SQL: &str = "INSERT INTO sales (product_id, sku, quantity, unit_price_ht, vat_rate, total_ht, total_vat, total_ttc, sold_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const DECREMENT_STOCK_SQL: &str = "UPDATE products SET quantity = quantity - ?1 WHERE id = ?2";
const LIST_SALES_SQL: &str = "SELECT id, product_id, sku, quantity, unit_price_ht, vat_rate, total_ht, total_vat, total_ttc, sold_at FROM sales ORDER BY id ASC";
const PRODUCT_AGGREGATES_SQL: &str = "SELECT COUNT(*), COALESCE(SUM(quantity), 0), COALESCE(SUM(unit_price_ht * quantity), 0.0), COALESCE(SUM(unit_price_ht * (1.0 + vat_rate) * quantity), 0.0) FROM products";
const SALE_AGGREGATES_SQL: &str = "SELECT COUNT(*), COALESCE(SUM(total_ttc), 0.0) FROM sales";

impl super::Store {
    /// Records a sale and decrements the product's stock as a single unit.
    ///
    /// Within one transaction: reads the product, validates the requested
    /// quantity against the units on hand, computes the totals from the
    /// product's current price and VAT rate, inserts the sale row, and
    /// decrements the stock. The insert and the decrement commit together
    /// or not at all; any early return rolls the transaction back.
    pub fn record_sale(&mut self, product_id: u64, quantity: u32) -> Result<Sale> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let product = tx
            .query_row(SELECT_PRODUCT_SQL, params![product_id as i64], product_from_row)
            .optional()
            .db_context("Failed to query product")?
            .ok_or(DepotError::ProductNotFound { id: product_id })?;

        if quantity == 0 {
            return Err(DepotError::invalid_input(
                "quantity",
                "Sale quantity must be positive",
            ));
        }
        if quantity > product.quantity {
            return Err(DepotError::InsufficientStock {
                id: product_id,
                requested: quantity,
                available: product.quantity,
            });
        }

        let totals = SaleTotals::compute(quantity, product.unit_price_ht, product.vat_rate);
        let now = Timestamp::now();

        tx.execute(
            INSERT_SALE_SQL,
            params![
                product_id as i64,
                &product.sku,
                i64::from(quantity),
                product.unit_price_ht,
                product.vat_rate,
                totals.total_ht,
                totals.total_vat,
                totals.total_ttc,
                now.to_string(),
            ],
        )
        .db_context("Failed to insert sale")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(DECREMENT_STOCK_SQL, params![i64::from(quantity), product_id as i64])
            .db_context("Failed to decrement product stock")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Sale {
            id,
            product_id,
            sku: product.sku,
            quantity,
            unit_price_ht: product.unit_price_ht,
            vat_rate: product.vat_rate,
            total_ht: totals.total_ht,
            total_vat: totals.total_vat,
            total_ttc: totals.total_ttc,
            sold_at: now,
        })
    }

    /// Lists all sales in insertion order.
    pub fn list_sales(&self) -> Result<Vec<Sale>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SALES_SQL)
            .db_context("Failed to prepare query")?;

        let sales = stmt
            .query_map([], sale_from_row)
            .db_context("Failed to query sales")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch sales");
        sales
    }

    /// Computes the aggregate dashboard report. Read-only.
    pub fn dashboard(&self) -> Result<DashboardReport> {
        let (product_count, units_on_hand, stock_value_ht, stock_value_ttc): (i64, i64, f64, f64) =
            self.connection
                .query_row(PRODUCT_AGGREGATES_SQL, [], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                })
                .db_context("Failed to query product aggregates")?;

        let (sale_count, revenue_ttc): (i64, f64) = self
            .connection
            .query_row(SALE_AGGREGATES_SQL, [], |row| Ok((row.get(0)?, row.get(1)?)))
            .db_context("Failed to query sale aggregates")?;

        Ok(DashboardReport {
            product_count: product_count as u64,
            units_on_hand: units_on_hand as u64,
            stock_value_ht: round2(stock_value_ht),
            stock_value_ttc: round2(stock_value_ttc),
            sale_count: sale_count as u64,
            revenue_ttc: round2(revenue_ttc),
        })
    }
}
