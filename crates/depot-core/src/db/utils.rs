//! Row-mapping helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::models::{Product, Sale};

/// Parses an ISO-8601 text column into a [`Timestamp`], reporting parse
/// failures against the given column index.
pub(super) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Maps a `products` row in column order
/// (id, sku, name, category, unit_price_ht, vat_rate, quantity, created_at).
pub(super) fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get::<_, i64>(0)? as u64,
        sku: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        unit_price_ht: row.get(4)?,
        vat_rate: row.get(5)?,
        quantity: row.get::<_, i64>(6)? as u32,
        created_at: timestamp_column(row, 7)?,
    })
}

/// Maps a `sales` row in column order
/// (id, product_id, sku, quantity, unit_price_ht, vat_rate, total_ht,
/// total_vat, total_ttc, sold_at).
pub(super) fn sale_from_row(row: &Row<'_>) -> rusqlite::Result<Sale> {
    Ok(Sale {
        id: row.get::<_, i64>(0)? as u64,
        product_id: row.get::<_, i64>(1)? as u64,
        sku: row.get(2)?,
        quantity: row.get::<_, i64>(3)? as u32,
        unit_price_ht: row.get(4)?,
        vat_rate: row.get(5)?,
        total_ht: row.get(6)?,
        total_vat: row.get(7)?,
        total_ttc: row.get(8)?,
        sold_at: timestamp_column(row, 9)?,
    })
}

/// True when the error is a SQLite constraint violation (unique sku,
/// CHECK bound, or restrict foreign key).
pub(super) fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
