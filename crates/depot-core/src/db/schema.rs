//! Schema lifecycle: idempotent creation and destructive reset.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Store {
    /// Creates both tables and their indexes only if absent.
    ///
    /// Non-destructive and safe to run before every operation; [`super::Store::open`]
    /// calls it on every connection.
    pub fn create_schema_if_needed(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")
    }

    /// Drops sales then products (foreign-key dependency order) and
    /// recreates both tables plus indexes inside one transaction.
    ///
    /// Destructive: erases all existing data. Used only for initial
    /// seeding.
    pub fn reset_and_create_schema(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute("DROP TABLE IF EXISTS sales", [])
            .db_context("Failed to drop sales table")?;
        tx.execute("DROP TABLE IF EXISTS products", [])
            .db_context("Failed to drop products table")?;
        tx.execute_batch(SCHEMA_SQL)
            .db_context("Failed to recreate database schema")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
