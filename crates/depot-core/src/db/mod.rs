//! Database operations and SQLite management for products and sales.
//!
//! This module provides low-level database operations for the depot
//! inventory system. It handles SQLite connections, schema management, and
//! provides specialized query interfaces for products and sales.
//!
//! A [`Store`] owns exactly one connection and is scoped to one logical
//! operation by the service layer: acquired, used, and released on every
//! exit path, so no connection or half-committed transaction survives an
//! error.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod product_queries;
pub mod sale_queries;
pub mod schema;
mod utils;

/// Database connection and operations handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens a database connection, enables foreign keys, and ensures the
    /// schema exists so an empty or fresh database file self-heals.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let store = Self { connection };
        store.create_schema_if_needed()?;
        Ok(store)
    }
}
