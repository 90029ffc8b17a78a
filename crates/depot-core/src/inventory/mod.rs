//! High-level inventory service for managing products and sales.
//!
//! This module provides the main [`Inventory`] interface, the use-case
//! layer between the presentation code and the store. It validates input,
//! applies defaults, and orchestrates store calls.
//!
//! Every operation clones the database path and opens a fresh [`crate::db::Store`]
//! inside `tokio::task::spawn_blocking`: the connection is acquired, used,
//! and released within one call on every exit path, so nothing is held
//! across unrelated operations. Opening the store also ensures the schema
//! exists, so a fresh database file works without a separate setup step.

use std::path::PathBuf;

pub mod builder;
pub mod product_ops;
pub mod sale_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::InventoryBuilder;

/// Main service interface for managing products and sales.
pub struct Inventory {
    pub(crate) db_path: PathBuf,
}

impl Inventory {
    /// Creates a new service with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
