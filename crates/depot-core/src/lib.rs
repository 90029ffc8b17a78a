//! Core library for the depot inventory management application.
//!
//! This crate provides the business logic for managing a product inventory
//! and its sales transactions over SQLite: data models, schema management,
//! store queries, the use-case service, and error handling.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Inventory    │    │      Store      │    │     SQLite      │
//! │  (use cases,    │───▶│  (queries and   │───▶│  (two tables,   │
//! │   validation)   │    │  transactions)  │    │   constraints)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The service layer never caches entities across calls: each operation
//! opens a fresh store scope, and the store is the single source of truth.
//! The one multi-step invariant-bearing operation, selling a product,
//! commits the sale insert and the stock decrement as a single
//! transaction.
//!
//! # Quick Start
//!
//! ```rust
//! use depot_core::{params::AddProduct, InventoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = InventoryBuilder::new()
//!     .with_database_path(Some("depot.db"))
//!     .build()
//!     .await?;
//!
//! let id = inventory
//!     .add_product(&AddProduct {
//!         sku: "COF-001".to_string(),
//!         name: "Coffee beans 1kg".to_string(),
//!         category: "beverages".to_string(),
//!         unit_price_ht: 12.50,
//!         quantity: 40,
//!         vat_rate: None, // defaults to 0.20
//!     })
//!     .await?;
//!
//! let products = inventory.list_inventory().await?;
//! for product in &products {
//!     println!("{}: {} in stock", product.sku, product.quantity);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod inventory;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Store;
pub use display::{LocalDateTime, ProductTable, SaleTable};
pub use error::{DepotError, Result};
pub use inventory::{Inventory, InventoryBuilder};
pub use models::{round2, DashboardReport, Product, Sale, SaleTotals, SeedFile, SeedProduct};
pub use params::{
    AddProduct, ExportSales, Id, InitializeStock, NewProduct, SellProduct, UpdateProduct,
};
