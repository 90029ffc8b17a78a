//! Product use cases: seeding, listing, and CRUD.

use std::path::Path;

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::Inventory;
use crate::{
    db::Store,
    error::{DepotError, Result},
    models::{Product, SeedFile, DEFAULT_VAT_RATE},
    params::{AddProduct, Id, InitializeStock, NewProduct, UpdateProduct},
};

/// Validates and normalizes a sku: trimmed, non-empty.
fn validate_sku(sku: &str) -> Result<String> {
    let sku = sku.trim();
    if sku.is_empty() {
        return Err(DepotError::invalid_input("sku", "sku must not be empty"));
    }
    Ok(sku.to_string())
}

fn validate_price(unit_price_ht: f64) -> Result<()> {
    if !unit_price_ht.is_finite() || unit_price_ht < 0.0 {
        return Err(DepotError::invalid_input(
            "unit_price_ht",
            "unit price must be a non-negative number",
        ));
    }
    Ok(())
}

fn validate_vat_rate(vat_rate: f64) -> Result<()> {
    if !vat_rate.is_finite() || !(0.0..=1.0).contains(&vat_rate) {
        return Err(DepotError::invalid_input(
            "vat_rate",
            "VAT rate must be between 0 and 1",
        ));
    }
    Ok(())
}

/// Reads and parses the JSON seed document. Any I/O or parse failure is a
/// data-import error, raised before a single write happens.
fn load_seed_file(path: &Path) -> Result<SeedFile> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DepotError::data_import(format!("Cannot read seed file '{}': {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        DepotError::data_import(format!("Malformed seed file '{}': {e}", path.display()))
    })
}

impl Inventory {
    /// Seeds the store from a JSON file and returns the number of products
    /// inserted.
    ///
    /// With `reset` the schema is destructively recreated first; without it
    /// the schema is only ensured. All inserts run in one transaction, so a
    /// bad descriptor (duplicate sku, constraint breach) leaves the store
    /// exactly as it was.
    pub async fn initialize_stock(&self, params: &InitializeStock) -> Result<u64> {
        info!(
            "Initialization requested from seed file: {}",
            params.path.display()
        );
        let seed = load_seed_file(&params.path)?;

        let now = Timestamp::now();
        let drafts: Vec<NewProduct> = seed
            .products
            .into_iter()
            .map(|p| NewProduct {
                sku: p.sku,
                name: p.name,
                category: p.category,
                unit_price_ht: p.unit_price_ht,
                vat_rate: p.vat_rate,
                quantity: p.quantity,
                created_at: now,
            })
            .collect();

        let db_path = self.db_path.clone();
        let reset = params.reset;
        let count = task::spawn_blocking(move || {
            let mut store = Store::open(&db_path)?;
            if reset {
                store.reset_and_create_schema()?;
            }
            store.import_products(&drafts)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Initialization complete: {count} product(s) inserted");
        Ok(count)
    }

    /// Returns all products ordered by sku ascending.
    pub async fn list_inventory(&self) -> Result<Vec<Product>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.list_products()
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Validates and inserts a new product, returning its assigned id.
    ///
    /// Validation happens before any store access and names the offending
    /// field. The VAT rate defaults to 20% when absent.
    pub async fn add_product(&self, params: &AddProduct) -> Result<u64> {
        let sku = validate_sku(&params.sku)?;
        validate_price(params.unit_price_ht)?;
        let vat_rate = params.vat_rate.unwrap_or(DEFAULT_VAT_RATE);
        validate_vat_rate(vat_rate)?;

        let draft = NewProduct {
            sku,
            name: params.name.clone(),
            category: params.category.clone(),
            unit_price_ht: params.unit_price_ht,
            vat_rate,
            quantity: params.quantity,
            created_at: Timestamp::now(),
        };

        let db_path = self.db_path.clone();
        let product = task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.insert_product(&draft)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Product '{}' added with id {}", product.sku, product.id);
        Ok(product.id)
    }

    /// Retrieves a product by its ID. Absence is `None`; the caller decides
    /// how to react.
    pub async fn get_product(&self, params: &Id) -> Result<Option<Product>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.get_product(id)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a product, keeping the current value for every absent field.
    ///
    /// The replacement entity is constructed in full and persisted
    /// wholesale; sku and created_at are never changed. Fails with a
    /// not-found error if the id does not exist. An update with no fields
    /// set is a valid no-op that still succeeds.
    pub async fn update_product(&self, params: &UpdateProduct) -> Result<Product> {
        if let Some(price) = params.unit_price_ht {
            validate_price(price)?;
        }
        if let Some(rate) = params.vat_rate {
            validate_vat_rate(rate)?;
        }

        let db_path = self.db_path.clone();
        let params = params.clone();
        let product = task::spawn_blocking(move || -> Result<Product> {
            let store = Store::open(&db_path)?;
            let current = store
                .get_product(params.id)?
                .ok_or(DepotError::ProductNotFound { id: params.id })?;

            let updated = Product {
                id: current.id,
                sku: current.sku,
                name: params.name.unwrap_or(current.name),
                category: params.category.unwrap_or(current.category),
                unit_price_ht: params.unit_price_ht.unwrap_or(current.unit_price_ht),
                vat_rate: params.vat_rate.unwrap_or(current.vat_rate),
                quantity: params.quantity.unwrap_or(current.quantity),
                created_at: current.created_at,
            };

            store.update_product(&updated)?;
            Ok(updated)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Product {} updated", product.id);
        Ok(product)
    }

    /// Deletes a product by ID.
    ///
    /// Fails with a not-found error if the id does not exist and with a
    /// conflict error if the product has recorded sales.
    pub async fn delete_product(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.delete_product(id)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Product {id} deleted");
        Ok(())
    }
}
