//! Product CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use super::utils::{is_constraint_violation, product_from_row};
use crate::{
    error::{DatabaseResultExt, DepotError, Result},
    models::Product,
    params::NewProduct,
};

const INSERT_PRODUCT_SQL: &str = "INSERT INTO products (sku, name, category, unit_price_ht, vat_rate, quantity, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_PRODUCT_SQL: &str = "SELECT id, sku, name, category, unit_price_ht, vat_rate, quantity, created_at FROM products WHERE id = ?1";
const LIST_PRODUCTS_SQL: &str = "SELECT id, sku, name, category, unit_price_ht, vat_rate, quantity, created_at FROM products ORDER BY sku ASC";
const UPDATE_PRODUCT_SQL: &str = "UPDATE products SET name = ?1, category = ?2, unit_price_ht = ?3, vat_rate = ?4, quantity = ?5 WHERE id = ?6";
const DELETE_PRODUCT_SQL: &str = "DELETE FROM products WHERE id = ?1";

impl super::Store {
    /// Inserts a product draft and returns the persisted product with its
    /// assigned id.
    ///
    /// A constraint violation (most commonly a duplicate sku) surfaces as a
    /// database error and leaves no row behind.
    pub fn insert_product(&self, draft: &NewProduct) -> Result<Product> {
        self.connection
            .execute(
                INSERT_PRODUCT_SQL,
                params![
                    &draft.sku,
                    &draft.name,
                    &draft.category,
                    draft.unit_price_ht,
                    draft.vat_rate,
                    i64::from(draft.quantity),
                    draft.created_at.to_string(),
                ],
            )
            .map_err(|e| {
                if is_constraint_violation(&e) {
                    DepotError::database_error(
                        "Constraint violated inserting product (duplicate sku?)",
                        e,
                    )
                } else {
                    DepotError::database_error("Failed to insert product", e)
                }
            })?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Product {
            id,
            sku: draft.sku.clone(),
            name: draft.name.clone(),
            category: draft.category.clone(),
            unit_price_ht: draft.unit_price_ht,
            vat_rate: draft.vat_rate,
            quantity: draft.quantity,
            created_at: draft.created_at,
        })
    }

    /// Inserts a batch of product drafts inside one transaction.
    ///
    /// The import is all-or-nothing: any failure (duplicate sku within the
    /// batch or against existing rows) rolls back every insert. Returns the
    /// number of products inserted.
    pub fn import_products(&mut self, drafts: &[NewProduct]) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut count = 0;
        for draft in drafts {
            tx.execute(
                INSERT_PRODUCT_SQL,
                params![
                    &draft.sku,
                    &draft.name,
                    &draft.category,
                    draft.unit_price_ht,
                    draft.vat_rate,
                    i64::from(draft.quantity),
                    draft.created_at.to_string(),
                ],
            )
            .map_err(|e| {
                if is_constraint_violation(&e) {
                    DepotError::database_error(
                        "Constraint violated importing products (duplicate sku?)",
                        e,
                    )
                } else {
                    DepotError::database_error("Failed to import products", e)
                }
            })?;
            count += 1;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(count)
    }

    /// Retrieves a product by its ID. Absence is `None`, not an error.
    pub fn get_product(&self, id: u64) -> Result<Option<Product>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PRODUCT_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], product_from_row)
            .optional()
            .db_context("Failed to query product")
    }

    /// Lists all products ordered by sku ascending.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PRODUCTS_SQL)
            .db_context("Failed to prepare query")?;

        let products = stmt
            .query_map([], product_from_row)
            .db_context("Failed to query products")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch products");
        products
    }

    /// Replaces the full row matching the product's id.
    ///
    /// sku and created_at are deliberately absent from the statement: the
    /// business key and the creation timestamp never change after insert.
    pub fn update_product(&self, product: &Product) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_PRODUCT_SQL,
                params![
                    &product.name,
                    &product.category,
                    product.unit_price_ht,
                    product.vat_rate,
                    i64::from(product.quantity),
                    product.id as i64,
                ],
            )
            .db_context("Failed to update product")?;

        if rows_affected == 0 {
            return Err(DepotError::ProductNotFound { id: product.id });
        }

        Ok(())
    }

    /// Deletes a product by ID.
    ///
    /// The restrict foreign key blocks deletion of a product with recorded
    /// sales; that violation is translated into [`DepotError::ProductInUse`].
    pub fn delete_product(&self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_PRODUCT_SQL, params![id as i64])
            .map_err(|e| {
                if is_constraint_violation(&e) {
                    DepotError::ProductInUse { id }
                } else {
                    DepotError::database_error("Failed to delete product", e)
                }
            })?;

        if rows_affected == 0 {
            return Err(DepotError::ProductNotFound { id });
        }

        Ok(())
    }
}
