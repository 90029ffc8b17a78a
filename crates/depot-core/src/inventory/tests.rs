//! Tests for the inventory service module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::DepotError,
    params::{AddProduct, Id, SellProduct, UpdateProduct},
};

/// Helper function to create a test service
async fn create_test_inventory() -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create inventory");
    (temp_dir, inventory)
}

fn add_params(sku: &str) -> AddProduct {
    AddProduct {
        sku: sku.to_string(),
        name: "Widget".to_string(),
        category: "tools".to_string(),
        unit_price_ht: 10.0,
        quantity: 5,
        vat_rate: None,
    }
}

#[tokio::test]
async fn test_add_product_rejects_empty_sku() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .add_product(&add_params("   "))
        .await
        .expect_err("Blank sku should be rejected");

    assert!(matches!(err, DepotError::InvalidInput { ref field, .. } if field == "sku"));
}

#[tokio::test]
async fn test_add_product_rejects_negative_price() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .add_product(&AddProduct {
            unit_price_ht: -1.0,
            ..add_params("ABC")
        })
        .await
        .expect_err("Negative price should be rejected");

    assert!(
        matches!(err, DepotError::InvalidInput { ref field, .. } if field == "unit_price_ht")
    );
}

#[tokio::test]
async fn test_add_product_rejects_out_of_range_vat() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .add_product(&AddProduct {
            vat_rate: Some(1.5),
            ..add_params("ABC")
        })
        .await
        .expect_err("Out-of-range VAT rate should be rejected");

    assert!(matches!(err, DepotError::InvalidInput { ref field, .. } if field == "vat_rate"));
}

#[tokio::test]
async fn test_add_product_applies_default_vat() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let id = inventory
        .add_product(&add_params("ABC"))
        .await
        .expect("Failed to add product");

    let product = inventory
        .get_product(&Id { id })
        .await
        .expect("Failed to get product")
        .expect("Product should exist");

    assert_eq!(product.vat_rate, 0.20);
    assert_eq!(product.sku, "ABC");
}

#[tokio::test]
async fn test_add_product_trims_sku() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let id = inventory
        .add_product(&add_params("  ABC  "))
        .await
        .expect("Failed to add product");

    let product = inventory
        .get_product(&Id { id })
        .await
        .expect("Failed to get product")
        .expect("Product should exist");

    assert_eq!(product.sku, "ABC");
}

#[tokio::test]
async fn test_update_product_not_found() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .update_product(&UpdateProduct {
            id: 42,
            name: Some("Renamed".to_string()),
            ..UpdateProduct::default()
        })
        .await
        .expect_err("Updating a missing product should fail");

    assert!(matches!(err, DepotError::ProductNotFound { id: 42 }));
}

#[tokio::test]
async fn test_sell_product_not_found() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .sell_product(&SellProduct {
            product_id: 42,
            quantity: 1,
        })
        .await
        .expect_err("Selling a missing product should fail");

    assert!(matches!(err, DepotError::ProductNotFound { id: 42 }));
}
