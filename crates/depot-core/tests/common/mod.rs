use depot_core::{Inventory, InventoryBuilder};
use tempfile::TempDir;

/// Helper function to create a test inventory service
pub async fn create_test_inventory() -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create inventory");
    (temp_dir, inventory)
}
