use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a test database with plain
/// output
fn depot_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("depot").expect("Failed to find depot binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

/// Menu input for adding one product: option 3 followed by sku, name,
/// category, unit price, quantity, and an empty line for the default VAT
fn add_product_input(sku: &str, price: &str, quantity: &str) -> String {
    format!("3\n{sku}\nWidget\ntools\n{price}\n{quantity}\n\n")
}

#[test]
fn test_cli_quit() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Depot inventory management ==="))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_invalid_choice_redisplays_menu() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("0\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 8.",
        ))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_closed_input_quits_cleanly() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_empty_inventory() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty inventory)"));
}

#[test]
fn test_cli_add_and_list_product() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let input = format!("{}2\n8\n", add_product_input("ABC", "10.5", "5"));
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added with id 1."))
        .stdout(predicate::str::contains("ABC"))
        // TTC price with the default 20% VAT
        .stdout(predicate::str::contains("12.60"));
}

#[test]
fn test_cli_add_rejects_bad_price() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("3\nABC\nWidget\ntools\nnot-a-number\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input for field 'unit_price_ht'",
        ))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_sell_product() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let input = format!("{}6\n1\n3\n8\n", add_product_input("ABC", "10", "5"));
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sale recorded:"))
        .stdout(predicate::str::contains("Total TTC: 36.00"));
}

#[test]
fn test_cli_oversell_reports_error_and_resumes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let input = format!("{}6\n1\n9\n8\n", add_product_input("ABC", "10", "5"));
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Insufficient stock for product 1"))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_delete_missing_product_reports_error() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    depot_cmd(db_path.to_str().unwrap())
        .write_stdin("5\n42\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product with ID 42 not found"))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_initialize_from_seed_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let seed_path = temp_dir.path().join("initial_stock.json");
    std::fs::write(
        &seed_path,
        r#"{"products": [
            {"sku": "TEA-100", "name": "Green tea", "category": "beverages",
             "unit_price_ht": 4.50, "quantity": 20, "vat_rate": 0.055},
            {"sku": "COF-001", "name": "Coffee beans 1kg", "category": "beverages",
             "unit_price_ht": 12.50, "quantity": 40, "vat_rate": 0.20}
        ]}"#,
    )
    .expect("Failed to write seed file");

    let input = format!("1\n{}\n2\n8\n", seed_path.display());
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialization successful: 2 product(s) imported.",
        ))
        .stdout(predicate::str::contains("COF-001"))
        .stdout(predicate::str::contains("TEA-100"));
}

#[test]
fn test_cli_initialize_missing_file_reports_error() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let missing = temp_dir.path().join("nope.json");

    let input = format!("1\n{}\n8\n", missing.display());
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data import error"))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn test_cli_dashboard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let input = format!("{}7\n8\n", add_product_input("ABC", "10", "5"));
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"))
        .stdout(predicate::str::contains("Products: 1"))
        .stdout(predicate::str::contains("Units on hand: 5"));
}

#[test]
fn test_cli_export_sales_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let csv_path = temp_dir.path().join("sales.csv");

    depot_cmd(db_path.to_str().unwrap())
        .args(["export-sales", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 sale(s)"));

    let contents = std::fs::read_to_string(&csv_path).expect("Failed to read export");
    assert!(contents.starts_with(
        "id,product_id,sku,quantity,unit_price_ht,vat_rate,total_ht,total_vat,total_ttc,sold_at"
    ));
}

#[test]
fn test_cli_export_sales_after_selling() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let csv_path = temp_dir.path().join("sales.csv");

    // First session: add a product and sell part of the stock
    let input = format!("{}6\n1\n2\n8\n", add_product_input("ABC", "10", "5"));
    depot_cmd(db_path.to_str().unwrap())
        .write_stdin(input)
        .assert()
        .success();

    // Second invocation exports against the same database file
    depot_cmd(db_path.to_str().unwrap())
        .args(["export-sales", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 sale(s)"));

    let contents = std::fs::read_to_string(&csv_path).expect("Failed to read export");
    let row = contents.lines().nth(1).expect("Export should contain a row");
    assert!(row.contains("ABC"));
    assert!(row.contains("24.00"));
}
