//! Interactive console menu.
//!
//! The presentation layer proper: prompts, choice dispatch, and error
//! reporting. It holds no domain logic; every option maps 1:1 to an
//! [`Inventory`] call, and every domain error is caught, logged, and
//! printed before the menu resumes. Only unexpected plumbing errors
//! escape the loop and abort the process.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use depot_core::{
    params::{AddProduct, Id, InitializeStock, SellProduct, UpdateProduct},
    DepotError, Inventory, ProductTable, Result,
};
use log::{error, warn};

use crate::renderer::TerminalRenderer;

const DEFAULT_SEED_PATH: &str = "data/initial_stock.json";

/// Interactive menu over the inventory service.
pub struct Menu {
    inventory: Inventory,
    renderer: TerminalRenderer,
}

fn print_menu() {
    println!();
    println!("=== Depot inventory management ===");
    println!("1) Initialize stock (from a JSON seed file)");
    println!("2) Show inventory");
    println!("3) Add a product");
    println!("4) Update a product");
    println!("5) Delete a product");
    println!("6) Sell a product");
    println!("7) Dashboard");
    println!("8) Quit");
}

fn io_error(e: io::Error) -> DepotError {
    DepotError::Configuration {
        message: format!("Console I/O error: {e}"),
    }
}

/// Prompts and reads one trimmed line. `None` means the input stream
/// closed.
fn read_line(text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().map_err(io_error)?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line).map_err(io_error)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`read_line`], but a closed stream mid-action is an error.
fn read_input(text: &str) -> Result<String> {
    read_line(text)?.ok_or_else(|| DepotError::Configuration {
        message: "Input stream closed".to_string(),
    })
}

/// Parses a numeric field, reporting the offending field name on failure.
fn parse_field<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| DepotError::invalid_input(field, "must be a valid number"))
}

/// Parses an optional numeric field; empty input means absent.
fn parse_optional<T: FromStr>(field: &str, raw: &str) -> Result<Option<T>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_field(field, raw).map(Some)
}

/// Empty input means "keep the current value".
fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

impl Menu {
    pub fn new(inventory: Inventory, renderer: TerminalRenderer) -> Self {
        Self {
            inventory,
            renderer,
        }
    }

    /// Runs the menu loop until the user quits; returns the process exit
    /// code.
    pub async fn run(&self) -> Result<i32> {
        loop {
            print_menu();
            let Some(choice) = read_line("Your choice (1-8): ")? else {
                // Input stream closed at the top level: leave quietly
                println!();
                println!("Bye.");
                return Ok(0);
            };

            let outcome = match choice.as_str() {
                "1" => self.action_initialize().await,
                "2" => self.action_list_inventory().await,
                "3" => self.action_add_product().await,
                "4" => self.action_update_product().await,
                "5" => self.action_delete_product().await,
                "6" => self.action_sell_product().await,
                "7" => self.action_dashboard().await,
                "8" => {
                    println!("Bye.");
                    return Ok(0);
                }
                _ => {
                    println!("Invalid choice. Please enter a number between 1 and 8.");
                    continue;
                }
            };

            if let Err(e) = outcome {
                match e {
                    DepotError::InvalidInput { .. } | DepotError::DataImport { .. } => {
                        warn!("Validation/import error: {e}");
                        println!("Error: {e}");
                    }
                    DepotError::Database { .. } => {
                        error!("Database error: {e}");
                        println!("Database error: {e}");
                    }
                    DepotError::ProductNotFound { .. }
                    | DepotError::InsufficientStock { .. }
                    | DepotError::ProductInUse { .. } => {
                        warn!("Inventory error: {e}");
                        println!("Error: {e}");
                    }
                    DepotError::FileSystem { .. } | DepotError::Serialization { .. } => {
                        error!("I/O error: {e}");
                        println!("Error: {e}");
                    }
                    // Plumbing failures are not recoverable from the menu
                    DepotError::XdgDirectory(_) | DepotError::Configuration { .. } => {
                        return Err(e)
                    }
                }
            }
        }
    }

    async fn action_initialize(&self) -> Result<()> {
        let path = read_input(&format!("Seed file path [{DEFAULT_SEED_PATH}]: "))?;
        let path = if path.is_empty() {
            DEFAULT_SEED_PATH.to_string()
        } else {
            path
        };

        let count = self
            .inventory
            .initialize_stock(&InitializeStock {
                path: PathBuf::from(path),
                reset: true,
            })
            .await?;
        println!("Initialization successful: {count} product(s) imported.");
        Ok(())
    }

    async fn action_list_inventory(&self) -> Result<()> {
        let products = self.inventory.list_inventory().await?;
        println!();
        self.renderer.render(&ProductTable(products).to_string());
        Ok(())
    }

    async fn action_add_product(&self) -> Result<()> {
        let sku = read_input("SKU: ")?;
        let name = read_input("Name: ")?;
        let category = read_input("Category: ")?;
        let unit_price_ht = parse_field("unit_price_ht", &read_input("Unit price HT: ")?)?;
        let quantity = parse_field("quantity", &read_input("Quantity: ")?)?;
        let vat_rate = parse_optional("vat_rate", &read_input("VAT rate [0.20]: ")?)?;

        let id = self
            .inventory
            .add_product(&AddProduct {
                sku,
                name,
                category,
                unit_price_ht,
                quantity,
                vat_rate,
            })
            .await?;
        println!("Product added with id {id}.");
        Ok(())
    }

    async fn action_update_product(&self) -> Result<()> {
        let id = parse_field("id", &read_input("Product id: ")?)?;
        println!("Leave a field empty to keep its current value.");
        let name = non_empty(read_input("Name: ")?);
        let category = non_empty(read_input("Category: ")?);
        let unit_price_ht = parse_optional("unit_price_ht", &read_input("Unit price HT: ")?)?;
        let quantity = parse_optional("quantity", &read_input("Quantity: ")?)?;
        let vat_rate = parse_optional("vat_rate", &read_input("VAT rate: ")?)?;

        let product = self
            .inventory
            .update_product(&UpdateProduct {
                id,
                name,
                category,
                unit_price_ht,
                quantity,
                vat_rate,
            })
            .await?;
        println!("Product updated:");
        println!();
        self.renderer.render(&product.to_string());
        Ok(())
    }

    async fn action_delete_product(&self) -> Result<()> {
        let id = parse_field("id", &read_input("Product id: ")?)?;
        self.inventory.delete_product(&Id { id }).await?;
        println!("Product {id} deleted.");
        Ok(())
    }

    async fn action_sell_product(&self) -> Result<()> {
        let product_id = parse_field("id", &read_input("Product id: ")?)?;
        let quantity = parse_field("quantity", &read_input("Quantity to sell: ")?)?;

        let sale = self
            .inventory
            .sell_product(&SellProduct {
                product_id,
                quantity,
            })
            .await?;
        println!("Sale recorded:");
        println!();
        self.renderer.render(&sale.to_string());
        Ok(())
    }

    async fn action_dashboard(&self) -> Result<()> {
        let report = self.inventory.dashboard().await?;
        println!();
        self.renderer.render(&report.to_string());
        Ok(())
    }
}
