//! Depot CLI Application
//!
//! Interactive console for the depot inventory management tool.

mod args;
mod menu;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use depot_core::{params::ExportSales, InventoryBuilder};
use log::info;
use menu::Menu;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let inventory = InventoryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize inventory")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Depot started");

    match command {
        Some(Commands::ExportSales { path }) => {
            let count = inventory
                .export_sales_csv(&ExportSales { path: path.clone() })
                .await
                .context("Failed to export sales")?;
            println!("Exported {count} sale(s) to {}", path.display());
            Ok(())
        }
        None => {
            let code = Menu::new(inventory, renderer)
                .run()
                .await
                .context("Console session failed")?;
            std::process::exit(code);
        }
    }
}
