use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the depot inventory tool
///
/// Depot manages a product inventory and its sales transactions over a
/// local SQLite database. Invoked without a subcommand it opens the
/// interactive console menu; subcommands cover the non-interactive
/// operations.
#[derive(Parser)]
#[command(version, about, name = "depot")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/depot/depot.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the depot CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Export all recorded sales to a CSV file
    ExportSales {
        /// Destination path for the CSV file
        path: PathBuf,
    },
}
