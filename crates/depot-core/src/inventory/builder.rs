//! Builder for creating and configuring Inventory instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Inventory;
use crate::{
    db::Store,
    error::{DepotError, Result},
};

/// Builder for creating and configuring Inventory instances.
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    database_path: Option<PathBuf>,
}

impl InventoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/depot/depot.db` or `~/.local/share/depot/depot.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured service instance.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::FileSystem` if the database path is invalid
    /// Returns `DepotError::Database` if database initialization fails
    pub async fn build(self) -> Result<Inventory> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DepotError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _store = Store::open(&db_path_clone)?;
            Ok::<(), DepotError>(())
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Inventory::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("depot")
            .place_data_file("depot.db")
            .map_err(|e| DepotError::XdgDirectory(e.to_string()))
    }
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
