//! Error types for the depot library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all depot operations.
#[derive(Error, Debug)]
pub enum DepotError {
    /// Invalid input validation errors, raised before any store access
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Malformed or unreadable seed data
    #[error("Data import error: {message}")]
    DataImport { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Product not found for the given ID
    #[error("Product with ID {id} not found")]
    ProductNotFound { id: u64 },
    /// Sale quantity exceeds the units on hand
    #[error(
        "Insufficient stock for product {id}: requested {requested}, only {available} available"
    )]
    InsufficientStock {
        id: u64,
        requested: u32,
        available: u32,
    },
    /// Product has recorded sales and cannot be deleted
    #[error("Product with ID {id} has recorded sales and cannot be deleted")]
    ProductInUse { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DepotError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a data import error.
    pub fn data_import(message: impl Into<String>) -> Self {
        Self::DataImport {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DepotError::database_error(message, e))
    }
}

/// Result type alias for depot operations
pub type Result<T> = std::result::Result<T, DepotError>;
