//! Error types for catalog and table operations

use thiserror::Error;

/// Catalog operation result type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog and hash table errors
///
/// Only contract violations and I/O or parse failures live here. Expected
/// negative outcomes (duplicate key, missing key, file not found) are reported
/// as `Ok(false)` or `Ok(None)` by the operations themselves.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Table sizing rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An absent key was passed to a keyed table operation
    #[error("Invalid key: keys must be present")]
    InvalidKey,

    /// A bulk-load line could not be turned into a record
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
