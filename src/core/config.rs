//! Catalog configuration
//!
//! Read from TOML:
//!
//! ```toml
//! source = "files.txt"
//! separator = ", "
//!
//! [name_index]
//! capacity = 64
//! load_factor = 0.75
//!
//! [date_index]
//! capacity = 32
//! ```
//!
//! Every key is optional. Sizing is validated when the catalog is built, not
//! when the file is parsed.

use crate::error::Result;
use crate::table::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default field separator of the bulk-load format
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Sizing of one index table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Fixed bucket count
    pub capacity: usize,
    /// Stored load factor (no resizing happens)
    pub load_factor: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Text file to bulk-load at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Separator between the fields of a source line
    pub separator: String,

    pub name_index: IndexConfig,

    pub date_index: IndexConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            source: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            name_index: IndexConfig::default(),
            date_index: IndexConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
