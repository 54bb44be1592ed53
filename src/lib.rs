//! # file-catalog - In-Memory File Metadata Catalog
//!
//! `file-catalog` keeps file metadata (name, directory, last-modified date)
//! in memory and answers lookups two ways:
//!
//! - **By name**: every file sharing a name, across directories
//! - **By date**: every file last modified on a given day
//!
//! Both indices are built on [`HashTable`], a fixed-capacity hash table with
//! separate chaining that never resizes. The catalog keeps the two indices
//! consistent on every add and remove.
//!
//! ## Quick Start
//!
//! ```rust
//! use file_catalog::{FileCatalog, Result};
//!
//! # fn main() -> Result<()> {
//! let mut catalog = FileCatalog::new();
//!
//! catalog.add("mySample.txt", "/home", "02/01/2021")?;
//! catalog.add("notes.txt", "/tmp", "02/01/2021")?;
//! catalog.add("project.pdf", "/a", "03/03/2021")?;
//! catalog.add("project.pdf", "/b", "03/03/2021")?;
//!
//! assert_eq!(catalog.find_files_by_date("02/01/2021")?.len(), 2);
//! assert_eq!(catalog.find_files_by_name("project.pdf")?.len(), 2);
//! assert_eq!(catalog.find_files_in_multiple_directories("03/03/2021")?.len(), 2);
//!
//! // Same name and directory is the same file, whatever the date
//! assert!(!catalog.add("notes.txt", "/tmp", "05/05/2021")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Bulk Loading
//!
//! ```rust,no_run
//! use file_catalog::FileCatalog;
//!
//! // One "name, directory, date" per line; a missing file just logs a warning
//! let catalog = FileCatalog::from_source("files.txt");
//! for record in catalog.iter() {
//!     println!("{}", record);
//! }
//! ```

pub mod core;
pub mod error;

// Re-export core modules internally so crate:: paths in core still work
#[allow(unused_imports)]
pub(crate) use crate::core::{catalog, config, loader, shared, table};

pub use crate::core::{
    catalog::{FileCatalog, FileRecord, DEFAULT_DATE, DEFAULT_DIRECTORY, DEFAULT_NAME},
    config::{CatalogConfig, IndexConfig},
    loader::{BulkLoader, LoadReport},
    shared::SharedCatalog,
    table::{HashTable, TableKey, TableStats, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR},
};
pub use crate::error::{CatalogError, Result};
