//! Core catalog implementation
//!
//! - [`table`] - Fixed-capacity chained hash table
//! - [`catalog`] - File records and the dual-index catalog
//! - [`loader`] - Bulk loading from `name, directory, date` text
//! - [`config`] - TOML configuration
//! - [`shared`] - Reader-writer locked catalog handle

pub mod catalog;
pub mod config;
pub mod loader;
pub mod shared;
pub mod table;
