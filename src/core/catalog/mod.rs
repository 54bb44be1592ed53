//! Dual-index file catalog
//!
//! The catalog keeps every [`FileRecord`] reachable two ways: by file name and
//! by last-modified date. Both indices are [`HashTable`]s mapping a key to the
//! records sharing it. The catalog maintains three invariants:
//!
//! - No two records share the same (name, directory) pair
//! - A record is in the name index iff it is in the date index
//! - No key is ever left mapped to an empty list
//!
//! Each index owns its own list per key; appending to a date bucket never
//! shows up through the name index.

pub mod record;

pub use record::{FileRecord, DEFAULT_DATE, DEFAULT_DIRECTORY, DEFAULT_NAME};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::table::{HashTable, TableStats};
use std::path::Path;
use tracing::{debug, warn};

/// Key to records mapping used for both indices
type Index = HashTable<String, Vec<FileRecord>>;

/// In-memory file metadata catalog indexed by name and by date
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    name_index: Index,
    date_index: Index,
}

impl FileCatalog {
    /// Create an empty catalog with default-sized indices
    pub fn new() -> Self {
        FileCatalog {
            name_index: HashTable::new(),
            date_index: HashTable::new(),
        }
    }

    /// Create an empty catalog sized by `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either index has a zero capacity or
    /// a non-positive load factor.
    pub fn with_config(config: &CatalogConfig) -> Result<Self> {
        Ok(FileCatalog {
            name_index: HashTable::with_capacity_and_load_factor(
                config.name_index.capacity,
                config.name_index.load_factor,
            )?,
            date_index: HashTable::with_capacity_and_load_factor(
                config.date_index.capacity,
                config.date_index.load_factor,
            )?,
        })
    }

    /// Create a catalog bulk-loaded from a `name, directory, date` text file
    ///
    /// An unreadable source is not fatal: the failure is logged and whatever
    /// was loaded before it (nothing, if the file could not be opened) is kept.
    pub fn from_source(path: impl AsRef<Path>) -> Self {
        let mut catalog = FileCatalog::new();
        let path = path.as_ref();
        if let Err(e) = crate::loader::BulkLoader::default().load_path(&mut catalog, path) {
            warn!("Could not load catalog source {:?}: {}", path, e);
        }
        catalog
    }

    /// Add a file
    ///
    /// Returns `Ok(false)` without touching the catalog if a file with the
    /// same name and directory is already present.
    pub fn add(&mut self, name: &str, directory: &str, last_modified_date: &str) -> Result<bool> {
        self.add_record(FileRecord::new(name, directory, last_modified_date))
    }

    /// Add an already built record
    pub fn add_record(&mut self, record: FileRecord) -> Result<bool> {
        if self.find_file(record.name(), record.directory())?.is_some() {
            debug!("Skipping duplicate {}", record);
            return Ok(false);
        }

        debug!("Adding {}", record);
        let name = record.name().to_string();
        let date = record.last_modified_date().to_string();
        append(&mut self.name_index, name, record.clone())?;
        append(&mut self.date_index, date, record)?;
        Ok(true)
    }

    /// Find the file with this exact name and directory
    pub fn find_file(&self, name: &str, directory: &str) -> Result<Option<&FileRecord>> {
        Ok(self
            .name_index
            .get(name)?
            .and_then(|records| records.iter().find(|r| r.directory() == directory)))
    }

    /// All files with this name (a copy; empty if none)
    pub fn find_files_by_name(&self, name: &str) -> Result<Vec<FileRecord>> {
        Ok(self.name_index.get(name)?.cloned().unwrap_or_default())
    }

    /// All files last modified on this date (a copy; empty if none)
    pub fn find_files_by_date(&self, date: &str) -> Result<Vec<FileRecord>> {
        Ok(self.date_index.get(date)?.cloned().unwrap_or_default())
    }

    /// Files modified on `date` whose name is shared by more than one record
    ///
    /// The other records with that name count regardless of their own date.
    pub fn find_files_in_multiple_directories(&self, date: &str) -> Result<Vec<FileRecord>> {
        let mut files = Vec::new();
        for record in self.find_files_by_date(date)? {
            let group = self.name_index.get(record.name())?.map_or(0, Vec::len);
            if group > 1 {
                files.push(record);
            }
        }
        Ok(files)
    }

    /// Every indexed file name, in no particular order
    pub fn find_all_names(&self) -> Vec<String> {
        self.name_index.keys()
    }

    /// Every indexed modification date, in no particular order
    pub fn find_all_dates(&self) -> Vec<String> {
        self.date_index.keys()
    }

    /// Remove every file with this name
    ///
    /// Returns `Ok(false)` if no file has the name.
    pub fn remove_by_name(&mut self, name: &str) -> Result<bool> {
        let records = match self.name_index.get(name)? {
            Some(records) => records.clone(),
            None => return Ok(false),
        };

        for record in &records {
            detach(&mut self.date_index, record.last_modified_date(), record)?;
            prune_empty(&mut self.date_index, record.last_modified_date())?;
        }
        self.name_index.remove(name)?;

        debug!("Removed {} file(s) named {}", records.len(), name);
        Ok(true)
    }

    /// Remove the file with this exact name and directory
    ///
    /// Returns `Ok(false)` if there is no such file.
    pub fn remove_file(&mut self, name: &str, directory: &str) -> Result<bool> {
        let record = match self.find_file(name, directory)? {
            Some(record) => record.clone(),
            None => return Ok(false),
        };

        detach(&mut self.name_index, record.name(), &record)?;
        detach(&mut self.date_index, record.last_modified_date(), &record)?;
        prune_empty(&mut self.name_index, record.name())?;
        prune_empty(&mut self.date_index, record.last_modified_date())?;

        debug!("Removed {}", record);
        Ok(true)
    }

    /// Iterate over every record, grouped by name
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.name_index.iter().flat_map(|(_, records)| records.iter())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.name_index.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.name_index.is_empty()
    }

    pub fn name_index_stats(&self) -> TableStats {
        self.name_index.stats()
    }

    pub fn date_index_stats(&self) -> TableStats {
        self.date_index.stats()
    }
}

/// Append a record under `key`, creating the key's list if needed
fn append(index: &mut Index, key: String, record: FileRecord) -> Result<()> {
    match index.get_mut(key.as_str())? {
        Some(records) => records.push(record),
        None => {
            index.insert(key, vec![record])?;
        }
    }
    Ok(())
}

/// Remove one record from the list under `key`
fn detach(index: &mut Index, key: &str, record: &FileRecord) -> Result<bool> {
    let Some(records) = index.get_mut(key)? else {
        return Ok(false);
    };
    match records.iter().position(|r| r.is_same_file(record)) {
        Some(pos) => {
            records.remove(pos);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Drop `key` from the index if its list is empty
fn prune_empty(index: &mut Index, key: &str) -> Result<bool> {
    let empty = index.get(key)?.is_some_and(Vec::is_empty);
    if empty {
        index.remove(key)?;
    }
    Ok(empty)
}
