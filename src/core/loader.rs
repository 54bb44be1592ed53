//! Bulk loading of `name, directory, date` text sources
//!
//! Each non-blank line describes one file and becomes one
//! [`FileCatalog::add_record`] call, in file order. Missing trailing fields
//! fall back to the [`FileRecord`] defaults; a line with too many fields is
//! skipped and logged. Duplicate files are counted, not fatal.

use crate::catalog::{FileCatalog, FileRecord};
use crate::config::{CatalogConfig, DEFAULT_SEPARATOR};
use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Fields per line: name, directory, date
const FIELD_COUNT: usize = 3;

/// Outcome of one bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines read, blank ones included
    pub lines: usize,
    /// Records added to the catalog
    pub added: usize,
    /// Lines naming a file that was already present
    pub duplicates: usize,
    /// Lines skipped because they could not be parsed
    pub malformed: usize,
}

/// Line-oriented loader driving [`FileCatalog::add_record`]
#[derive(Debug, Clone)]
pub struct BulkLoader {
    separator: String,
}

impl Default for BulkLoader {
    fn default() -> Self {
        BulkLoader {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl BulkLoader {
    /// Create a loader splitting fields on `separator`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the separator is empty.
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(CatalogError::InvalidConfiguration(
                "separator cannot be empty".to_string(),
            ));
        }
        Ok(BulkLoader { separator })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(config.separator.clone())
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parse one line into a record
    ///
    /// Returns `Ok(None)` for a blank line and `MalformedLine` when the line
    /// has more than three fields.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Result<Option<FileRecord>> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(self.separator.as_str()).collect();
        if fields.len() > FIELD_COUNT {
            return Err(CatalogError::MalformedLine {
                line: line_no,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        Ok(Some(FileRecord::from_parts(
            fields.first().copied(),
            fields.get(1).copied(),
            fields.get(2).copied(),
        )))
    }

    /// Load every line of `reader` into `catalog`
    pub fn load_reader<R: BufRead>(&self, catalog: &mut FileCatalog, reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            report.lines += 1;

            match self.parse_line(idx + 1, &line) {
                Ok(Some(record)) => {
                    if catalog.add_record(record)? {
                        report.added += 1;
                    } else {
                        report.duplicates += 1;
                    }
                }
                Ok(None) => debug!("Skipping blank line {}", idx + 1),
                Err(CatalogError::MalformedLine { line, reason }) => {
                    warn!("Skipping malformed line {}: {}", line, reason);
                    report.malformed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Open `path` and load it into `catalog`
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened or read. Lines loaded before
    /// a read error stay in the catalog.
    pub fn load_path(&self, catalog: &mut FileCatalog, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let report = self.load_reader(catalog, BufReader::new(file))?;

        info!(
            "Loaded {} file(s) from {:?} ({} lines, {} duplicates, {} malformed)",
            report.added, path, report.lines, report.duplicates, report.malformed
        );
        Ok(report)
    }
}
