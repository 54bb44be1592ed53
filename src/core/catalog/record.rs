//! File record stored in the catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name used when none is supplied
pub const DEFAULT_NAME: &str = "";

/// Directory used when none is supplied
pub const DEFAULT_DIRECTORY: &str = "/";

/// Modification date used when none is supplied
pub const DEFAULT_DATE: &str = "01/01/2021";

/// Metadata for one file: name, containing directory, last-modified date
///
/// Records are immutable once built. Two records describe the same file when
/// their name and directory match; the date is not part of identity, so
/// `PartialEq` and `Hash` ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    name: String,
    directory: String,
    last_modified_date: String,
}

impl FileRecord {
    /// Create a record from explicit values
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        last_modified_date: impl Into<String>,
    ) -> Self {
        FileRecord {
            name: name.into(),
            directory: directory.into(),
            last_modified_date: last_modified_date.into(),
        }
    }

    /// Create a record, substituting defaults for missing fields
    ///
    /// ```
    /// use file_catalog::FileRecord;
    ///
    /// let record = FileRecord::from_parts(Some("notes.txt"), None, None);
    /// assert_eq!(record.directory(), "/");
    /// assert_eq!(record.last_modified_date(), "01/01/2021");
    /// ```
    pub fn from_parts(
        name: Option<&str>,
        directory: Option<&str>,
        last_modified_date: Option<&str>,
    ) -> Self {
        FileRecord::new(
            name.unwrap_or(DEFAULT_NAME),
            directory.unwrap_or(DEFAULT_DIRECTORY),
            last_modified_date.unwrap_or(DEFAULT_DATE),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn last_modified_date(&self) -> &str {
        &self.last_modified_date
    }

    /// True if both records share name and directory
    pub fn is_same_file(&self, other: &FileRecord) -> bool {
        self.name == other.name && self.directory == other.directory
    }
}

impl Default for FileRecord {
    fn default() -> Self {
        FileRecord::from_parts(None, None, None)
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_file(other)
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.directory.hash(state);
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name: {}, Directory: {}, Modified Date: {}}}",
            self.name, self.directory, self.last_modified_date
        )
    }
}
