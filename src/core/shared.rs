//! Thread-safe catalog handle
//!
//! [`FileCatalog`] does no locking of its own. Callers that need to share one
//! across threads wrap it in a reader-writer lock: queries take a read guard,
//! `add` and the removals take a write guard. Each call holds the guard for
//! the whole operation, so both indices change together.

use crate::catalog::FileCatalog;
use parking_lot::RwLock;
use std::sync::Arc;

/// Catalog shared between threads
pub type SharedCatalog = Arc<RwLock<FileCatalog>>;

impl FileCatalog {
    /// Move this catalog behind a shared reader-writer lock
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }
}
