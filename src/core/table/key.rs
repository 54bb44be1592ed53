//! Key contract for [`HashTable`](super::HashTable)
//!
//! A table key must never be the absent sentinel. Ordinary key types can never
//! be absent; `Option<T>` keys are absent when `None`. Keyed table operations
//! check this before touching any bucket and fail with
//! [`CatalogError::InvalidKey`](crate::error::CatalogError::InvalidKey).

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// A type usable as a hash table key
pub trait TableKey {
    /// True if this value is the absent sentinel and must be rejected
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! present_keys {
    ($($ty:ty),* $(,)?) => {
        $(impl TableKey for $ty {})*
    };
}

present_keys!(
    String, str, Path, PathBuf, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64,
    i128, isize,
);

impl<T: TableKey> TableKey for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            None => true,
            Some(inner) => inner.is_absent(),
        }
    }
}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: TableKey + ?Sized> TableKey for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: TableKey + ?Sized> TableKey for Rc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: TableKey + ?Sized> TableKey for Arc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
