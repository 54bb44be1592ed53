//! Fixed-capacity hash table with separate chaining
//!
//! The table allocates exactly `capacity` buckets at construction and never
//! grows. Each bucket is a chain of entries kept in insertion order; lookups
//! scan the chain linearly. The load factor is validated and stored so callers
//! can inspect it, but no rehashing ever happens.
//!
//! ## Failure channels
//!
//! - Passing an absent key (see [`TableKey`]) is a contract violation and
//!   returns [`CatalogError::InvalidKey`].
//! - A missing key on lookup or removal, or a duplicate key on insert, is a
//!   normal outcome and comes back as `Ok(None)` / `Ok(false)`.

pub mod key;

pub use key::TableKey;

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::borrow::Borrow;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use xxhash_rust::xxh3::Xxh3;

/// Default bucket count
pub const DEFAULT_CAPACITY: usize = 16;

/// Default (inert) load factor
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Deterministic xxh3 hasher used for bucket selection
pub type DefaultHashBuilder = BuildHasherDefault<Xxh3>;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Occupancy snapshot of a table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStats {
    /// Number of buckets (fixed)
    pub capacity: usize,
    /// Number of live entries
    pub len: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `len / capacity`
    pub load: f64,
}

/// Separate-chaining hash table with a fixed number of buckets
#[derive(Debug, Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
    load_factor: f64,
    hash_builder: S,
}

impl<K, V> HashTable<K, V, DefaultHashBuilder> {
    /// Create a table with [`DEFAULT_CAPACITY`] buckets and [`DEFAULT_LOAD_FACTOR`]
    pub fn new() -> Self {
        HashTable {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    /// Create a table with an explicit bucket count and load factor
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `capacity` is zero or `load_factor`
    /// is not a positive finite number.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Result<Self> {
        Self::with_hasher(capacity, load_factor, DefaultHashBuilder::default())
    }
}

impl<K, V> Default for HashTable<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Create a table that hashes keys with `hash_builder`
    pub fn with_hasher(capacity: usize, load_factor: f64, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            return Err(CatalogError::InvalidConfiguration(
                "capacity must be positive".to_string(),
            ));
        }
        if !(load_factor > 0.0 && load_factor.is_finite()) {
            return Err(CatalogError::InvalidConfiguration(format!(
                "load factor must be positive, got {}",
                load_factor
            )));
        }

        Ok(HashTable {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
            hash_builder,
        })
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket count, fixed for the lifetime of the table
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Configured load factor. It has no effect on sizing.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Iterate over all entries, bucket-major
    ///
    /// The order is unspecified and changes as entries come and go.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }

    /// Collect every key currently present
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn stats(&self) -> TableStats {
        let occupied_buckets = self.buckets.iter().filter(|b| !b.is_empty()).count();
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);

        TableStats {
            capacity: self.capacity(),
            len: self.len,
            occupied_buckets,
            longest_chain,
            load: self.len as f64 / self.capacity() as f64,
        }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq + TableKey,
    S: BuildHasher,
{
    /// Insert a new entry
    ///
    /// Returns `Ok(false)` and leaves the table untouched if the key is
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        check_key(&key)?;

        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if bucket.iter().any(|entry| entry.key == key) {
            return Ok(false);
        }

        bucket.push(Entry { key, value });
        self.len += 1;
        Ok(true)
    }

    /// Overwrite the value of an existing entry
    ///
    /// Returns `Ok(false)` if the key is not present.
    pub fn replace<Q>(&mut self, key: &Q, value: V) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        match self.get_mut(key)? {
            Some(slot) => {
                *slot = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an entry, returning whether it existed
    pub fn remove<Q>(&mut self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        Ok(self.take(key)?.is_some())
    }

    /// Remove an entry and hand back its value
    pub fn take<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        check_key(key)?;

        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|entry| key.eq(entry.key.borrow())) {
            Some(pos) => {
                let entry = bucket.remove(pos);
                self.len -= 1;
                Ok(Some(entry.value))
            }
            None => Ok(None),
        }
    }

    /// Insert the entry if the key is new, otherwise replace its value
    pub fn set_or_replace(&mut self, key: K, value: V) -> Result<()> {
        check_key(&key)?;

        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|entry| entry.key == key) {
            Some(pos) => bucket[pos].value = value,
            None => {
                bucket.push(Entry { key, value });
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Look up the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Result<Option<&V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        check_key(key)?;

        let bucket = &self.buckets[self.bucket_index(key)];
        Ok(bucket
            .iter()
            .find(|entry| key.eq(entry.key.borrow()))
            .map(|entry| &entry.value))
    }

    /// Mutable access to the value stored under `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<Option<&mut V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        check_key(key)?;

        let index = self.bucket_index(key);
        Ok(self.buckets[index]
            .iter_mut()
            .find(|entry| key.eq(entry.key.borrow()))
            .map(|entry| &mut entry.value))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + TableKey + ?Sized,
    {
        Ok(self.get(key)?.is_some())
    }

    /// Bucket slot for a key
    ///
    /// The 64-bit hash is reduced as an unsigned value, so every hash lands
    /// in `[0, capacity)`.
    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let hash = self.hash_builder.hash_one(key);
        (hash % self.buckets.len() as u64) as usize
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<Entry<K, V>>> {
    let mut buckets = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        buckets.push(Vec::new());
    }
    buckets
}

fn check_key<Q: TableKey + ?Sized>(key: &Q) -> Result<()> {
    if key.is_absent() {
        return Err(CatalogError::InvalidKey);
    }
    Ok(())
}
