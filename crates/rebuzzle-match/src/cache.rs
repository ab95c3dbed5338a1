//! Bounded LRU memoization
//!
//! Thread-safe wrapper around [`lru::LruCache`]. Both lookups and inserts
//! mark an entry as most recently used; when full, an insert of a new key
//! evicts the least recently used entry.

use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MatchError, Result};

/// Snapshot of a cache's occupancy and counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub len: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

struct Inner<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// Fixed-capacity, strict LRU cache guarded by a mutex
pub struct BoundedCache<K: Hash + Eq, V> {
    name: &'static str,
    inner: Mutex<Inner<K, V>>,
}

impl<K: Hash + Eq, V: Clone> BoundedCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// `name` only labels trace events.
    pub fn new(name: &'static str, capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            MatchError::InvalidConfig(format!("{} cache capacity must be greater than zero", name))
        })?;

        Ok(Self::with_capacity(name, capacity))
    }

    pub fn with_capacity(name: &'static str, capacity: NonZeroUsize) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
        }
    }

    /// Look up a value, promoting it to most recently used
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut inner = self.inner.lock();
        let value = inner.entries.get(key).cloned();
        if value.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        value
    }

    /// Insert or replace a value, making it most recently used
    pub fn insert(&self, key: K, value: V) {
        let mut inner = self.inner.lock();
        let evicts = !inner.entries.contains(&key)
            && inner.entries.len() == inner.entries.cap().get();

        inner.entries.put(key, value);

        if evicts {
            inner.evictions += 1;
            trace!(cache = self.name, "evicted least recently used entry");
        }
    }

    /// Check for a key without touching recency or counters
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().entries.cap().get()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
        inner.evictions = 0;
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            len: inner.entries.len(),
            capacity: inner.entries.cap().get(),
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
        }
    }
}
