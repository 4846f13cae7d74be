//! Content-addressed memo tables.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{
        Arc, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::Serialize;

/// Hit/miss counters for one memo table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that had to compute.
    pub misses: u64,
    /// Distinct keys currently stored.
    pub entries: usize,
}

/// A cache from input values to stage outputs.
///
/// Keys are compared and hashed structurally; an entry is reused whenever a
/// later run presents an input equal in content to one already seen. Entries
/// are never evicted; superseded inputs simply stop being looked up, and a
/// host that wants to reclaim the memory drops the owning generator.
#[derive(Debug)]
pub struct MemoTable<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> Default for MemoTable<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MemoTable<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up `key`, computing and storing the value on a miss.
    ///
    /// Returns the cached value and whether this call computed it. The
    /// computation runs outside the write lock; if two callers race on the
    /// same key, one insert wins and both observe the same stored value.
    /// Stage functions are pure, so the race is idempotent.
    pub fn get_or_compute(&self, key: &K, compute: impl FnOnce() -> V) -> (Arc<V>, bool) {
        if let Some(value) = self.entries.read().unwrap().get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return (Arc::clone(value), false);
        }

        let computed = Arc::new(compute());
        self.misses.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.write().unwrap();
        let stored = entries
            .entry(key.clone())
            .or_insert_with(|| Arc::clone(&computed));
        (Arc::clone(stored), true)
    }

    /// Look up `key` without computing.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.entries.read().unwrap().get(key).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
