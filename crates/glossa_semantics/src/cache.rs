//! Bounded LRU cache for analysis outcomes.
//!
//! Keys hash the input text together with the language code and the
//! registry generation, so registering new patterns invalidates stale
//! entries implicitly: the old generation's keys simply stop being asked
//! for and age out.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::analyzer::AnalysisOutcome;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

#[derive(Clone, Debug)]
struct Entry {
    outcome: AnalysisOutcome,
    last_access: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<u64, Entry>,
    tick: u64,
}

/// A thread-safe bounded cache of analysis outcomes.
#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl AnalysisCache {
    /// Creates a cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// The cache key for one analysis request.
    #[must_use]
    pub fn key(text: &str, language: &str, generation: u64) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        language.hash(&mut hasher);
        generation.hash(&mut hasher);
        hasher.finish()
    }

    /// Looks up a cached outcome, refreshing its recency.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<AnalysisOutcome> {
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;
        let entry = inner.entries.get_mut(&key)?;
        entry.last_access = tick;
        trace!(key, "analysis cache hit");
        Some(entry.outcome.clone())
    }

    /// Stores an outcome, evicting the least recently used entry when full.
    pub fn insert(&self, key: u64, outcome: AnalysisOutcome) {
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;
        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| *k)
            {
                inner.entries.remove(&oldest);
                trace!(key = oldest, "evicted analysis cache entry");
            }
        }
        inner.entries.insert(
            key,
            Entry {
                outcome,
                last_access: tick,
            },
        );
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
