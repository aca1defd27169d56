//! Explicit cache for mixture parameters.
//!
//! Building the parameters of a mixture is expensive compared to evaluating
//! the activity coefficients, which is done many times in the course of a
//! phase equilibrium calculation. The cache is owned by the caller (e.g. the
//! solver context) and shared by reference.
use crate::parameter::Identifier;
use crate::unifac::{GroupTables, UnifacParameters};
use crate::ActivityResult;
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Tables compared by identity.
///
/// The key owns the tables, so their address cannot be reused by other
/// tables while the entry is cached.
#[derive(Clone, Debug)]
struct TablesRef(Arc<GroupTables>);

impl PartialEq for TablesRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TablesRef {}

impl Hash for TablesRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state)
    }
}

/// Chemicals are identified by their registry ids. The order matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    tables: TablesRef,
    chemicals: Vec<Identifier>,
}

/// Thread safe cache of [UnifacParameters] keyed by the group tables and
/// the ordered chemicals of the mixture.
///
/// Parameters built from different [GroupTables] instances are kept
/// apart, even if the tables belong to the same method.
#[derive(Debug, Default)]
pub struct ParameterCache {
    map: Mutex<IndexMap<CacheKey, Arc<UnifacParameters>>>,
    max_size: Option<usize>,
    hit: AtomicU64,
    miss: AtomicU64,
}

impl ParameterCache {
    /// Creates an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that holds at most `max_size` entries. If the cache
    /// is full, the oldest entry is removed.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..Default::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<CacheKey, Arc<UnifacParameters>>> {
        // the map is never left in an inconsistent state
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached parameters for the chemicals or builds and
    /// inserts them using `f`.
    ///
    /// Errors of `f` are returned and nothing is inserted. Concurrent first
    /// requests for the same key may both build the parameters; only the
    /// first inserted result is kept and returned to both callers.
    pub fn get_or_try_insert_with<F>(
        &self,
        tables: &Arc<GroupTables>,
        chemicals: Vec<Identifier>,
        f: F,
    ) -> ActivityResult<Arc<UnifacParameters>>
    where
        F: FnOnce() -> ActivityResult<UnifacParameters>,
    {
        let method = tables.method;
        let key = CacheKey {
            tables: TablesRef(tables.clone()),
            chemicals,
        };
        if let Some(parameters) = self.lock().get(&key) {
            self.hit.fetch_add(1, Ordering::Relaxed);
            debug!("{} parameters for {:?} taken from cache", method, ids(&key));
            return Ok(parameters.clone());
        }

        self.miss.fetch_add(1, Ordering::Relaxed);
        debug!("building {} parameters for {:?}", method, ids(&key));
        let parameters = Arc::new(f()?);

        let mut map = self.lock();
        let parameters = map.entry(key).or_insert(parameters).clone();
        if let Some(max_size) = self.max_size {
            while map.len() > max_size {
                map.shift_remove_index(0);
            }
        }
        Ok(parameters)
    }

    /// Number of cached parameter sets.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.lock().clear()
    }

    pub fn hits(&self) -> u64 {
        self.hit.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.miss.load(Ordering::Relaxed)
    }
}

fn ids(key: &CacheKey) -> Vec<&str> {
    key.chemicals.iter().map(|c| c.id.as_str()).collect()
}
