use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use super::DomainMatcher;
use crate::domain::Domain;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Domain matcher with an LRU cache of verdicts.
///
/// The wrapped matcher is shared through an `Arc` and stays lock-free; only
/// the cache sits behind a mutex.
pub struct CachedMatcher {
    matcher: Arc<DomainMatcher>,
    /// Canonical key -> forbidden
    cache: Mutex<LruCache<String, bool>>,
}

impl CachedMatcher {
    /// Wrap a matcher. A `cache_size` of 0 is treated as 1.
    pub fn new(matcher: impl Into<Arc<DomainMatcher>>, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            matcher: matcher.into(),
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Check if `query` is forbidden, consulting the cache first
    pub fn is_forbidden(&self, query: &Domain) -> bool {
        let mut cache = self.cache.lock();

        if let Some(&forbidden) = cache.get(query.key()) {
            return forbidden;
        }

        // Lookup is CPU-only, holding the lock avoids computing a key twice
        let forbidden = self.matcher.is_forbidden(query);
        cache.put(query.key().to_owned(), forbidden);
        forbidden
    }

    /// The underlying matcher
    pub fn matcher(&self) -> &Arc<DomainMatcher> {
        &self.matcher
    }

    /// Number of cached verdicts
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop all cached verdicts
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl std::fmt::Debug for CachedMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedMatcher")
            .field("matcher", &self.matcher)
            .field("cache_len", &self.cache_len())
            .finish()
    }
}
