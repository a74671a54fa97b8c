use crate::client::cache::{CacheEntry, QueryCache, ResourceKey};

/// Snapshot of a cache entry taken before an optimistic insert.
///
/// Settling consumes the value. Both outcomes leave the entry stale so the next read
/// reconciles with the server.
#[must_use = "an optimistic mutation must be committed or rolled back"]
#[derive(Debug)]
pub struct OptimisticMutation {
    key: ResourceKey,
    snapshot: Option<CacheEntry>,
}

impl OptimisticMutation {
    pub(crate) fn new(key: ResourceKey, snapshot: Option<CacheEntry>) -> Self {
        Self { key, snapshot }
    }

    pub fn key(&self) -> ResourceKey {
        self.key
    }

    /// The server accepted the mutation; keep the placeholder until the refetch replaces it
    pub fn commit(self, cache: &mut QueryCache) {
        cache.invalidate(self.key);
    }

    /// The server rejected the mutation; drop the placeholder by restoring the snapshot
    pub fn rollback(self, cache: &mut QueryCache) {
        cache.restore(self.key, self.snapshot);
        cache.invalidate(self.key);
    }

    /// Commits on `Ok`, rolls back on `Err`
    pub fn settle<T, E>(self, cache: &mut QueryCache, result: &Result<T, E>) {
        match result {
            Ok(_) => self.commit(cache),
            Err(_) => self.rollback(cache),
        }
    }
}
