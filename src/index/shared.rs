use crate::index::build::SearchIndexTable;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Handle to the current table, replaced wholesale when search data is regenerated.
///
/// Readers take a [`snapshot`](SharedIndex::snapshot) and keep using it for as
/// long as they like. [`replace`](SharedIndex::replace) swaps in a new table;
/// snapshots taken before the swap still see the old one.
#[derive(Clone)]
pub struct SharedIndex {
    current: Arc<RwLock<Arc<SearchIndexTable>>>,
}

impl SharedIndex {
    pub fn new(table: SearchIndexTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Current table
    pub fn snapshot(&self) -> Arc<SearchIndexTable> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new table, returning the previous one
    pub fn replace(&self, table: SearchIndexTable) -> Arc<SearchIndexTable> {
        let next = Arc::new(table);
        info!(entries = next.len(), "replacing search index");
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }
}
