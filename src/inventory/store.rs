//! Memoizing object store over an [`ObjectSource`].
//!
//! The resolvers walk the same ancestor chains over and over (every
//! element under a region shares that region's ancestors), so the store
//! caches every successfully fetched node for the lifetime of the
//! session. The cache is owned by the store instance — there is no
//! process-wide state — and is never invalidated mid-session: remote
//! inventory is assumed immutable while a resolution run is in progress.
//!
//! Negative results are intentionally *not* cached. A missing identifier
//! is rare and sessions are short, so re-querying on every access is
//! cheaper than reasoning about stale negative entries.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::Result;
use crate::inventory::node::{Node, Oid};
use crate::inventory::transport::ObjectSource;

/// Identifier-keyed cache of fetched tree nodes.
///
/// Single entry point for fetching a node; memoizes transparently.
pub struct ObjectStore {
    source: Box<dyn ObjectSource>,
    cache: HashMap<Oid, Arc<Node>>,
}

impl ObjectStore {
    /// Create an empty store backed by `source`.
    pub fn new(source: Box<dyn ObjectSource>) -> Self {
        Self { source, cache: HashMap::new() }
    }

    /// Fetch one node, using the cache.
    ///
    /// Cache hits return without network access. On a miss, exactly one
    /// remote lookup is issued; a found node is cached under its own
    /// identifier. `Ok(None)` means the remote has no such object and
    /// nothing is cached for that identifier.
    ///
    /// # Errors
    ///
    /// Transport failures from the underlying source propagate unmodified.
    pub async fn get(&mut self, oid: Oid) -> Result<Option<Arc<Node>>> {
        if let Some(node) = self.cache.get(&oid) {
            tracing::trace!(oid, "object cache hit");
            return Ok(Some(Arc::clone(node)));
        }

        let mut nodes = self.source.lookup_by_id(oid).await?;
        if nodes.is_empty() {
            tracing::debug!(oid, "object not found");
            return Ok(None);
        }
        if nodes.len() > 1 {
            // Unique-id lookups cannot match twice on a sane remote.
            tracing::debug!(oid, count = nodes.len(), "lookup returned multiple objects, taking first");
        }
        let node = Arc::new(nodes.swap_remove(0));
        self.cache.insert(oid, Arc::clone(&node));
        Ok(Some(node))
    }

    /// Class-filtered subtree query, passed through to the source.
    ///
    /// Bulk results are not inserted into the cache: bulk responses omit
    /// fields (opaque lists in some remote versions) that per-id lookups
    /// include, so mixing them would change resolver behavior.
    pub async fn bulk_query(
        &self,
        root: Oid,
        class_filter: &str,
        depth: u32,
    ) -> Result<Vec<Node>> {
        self.source.bulk_query(root, class_filter, depth).await
    }

    /// Number of cached nodes.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeInventory;

    fn plain_node(oid: Oid, parent: Option<Oid>) -> Node {
        Node {
            oid,
            parent_oid: parent,
            class: "region".to_string(),
            name: format!("node{oid}"),
            opaque: vec![],
            flags: None,
            role: None,
            resource: None,
        }
    }

    #[tokio::test]
    async fn test_found_node_fetched_once() {
        let fake = FakeInventory::with_nodes(vec![plain_node(5, Some(1))]);
        let counters = fake.counters();
        let mut store = ObjectStore::new(Box::new(fake));

        let first = store.get(5).await.unwrap().unwrap();
        let second = store.get(5).await.unwrap().unwrap();
        assert_eq!(first.oid, second.oid);
        assert_eq!(counters.lookups_for(5), 1);
        assert_eq!(store.cached_len(), 1);
    }

    #[tokio::test]
    async fn test_missing_node_not_negatively_cached() {
        let fake = FakeInventory::with_nodes(vec![]);
        let counters = fake.counters();
        let mut store = ObjectStore::new(Box::new(fake));

        for _ in 0..3 {
            assert!(store.get(99).await.unwrap().is_none());
        }
        assert_eq!(counters.lookups_for(99), 3);
        assert_eq!(store.cached_len(), 0);
    }
}
