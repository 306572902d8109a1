//! Test support: an in-memory inventory source.
//!
//! [`FakeInventory`] implements [`ObjectSource`] over a fixed node set
//! and counts remote lookups per identifier, so tests can assert the
//! cache behavior of the resolution core (single fetch per found id, no
//! negative caching) without a network.
//!
//! Available to the unit tests and, through the `test-utils` feature, to
//! the integration suite.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::Result;
use crate::inventory::node::{Node, Oid};
use crate::inventory::transport::ObjectSource;

/// Per-oid remote lookup counters, shared with the test body.
#[derive(Default)]
pub struct LookupCounters {
    lookups: Mutex<HashMap<Oid, usize>>,
}

impl LookupCounters {
    /// How many times `lookup_by_id` ran for `oid`.
    pub fn lookups_for(&self, oid: Oid) -> usize {
        *self.lookups.lock().unwrap().get(&oid).unwrap_or(&0)
    }

    /// Total remote lookups across all identifiers.
    pub fn total_lookups(&self) -> usize {
        self.lookups.lock().unwrap().values().sum()
    }

    fn record(&self, oid: Oid) {
        *self.lookups.lock().unwrap().entry(oid).or_insert(0) += 1;
    }
}

/// In-memory [`ObjectSource`] over a fixed node set.
pub struct FakeInventory {
    nodes: HashMap<Oid, Node>,
    /// Canned bulk-query answers, keyed by subtree root.
    subtrees: HashMap<Oid, Vec<Node>>,
    counters: Arc<LookupCounters>,
}

impl FakeInventory {
    /// Build a fake answering id lookups from `nodes`.
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|node| (node.oid, node)).collect(),
            subtrees: HashMap::new(),
            counters: Arc::new(LookupCounters::default()),
        }
    }

    /// Add a canned bulk-query response for the subtree rooted at `root`.
    #[must_use]
    pub fn with_subtree(mut self, root: Oid, nodes: Vec<Node>) -> Self {
        self.subtrees.insert(root, nodes);
        self
    }

    /// Handle to the lookup counters, valid after the fake is moved into
    /// a store.
    pub fn counters(&self) -> Arc<LookupCounters> {
        Arc::clone(&self.counters)
    }
}

#[async_trait]
impl ObjectSource for FakeInventory {
    async fn lookup_by_id(&self, oid: Oid) -> Result<Vec<Node>> {
        self.counters.record(oid);
        Ok(self.nodes.get(&oid).cloned().into_iter().collect())
    }

    async fn bulk_query(&self, root: Oid, class_filter: &str, _depth: u32) -> Result<Vec<Node>> {
        let classes: Vec<&str> = class_filter.split(',').collect();
        Ok(self
            .subtrees
            .get(&root)
            .map(|nodes| {
                nodes
                    .iter()
                    .filter(|node| classes.contains(&node.class.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
