//! Generic upward walk over ancestor chains.
//!
//! Both inheritance resolvers follow the same traversal: fetch the
//! current node, let a predicate inspect it, and on no match move to the
//! structural parent until the root is reached. The walk itself lives
//! here once, parameterized by the per-node visitor, so the two resolvers
//! differ only in their match logic.

use crate::constants::ROOT_OID;
use crate::core::Result;
use crate::inventory::node::{Node, Oid};
use crate::inventory::store::ObjectStore;

/// Walk upward from `start`, applying `visit` to each node on the chain.
///
/// `visit` receives the node and the number of hops from the starting
/// node (0 for the start itself) and returns `Some(value)` to stop the
/// walk with that value. The walk also stops, yielding `None`, when:
///
/// - the current identifier does not resolve to a node (NotFound), or
/// - the current node has no parent, or its parent is the root sentinel.
///
/// This is a strict single-chain traversal: no branching, no revisiting,
/// and the first match wins even if deeper ancestors would also match.
///
/// # Errors
///
/// Transport failures from the store propagate unmodified.
pub async fn walk_up<T, F>(store: &mut ObjectStore, start: Oid, mut visit: F) -> Result<Option<T>>
where
    F: FnMut(&Node, usize) -> Option<T>,
{
    let mut oid = start;
    let mut hops = 0usize;
    loop {
        let Some(node) = store.get(oid).await? else {
            tracing::debug!(oid, hops, "ancestor walk stopped: object not found");
            return Ok(None);
        };

        if let Some(value) = visit(node.as_ref(), hops) {
            return Ok(Some(value));
        }

        match node.parent_oid {
            Some(parent) if parent != ROOT_OID => {
                oid = parent;
                hops += 1;
            }
            _ => return Ok(None),
        }
    }
}
