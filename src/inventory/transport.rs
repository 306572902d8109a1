//! Transport seam between the resolution core and the remote inventory.
//!
//! The core only needs two remote capabilities, expressed as the
//! [`ObjectSource`] trait: exact lookup by identifier and a class-filtered
//! subtree query. The production implementation is the SOAP client in
//! [`soap`](super::soap); tests substitute an in-memory fake.

use async_trait::async_trait;

use crate::core::Result;
use crate::inventory::node::{Node, Oid};

/// Remote lookup capabilities of the inventory system.
///
/// Implementations must propagate transport failures unmodified; "no such
/// object" is expressed as an empty result list, not an error.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Look up a node by exact identifier.
    ///
    /// Returns zero or one node. Anything beyond the first entry is
    /// ignored by callers (querying by unique identifier cannot match
    /// more than one object on a correctly behaving remote).
    async fn lookup_by_id(&self, oid: Oid) -> Result<Vec<Node>>;

    /// Return all nodes at or below `root` whose class is in
    /// `class_filter` (comma-separated class list).
    ///
    /// `depth = 0` matches at the class boundary without descending
    /// through matched nodes; a positive depth additionally returns
    /// matched descendant classes (used for interface/address pairs).
    async fn bulk_query(&self, root: Oid, class_filter: &str, depth: u32) -> Result<Vec<Node>>;
}
