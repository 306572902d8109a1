//! Integration test suite for netadm.
//!
//! End-to-end resolution scenarios over the in-memory fake inventory
//! source (`netadm::test_utils::FakeInventory`), which counts remote
//! lookups per identifier so cache behavior is assertable.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Test areas:
//! - **caching**: per-session fetch behavior of the object store
//! - **resolution**: full element resolution with inherited attributes

mod caching;
mod resolution;

use netadm::inventory::{InetResource, Node, Oid, Opaque};

/// Shorthand node constructor for building fake trees.
pub fn node(oid: Oid, parent: Option<Oid>, class: &str, name: &str) -> Node {
    Node {
        oid,
        parent_oid: parent,
        class: class.to_string(),
        name: name.to_string(),
        opaque: vec![],
        flags: None,
        role: None,
        resource: None,
    }
}

/// Attach an opaque attribute to a node.
pub fn with_opaque(mut node: Node, name: &str, values: &[&str]) -> Node {
    node.opaque.push(Opaque {
        name: name.to_string(),
        values: values.iter().map(|v| (*v).to_string()).collect(),
    });
    node
}

/// Attach an inet resource to a node.
pub fn with_resource(mut node: Node, address: &str, prefixlen: u8) -> Node {
    node.resource = Some(InetResource { address: address.to_string(), prefixlen });
    node
}
