//! Data records for objects in the remote inventory tree.
//!
//! The remote system models everything as nodes in a single rooted tree:
//! routers, access switches, geographic groupings, service definitions.
//! Each node carries a class tag, a structural parent link, and an
//! optional list of free-form "opaque" attributes used for configuration
//! inheritance (a node without its own `alarm_destination` inherits the
//! nearest ancestor's).
//!
//! Nodes are immutable once fetched; nothing in this crate writes back
//! to the remote tree.

use serde::{Deserialize, Serialize};

/// Opaque numeric object identifier, unique per tree, assigned remotely.
pub type Oid = i64;

/// One object in the remote hierarchical inventory tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier of this node.
    pub oid: Oid,
    /// Identifier of the structural parent, `None` for the root.
    pub parent_oid: Option<Oid>,
    /// Node class tag, e.g. `element-attach`, `interface`, `region`.
    pub class: String,
    /// Node name. For elements this is a (possibly unqualified) hostname.
    pub name: String,
    /// Attached opaque attributes. Empty when the node carries none.
    ///
    /// An entry being present with an empty value list is distinct from
    /// the entry being absent; the resolvers treat the former as "does
    /// not satisfy the match" and keep walking.
    #[serde(default)]
    pub opaque: Vec<Opaque>,
    /// Raw flags string, only populated for interface nodes.
    #[serde(default)]
    pub flags: Option<String>,
    /// Interface role (uplink, access, ...), only on interface nodes.
    #[serde(default)]
    pub role: Option<String>,
    /// Address resource, only populated for `resource-inet` nodes.
    #[serde(default)]
    pub resource: Option<InetResource>,
}

/// A named, possibly multi-valued, free-form attribute on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opaque {
    pub name: String,
    /// Ordered values. The resolvers only ever consume the first one.
    pub values: Vec<String>,
}

/// IP address resource attached below an interface node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InetResource {
    pub address: String,
    pub prefixlen: u8,
}

impl Node {
    /// First value of the first opaque entry named `name` that has at
    /// least one value. Entries with an empty value list never match.
    pub fn opaque_value(&self, name: &str) -> Option<&str> {
        self.opaque
            .iter()
            .find(|entry| entry.name == name && !entry.values.is_empty())
            .map(|entry| entry.values[0].as_str())
    }
}

impl InetResource {
    /// CIDR string form, `address/prefixlen`.
    pub fn prefix(&self) -> String {
        format!("{}/{}", self.address, self.prefixlen)
    }
}
