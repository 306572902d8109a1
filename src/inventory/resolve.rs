//! Inheritance resolution over the inventory tree.
//!
//! Elements inherit configuration they do not carry themselves from
//! their ancestors: alarm routing comes from the nearest ancestor with
//! the matching opaque attribute, and the logical "parent" device is
//! either declared explicitly (opaque `parents`) or implied by the
//! nearest enclosing element node. Both resolutions are upward walks
//! over [`walk_up`](crate::inventory::walk::walk_up), served by the
//! shared [`ObjectStore`] so a batch run fetches each ancestor once.

use serde::Serialize;

use crate::constants::{
    ALARM_DESTINATION_OPAQUE, ALARM_TIMEPERIOD_OPAQUE, ELEMENT_CLASS, PARENTS_OPAQUE, ROOT_OID,
};
use crate::core::Result;
use crate::inventory::node::Oid;
use crate::inventory::store::ObjectStore;
use crate::inventory::walk::walk_up;

/// One element with its inherited attributes resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedElement {
    pub oid: Oid,
    /// Lower-cased, domain-qualified element name.
    pub name: String,
    /// Comma-joined qualified parent names, empty when none resolve.
    pub parents: String,
    /// Inherited alarm routing target, if any ancestor declares one.
    pub alarm_destination: Option<String>,
    /// Inherited alarm time period, if any ancestor declares one.
    pub alarm_timeperiod: Option<String>,
}

/// One interface of an element, with its primary address if assigned.
#[derive(Debug, Clone, Serialize)]
pub struct Interface {
    pub name: String,
    pub role: Option<String>,
    /// `address/prefixlen` of the attached inet resource, if any.
    pub prefix: Option<String>,
    pub enabled: bool,
}

/// Search ancestors for the first occurrence of an opaque attribute.
///
/// Walks upward from `oid`; the first node carrying a non-empty entry
/// named `name` supplies the value (its first value — multi-valued
/// entries are not expanded). An entry that is present but has no values
/// does not count; the walk continues past it as if the attribute were
/// absent. `None` when no ancestor up to the root qualifies.
pub async fn search_opaque(
    store: &mut ObjectStore,
    oid: Oid,
    name: &str,
) -> Result<Option<String>> {
    walk_up(store, oid, |node, _| node.opaque_value(name).map(str::to_string)).await
}

/// Resolve the logical parent(s) of a node.
///
/// Two sources are checked at each node on the way up, in priority
/// order:
///
/// 1. An opaque attribute named `parents` — its raw value (possibly a
///    comma-separated list) wins immediately, even on the starting node.
/// 2. The node's own name, when the node is an element and the walk has
///    moved at least one hop: an element never names itself as its own
///    parent.
///
/// The returned string is raw; callers qualify the names with
/// [`qualify_name`].
pub async fn search_parents(store: &mut ObjectStore, oid: Oid) -> Result<Option<String>> {
    walk_up(store, oid, |node, hops| {
        if let Some(value) = node.opaque_value(PARENTS_OPAQUE) {
            return Some(value.to_string());
        }
        if hops > 0 && node.class == ELEMENT_CLASS {
            return Some(node.name.clone());
        }
        None
    })
    .await
}

/// Lower-case `name` and append `.{domain}` when it has no domain part.
pub fn qualify_name(name: &str, domain: &str) -> String {
    let name = name.to_lowercase();
    if name.contains('.') { name } else { format!("{name}.{domain}") }
}

/// Split a raw comma-separated parent list and qualify each entry.
fn qualify_parents(raw: &str, domain: &str) -> String {
    raw.split(',')
        .map(|parent| qualify_name(parent, domain))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve every element under `start_oid` (default: the whole tree).
///
/// Issues one bulk query for the element class (no structural descent
/// past matches), then resolves parents and alarm routing per element
/// via the ancestor walks. Results come back in bulk-response order;
/// ordering has no semantic effect since each resolution is a pure
/// function over the shared cache.
pub async fn resolve_elements(
    store: &mut ObjectStore,
    start_oid: Option<Oid>,
    default_domain: &str,
) -> Result<Vec<ResolvedElement>> {
    let start = start_oid.unwrap_or(ROOT_OID);
    let nodes = store.bulk_query(start, ELEMENT_CLASS, 0).await?;
    tracing::debug!(start, count = nodes.len(), "resolving elements");

    let mut resolved = Vec::with_capacity(nodes.len());
    for node in nodes {
        let name = qualify_name(&node.name, default_domain);

        let parents = match search_parents(store, node.oid).await? {
            Some(raw) => qualify_parents(&raw, default_domain),
            None => String::new(),
        };
        let alarm_destination = search_opaque(store, node.oid, ALARM_DESTINATION_OPAQUE).await?;
        let alarm_timeperiod = search_opaque(store, node.oid, ALARM_TIMEPERIOD_OPAQUE).await?;

        resolved.push(ResolvedElement {
            oid: node.oid,
            name,
            parents,
            alarm_destination,
            alarm_timeperiod,
        });
    }
    Ok(resolved)
}

/// Interfaces of one element, each paired with its inet resource.
///
/// One depth-2 bulk query returns the interface nodes together with
/// their `resource-inet` children; children are matched back to their
/// interface through the parent link. An interface whose flags contain
/// `disable` is reported as not enabled.
pub async fn element_interfaces(store: &mut ObjectStore, oid: Oid) -> Result<Vec<Interface>> {
    let nodes = store.bulk_query(oid, "interface,resource-inet", 2).await?;

    let mut interfaces = Vec::new();
    for node in &nodes {
        if node.class != "interface" {
            continue;
        }
        let enabled = match &node.flags {
            Some(flags) => !flags.contains("disable"),
            None => true,
        };
        let prefix = nodes
            .iter()
            .find(|child| {
                child.class == "resource-inet" && child.parent_oid == Some(node.oid)
            })
            .and_then(|child| child.resource.as_ref())
            .map(|resource| resource.prefix());

        interfaces.push(Interface {
            name: node.name.clone(),
            role: node.role.clone(),
            prefix,
            enabled,
        });
    }
    Ok(interfaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::node::{InetResource, Node, Opaque};
    use crate::test_utils::FakeInventory;

    fn node(oid: Oid, parent: Option<Oid>, class: &str, name: &str, opaque: Vec<Opaque>) -> Node {
        Node {
            oid,
            parent_oid: parent,
            class: class.to_string(),
            name: name.to_string(),
            opaque,
            flags: None,
            role: None,
            resource: None,
        }
    }

    fn opaque(name: &str, values: &[&str]) -> Opaque {
        Opaque {
            name: name.to_string(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    #[test]
    fn test_qualify_name() {
        assert_eq!(qualify_name("SW1", "net.example.com"), "sw1.net.example.com");
        assert_eq!(qualify_name("sw1.other.org", "net.example.com"), "sw1.other.org");
    }

    #[tokio::test]
    async fn test_search_opaque_empty_values_walks_on() {
        // 10 carries the attribute with zero values; 20 has the real one.
        let fake = FakeInventory::with_nodes(vec![
            node(10, Some(20), "element-attach", "sw1", vec![opaque("alarm_destination", &[])]),
            node(
                20,
                Some(1),
                "region",
                "west",
                vec![opaque("alarm_destination", &["ops@example.com"])],
            ),
        ]);
        let mut store = ObjectStore::new(Box::new(fake));

        let value = search_opaque(&mut store, 10, "alarm_destination").await.unwrap();
        assert_eq!(value.as_deref(), Some("ops@example.com"));
    }

    #[tokio::test]
    async fn test_search_opaque_direct_hit_no_ancestor_fetch() {
        let fake = FakeInventory::with_nodes(vec![node(
            20,
            Some(5),
            "element-attach",
            "sw1",
            vec![opaque("alarm_destination", &["ops@example.com"])],
        )]);
        let counters = fake.counters();
        let mut store = ObjectStore::new(Box::new(fake));

        let value = search_opaque(&mut store, 20, "alarm_destination").await.unwrap();
        assert_eq!(value.as_deref(), Some("ops@example.com"));
        assert_eq!(counters.lookups_for(5), 0);
    }

    #[tokio::test]
    async fn test_search_parents_opaque_wins_on_starting_node() {
        let fake = FakeInventory::with_nodes(vec![node(
            10,
            Some(5),
            "element-attach",
            "sw1",
            vec![opaque("parents", &["a,b"])],
        )]);
        let mut store = ObjectStore::new(Box::new(fake));

        let parents = search_parents(&mut store, 10).await.unwrap();
        assert_eq!(parents.as_deref(), Some("a,b"));
    }

    #[tokio::test]
    async fn test_search_parents_excludes_self_element_match() {
        // Starting node is itself an element; its own name must not win.
        let fake = FakeInventory::with_nodes(vec![
            node(10, Some(5), "element-attach", "sw1", vec![]),
            node(5, Some(1), "element-attach", "core1", vec![]),
        ]);
        let mut store = ObjectStore::new(Box::new(fake));

        let parents = search_parents(&mut store, 10).await.unwrap();
        assert_eq!(parents.as_deref(), Some("core1"));
    }

    #[tokio::test]
    async fn test_search_parents_none_up_to_root() {
        let fake = FakeInventory::with_nodes(vec![
            node(10, Some(5), "element-attach", "sw1", vec![]),
            node(5, Some(1), "region", "west", vec![]),
        ]);
        let mut store = ObjectStore::new(Box::new(fake));

        assert_eq!(search_parents(&mut store, 10).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_element_interfaces_pairing_and_flags() {
        let mut eth0 = node(100, Some(10), "interface", "eth0", vec![]);
        eth0.role = Some("uplink".to_string());
        let mut eth1 = node(101, Some(10), "interface", "eth1", vec![]);
        eth1.flags = Some("disable".to_string());
        let mut inet = node(200, Some(100), "resource-inet", "inet", vec![]);
        inet.resource = Some(InetResource { address: "192.0.2.1".to_string(), prefixlen: 24 });

        let fake = FakeInventory::with_nodes(vec![node(10, Some(1), "element-attach", "sw1", vec![])])
            .with_subtree(10, vec![eth0, eth1, inet]);
        let mut store = ObjectStore::new(Box::new(fake));

        let interfaces = element_interfaces(&mut store, 10).await.unwrap();
        assert_eq!(interfaces.len(), 2);

        assert_eq!(interfaces[0].name, "eth0");
        assert_eq!(interfaces[0].role.as_deref(), Some("uplink"));
        assert_eq!(interfaces[0].prefix.as_deref(), Some("192.0.2.1/24"));
        assert!(interfaces[0].enabled);

        assert_eq!(interfaces[1].name, "eth1");
        assert_eq!(interfaces[1].prefix, None);
        assert!(!interfaces[1].enabled);
    }
}
