//! End-to-end element resolution scenarios.

use netadm::inventory::{ObjectStore, resolve};
use netadm::test_utils::FakeInventory;

use crate::{node, with_opaque, with_resource};

/// root(1) <- core1(5, element) <- sw1(10, element): the parent of sw1
/// is core1, found one hop up, and the walk stops there.
#[tokio::test]
async fn parent_resolved_from_nearest_ancestor_element() {
    let fake = FakeInventory::with_nodes(vec![
        node(10, Some(5), "element-attach", "sw1"),
        node(5, Some(1), "element-attach", "core1"),
    ])
    .with_subtree(10, vec![])
    .with_subtree(1, vec![node(10, Some(5), "element-attach", "sw1")]);
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    let elements = resolve::resolve_elements(&mut store, None, "net.example.com").await.unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].name, "sw1.net.example.com");
    assert_eq!(elements[0].parents, "core1.net.example.com");

    // Exactly one intermediate hop: core1 fetched, root never.
    assert_eq!(counters.lookups_for(5), 1);
    assert_eq!(counters.lookups_for(1), 0);
}

/// An explicit `parents` opaque on the starting node wins outright,
/// even though the starting node is itself an element.
#[tokio::test]
async fn explicit_parents_opaque_wins_on_starting_node() {
    let fake = FakeInventory::with_nodes(vec![with_opaque(
        node(10, Some(5), "element-attach", "sw1"),
        "parents",
        &["AGG1,agg2.other.org"],
    )]);
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    let raw = resolve::search_parents(&mut store, 10).await.unwrap();
    assert_eq!(raw.as_deref(), Some("AGG1,agg2.other.org"));
    assert_eq!(counters.lookups_for(5), 0);
}

/// Comma-separated parent lists are split, qualified, and rejoined by
/// the batch driver.
#[tokio::test]
async fn parent_list_is_qualified_per_name() {
    let fake = FakeInventory::with_nodes(vec![with_opaque(
        node(10, Some(1), "element-attach", "SW1"),
        "parents",
        &["AGG1,agg2.other.org"],
    )])
    .with_subtree(1, vec![with_opaque(
        node(10, Some(1), "element-attach", "SW1"),
        "parents",
        &["AGG1,agg2.other.org"],
    )]);
    let mut store = ObjectStore::new(Box::new(fake));

    let elements = resolve::resolve_elements(&mut store, None, "net.example.com").await.unwrap();
    assert_eq!(elements[0].name, "sw1.net.example.com");
    assert_eq!(elements[0].parents, "agg1.net.example.com,agg2.other.org");
}

/// An alarm destination on the element itself resolves with zero
/// ancestor hops.
#[tokio::test]
async fn alarm_destination_on_element_needs_no_ancestors() {
    let fake = FakeInventory::with_nodes(vec![with_opaque(
        node(20, Some(5), "element-attach", "sw1"),
        "alarm_destination",
        &["ops@example.com"],
    )]);
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    let value = resolve::search_opaque(&mut store, 20, "alarm_destination").await.unwrap();
    assert_eq!(value.as_deref(), Some("ops@example.com"));
    assert_eq!(counters.lookups_for(5), 0);
    assert_eq!(counters.total_lookups(), 1);
}

/// Elements with nothing to inherit come back with empty parents and no
/// alarm routing, not an error.
#[tokio::test]
async fn absence_is_a_valid_result() {
    let fake = FakeInventory::with_nodes(vec![
        node(10, Some(200), "element-attach", "lone1"),
        node(200, Some(1), "region", "east"),
    ])
    .with_subtree(1, vec![node(10, Some(200), "element-attach", "lone1")]);
    let mut store = ObjectStore::new(Box::new(fake));

    let elements = resolve::resolve_elements(&mut store, None, "net.example.com").await.unwrap();
    assert_eq!(elements[0].parents, "");
    assert_eq!(elements[0].alarm_destination, None);
    assert_eq!(elements[0].alarm_timeperiod, None);
}

/// Interface enumeration pairs each interface with its inet resource
/// and honors the disable flag.
#[tokio::test]
async fn interfaces_paired_with_addresses() {
    let mut eth1 = node(101, Some(10), "interface", "eth1");
    eth1.flags = Some("disable,other".to_string());

    let fake = FakeInventory::with_nodes(vec![node(10, Some(1), "element-attach", "sw1")])
        .with_subtree(
            10,
            vec![
                node(100, Some(10), "interface", "eth0"),
                eth1,
                with_resource(node(300, Some(100), "resource-inet", "inet"), "203.0.113.5", 31),
            ],
        );
    let mut store = ObjectStore::new(Box::new(fake));

    let interfaces = resolve::element_interfaces(&mut store, 10).await.unwrap();
    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[0].prefix.as_deref(), Some("203.0.113.5/31"));
    assert!(interfaces[0].enabled);
    assert!(!interfaces[1].enabled);
}
