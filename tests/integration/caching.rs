//! Object store cache behavior across whole resolution sessions.

use netadm::inventory::{ObjectStore, resolve};
use netadm::test_utils::FakeInventory;

use crate::{node, with_opaque};

#[tokio::test]
async fn found_objects_are_fetched_at_most_once_per_session() {
    let fake = FakeInventory::with_nodes(vec![
        node(10, Some(100), "element-attach", "sw1"),
        with_opaque(node(100, Some(1), "region", "west"), "alarm_destination", &["noc@example.com"]),
    ]);
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    // Three walks from the same element: parents, destination, timeperiod.
    resolve::search_parents(&mut store, 10).await.unwrap();
    resolve::search_opaque(&mut store, 10, "alarm_destination").await.unwrap();
    resolve::search_opaque(&mut store, 10, "alarm_timeperiod").await.unwrap();

    assert_eq!(counters.lookups_for(10), 1);
    assert_eq!(counters.lookups_for(100), 1);
}

#[tokio::test]
async fn missing_objects_are_requeried_every_time() {
    let fake = FakeInventory::with_nodes(vec![]);
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    for _ in 0..4 {
        assert!(store.get(77).await.unwrap().is_none());
    }
    assert_eq!(counters.lookups_for(77), 4);
}

#[tokio::test]
async fn batch_resolution_fetches_shared_ancestor_once() {
    // sw1 and sw2 share the region carrying the alarm destination;
    // core1 hangs under a bare region.
    let fake = FakeInventory::with_nodes(vec![
        node(10, Some(100), "element-attach", "sw1"),
        node(11, Some(100), "element-attach", "sw2"),
        node(12, Some(200), "element-attach", "core1"),
        with_opaque(node(100, Some(1), "region", "west"), "alarm_destination", &["noc@example.com"]),
        node(200, Some(1), "region", "east"),
    ])
    .with_subtree(
        1,
        vec![
            node(10, Some(100), "element-attach", "sw1"),
            node(11, Some(100), "element-attach", "sw2"),
            node(12, Some(200), "element-attach", "core1"),
        ],
    );
    let counters = fake.counters();
    let mut store = ObjectStore::new(Box::new(fake));

    let elements = resolve::resolve_elements(&mut store, None, "net.example.com").await.unwrap();
    assert_eq!(elements.len(), 3);

    assert_eq!(counters.lookups_for(100), 1);
    assert_eq!(counters.lookups_for(200), 1);
    // One lookup per element plus one per distinct region, nothing else.
    assert_eq!(counters.total_lookups(), 5);

    assert_eq!(elements[0].alarm_destination.as_deref(), Some("noc@example.com"));
    assert_eq!(elements[1].alarm_destination.as_deref(), Some("noc@example.com"));
    assert_eq!(elements[2].alarm_destination, None);
}
