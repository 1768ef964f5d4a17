#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

use taskdag::{Dag, DirectedEdge};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Turn `(src, dst)` pairs into edges.
pub fn edges(pairs: &[(u32, u32)]) -> Vec<DirectedEdge<u32>> {
    pairs
        .iter()
        .map(|&(src, dst)| DirectedEdge::new(src, dst))
        .collect()
}

/// The canonical test graph:
///
/// ```text
/// 0->1->2-\
/// \->3---->4
/// ```
pub fn canonical_graph() -> Dag<u32> {
    Dag::new(edges(&[(0, 1), (1, 2), (0, 3), (3, 4), (2, 4)]))
}

/// Assert that `order` is a permutation of `graph.all_nodes()` in which
/// every edge points from an earlier to a later node.
pub fn assert_topological(graph: &Dag<u32>) {
    let order = graph.sorted_nodes();

    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(
        sorted.as_slice(),
        graph.all_nodes(),
        "topological order is not a permutation of all nodes"
    );

    let rank = |n: u32| order.iter().position(|&x| x == n).unwrap();
    for edge in graph.edges_by_src() {
        assert!(
            rank(edge.src()) < rank(edge.dst()),
            "edge ({}, {}) violated by topological order {:?}",
            edge.src(),
            edge.dst(),
            order
        );
    }
}
