// src/dag/query.rs

//! Read-only query algorithms over a [`Dag`].
//!
//! Every function here is a pure, stateless traversal: it borrows the
//! container, allocates its own working storage, and returns an owned,
//! sorted, deduplicated `Vec` of node ids. Re-running a query with the same
//! arguments against the same container yields identical results.
//!
//! Failure contract: an invalid container answers no queries
//! ([`QueryError::InvalidGraph`]); failure never yields partial results.
//! The pure reachability queries ([`find_before`], [`find_after`],
//! [`find_all_before`], [`find_all_after`]) do *not* require the node to be
//! a member of the graph — an unknown node yields an empty, successful
//! result, since nothing points to a node that does not exist.
//! [`find_all_siblings`] asks a question about the node's position within
//! the node set and therefore *does* require membership
//! ([`QueryError::UnknownNode`]).

use crate::dag::edge::DirectedEdge;
use crate::dag::graph::Dag;
use crate::errors::{QueryError, Result};

/// Direct predecessors of `node`: sources of edges arriving at it.
///
/// Sorted ascending, deduplicated. A node with no incoming edges (or one
/// absent from the graph) yields an empty, successful result.
pub fn find_before<N: Ord + Copy>(graph: &Dag<N>, node: N) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }

    // Incoming edges are sorted by (dst, src), so sources arrive sorted.
    let mut out: Vec<N> = graph.incoming(node).iter().map(|e| e.src()).collect();
    out.dedup();
    Ok(out)
}

/// Direct successors of `node`: destinations of edges leaving it.
///
/// Sorted ascending, deduplicated.
pub fn find_after<N: Ord + Copy>(graph: &Dag<N>, node: N) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }

    let mut out: Vec<N> = graph.outgoing(node).iter().map(|e| e.dst()).collect();
    out.dedup();
    Ok(out)
}

/// Transitive predecessors of `node`: every node from which `node` is
/// reachable.
///
/// Iterative depth-first traversal backward along edges. The output doubles
/// as the visited set: it is kept sorted at all times, and a node is pushed
/// onto the work stack only when its sorted insert finds it absent, so each
/// node is expanded at most once and the traversal terminates on any DAG.
pub fn find_all_before<N: Ord + Copy>(graph: &Dag<N>, node: N) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }

    let mut out: Vec<N> = Vec::new();
    let mut to_process = vec![node];

    while let Some(current) = to_process.pop() {
        for edge in graph.incoming(current) {
            let src = edge.src();
            if let Err(pos) = out.binary_search(&src) {
                out.insert(pos, src);
                to_process.push(src);
            }
        }
    }

    Ok(out)
}

/// Transitive successors of `node`: every node reachable from it.
///
/// Symmetric to [`find_all_before`], traversing forward along edges.
pub fn find_all_after<N: Ord + Copy>(graph: &Dag<N>, node: N) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }

    let mut out: Vec<N> = Vec::new();
    let mut to_process = vec![node];

    while let Some(current) = to_process.pop() {
        for edge in graph.outgoing(current) {
            let dst = edge.dst();
            if let Err(pos) = out.binary_search(&dst) {
                out.insert(pos, dst);
                to_process.push(dst);
            }
        }
    }

    Ok(out)
}

/// Nodes with no ordering relationship to `node`: neither its ancestors nor
/// its descendants. In a scheduling context, tasks that could run
/// concurrently with it.
///
/// Requires `node` to be a member of the graph's node set; returns
/// [`QueryError::UnknownNode`] otherwise.
pub fn find_all_siblings<N: Ord + Copy>(graph: &Dag<N>, node: N) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }
    if !graph.contains(node) {
        return Err(QueryError::UnknownNode);
    }

    let before = find_all_before(graph, node)?;
    let after = find_all_after(graph, node)?;

    // Fast out: ancestors + descendants + the node itself already account
    // for every node, so no siblings exist.
    if before.len() + after.len() + 1 >= graph.all_nodes().len() {
        return Ok(Vec::new());
    }

    let out = graph
        .all_nodes()
        .iter()
        .copied()
        .filter(|&n| {
            n != node
                && before.binary_search(&n).is_err()
                && after.binary_search(&n).is_err()
        })
        .collect();
    Ok(out)
}

/// The currently schedulable frontier: every node that is not in `done` and
/// has no incoming edge from a node outside `done`.
///
/// `done` is treated as a set and **must be sorted ascending and
/// duplicate-free**; behavior is unspecified otherwise (a debug build
/// asserts the precondition). The set is taken at face value: it is the
/// caller's responsibility to only mark a node done once its own
/// prerequisites are done.
pub fn find_current_tasks<N: Ord + Copy>(graph: &Dag<N>, done: &[N]) -> Result<Vec<N>> {
    if !graph.is_valid() {
        return Err(QueryError::InvalidGraph);
    }
    debug_assert!(
        done.windows(2).all(|pair| pair[0] < pair[1]),
        "done set must be sorted ascending and duplicate-free"
    );

    // Edges whose source is not done represent unsatisfied dependencies.
    // Filtering preserves the (dst, src) ordering, so the survivors still
    // support binary-search lookup by destination.
    let pending: Vec<DirectedEdge<N>> = graph
        .edges_by_dst()
        .iter()
        .filter(|e| done.binary_search(&e.src()).is_err())
        .copied()
        .collect();

    let out = graph
        .all_nodes()
        .iter()
        .copied()
        .filter(|n| done.binary_search(n).is_err())
        .filter(|&n| {
            let idx = pending.partition_point(|e| e.dst() < n);
            !(idx < pending.len() && pending[idx].dst() == n)
        })
        .collect();
    Ok(out)
}
