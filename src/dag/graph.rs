// src/dag/graph.rs

//! The immutable DAG container.
//!
//! Edges are stored twice, sorted by `(src, dst)` and by `(dst, src)`, so
//! that both traversal directions get binary-search range lookups with a
//! deterministic iteration order (ascending by the other endpoint). Nodes
//! are the union of all edge endpoints plus any explicitly supplied extra
//! nodes, sorted and deduplicated.
//!
//! Acyclicity is checked once, at construction, with Kahn's algorithm.
//! A cyclic input is not an error: the container simply reports
//! `is_valid() == false` and an empty topological order, which lets callers
//! diagnose the failure (e.g. by comparing `all_nodes()` against the empty
//! order) instead of only learning "some cycle exists somewhere".

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::dag::edge::DirectedEdge;

/// An immutable directed-acyclic-graph container over node ids of type `N`.
///
/// `N` may be any totally-ordered, copyable type; the container imposes no
/// further meaning on node ids and never dereferences them.
///
/// The container has exactly two states, *valid* and *invalid*, fixed at
/// construction. No operation adds, removes or alters nodes or edges once
/// built, so a `Dag` can be shared for concurrent read-only querying
/// without locking.
#[derive(Debug, Clone)]
pub struct Dag<N> {
    valid: bool,
    /// Edges sorted ascending by `(src, dst)`.
    edges_by_src: Vec<DirectedEdge<N>>,
    /// The same edges sorted ascending by `(dst, src)`.
    edges_by_dst: Vec<DirectedEdge<N>>,
    /// All distinct nodes, sorted ascending.
    all_nodes: Vec<N>,
    /// Nodes in topological order; empty when `valid` is false.
    sorted_nodes: Vec<N>,
}

impl<N: Ord + Copy> Dag<N> {
    /// Build a container from a collection of edges.
    ///
    /// The node set is inferred from the edge endpoints; use
    /// [`Dag::with_nodes`] to also include nodes with no incident edges.
    pub fn new(edges: impl IntoIterator<Item = DirectedEdge<N>>) -> Self {
        Self::with_nodes(edges, std::iter::empty())
    }

    /// Build a container from a collection of edges plus extra nodes.
    ///
    /// `extra_nodes` covers isolated nodes that no edge references; nodes
    /// already referenced by an edge may appear in it harmlessly.
    /// Duplicate edges are kept as supplied (queries deduplicate their own
    /// output).
    pub fn with_nodes(
        edges: impl IntoIterator<Item = DirectedEdge<N>>,
        extra_nodes: impl IntoIterator<Item = N>,
    ) -> Self {
        let mut edges_by_src: Vec<DirectedEdge<N>> = edges.into_iter().collect();
        let mut edges_by_dst = edges_by_src.clone();

        edges_by_src.sort_unstable_by_key(|e| (e.src(), e.dst()));
        edges_by_dst.sort_unstable_by_key(|e| (e.dst(), e.src()));

        let mut all_nodes: Vec<N> = extra_nodes.into_iter().collect();
        for edge in &edges_by_src {
            all_nodes.push(edge.src());
            all_nodes.push(edge.dst());
        }
        all_nodes.sort_unstable();
        all_nodes.dedup();

        debug!(
            nodes = all_nodes.len(),
            edges = edges_by_src.len(),
            "building dag"
        );

        let mut dag = Self {
            valid: false,
            edges_by_src,
            edges_by_dst,
            all_nodes,
            sorted_nodes: Vec::new(),
        };
        dag.topological_sort();
        dag
    }

    /// Whether the edge set admits a topological order (i.e. is acyclic).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All nodes, sorted ascending by id.
    pub fn all_nodes(&self) -> &[N] {
        &self.all_nodes
    }

    /// Nodes in topological order. Empty when the graph is invalid.
    ///
    /// For every edge `(src, dst)`, `src` appears strictly before `dst`.
    /// Ties between mutually unordered nodes break ascending by id; this is
    /// *a* valid order, not a canonical one.
    pub fn sorted_nodes(&self) -> &[N] {
        &self.sorted_nodes
    }

    /// All edges, sorted ascending by `(src, dst)`.
    pub fn edges_by_src(&self) -> &[DirectedEdge<N>] {
        &self.edges_by_src
    }

    /// All edges, sorted ascending by `(dst, src)`.
    pub fn edges_by_dst(&self) -> &[DirectedEdge<N>] {
        &self.edges_by_dst
    }

    /// Whether `node` is a member of the node set.
    pub fn contains(&self, node: N) -> bool {
        self.all_nodes.binary_search(&node).is_ok()
    }

    /// Edges leaving `node`, in ascending destination order.
    ///
    /// Empty for nodes with no outgoing edges, including nodes absent from
    /// the graph entirely.
    pub fn outgoing(&self, node: N) -> &[DirectedEdge<N>] {
        let start = self.edges_by_src.partition_point(|e| e.src() < node);
        let end = self.edges_by_src.partition_point(|e| e.src() <= node);
        &self.edges_by_src[start..end]
    }

    /// Edges arriving at `node`, in ascending source order.
    pub fn incoming(&self, node: N) -> &[DirectedEdge<N>] {
        let start = self.edges_by_dst.partition_point(|e| e.dst() < node);
        let end = self.edges_by_dst.partition_point(|e| e.dst() <= node);
        &self.edges_by_dst[start..end]
    }

    /// Index of `node` within `all_nodes`. Only called for nodes known to
    /// be edge endpoints, which are members by construction.
    fn node_index(&self, node: N) -> usize {
        match self.all_nodes.binary_search(&node) {
            Ok(idx) => idx,
            // Unreachable: every edge endpoint was inserted into all_nodes.
            Err(idx) => idx,
        }
    }

    /// Kahn's algorithm.
    ///
    /// Seeds a FIFO queue with every node of in-degree zero, in ascending
    /// node order, then repeatedly dequeues a node, appends it to the
    /// output, and decrements the in-degree of each destination of its
    /// outgoing edges, enqueueing destinations that reach zero. The graph
    /// is acyclic iff every node made it to the output; otherwise the
    /// partial output is discarded and the container marked invalid.
    fn topological_sort(&mut self) {
        let node_count = self.all_nodes.len();

        let mut in_degree = vec![0usize; node_count];
        for edge in &self.edges_by_dst {
            in_degree[self.node_index(edge.dst())] += 1;
        }

        let mut queue: VecDeque<usize> = (0..node_count)
            .filter(|&idx| in_degree[idx] == 0)
            .collect();

        let mut order: Vec<N> = Vec::with_capacity(node_count);
        while let Some(idx) = queue.pop_front() {
            let node = self.all_nodes[idx];
            order.push(node);

            for edge in self.outgoing(node) {
                let dst_idx = self.node_index(edge.dst());
                in_degree[dst_idx] -= 1;
                if in_degree[dst_idx] == 0 {
                    queue.push_back(dst_idx);
                }
            }
        }

        self.valid = order.len() == node_count;
        if self.valid {
            self.sorted_nodes = order;
        } else {
            warn!(
                sorted = order.len(),
                total = node_count,
                "cycle detected; marking dag invalid"
            );
            self.sorted_nodes.clear();
        }
    }
}
