// src/dag/mod.rs

//! DAG container and query algorithms.
//!
//! - [`edge`] defines the directed edge value type.
//! - [`graph`] holds the immutable container: dual-sorted edge indexes,
//!   the sorted node set, and the topological order.
//! - [`query`] contains the read-only traversal functions used by
//!   schedulers.

pub mod edge;
pub mod graph;
pub mod query;

pub use edge::DirectedEdge;
pub use graph::Dag;
