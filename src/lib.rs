// src/lib.rs

//! `taskdag` — an immutable, in-memory DAG container plus the read-only
//! graph queries a dependency-driven scheduler needs.
//!
//! The crate is split into two layers:
//!
//! - [`dag::graph`] owns the canonical node and edge data, validates
//!   acyclicity at construction time and produces a topological order.
//! - [`dag::query`] contains stateless functions over a `&Dag` that answer
//!   structural questions: what must finish before a node, what can start
//!   after it, what is independent of it, and what is currently runnable
//!   given a set of completed nodes.
//!
//! Construction never fails; a cyclic edge set produces a container whose
//! [`Dag::is_valid`] is `false` and whose topological order is empty.
//! Once built, a [`Dag`] is immutable and may be shared freely for
//! concurrent reads.
//!
//! ```
//! use taskdag::{Dag, DirectedEdge, find_current_tasks};
//!
//! let graph = Dag::new([
//!     DirectedEdge::new(0u32, 1),
//!     DirectedEdge::new(1, 2),
//!     DirectedEdge::new(0, 3),
//! ]);
//! assert!(graph.is_valid());
//!
//! // 0 is done, so its direct dependents are runnable.
//! let ready = find_current_tasks(&graph, &[0]).unwrap();
//! assert_eq!(ready, vec![1, 3]);
//! ```

pub mod dag;
pub mod errors;

pub use dag::edge::DirectedEdge;
pub use dag::graph::Dag;
pub use dag::query::{
    find_after, find_all_after, find_all_before, find_all_siblings, find_before,
    find_current_tasks,
};
pub use errors::{QueryError, Result};
