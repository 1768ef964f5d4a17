// src/errors.rs

//! Crate-wide error type for the query layer.
//!
//! Construction of a [`crate::Dag`] never produces an error: a cyclic
//! input is a normal, representable outcome (`is_valid() == false`).
//! Errors only arise when querying.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The container failed acyclicity validation at construction time.
    /// An invalid container answers no queries.
    #[error("graph is not a valid DAG")]
    InvalidGraph,

    /// The queried node is not a member of the graph's node set.
    /// Only returned by queries that require membership (siblings).
    #[error("node is not a member of the graph")]
    UnknownNode,
}

pub type Result<T> = std::result::Result<T, QueryError>;
