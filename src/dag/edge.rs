// src/dag/edge.rs

/// A directed edge from `src` to `dst`.
///
/// Meaning: `src` must be satisfied before `dst` ("dst depends on src").
/// Edges are plain values with no identity of their own; two edges with the
/// same endpoints are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedEdge<N> {
    src: N,
    dst: N,
}

impl<N: Copy> DirectedEdge<N> {
    pub fn new(src: N, dst: N) -> Self {
        Self { src, dst }
    }

    pub fn src(&self) -> N {
        self.src
    }

    pub fn dst(&self) -> N {
        self.dst
    }
}
