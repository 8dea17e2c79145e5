use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::Node;

/// An undirected edge defined by two endpoints.
///
/// `Edge(u, v)` and `Edge(v, u)` describe the same edge; use [`Edge::normalized`] to obtain the
/// canonical pair with the smaller endpoint first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges (and thus slots in the packed matrix) to `2^32 - 1`.
pub type NumEdges = u32;

/// A BitSet over NumEdges
pub type EdgeBitSet = BitSetImpl<NumEdges>;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Number of unordered pairs of distinct nodes, i.e. `n * (n - 1) / 2`.
///
/// Computed in `u64` so that callers can check whether the result fits into [`NumEdges`].
pub const fn number_of_pairs(n: u64) -> u64 {
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Offset of this edge in a packed lower-triangular adjacency matrix.
    ///
    /// With `(lo, hi)` being the normalized endpoints, the offset is `hi * (hi - 1) / 2 + lo`.
    /// Row `hi` of the triangle thus starts right after all `hi * (hi - 1) / 2` slots of the rows
    /// above it, and the diagonal is never addressed.
    ///
    /// Must not be called on loops.
    pub fn packed_index(&self) -> NumEdges {
        debug_assert!(!self.is_loop());

        let Edge(lo, hi) = self.normalized();
        (number_of_pairs(hi as u64) + lo as u64) as NumEdges
    }

    /// Inverse of [`Edge::packed_index`]: returns the normalized edge stored at offset `x`.
    ///
    /// The row `hi` is the largest value with `hi * (hi - 1) / 2 <= x`. The floating point
    /// estimate is corrected afterwards so the result is exact for every `x` in range.
    pub fn from_packed_index(x: NumEdges) -> Self {
        let x = x as u64;

        let mut hi = ((1.0 + (1.0 + 8.0 * x as f64).sqrt()) / 2.0) as u64;
        while number_of_pairs(hi) > x {
            hi -= 1;
        }
        while number_of_pairs(hi + 1) <= x {
            hi += 1;
        }

        let lo = x - number_of_pairs(hi);
        Edge(lo as Node, hi as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
