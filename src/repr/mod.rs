/*!
# Graph Representations

Currently there is a single representation, [`TriangularGraph`]: an undirected graph without
loops or multi-edges that stores its adjacency matrix as a packed lower triangle.

For `n` nodes, only the `n * (n - 1) / 2` slots strictly below the diagonal are stored. The
unordered pair `{u, v}` with `lo = min(u, v)` and `hi = max(u, v)` lives at offset
`hi * (hi - 1) / 2 + lo` (see [`pair_index`]). Since every edit goes through this single
canonical slot, the matrix is symmetric by construction.

```text
      0 1 2 3
  1 | 0
  2 | 1 2
  3 | 3 4 5
```

[`digest`] computes representation independent hashes of a graph.
*/

use crate::{error::*, ops::*, *};

mod triangular;

pub mod digest;

pub use triangular::*;

/// Offset of the unordered pair `{u, v}` in a packed lower-triangular matrix.
///
/// Shorthand for [`Edge::packed_index`] that also checks its preconditions.
///
/// # Panics
/// If `u == v` or either node is not below [`TriangularGraph::MAX_NODES`].
pub fn pair_index(u: Node, v: Node) -> NumEdges {
    assert_ne!(u, v, "loops have no slot in the packed matrix");
    assert!(
        u < TriangularGraph::MAX_NODES && v < TriangularGraph::MAX_NODES,
        "pair ({u},{v}) exceeds the packed matrix"
    );
    Edge(u, v).packed_index()
}

/// Canonical pair `(lo, hi)` stored at offset `x`. Inverse of [`pair_index`].
pub fn pair_from_index(x: NumEdges) -> (Node, Node) {
    let Edge(lo, hi) = Edge::from_packed_index(x);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn pair_from_index_inverts_pair_index() {
        for n in 2..40 as Node {
            for (u, v) in (0..n).tuple_combinations() {
                assert_eq!(pair_from_index(pair_index(v, u)), (u, v));
            }

            for x in 0..number_of_pairs(n as u64) as NumEdges {
                let (lo, hi) = pair_from_index(x);
                assert!(lo < hi && hi < n, "x = {x}");
                assert_eq!(pair_index(lo, hi), x);
            }
        }
    }

    #[test]
    fn pair_from_index_last_slot() {
        let n = TriangularGraph::MAX_NODES;
        let last = (number_of_pairs(n as u64) - 1) as NumEdges;

        assert_eq!(pair_from_index(last), (n - 2, n - 1));
        assert_eq!(pair_index(n - 1, n - 2), last);
    }

    #[test]
    #[should_panic]
    fn pair_index_rejects_loops() {
        pair_index(3, 3);
    }

    #[test]
    #[should_panic]
    fn pair_index_rejects_oversized_nodes() {
        pair_index(0, TriangularGraph::MAX_NODES);
    }
}
