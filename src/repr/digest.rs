/*!
# Graph Hash Digests

[`GraphDigest`] computes a hash of a graph that only depends on its structure: the number of
nodes followed by the sorted list of normalized edges is fed into a cryptographic hash function.

Both command line tools print the digest, so a graph read back from disk can be compared against
the one that was generated.

## Example
```
use trigraph::{prelude::*, repr::digest::GraphDigest};

let mut graph = TriangularGraph::try_new(4).unwrap();
graph.add_edge(0, 1).unwrap();

let hex = graph.digest_sha256();
assert_eq!(hex.len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a canonical hash digest of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a SHA-256 digest of the graph (64 hex characters).
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| buf[..4].copy_from_slice(&u.to_le_bytes());

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(&buffer[0..4]);

        // then append a sorted edge list
        for Edge(u, v) in self.ordered_edges() {
            encode(&mut buffer[0..], u);
            encode(&mut buffer[4..], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn independent_of_insertion_order() {
        let a = graph_from_edges(6, &[(0, 1), (4, 2), (5, 3)]);
        let b = graph_from_edges(6, &[(3, 5), (1, 0), (2, 4)]);
        assert_eq!(a.digest_sha256(), b.digest_sha256());
        assert_eq!(a.digest_sha256().len(), 64);
    }

    #[test]
    fn distinguishes_graphs() {
        let a = graph_from_edges(6, &[(0, 1), (4, 2)]);
        let b = graph_from_edges(6, &[(0, 1), (4, 3)]);
        let c = graph_from_edges(7, &[(0, 1), (4, 2)]);
        assert_ne!(a.digest_sha256(), b.digest_sha256());
        assert_ne!(a.digest_sha256(), c.digest_sha256());
    }
}
