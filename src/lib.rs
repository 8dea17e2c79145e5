/*!
`trigraph` generates random undirected graphs with an exact number of edges and answers unweighted
shortest path queries on them.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; edges are undirected, so
`Edge(u, v)` and `Edge(v, u)` describe the same pair.

The only storage backend is [`TriangularGraph`](crate::repr::TriangularGraph), which keeps the
adjacency matrix as a packed lower triangle: `n * (n - 1) / 2` bits, one per unordered pair. Loops
and multi-edges cannot be represented, and symmetry holds by construction.

# Design

Generators are configurable structs using the *Builder* / *Setter* pattern
(`RandomGraphBuilder::new().nodes(n).edges(m).build(rng)`), with the random source always passed
in explicitly. Algorithms are available as traits implemented directly on the graph
(`graph.bfs(start)`, `graph.shortest_path(u, v)`, `graph.is_connected()`).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`algo`] includes breadth-first search, connectivity and shortest path queries,
- [`gens`] includes the random graph builder and deterministic substructures such as paths,
- [`io`] includes JSON persistence and a console rendering of the adjacency matrix,
- [`error`] includes [`GraphError`](crate::error::GraphError), the error type of all fallible operations,
- [`logging`] sets up `tracing` for the command-line tools `rgg` and `shortest-path`.

[`repr::digest`] computes a `Sha256`-hash for a given graph.

In most use-cases, `use trigraph::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `trigraph::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
