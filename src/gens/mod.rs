/*!
# Graph Generators

Random graph construction with an exact number of edges.

The [`RandomGraphBuilder`] follows the builder-style pattern used throughout the crate:

1. Create a builder (`RandomGraphBuilder::new()`).
2. Set parameters using trait methods (`.nodes(n).edges(m)`).
3. Build the graph with `build(rng)`.

The random source is always passed in explicitly. Tests use a seeded `rand_pcg::Pcg64Mcg`
to obtain reproducible graphs; nothing in this module touches a global generator.

In addition, the [`RandomGraph`] trait exposes the builder as a constructor on the graph type.

```rust
use rand::SeedableRng;
use trigraph::{prelude::*, gens::*};

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
let graph = TriangularGraph::random_with_edges(&mut rng, 10, 20).unwrap();

assert_eq!(graph.number_of_nodes(), 10);
assert_eq!(graph.number_of_edges(), 20);
```
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod builder;
mod substructures;

pub use builder::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random graph with exactly `n` nodes and `m` edges.
    ///
    /// Sparse targets (below the midpoint of the feasible range) always yield connected graphs.
    ///
    /// # Errors
    /// See [`RandomGraphBuilder::build`].
    fn random_with_edges<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;
}

impl RandomGraph for TriangularGraph {
    fn random_with_edges<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        RandomGraphBuilder::new().nodes(n).edges(m).build(rng)
    }
}
