/*!
# Substructure Generators

Adds common motifs to an already existing graph. The random builder uses [`connect_path`]
over a random permutation of all nodes to obtain a connected spanning structure.

# Example

```rust
use trigraph::{prelude::*, gens::*};

let mut g = TriangularGraph::try_new(5).unwrap();
g.connect_path([3, 0, 4]).unwrap();

assert_eq!(g.ordered_edges(), vec![Edge(0, 3), Edge(0, 4)]);
```

[`connect_path`]: GeneratorSubstructures::connect_path
*/

use itertools::Itertools;
use rand::seq::SliceRandom;

use super::*;

/// Trait for creating additional substructures inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a simple path.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Errors
    /// Fails on the first consecutive pair that is a loop or refers to an unknown node.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects all nodes along a uniformly random Hamiltonian path and returns the order.
    ///
    /// The result is connected and every node has degree at least one. If the graph was
    /// edgeless before, exactly `n - 1` edges are inserted.
    fn connect_random_path<R>(&mut self, rng: &mut R) -> Result<Vec<Node>>
    where
        R: Rng;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphNodeOrder,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_random_path<R>(&mut self, rng: &mut R) -> Result<Vec<Node>>
    where
        R: Rng,
    {
        let mut order = self.vertices().collect_vec();
        order.shuffle(rng);

        self.connect_path(order.iter().copied())?;
        Ok(order)
    }
}
