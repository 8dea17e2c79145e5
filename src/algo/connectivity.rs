use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyTest + Traversal + Sized {
    /// Returns *true* if every node is reachable from every other node
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }

    /// Returns an iterator over the connected components of the graph.
    ///
    /// Components are emitted in order of their smallest node; nodes within a component are sorted.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (isolated nodes count as components)
    fn number_of_connected_components(&self) -> usize {
        self.connected_components().count()
    }
}

impl<G> Connectivity for G where G: AdjacencyTest + Traversal + Sized {}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyTest,
{
    graph: &'a G,
    assigned: NodeBitSet,
    next_start: Node,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyTest,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            assigned: graph.vertex_bitset_unset(),
            next_start: 0,
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyTest,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self
            .graph
            .vertices()
            .skip(self.next_start as usize)
            .find(|&u| !self.assigned.get_bit(u))?;
        self.next_start = start + 1;

        let mut component = BreadthFirstSearch::new(self.graph, start)
            .map(|d| d.node)
            .collect_vec();
        for &u in &component {
            self.assigned.set_bit(u);
        }

        component.sort_unstable();
        Some(component)
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyTest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn partition_into_connected_components() {
        let graph = graph_from_edges(8, &[(0, 1), (1, 2), (6, 3), (4, 6), (7, 1)]);

        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 1, 2, 7], vec![3, 4, 6], vec![5]]
        );
        assert_eq!(graph.number_of_connected_components(), 3);
        assert!(!graph.is_connected());
    }

    #[test]
    fn connected() {
        let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 1);

        let graph = TriangularGraph::try_new(3).unwrap();
        assert!(!graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 3);

        let graph = TriangularGraph::try_complete(5).unwrap();
        assert!(graph.is_connected());
    }
}
