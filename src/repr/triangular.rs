use super::*;

/// Undirected graph storing its adjacency matrix as a packed lower triangle.
///
/// Every unordered pair `{u, v}` with `u != v` owns exactly one bit at [`pair_index(u, v)`](pair_index).
/// The number of nodes is fixed at construction; there is no way to add or delete nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangularGraph {
    n: NumNodes,
    adjacency: EdgeBitSet,
}

impl TriangularGraph {
    /// Largest number of nodes whose packed matrix still fits into [`NumEdges`]
    pub const MAX_NODES: NumNodes = 92_682;

    /// Creates the complete graph on `n` nodes.
    pub fn try_complete(n: NumNodes) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        graph.connect_all();
        Ok(graph)
    }

    /// Creates a graph from the flat representation of its packed matrix, one value per slot
    /// ordered by offset. Every value must be `0` or `1`.
    ///
    /// # Errors
    /// [`GraphError::Deserialization`] if `n < 2`, the length differs from `n * (n - 1) / 2`,
    /// or a slot holds anything else than `0` or `1`.
    pub fn try_from_adjacency(n: NumNodes, adjacency: &[u8]) -> Result<Self> {
        let mut graph = Self::try_new(n).map_err(|e| GraphError::Deserialization(e.to_string()))?;

        if adjacency.len() != graph.capacity() as usize {
            return Err(GraphError::Deserialization(format!(
                "adjacency of a graph with {n} vertices must have {} entries, found {}",
                graph.capacity(),
                adjacency.len()
            )));
        }

        for (i, &bit) in adjacency.iter().enumerate() {
            match bit {
                0 => {}
                1 => {
                    graph.adjacency.set_bit(i as NumEdges);
                }
                x => {
                    return Err(GraphError::Deserialization(format!(
                        "adjacency entry {i} must be 0 or 1, found {x}"
                    )));
                }
            }
        }

        Ok(graph)
    }

    /// Returns the packed matrix as one `0`/`1` value per slot, ordered by offset.
    pub fn adjacency_values(&self) -> Vec<u8> {
        (0..self.capacity())
            .map(|i| self.adjacency.get_bit(i) as u8)
            .collect()
    }

    /// Number of slots in the packed matrix, i.e. the number of edges of the complete graph.
    pub fn capacity(&self) -> NumEdges {
        number_of_pairs(self.n as u64) as NumEdges
    }

    /// Inserts every possible edge, turning the graph into a complete graph.
    pub fn connect_all(&mut self) {
        self.adjacency = EdgeBitSet::new_all_set(self.capacity());
    }

    /// Returns *true* if all possible edges are present.
    pub fn is_complete(&self) -> bool {
        self.number_of_edges() == self.capacity()
    }

    /// Validates the pair `{u, v}` and returns its offset.
    fn checked_index(&self, u: Node, v: Node) -> Result<NumEdges> {
        if u == v {
            return Err(GraphError::loop_edge(u));
        }
        if let Some(x) = [u, v].into_iter().find(|&x| !self.contains_node(x)) {
            return Err(GraphError::node_out_of_range(x, self.n));
        }
        Ok(pair_index(u, v))
    }
}

impl GraphNodeOrder for TriangularGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for TriangularGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.adjacency.cardinality()
    }
}

impl AdjacencyTest for TriangularGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.n && v < self.n);
        u != v && self.adjacency.get_bit(pair_index(u, v))
    }
}

impl AdjacencyList for TriangularGraph {
    // Redefine to iterate the set bits in offset order instead of testing all pairs
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter_set_bits().map(Edge::from_packed_index)
    }
}

impl GraphNew for TriangularGraph {
    /// Creates an edgeless graph with `n` nodes.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `n < 2` or `n > TriangularGraph::MAX_NODES`.
    fn try_new(n: NumNodes) -> Result<Self> {
        if n < 2 {
            return Err(GraphError::InvalidArgument(format!(
                "a graph needs at least 2 vertices, got {n}"
            )));
        }
        if n > Self::MAX_NODES {
            return Err(GraphError::InvalidArgument(format!(
                "a graph can have at most {} vertices, got {n}",
                Self::MAX_NODES
            )));
        }

        Ok(Self {
            n,
            adjacency: EdgeBitSet::new(number_of_pairs(n as u64) as NumEdges),
        })
    }
}

impl GraphEdgeEditing for TriangularGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let index = self.checked_index(u, v)?;
        Ok(self.adjacency.set_bit(index))
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let index = self.checked_index(u, v)?;
        Ok(self.adjacency.clear_bit(index))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn new_is_empty() {
        for n in 2..50 {
            let graph = TriangularGraph::try_new(n).unwrap();

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.capacity() as u64, number_of_pairs(n as u64));
            assert_eq!(graph.adjacency_values().len(), graph.capacity() as usize);
            assert!(graph.adjacency_values().iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn new_rejects_invalid_sizes() {
        for n in [0, 1, TriangularGraph::MAX_NODES + 1] {
            assert!(matches!(
                TriangularGraph::try_new(n),
                Err(GraphError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn add_edge_is_symmetric() {
        for n in 2..12 as Node {
            for (u, v) in (0..n).tuple_combinations() {
                let mut graph = TriangularGraph::try_new(n).unwrap();
                assert!(!graph.try_add_edge(v, u).unwrap());

                assert!(graph.has_edge(u, v));
                assert!(graph.has_edge(v, u));
                assert_eq!(graph.number_of_edges(), 1);

                // no other pair is affected
                for (x, y) in (0..n).tuple_combinations() {
                    assert_eq!(graph.has_edge(x, y), (x, y) == (u, v));
                }
            }
        }
    }

    #[test]
    fn add_and_remove() {
        let mut graph = TriangularGraph::try_new(5).unwrap();

        assert!(!graph.try_add_edge(1, 3).unwrap());
        assert!(graph.try_add_edge(3, 1).unwrap());
        assert_eq!(graph.number_of_edges(), 1);

        assert!(graph.try_remove_edge(3, 1).unwrap());
        assert!(!graph.try_remove_edge(1, 3).unwrap());
        assert!(!graph.has_edge(1, 3));
        assert!(graph.is_edgeless());
    }

    #[test]
    fn rejects_loops_and_unknown_nodes() {
        let mut graph = TriangularGraph::try_new(4).unwrap();

        assert!(matches!(
            graph.add_edge(2, 2),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.remove_edge(1, 1),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.add_edge(0, 4),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.add_edge(7, 1),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(graph.is_edgeless());
        assert!(!graph.has_edge(2, 2));
    }

    #[test]
    fn connect_all() {
        for n in 2..20 as Node {
            let graph = TriangularGraph::try_complete(n).unwrap();

            assert!(graph.is_complete());
            assert_eq!(graph.number_of_edges() as u64, number_of_pairs(n as u64));
            for (u, v) in (0..n).tuple_combinations() {
                assert!(graph.has_edge(u, v) && graph.has_edge(v, u));
            }
            for u in 0..n {
                assert_eq!(graph.degree_of(u), n - 1);
            }
        }
    }

    #[test]
    fn neighbors_and_edges() {
        let graph = graph_from_edges(5, &[(3, 0), (1, 2), (4, 1), (0, 1)]);

        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2, 4]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![0]);
        assert_eq!(graph.degree_of(2), 1);
        assert_eq!(graph.max_degree(), 3);
        assert_eq!(graph.degree_distribution(), vec![(1, 3), (2, 1), (3, 1)]);

        // offset order: (0,1)=0, (1,2)=2, (0,3)=3, (1,4)=7
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(0, 3), Edge(1, 4)]
        );
        assert_eq!(
            graph.ordered_edges(),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(1, 4)]
        );
    }

    #[test]
    fn adjacency_values_roundtrip() {
        let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let values = graph.adjacency_values();
        assert_eq!(values, vec![1, 0, 1, 0, 0, 1]);

        let restored = TriangularGraph::try_from_adjacency(4, &values).unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn try_from_adjacency_rejects_garbage() {
        for (n, values) in [
            (4, vec![1, 0, 1, 0, 0]),
            (4, vec![1, 0, 1, 0, 0, 1, 0]),
            (3, vec![0, 2, 1]),
            (1, vec![]),
        ] {
            assert!(matches!(
                TriangularGraph::try_from_adjacency(n, &values),
                Err(GraphError::Deserialization(_))
            ));
        }
    }
}
