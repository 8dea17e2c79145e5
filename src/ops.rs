use std::ops::Range;

use itertools::Itertools;

use crate::{error::Result, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge {u,v} exists in the graph.
    /// Loops never exist, so `has_edge(u, u)` is always *false*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: AdjacencyTest + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in increasing order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&v| self.has_edge(u, v))
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns an iterator over all normalized edges in the graph.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        })
    }

    /// Returns all normalized edges in sorted order.
    fn ordered_edges(&self) -> Vec<Edge> {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates a graph with `n` singleton nodes.
    ///
    /// # Errors
    /// Fails if the representation cannot hold `n` nodes.
    fn try_new(n: NumNodes) -> Result<Self>;
}

/// Provides functions to insert/delete edges.
///
/// In contrast to a silent no-op, every edit referring to a loop or to a node outside `0..n`
/// is rejected with [`GraphError::InvalidArgument`](crate::error::GraphError::InvalidArgument).
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge {u,v} to the graph.
    /// Returns *true* exactly if the edge was present previously.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds the edge {u,v} to the graph, regardless of whether it existed before.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge {u,v} from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Removes the edge {u,v} from the graph, regardless of whether it existed before.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_remove_edge(u, v).map(|_| ())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn try_from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
    -> Result<Self>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
