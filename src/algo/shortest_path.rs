/*!
Unweighted shortest paths via breadth-first search.

A single query starts a fresh [`BreadthFirstSearch`] at the source and stops the moment the target
is discovered as a neighbor of the node being expanded. The number of hops reported is the BFS
depth of the target, i.e. the number of edges on a shortest path. If the search runs out of nodes
to expand, the target is unreachable and the outcome is [`SearchOutcome::Exhausted`], which is a
regular result and not an error.

The all-pairs sweep runs one independent search per unordered pair `(i, j)` with `i < j` and
shares nothing between searches, so its cost is quadratic in the number of nodes times the cost of
a BFS on the adjacency matrix. This is fine for the graphs of tens to a few hundred nodes this
crate targets.
*/

use std::{fmt::Display, iter::FusedIterator};

use super::*;
use crate::error::{GraphError, Result};

/// Terminal state of a single shortest path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The target was reached after `hops` edges
    Found { hops: NumNodes },
    /// The frontier ran empty before the target was reached
    Exhausted,
}

impl SearchOutcome {
    /// Returns the number of hops if a path exists
    pub fn hops(&self) -> Option<NumNodes> {
        match *self {
            SearchOutcome::Found { hops } => Some(hops),
            SearchOutcome::Exhausted => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found { hops } => write!(f, "{hops} hop(s)"),
            SearchOutcome::Exhausted => write!(f, "no path"),
        }
    }
}

/// Result of one query of the all-pairs sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairDistance {
    pub source: Node,
    pub target: Node,
    pub outcome: SearchOutcome,
}

impl Display for PairDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.source, self.target, self.outcome)
    }
}

/// Breadth-first shortest path queries on a borrowed graph.
pub struct PathFinder<'a, G> {
    graph: &'a G,
}

impl<G> Clone for PathFinder<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for PathFinder<'_, G> {}

impl<'a, G> PathFinder<'a, G>
where
    G: AdjacencyTest,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    fn check_node(&self, u: Node) -> Result<()> {
        if self.graph.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::node_out_of_range(
                u,
                self.graph.number_of_nodes(),
            ))
        }
    }

    /// Runs a BFS from `source` until `target` is discovered or all reachable nodes were expanded.
    fn search(&self, source: Node, target: Node) -> SearchOutcome {
        match BreadthFirstSearch::new(self.graph, source).find(|d| d.node == target) {
            Some(d) => SearchOutcome::Found { hops: d.depth },
            None => SearchOutcome::Exhausted,
        }
    }

    /// Computes the number of edges on a shortest path from `source` to `target`.
    ///
    /// `shortest_path(v, v)` is found with zero hops.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if either node does not exist.
    pub fn shortest_path(&self, source: Node, target: Node) -> Result<SearchOutcome> {
        self.check_node(source)?;
        self.check_node(target)?;

        Ok(self.search(source, target))
    }

    /// Returns the nodes of a shortest path from `source` to `target` (both included), or `None`
    /// if `target` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if either node does not exist.
    pub fn shortest_route(&self, source: Node, target: Node) -> Result<Option<Vec<Node>>> {
        self.check_node(source)?;
        self.check_node(target)?;

        let mut parent: Vec<Option<Node>> = vec![None; self.graph.len()];
        for d in BreadthFirstSearch::new(self.graph, source) {
            parent[d.node as usize] = d.predecessor;
            if d.node != target {
                continue;
            }

            let mut route = vec![target];
            let mut node = target;
            while let Some(p) = parent[node as usize] {
                route.push(p);
                node = p;
            }
            route.reverse();
            return Ok(Some(route));
        }

        Ok(None)
    }

    /// Returns an iterator running one independent search per pair `(i, j)` with `i < j`.
    pub fn all_pairs_shortest_paths(&self) -> AllPairsShortestPaths<'a, G> {
        AllPairsShortestPaths {
            finder: *self,
            source: 0,
            target: 1,
        }
    }
}

/// Lazy all-pairs sweep, see [`PathFinder::all_pairs_shortest_paths`].
pub struct AllPairsShortestPaths<'a, G> {
    finder: PathFinder<'a, G>,
    source: Node,
    target: Node,
}

impl<G> Iterator for AllPairsShortestPaths<'_, G>
where
    G: AdjacencyTest,
{
    type Item = PairDistance;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.finder.graph.number_of_nodes();
        while self.target >= n {
            if self.source + 1 >= n {
                return None;
            }
            self.source += 1;
            self.target = self.source + 1;
        }

        let (source, target) = (self.source, self.target);
        self.target += 1;

        Some(PairDistance {
            source,
            target,
            outcome: self.finder.search(source, target),
        })
    }
}

impl<G> FusedIterator for AllPairsShortestPaths<'_, G> where G: AdjacencyTest {}

/// Shortest path queries exposed directly on graphs.
pub trait ShortestPaths: AdjacencyTest + Sized {
    /// See [`PathFinder::shortest_path`]
    fn shortest_path(&self, source: Node, target: Node) -> Result<SearchOutcome> {
        PathFinder::new(self).shortest_path(source, target)
    }

    /// See [`PathFinder::shortest_route`]
    fn shortest_route(&self, source: Node, target: Node) -> Result<Option<Vec<Node>>> {
        PathFinder::new(self).shortest_route(source, target)
    }

    /// See [`PathFinder::all_pairs_shortest_paths`]
    fn all_pairs_shortest_paths(&self) -> AllPairsShortestPaths<'_, Self> {
        PathFinder::new(self).all_pairs_shortest_paths()
    }
}

impl<G> ShortestPaths for G where G: AdjacencyTest + Sized {}
