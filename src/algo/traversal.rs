/*!
Breadth-first traversal.

[`BreadthFirstSearch`] is a lazy iterator over the nodes reachable from a start node. In contrast to
a traversal that reports nodes when they are taken out of the queue, it reports every node at the
moment it is *discovered*, i.e. while its predecessor is being expanded. Consumers that stop
iterating early (such as the shortest path search) therefore never expand a single node more than
necessary.

Expanding a node `u` scans all other nodes `v` in increasing order and tests
[`has_edge(u, v)`](AdjacencyTest::has_edge), which is the natural neighborhood query on an
adjacency matrix.
*/

use std::collections::VecDeque;

use super::*;

/// A node reported by [`BreadthFirstSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discovery {
    /// The discovered node
    pub node: Node,
    /// Number of edges on a shortest path from the start node
    pub depth: NumNodes,
    /// Node whose expansion discovered `node`; `None` for the start node
    pub predecessor: Option<Node>,
}

/// Lazy breadth-first search yielding nodes in discovery order.
///
/// Every node is reported at most once and depths never decrease along the iteration.
pub struct BreadthFirstSearch<'a, G>
where
    G: AdjacencyTest,
{
    graph: &'a G,
    visited: NodeBitSet,
    /// Discovered but not yet expanded nodes
    frontier: VecDeque<Discovery>,
    /// Node currently expanded together with the next candidate neighbor
    expanding: Option<(Discovery, Node)>,
    /// Start node, reported on the first call to `next`
    start: Option<Discovery>,
}

impl<'a, G> BreadthFirstSearch<'a, G>
where
    G: AdjacencyTest,
{
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        let root = Discovery {
            node: start,
            depth: 0,
            predecessor: None,
        };

        Self {
            graph,
            visited,
            frontier: VecDeque::from(vec![root]),
            expanding: None,
            start: Some(root),
        }
    }

    /// Returns *true* if `u` was already discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Number of nodes discovered so far
    pub fn number_of_visited(&self) -> NumNodes {
        self.visited.cardinality()
    }
}

impl<G> Iterator for BreadthFirstSearch<'_, G>
where
    G: AdjacencyTest,
{
    type Item = Discovery;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.start.take() {
            return Some(root);
        }

        let n = self.graph.number_of_nodes();
        loop {
            if let Some((parent, cursor)) = self.expanding.as_mut() {
                while *cursor < n {
                    let v = *cursor;
                    *cursor += 1;

                    if !self.visited.get_bit(v) && self.graph.has_edge(parent.node, v) {
                        self.visited.set_bit(v);

                        let item = Discovery {
                            node: v,
                            depth: parent.depth + 1,
                            predecessor: Some(parent.node),
                        };
                        self.frontier.push_back(item);
                        return Some(item);
                    }
                }
            }

            let next = self.frontier.pop_front()?;
            self.expanding = Some((next, 0));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending_start = self.start.is_some() as usize;
        let undiscovered = self.graph.len() - self.visited.cardinality() as usize;
        (pending_start, Some(undiscovered + pending_start))
    }
}

/// Traversal algorithms exposed directly on graphs.
pub trait Traversal: AdjacencyTest + Sized {
    /// Returns an iterator traversing nodes in breadth-first discovery order, starting at `start`.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BreadthFirstSearch<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    /// Returns the distance from `start` to every node (`None` if unreachable).
    /// ** Panics if `start >= n` **
    fn distances_from(&self, start: Node) -> Vec<Option<NumNodes>> {
        let mut distances = vec![None; self.len()];
        for item in self.bfs(start) {
            distances[item.node as usize] = Some(item.depth);
        }
        distances
    }
}

impl<G> Traversal for G where G: AdjacencyTest + Sized {}
