use std::ops::RangeInclusive;

use tracing::{debug, trace};

use super::*;

/// How [`RandomGraphBuilder`] reaches the requested number of edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuildStrategy {
    /// All possible edges are requested: connect everything, no sampling.
    Complete,
    /// Sparse target: connect a random spanning path, then add random edges.
    Distribute,
    /// Dense target: start from the complete graph, then remove random edges.
    Remove,
}

/// Generator for random undirected graphs with exactly `n` nodes and `m` edges.
///
/// The feasible range for `m` is `n - 1..=n * (n - 1) / 2`. Depending on where `m` lies in this
/// range, one of two symmetric strategies is used (see [`BuildStrategy`]):
/// - below the midpoint, a random permutation of all nodes is connected as a path (so the graph
///   is connected), then uniformly random absent edges are added until `m` edges exist;
/// - otherwise, the complete graph is built and uniformly random present edges are removed until
///   `m` edges remain.
///
/// Random pairs are drawn by rejection sampling: a draw that does not change the graph is simply
/// repeated. Since each strategy only ever walks to the midpoint, at least half of all draws are
/// accepted on average. There is no cap on the number of rejected draws unless one is configured
/// via [`RandomGraphBuilder::max_retries`].
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use trigraph::{prelude::*, gens::*, algo::*};
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(3);
/// let graph = RandomGraphBuilder::new().nodes(5).edges(4).build(&mut rng).unwrap();
///
/// assert_eq!(graph.number_of_edges(), 4);
/// assert!(graph.is_connected());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomGraphBuilder {
    n: NumNodes,
    m: Option<NumEdges>,
    max_retries: Option<u64>,
}

impl RandomGraphBuilder {
    /// Creates a new builder without any parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total number of rejected random draws; `None` removes the limit.
    pub fn set_max_retries(&mut self, max_retries: Option<u64>) {
        self.max_retries = max_retries;
    }

    /// Limits the total number of rejected random draws.
    ///
    /// Once more draws than `max_retries` were rejected, [`RandomGraphBuilder::build`] fails with
    /// [`GraphError::RetriesExhausted`] instead of retrying forever.
    pub fn max_retries(mut self, max_retries: u64) -> Self {
        self.set_max_retries(Some(max_retries));
        self
    }

    /// Returns the feasible range for the number of edges with the configured number of nodes.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if the number of nodes is not supported.
    pub fn edge_range(&self) -> Result<RangeInclusive<NumEdges>> {
        let n = self.n;
        if !(2..=TriangularGraph::MAX_NODES).contains(&n) {
            return Err(GraphError::InvalidArgument(format!(
                "number of vertices must be in 2..={}, got {n}",
                TriangularGraph::MAX_NODES
            )));
        }

        Ok((n - 1)..=(number_of_pairs(n as u64) as NumEdges))
    }

    /// Validates the configuration and returns the strategy [`RandomGraphBuilder::build`] will use.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if the number of nodes is not supported or the number of
    ///   edges was never set,
    /// - [`GraphError::OutOfRange`] if the number of edges is not in [`RandomGraphBuilder::edge_range`].
    pub fn strategy(&self) -> Result<BuildStrategy> {
        self.plan().map(|(_, strategy)| strategy)
    }

    fn plan(&self) -> Result<(NumEdges, BuildStrategy)> {
        let range = self.edge_range()?;
        let m = self.m.ok_or_else(|| {
            GraphError::InvalidArgument("number of edges was not set".to_string())
        })?;

        let (min, max) = (*range.start(), *range.end());
        if !range.contains(&m) {
            return Err(GraphError::OutOfRange {
                min,
                max,
                vertices: self.n,
                requested: m,
            });
        }

        let midpoint = ((min as u64 + max as u64) / 2) as NumEdges;
        let strategy = if m == max {
            BuildStrategy::Complete
        } else if m < midpoint {
            BuildStrategy::Distribute
        } else {
            BuildStrategy::Remove
        };

        Ok((m, strategy))
    }

    /// Builds a random graph with exactly the configured number of nodes and edges.
    ///
    /// # Errors
    /// - everything reported by [`RandomGraphBuilder::strategy`], before any random draw,
    /// - [`GraphError::RetriesExhausted`] if a retry limit is set and exceeded.
    pub fn build<R>(&self, rng: &mut R) -> Result<TriangularGraph>
    where
        R: Rng,
    {
        let (m, strategy) = self.plan()?;
        debug!(vertices = self.n, edges = m, ?strategy, "building random graph");

        let mut graph = TriangularGraph::try_new(self.n)?;
        match strategy {
            BuildStrategy::Complete => graph.connect_all(),
            BuildStrategy::Distribute => {
                graph.connect_random_path(rng)?;
                let remaining = m - graph.number_of_edges();
                self.sample_edits(&mut graph, rng, remaining, |g, u, v| {
                    g.try_add_edge(u, v).map(|existed| !existed)
                })?;
            }
            BuildStrategy::Remove => {
                graph.connect_all();
                let remaining = graph.number_of_edges() - m;
                self.sample_edits(&mut graph, rng, remaining, |g, u, v| g.try_remove_edge(u, v))?;
            }
        }

        debug_assert_eq!(graph.number_of_edges(), m);
        Ok(graph)
    }

    /// Draws uniformly random pairs and applies `edit` until it reported `remaining` changes.
    ///
    /// Drawing a uniform slot of the packed matrix and decoding it with [`pair_from_index`] is the
    /// same as drawing a uniform unordered pair of distinct nodes.
    fn sample_edits<R, F>(
        &self,
        graph: &mut TriangularGraph,
        rng: &mut R,
        mut remaining: NumEdges,
        mut edit: F,
    ) -> Result<()>
    where
        R: Rng,
        F: FnMut(&mut TriangularGraph, Node, Node) -> Result<bool>,
    {
        let capacity = graph.capacity();
        let mut retries: u64 = 0;

        while remaining > 0 {
            let (u, v) = pair_from_index(rng.random_range(0..capacity));
            if edit(graph, u, v)? {
                remaining -= 1;
                continue;
            }

            retries += 1;
            trace!(u, v, retries, "rejected random pair");

            if self.max_retries.is_some_and(|max| retries > max) {
                return Err(GraphError::RetriesExhausted { retries, remaining });
            }
        }

        debug!(retries, "random sampling finished");
        Ok(())
    }
}

impl NumNodesGen for RandomGraphBuilder {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomGraphBuilder {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = Some(m);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::Connectivity;

    fn builder(n: NumNodes, m: NumEdges) -> RandomGraphBuilder {
        RandomGraphBuilder::new().nodes(n).edges(m)
    }

    #[test]
    fn exact_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in 2..16 {
            for m in builder(n, 0).edge_range().unwrap() {
                let b = builder(n, m);
                let graph = b.build(rng).unwrap();

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), m, "n = {n}, m = {m}");

                if b.strategy().unwrap() != BuildStrategy::Remove {
                    assert!(graph.is_connected(), "n = {n}, m = {m}");
                }
            }
        }
    }

    #[test]
    fn sparse_graphs_are_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for n in [10, 50, 100] {
            let (min, max) = (n - 1, n * (n - 1) / 2);
            for m in [min, min + 1, (min + max) / 4, (min + max) / 2 - 1] {
                assert_eq!(builder(n, m).strategy().unwrap(), BuildStrategy::Distribute);

                let graph = builder(n, m).build(rng).unwrap();
                assert_eq!(graph.number_of_edges(), m);
                assert!(graph.is_connected());
            }
        }
    }

    #[test]
    fn minimum_is_a_spanning_path() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let graph = builder(5, 4).build(rng).unwrap();
            assert_eq!(graph.number_of_edges(), 4);
            assert!(graph.is_connected());
            assert!(graph.degrees().all(|d| (1..=2).contains(&d)));
        }
    }

    #[test]
    fn maximum_is_complete() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        assert_eq!(builder(4, 6).strategy().unwrap(), BuildStrategy::Complete);
        let graph = builder(4, 6).build(rng).unwrap();

        assert!(graph.is_complete());
        for (u, v) in (0..4).tuple_combinations() {
            assert!(graph.has_edge(u, v));
        }
    }

    #[test]
    fn strategy_selection() {
        // n = 5: feasible 4..=10, midpoint 7
        assert_eq!(builder(5, 4).strategy().unwrap(), BuildStrategy::Distribute);
        assert_eq!(builder(5, 6).strategy().unwrap(), BuildStrategy::Distribute);
        assert_eq!(builder(5, 7).strategy().unwrap(), BuildStrategy::Remove);
        assert_eq!(builder(5, 9).strategy().unwrap(), BuildStrategy::Remove);
        assert_eq!(builder(5, 10).strategy().unwrap(), BuildStrategy::Complete);

        assert_eq!(builder(2, 1).strategy().unwrap(), BuildStrategy::Complete);
    }

    #[test]
    fn rejects_infeasible_edge_counts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let err = builder(5, 3).build(rng).unwrap_err();
        assert!(matches!(
            err,
            GraphError::OutOfRange {
                min: 4,
                max: 10,
                vertices: 5,
                requested: 3
            }
        ));

        let err = builder(5, 20).build(rng).unwrap_err();
        assert_eq!(
            err.to_string(),
            "requested edges out of range: need 4..10 for 5 vertices, got 20"
        );
    }

    #[test]
    fn rejects_invalid_configuration() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for n in [0, 1] {
            assert!(matches!(
                builder(n, 0).build(rng),
                Err(GraphError::InvalidArgument(_))
            ));
        }

        assert!(matches!(
            RandomGraphBuilder::new().nodes(5).build(rng),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn reproducible_with_same_seed() {
        let a = builder(30, 100)
            .build(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        let b = builder(30, 100)
            .build(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);

        let a = builder(30, 400)
            .build(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        let b = builder(30, 400)
            .build(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn retry_limit() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        // n = 30: feasible 29..=435, ~200 additions up to the midpoint will hit existing edges
        let err = builder(30, 231).max_retries(0).build(rng).unwrap_err();
        assert!(matches!(
            err,
            GraphError::RetriesExhausted { retries: 1, .. }
        ));

        let graph = builder(30, 231).max_retries(1_000_000).build(rng).unwrap();
        assert_eq!(graph.number_of_edges(), 231);
    }
}
