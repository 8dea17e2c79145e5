use crate::prelude::*;

/// Creates a graph with `n` nodes and the given edges.
/// ** Panics if an edge is invalid **
pub(crate) fn graph_from_edges(n: NumNodes, edges: &[(Node, Node)]) -> TriangularGraph {
    TriangularGraph::try_from_edges(n, edges.iter().copied()).unwrap()
}

/// Path `0 - 1 - ... - (n - 1)`
pub(crate) fn path_graph(n: NumNodes) -> TriangularGraph {
    let edges = (1..n).map(|u| (u - 1, u)).collect::<Vec<_>>();
    graph_from_edges(n, &edges)
}

/// All-pairs distances computed with Floyd-Warshall; `None` marks unreachable pairs.
pub(crate) fn distance_oracle<G: AdjacencyTest>(graph: &G) -> Vec<Vec<Option<NumNodes>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];

    for u in graph.vertices() {
        for v in graph.vertices() {
            if u == v {
                dist[u as usize][v as usize] = Some(0);
            } else if graph.has_edge(u, v) {
                dist[u as usize][v as usize] = Some(1);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                if let Some(kj) = dist[k][j] {
                    let via = ik + kj;
                    if dist[i][j].is_none_or(|d| via < d) {
                        dist[i][j] = Some(via);
                    }
                }
            }
        }
    }

    dist
}
