use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::*;

/// Renders the packed lower triangle of a graph as rows `1..n`, followed by the flat slot array.
///
/// ```text
///      0 1 2
///  1 | 1
///  2 | 1 0
///  3 | 0 0 1
/// [1, 1, 0, 0, 0, 1]
/// ```
pub struct MatrixDisplay<'a> {
    graph: &'a TriangularGraph,
}

impl<'a> MatrixDisplay<'a> {
    pub fn new(graph: &'a TriangularGraph) -> Self {
        Self { graph }
    }
}

impl Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let n = self.graph.number_of_nodes();
        let w = (n - 1).to_string().len();

        write!(f, "{:w$}  ", "")?;
        for v in 0..n - 1 {
            write!(f, " {v:>w$}")?;
        }
        writeln!(f)?;

        for u in 1..n {
            write!(f, "{u:>w$} |")?;
            for v in 0..u {
                write!(f, " {:>w$}", self.graph.has_edge(u, v) as u8)?;
            }
            writeln!(f)?;
        }

        write!(f, "[{}]", self.graph.adjacency_values().iter().join(", "))
    }
}

impl TriangularGraph {
    /// Returns a [`Display`] adapter printing the adjacency matrix.
    pub fn matrix_display(&self) -> MatrixDisplay<'_> {
        MatrixDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn small_matrix() {
        let graph = graph_from_edges(4, &[(0, 1), (0, 2), (2, 3)]);
        let expected = "    0 1 2\n1 | 1\n2 | 1 0\n3 | 0 0 1\n[1, 1, 0, 0, 0, 1]";

        assert_eq!(graph.matrix_display().to_string(), expected);
    }

    #[test]
    fn wide_labels() {
        let graph = TriangularGraph::try_complete(11).unwrap();
        let text = graph.matrix_display().to_string();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].ends_with(" 8  9"));
        assert_eq!(lines[1], " 1 |  1");
        assert_eq!(lines[10], "10 |  1  1  1  1  1  1  1  1  1  1");
        assert_eq!(lines[11].matches('1').count(), 55);
    }
}
