/*!
# IO

Persisting graphs and rendering them for humans.

## Persistence

A graph is stored as a [`PersistedGraph`] record serialized to JSON:
```json
{"vertices": 4, "adjacency": [1, 0, 1, 0, 0, 1]}
```
`adjacency` holds one `0`/`1` value per slot of the packed lower triangle, ordered by offset, so
it has exactly `vertices * (vertices - 1) / 2` entries. [`JsonWrite`] and [`JsonRead`] write and
read this record from any writer/reader or directly from files.

## Display

[`MatrixDisplay`] prints the lower triangle row by row followed by the flat array, which is handy
for eyeballing small graphs.
*/

pub mod json;
pub mod matrix;

use serde::{Deserialize, Serialize};

use crate::{error::Result, prelude::*};

pub use json::*;
pub use matrix::*;

/// On-disk record of a [`TriangularGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedGraph {
    /// Number of vertices
    pub vertices: NumNodes,
    /// Packed lower triangle, one `0`/`1` per slot
    pub adjacency: Vec<u8>,
}

impl From<&TriangularGraph> for PersistedGraph {
    fn from(graph: &TriangularGraph) -> Self {
        Self {
            vertices: graph.number_of_nodes(),
            adjacency: graph.adjacency_values(),
        }
    }
}

impl TryFrom<PersistedGraph> for TriangularGraph {
    type Error = crate::error::GraphError;

    fn try_from(record: PersistedGraph) -> Result<Self> {
        TriangularGraph::try_from_adjacency(record.vertices, &record.adjacency)
    }
}

impl TriangularGraph {
    /// Returns the record that [`JsonWrite`] persists.
    pub fn to_persisted(&self) -> PersistedGraph {
        PersistedGraph::from(self)
    }
}
