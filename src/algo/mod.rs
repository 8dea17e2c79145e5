/*!
# Graph Algorithms

Algorithms operating on any graph that answers adjacency queries. Everything is re-exported at the
top level of this module, so
```rust
use trigraph::{prelude::*, algo::*};
```
gives access to traversal, connectivity and shortest path routines as methods on the graph itself.
Where possible, results are provided as **iterators** and consumed lazily.
*/

mod connectivity;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use shortest_path::*;
pub use traversal::*;
