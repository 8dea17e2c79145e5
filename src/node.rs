/*!
# Node Representation

We choose `Node = u32` as the packed adjacency matrix of any graph we can store already needs
`n * (n - 1) / 2` bits, which rules out anything close to `2^32` nodes anyway.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// Number of nodes in a graph
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
