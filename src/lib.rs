//! # Dynbits
//!
//! Dynamic succinct data structures: an indexed bit vector and a
//! balanced-parenthesis ordinal tree, both mutable in O(log n) per
//! operation while staying close to the information-theoretic space bound.
//!
//! Static succinct structures answer rank and select in constant time but
//! have to be rebuilt on every edit. This crate trades the constant for a
//! logarithm and gains full mutability: bits can be inserted and deleted
//! anywhere, and tree nodes can be added, removed and re-parented, with
//! every query staying logarithmic.
//!
//! ## Quick Start
//!
//! ```
//! use dynbits::DynamicBitVec;
//!
//! let mut bv: DynamicBitVec = DynamicBitVec::new();
//! for i in 0..100 {
//!     bv.push_back(i % 3 == 0);
//! }
//!
//! // Count of 1-bits in [0, 30)
//! assert_eq!(bv.rank_one(30), 10);
//! // Position of the 10th 1-bit (one-based)
//! assert_eq!(bv.select_one(10), Some(27));
//!
//! // Edits shift everything behind them
//! bv.insert(0, true);
//! assert_eq!(bv.rank_one(31), 11);
//! ```
//!
//! ## Layout
//!
//! Bits live in leaf buffers of a few blocks each, organised under a
//! red-black tree whose internal nodes count the bits and ones of their
//! left subtrees ([`DynamicBitVec`]). A compile-time policy adds per-leaf
//! chunk summaries and per-subtree excess aggregates ([`ExcessBitVec`]),
//! which power the matching-parenthesis searches behind the succinct tree
//! ([`DynamicBpTree`]).
//!
//! | module | contents |
//! |--------|----------|
//! | `block` | the machine-word abstraction ([`BitBlock`]) |
//! | `leaf` | flat block store with shift-based insert/delete ([`LeafVec`]) |
//! | `excess` | chunk summaries and excess aggregates ([`ExcessPolicy`]) |
//! | `tree` | the balanced tree of leaves ([`DynamicBitVec`]) |
//! | `bp` | the ordinal tree adapter ([`DynamicBpTree`]) |

mod block;
mod bp;
mod excess;
mod leaf;
mod tree;

pub use block::BitBlock;
pub use bp::{DynamicBpTree, LEFT, RIGHT};
pub use excess::{ChunkIndex, ExcessAgg, ExcessPolicy, LeafIndex, MinExcess, NoExcess, NoIndex};
pub use leaf::LeafVec;
pub use tree::{Bits, DynamicBitVec, ExcessBitVec};

/// Leaf sizing for [`DynamicBitVec`], in blocks.
///
/// A leaf splits when it reaches `max_leaf_blocks`, refills or merges when
/// it drops below `min_leaf_blocks`, and bulk loading carves the input into
/// leaves of `initial_leaf_blocks`. `chunk_blocks` sets the granularity of
/// the excess summaries kept inside parenthesis-capable leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub min_leaf_blocks: usize,
    pub initial_leaf_blocks: usize,
    pub max_leaf_blocks: usize,
    pub chunk_blocks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_leaf_blocks: 16,
            initial_leaf_blocks: 32,
            max_leaf_blocks: 64,
            chunk_blocks: 8,
        }
    }
}

impl Config {
    /// Assert that the sizes are mutually consistent: a split must produce
    /// two leaves above the minimum, a merge must fit below the maximum,
    /// and split points must land on chunk boundaries.
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration.
    pub fn validate(&self) {
        assert!(self.min_leaf_blocks >= 1, "minimum leaf size must be positive");
        assert!(
            2 * self.min_leaf_blocks <= self.initial_leaf_blocks,
            "initial leaf size must be at least twice the minimum"
        );
        assert!(
            self.initial_leaf_blocks <= self.max_leaf_blocks,
            "maximum leaf size must be at least the initial size"
        );
        assert!(self.chunk_blocks >= 1, "chunk size must be positive");
        assert!(
            (self.max_leaf_blocks / 2) % self.chunk_blocks == 0,
            "split point must be chunk-aligned"
        );
        assert!(
            self.initial_leaf_blocks % self.chunk_blocks == 0,
            "initial leaf size must be chunk-aligned"
        );
    }
}
