//! B-tree index implementation in Rust.
//!
//! This crate provides an in-memory ordered index over unique keys, built on
//! a multiway balanced search tree of configurable minimum degree. Search,
//! insertion, and deletion are all single-pass top-down: a full node is split
//! before descent on the way in, a deficient node is refilled before descent
//! on the way down, so no operation ever needs a second fix-up pass back
//! through the ancestor chain.
//!
//! # Examples
//!
//! ```
//! use btreeindex::BTreeIndex;
//!
//! let mut tree = BTreeIndex::new(2).unwrap();
//! for key in [6, 18, 16, 22, 3, 12] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.search(&16), Some(&16));
//! tree.delete(&16);
//! assert_eq!(tree.search(&16), None);
//! ```

mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use construction::{validation as degree_validation, DEFAULT_DEGREE};
pub use error::{BTreeError, InitResult};
pub use types::{BTreeIndex, InternalNode, LeafNode, NodeId, NodeRef, MIN_DEGREE, NULL_NODE};
