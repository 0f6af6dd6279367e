//! Construction and initialization logic for BTreeIndex and nodes.
//!
//! This module contains degree validation, arena initialization, node
//! constructors, and default implementations.

use crate::compact_arena::CompactArena;
use crate::error::{BTreeError, InitResult};
use crate::types::{BTreeIndex, InternalNode, LeafNode, NodeRef, MIN_DEGREE};

/// Default minimum degree for a B-tree index
pub const DEFAULT_DEGREE: usize = 8;

impl<K> BTreeIndex<K> {
    /// Create a B-tree index with the specified minimum degree.
    ///
    /// # Arguments
    ///
    /// * `degree` - Minimum degree `t`; every node other than the root holds
    ///   between `t-1` and `2t-1` keys
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTreeIndex)` if the degree is valid,
    /// `Err(BTreeError::InvalidDegree)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreeindex::BTreeIndex;
    ///
    /// let tree = BTreeIndex::<i32>::new(2).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(BTreeIndex::<i32>::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> InitResult<Self> {
        if degree < MIN_DEGREE {
            return Err(BTreeError::invalid_degree(degree, MIN_DEGREE));
        }

        // The tree starts life as a single empty leaf at the root
        let mut leaf_arena = CompactArena::new();
        let root_id = leaf_arena.allocate(LeafNode::new(degree));

        Ok(Self {
            degree,
            root: NodeRef::leaf(root_id),
            leaf_arena,
            internal_arena: CompactArena::new(),
        })
    }

    /// Create a B-tree index with the default degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_DEGREE)`.
    pub fn with_default_degree() -> InitResult<Self> {
        Self::new(DEFAULT_DEGREE)
    }

    /// Returns the minimum degree this tree was constructed with.
    pub fn degree(&self) -> usize {
        self.degree
    }
}

impl<K> LeafNode<K> {
    /// Creates a new empty leaf node for a tree of the given degree.
    ///
    /// Key storage is reserved up front to the `2t-1` maximum so steady-state
    /// slot shuffling never reallocates.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            keys: Vec::with_capacity(2 * degree - 1),
        }
    }
}

impl<K> InternalNode<K> {
    /// Creates a new empty internal node for a tree of the given degree.
    ///
    /// Reserves `2t-1` key slots and `2t` child slots.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            keys: Vec::with_capacity(2 * degree - 1),
            children: Vec::with_capacity(2 * degree),
        }
    }
}

// Default implementations
impl<K> Default for BTreeIndex<K> {
    /// Create a B-tree index with the default degree.
    fn default() -> Self {
        Self::with_default_degree().expect("default degree is valid")
    }
}

impl<K> Default for LeafNode<K> {
    /// Create a leaf node with the default degree.
    fn default() -> Self {
        Self::new(DEFAULT_DEGREE)
    }
}

impl<K> Default for InternalNode<K> {
    /// Create an internal node with the default degree.
    fn default() -> Self {
        Self::new(DEFAULT_DEGREE)
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a minimum degree is suitable for B-tree nodes.
    ///
    /// Returns `Ok(())` if valid, `Err(BTreeError)` otherwise.
    pub fn validate_degree(degree: usize) -> InitResult<()> {
        if degree < MIN_DEGREE {
            Err(BTreeError::invalid_degree(degree, MIN_DEGREE))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction() {
        let tree = BTreeIndex::<i32>::new(2).unwrap();
        assert_eq!(tree.degree(), 2);
        assert!(tree.is_empty());
        assert!(tree.is_leaf_root());
    }

    #[test]
    fn test_tree_invalid_degree() {
        for degree in [0, 1] {
            let result = BTreeIndex::<i32>::new(degree);
            assert!(matches!(result, Err(BTreeError::InvalidDegree(_))));
        }
    }

    #[test]
    fn test_degree_two_is_minimum() {
        assert!(BTreeIndex::<i32>::new(2).is_ok());
        assert!(BTreeIndex::<i32>::new(1).is_err());
    }

    #[test]
    fn test_tree_default() {
        let tree = BTreeIndex::<i32>::default();
        assert_eq!(tree.degree(), DEFAULT_DEGREE);
    }

    #[test]
    fn test_leaf_construction() {
        let leaf = LeafNode::<i32>::new(2);
        assert_eq!(leaf.degree, 2);
        assert!(leaf.keys.is_empty());
        assert!(leaf.keys.capacity() >= 3);
    }

    #[test]
    fn test_internal_construction() {
        let node = InternalNode::<i32>::new(2);
        assert_eq!(node.degree, 2);
        assert!(node.keys.is_empty());
        assert!(node.children.is_empty());
        assert!(node.children.capacity() >= 4);
    }

    #[test]
    fn test_validation() {
        assert!(validation::validate_degree(2).is_ok());
        assert!(validation::validate_degree(64).is_ok());
        assert!(validation::validate_degree(1).is_err());
        assert!(validation::validate_degree(0).is_err());
    }
}
