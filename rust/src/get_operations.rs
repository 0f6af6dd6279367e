//! Read operations for BTreeIndex.
//!
//! This module contains key lookup and the arena accessor helpers the rest of
//! the tree code goes through to reach nodes.

use crate::types::{BTreeIndex, InternalNode, LeafNode, NodeId, NodeRef};

impl<K: Ord + Clone> BTreeIndex<K> {
    // ============================================================================
    // PUBLIC SEARCH OPERATIONS
    // ============================================================================

    /// Look up a key in the index.
    ///
    /// # Returns
    ///
    /// A reference to the stored key if present, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreeindex::BTreeIndex;
    ///
    /// let mut tree = BTreeIndex::new(2).unwrap();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&K> {
        self.search_recursive(self.root, key)
    }

    /// Check if a key exists in the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreeindex::BTreeIndex;
    ///
    /// let mut tree = BTreeIndex::new(2).unwrap();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Descend from `node`, stopping at the first node that holds the key.
    fn search_recursive(&self, node: NodeRef<K>, key: &K) -> Option<&K> {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id)?.find_key(key),
            NodeRef::Internal(id, _) => {
                let internal = self.get_internal(id)?;
                match internal.keys.binary_search(key) {
                    Ok(index) => Some(&internal.keys[index]),
                    Err(index) => self.search_recursive(internal.children[index], key),
                }
            }
        }
    }

    // ============================================================================
    // ARENA ACCESS HELPERS
    // ============================================================================

    /// Get a reference to a leaf node in the arena.
    pub fn get_leaf(&self, id: NodeId) -> Option<&LeafNode<K>> {
        self.leaf_arena.get(id)
    }

    /// Get a mutable reference to a leaf node in the arena.
    pub(crate) fn get_leaf_mut(&mut self, id: NodeId) -> Option<&mut LeafNode<K>> {
        self.leaf_arena.get_mut(id)
    }

    /// Get a reference to an internal node in the arena.
    pub fn get_internal(&self, id: NodeId) -> Option<&InternalNode<K>> {
        self.internal_arena.get(id)
    }

    /// Get a mutable reference to an internal node in the arena.
    pub(crate) fn get_internal_mut(&mut self, id: NodeId) -> Option<&mut InternalNode<K>> {
        self.internal_arena.get_mut(id)
    }

    // ============================================================================
    // NODE-SHAPE HELPERS
    // ============================================================================

    /// Number of keys held by the referenced node.
    pub(crate) fn key_count(&self, node: NodeRef<K>) -> usize {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id).map(|leaf| leaf.len()).unwrap_or(0),
            NodeRef::Internal(id, _) => self.get_internal(id).map(|n| n.len()).unwrap_or(0),
        }
    }

    /// Whether the referenced node sits at the `2t-1` key maximum.
    pub(crate) fn is_node_full(&self, node: NodeRef<K>) -> bool {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id).map(|leaf| leaf.is_full()).unwrap_or(false),
            NodeRef::Internal(id, _) => self
                .get_internal(id)
                .map(|n| n.is_full())
                .unwrap_or(false),
        }
    }

    /// Largest key in the subtree rooted at `node` (the in-order predecessor
    /// of the separator just above it).
    pub(crate) fn subtree_max(&self, node: NodeRef<K>) -> Option<K> {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id)?.last_key().cloned(),
            NodeRef::Internal(id, _) => {
                let internal = self.get_internal(id)?;
                self.subtree_max(*internal.children.last()?)
            }
        }
    }

    /// Smallest key in the subtree rooted at `node` (the in-order successor
    /// of the separator just above it).
    pub(crate) fn subtree_min(&self, node: NodeRef<K>) -> Option<K> {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id)?.first_key().cloned(),
            NodeRef::Internal(id, _) => {
                let internal = self.get_internal(id)?;
                self.subtree_min(*internal.children.first()?)
            }
        }
    }
}
