//! Insert operations for BTreeIndex.
//!
//! Insertion is single-pass and top-down: a full child is always split before
//! the descent enters it, so no node is ever revisited on the way back up. The
//! root is the one node with no parent to pre-split it, so the tree grows by
//! wrapping a full root in a fresh internal node and splitting it immediately.

use crate::types::{BTreeIndex, InternalNode, LeafNode, NodeId, NodeRef};
use std::cmp::Ordering;

impl<K: Ord + Clone> BTreeIndex<K> {
    // ============================================================================
    // ARENA ALLOCATION HELPERS
    // ============================================================================

    /// Allocate a new leaf node in the arena and return its ID.
    #[inline]
    pub(crate) fn allocate_leaf(&mut self, leaf: LeafNode<K>) -> NodeId {
        self.leaf_arena.allocate(leaf)
    }

    /// Allocate a new internal node in the arena and return its ID.
    #[inline]
    pub(crate) fn allocate_internal(&mut self, node: InternalNode<K>) -> NodeId {
        self.internal_arena.allocate(node)
    }

    // ============================================================================
    // PUBLIC INSERT OPERATION
    // ============================================================================

    /// Insert a key into the index.
    ///
    /// Inserting a key that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreeindex::BTreeIndex;
    ///
    /// let mut tree = BTreeIndex::new(2).unwrap();
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) {
        if self.is_node_full(self.root) {
            self.grow_root();
        }
        let root = self.root;
        self.insert_not_full(root, key);
    }

    // ============================================================================
    // TREE GROWTH
    // ============================================================================

    /// Wrap a full root in a new internal root and split it.
    ///
    /// Between installing the wrapper and the `split_child` call the new root
    /// transiently holds zero keys and a single child; this is the only state
    /// in which that shape exists.
    fn grow_root(&mut self) {
        let old_root = self.root;
        let mut new_root = InternalNode::new(self.degree);
        new_root.children.push(old_root);
        let new_id = self.allocate_internal(new_root);
        self.root = NodeRef::internal(new_id);
        self.split_child(new_id, 0);
    }

    /// Split the full child at `children[index]` of the internal node
    /// `parent`, promoting the child's middle key into the parent at `index`
    /// and linking the new right half at `index + 1`.
    pub(crate) fn split_child(&mut self, parent: NodeId, index: usize) {
        let child = match self.get_internal(parent) {
            Some(node) => node.children[index],
            None => return,
        };

        let (promoted, new_right) = match child {
            NodeRef::Leaf(id, _) => {
                let (promoted, right) = match self.get_leaf_mut(id) {
                    Some(leaf) => leaf.split(),
                    None => return,
                };
                (promoted, NodeRef::leaf(self.allocate_leaf(right)))
            }
            NodeRef::Internal(id, _) => {
                let (promoted, right) = match self.get_internal_mut(id) {
                    Some(node) => node.split(),
                    None => return,
                };
                (promoted, NodeRef::internal(self.allocate_internal(right)))
            }
        };

        if let Some(node) = self.get_internal_mut(parent) {
            node.keys.insert(index, promoted);
            node.children.insert(index + 1, new_right);
        }
    }

    // ============================================================================
    // RECURSIVE DESCENT
    // ============================================================================

    /// Insert into the subtree rooted at `node`.
    ///
    /// Caller guarantees `node` is not full, so the insertion position always
    /// exists without further splitting at this level.
    fn insert_not_full(&mut self, node: NodeRef<K>, key: K) {
        match node {
            NodeRef::Leaf(id, _) => {
                if let Some(leaf) = self.get_leaf_mut(id) {
                    leaf.insert_key(key);
                }
            }
            NodeRef::Internal(id, _) => {
                let (mut index, mut child) = match self.get_internal(id) {
                    Some(internal) => match internal.keys.binary_search(&key) {
                        Ok(_) => return, // already present
                        Err(index) => (index, internal.children[index]),
                    },
                    None => return,
                };

                if self.is_node_full(child) {
                    self.split_child(id, index);
                    // The promoted key now sits at keys[index]; descend to its
                    // right when the new key is larger.
                    let internal = match self.get_internal(id) {
                        Some(internal) => internal,
                        None => return,
                    };
                    match key.cmp(&internal.keys[index]) {
                        Ordering::Greater => index += 1,
                        Ordering::Equal => return, // split surfaced the same key
                        Ordering::Less => {}
                    }
                    child = internal.children[index];
                }

                self.insert_not_full(child, key);
            }
        }
    }
}
