//! Node implementations for BTreeIndex.
//!
//! This module contains the node-level operations for LeafNode and
//! InternalNode: occupancy checks, sorted key maintenance, splitting, merging,
//! and the donate/accept halves of delete-time rotations. The tree layer
//! guarantees the capacity preconditions; the structural asserts here fail
//! fast if it ever does not.

use crate::types::{InternalNode, LeafNode, NodeRef};

// ============================================================================
// LEAF NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord + Clone> LeafNode<K> {
    /// Returns the number of keys in this leaf.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this leaf holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this leaf is at the `2t-1` key maximum.
    pub fn is_full(&self) -> bool {
        self.keys.len() >= 2 * self.degree - 1
    }

    /// Returns the minimum number of keys a non-root leaf must hold.
    pub fn min_keys(&self) -> usize {
        self.degree - 1
    }

    /// Returns true if this leaf can give up a key without underflowing.
    pub fn can_donate(&self) -> bool {
        self.keys.len() > self.min_keys()
    }

    /// Look up a key in this leaf.
    pub fn find_key(&self, key: &K) -> Option<&K> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|index| &self.keys[index])
    }

    /// Insert a key at its sorted position. Returns false if the key was
    /// already present (the leaf is left untouched).
    ///
    /// Caller guarantees the leaf is not full.
    pub fn insert_key(&mut self, key: K) -> bool {
        debug_assert!(!self.is_full(), "insert into a full leaf");
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(index) => {
                self.keys.insert(index, key);
                true
            }
        }
    }

    /// Remove a key, compacting the remaining slots. Absent keys are a no-op.
    pub fn remove_key(&mut self, key: &K) -> Option<K> {
        match self.keys.binary_search(key) {
            Ok(index) => Some(self.keys.remove(index)),
            Err(_) => None,
        }
    }

    /// Smallest key in this leaf.
    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Largest key in this leaf.
    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    // ============================================================================
    // SPLITTING AND MERGING
    // ============================================================================

    /// Split this full leaf in half, returning the promoted middle key and the
    /// new right sibling. Both halves end up with exactly `t-1` keys.
    pub fn split(&mut self) -> (K, LeafNode<K>) {
        assert!(self.is_full(), "split of a leaf that is not full");

        let promoted = self.keys[self.degree - 1].clone();
        let right_keys = self.keys.split_off(self.degree);
        self.keys.pop(); // drop the promoted key from the left half

        let new_right = LeafNode {
            degree: self.degree,
            keys: right_keys,
        };

        (promoted, new_right)
    }

    /// Merge a separator and the right sibling's content into this leaf; the
    /// exact inverse of `split`, producing a full `2t-1` key node.
    pub fn merge_from(&mut self, separator: K, mut other: LeafNode<K>) {
        assert!(
            self.keys.len() == self.min_keys() && other.keys.len() == other.min_keys(),
            "merge of leaves that are not both minimal"
        );
        self.keys.push(separator);
        self.keys.append(&mut other.keys);
    }

    // ============================================================================
    // ROTATION HELPERS
    // ============================================================================

    /// Give up the largest key (used when this is the left sibling).
    pub fn donate_last(&mut self) -> Option<K> {
        if !self.can_donate() {
            return None;
        }
        self.keys.pop()
    }

    /// Give up the smallest key (used when this is the right sibling).
    pub fn donate_first(&mut self) -> Option<K> {
        if !self.can_donate() {
            return None;
        }
        Some(self.keys.remove(0))
    }

    /// Accept the parent separator as the new minimum.
    pub fn accept_from_left(&mut self, separator: K) {
        self.keys.insert(0, separator);
    }

    /// Accept the parent separator as the new maximum.
    pub fn accept_from_right(&mut self, separator: K) {
        self.keys.push(separator);
    }
}

// ============================================================================
// INTERNAL NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord + Clone> InternalNode<K> {
    /// Returns the number of separator keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node is at the `2t-1` key maximum.
    pub fn is_full(&self) -> bool {
        self.keys.len() >= 2 * self.degree - 1
    }

    /// Returns the minimum number of keys a non-root internal node must hold.
    pub fn min_keys(&self) -> usize {
        self.degree - 1
    }

    /// Returns true if this node can give up a key without underflowing.
    pub fn can_donate(&self) -> bool {
        self.keys.len() > self.min_keys()
    }

    /// Find the index of the child whose subtree would contain the given key.
    pub fn child_index(&self, key: &K) -> usize {
        match self.keys.binary_search(key) {
            Ok(index) => index + 1, // key sits in this node; the right child follows it
            Err(index) => index,
        }
    }

    /// Smallest separator key.
    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Largest separator key.
    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    // ============================================================================
    // SPLITTING AND MERGING
    // ============================================================================

    /// Split this full node in half, returning the promoted middle key and the
    /// new right sibling. Each half keeps `t-1` keys and `t` children.
    pub fn split(&mut self) -> (K, InternalNode<K>) {
        assert!(self.is_full(), "split of an internal node that is not full");

        let promoted = self.keys[self.degree - 1].clone();
        let right_keys = self.keys.split_off(self.degree);
        let right_children = self.children.split_off(self.degree);
        self.keys.pop(); // drop the promoted key from the left half

        let new_right = InternalNode {
            degree: self.degree,
            keys: right_keys,
            children: right_children,
        };

        (promoted, new_right)
    }

    /// Merge a separator and the right sibling's content into this node; the
    /// exact inverse of `split`, producing a full `2t-1` key node.
    pub fn merge_from(&mut self, separator: K, mut other: InternalNode<K>) {
        assert!(
            self.keys.len() == self.min_keys() && other.keys.len() == other.min_keys(),
            "merge of internal nodes that are not both minimal"
        );
        self.keys.push(separator);
        self.keys.append(&mut other.keys);
        self.children.append(&mut other.children);
    }

    // ============================================================================
    // ROTATION HELPERS
    // ============================================================================

    /// Give up the largest key and last child (used when this is the left
    /// sibling).
    pub fn donate_last(&mut self) -> Option<(K, NodeRef<K>)> {
        if !self.can_donate() {
            return None;
        }
        let key = self.keys.pop()?;
        let child = self.children.pop()?;
        Some((key, child))
    }

    /// Give up the smallest key and first child (used when this is the right
    /// sibling).
    pub fn donate_first(&mut self) -> Option<(K, NodeRef<K>)> {
        if !self.can_donate() {
            return None;
        }
        let key = self.keys.remove(0);
        let child = self.children.remove(0);
        Some((key, child))
    }

    /// Accept the parent separator and a migrated child at the front.
    pub fn accept_from_left(&mut self, separator: K, child: NodeRef<K>) {
        self.keys.insert(0, separator);
        self.children.insert(0, child);
    }

    /// Accept the parent separator and a migrated child at the back.
    pub fn accept_from_right(&mut self, separator: K, child: NodeRef<K>) {
        self.keys.push(separator);
        self.children.push(child);
    }
}
