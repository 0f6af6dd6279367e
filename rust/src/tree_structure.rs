//! Tree structure queries for BTreeIndex.
//!
//! Size and shape accessors that walk the arena-backed structure: key counts,
//! node counts, depth, and wholesale clearing.

use crate::compact_arena::CompactArenaStats;
use crate::types::{BTreeIndex, LeafNode, NodeRef};

impl<K: Ord + Clone> BTreeIndex<K> {
    /// Returns the number of keys in the index, counting separator keys held
    /// by internal nodes as well as leaf keys.
    pub fn len(&self) -> usize {
        self.len_recursive(self.root)
    }

    fn len_recursive(&self, node: NodeRef<K>) -> usize {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id).map(|leaf| leaf.len()).unwrap_or(0),
            NodeRef::Internal(id, _) => self
                .get_internal(id)
                .map(|internal| {
                    internal.len()
                        + internal
                            .children
                            .iter()
                            .map(|&child| self.len_recursive(child))
                            .sum::<usize>()
                })
                .unwrap_or(0),
        }
    }

    /// Returns true if the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        matches!(self.root, NodeRef::Leaf(_, _))
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count_recursive(self.root)
    }

    fn leaf_count_recursive(&self, node: NodeRef<K>) -> usize {
        match node {
            NodeRef::Leaf(_, _) => 1,
            NodeRef::Internal(id, _) => self
                .get_internal(id)
                .map(|internal| {
                    internal
                        .children
                        .iter()
                        .map(|&child| self.leaf_count_recursive(child))
                        .sum()
                })
                .unwrap_or(0),
        }
    }

    /// Count the leaf and internal nodes actually reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, node: NodeRef<K>) -> (usize, usize) {
        match node {
            NodeRef::Leaf(_, _) => (1, 0),
            NodeRef::Internal(id, _) => {
                if let Some(internal) = self.get_internal(id) {
                    let mut total_leaves = 0;
                    let mut total_internals = 1;
                    for &child in &internal.children {
                        let (child_leaves, child_internals) = self.count_nodes_recursive(child);
                        total_leaves += child_leaves;
                        total_internals += child_internals;
                    }
                    (total_leaves, total_internals)
                } else {
                    (0, 0)
                }
            }
        }
    }

    /// Number of edges from the root down to the leaf level.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.root;
        while let NodeRef::Internal(id, _) = current {
            match self.get_internal(id).and_then(|n| n.children.first()) {
                Some(&child) => {
                    depth += 1;
                    current = child;
                }
                None => break,
            }
        }
        depth
    }

    /// Remove every key, resetting the index to a single empty root leaf.
    pub fn clear(&mut self) {
        self.leaf_arena.clear();
        self.internal_arena.clear();

        let root_leaf = LeafNode::new(self.degree);
        let root_id = self.leaf_arena.allocate(root_leaf);
        self.root = NodeRef::leaf(root_id);
    }

    // ============================================================================
    // ARENA STATISTICS
    // ============================================================================

    /// Get statistics for the leaf node arena.
    pub fn leaf_arena_stats(&self) -> CompactArenaStats {
        self.leaf_arena.stats()
    }

    /// Get statistics for the internal node arena.
    pub fn internal_arena_stats(&self) -> CompactArenaStats {
        self.internal_arena.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_internal_keys() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22] {
            tree.insert(k);
        }
        // shape is [16] over [6] and [18, 22]: one separator + three leaf keys
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_node_and_leaf_counts() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22, 3, 12, 8] {
            tree.insert(k);
        }
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.count_nodes_in_tree(), (3, 1));
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_clear_resets_to_empty_leaf() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in 0..50 {
            tree.insert(k);
        }
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.is_leaf_root());
        assert_eq!(tree.leaf_arena_stats().allocated_count, 1);
        assert_eq!(tree.internal_arena_stats().allocated_count, 0);
        // the cleared tree accepts fresh keys
        tree.insert(7);
        assert!(tree.contains(&7));
    }

    #[test]
    fn test_depth_grows_logarithmically() {
        let mut tree = BTreeIndex::new(2).unwrap();
        assert_eq!(tree.depth(), 0);
        for k in 0..100 {
            tree.insert(k);
        }
        let depth = tree.depth();
        assert!(depth >= 3, "depth {} too small for 100 keys", depth);
        assert!(depth <= 7, "depth {} too large for 100 keys", depth);
    }
}
