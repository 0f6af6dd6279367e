//! Validation and debugging utilities for BTreeIndex.
//!
//! The invariant checkers verify everything the structure promises: sorted
//! keys, separator interval bounds, occupancy limits, uniform leaf depth,
//! child counts, and agreement between the tree shape and arena bookkeeping.
//! The dump helpers render the level-order layout that the shape tests
//! assert against.

use crate::error::{BTreeError, TreeResult};
use crate::types::{BTreeIndex, NodeRef};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::fmt::Write as _;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord + Clone> BTreeIndex<K> {
    /// Check if the tree maintains all B-tree invariants.
    /// Returns true if every invariant is satisfied.
    pub fn check_invariants(&self) -> bool {
        let mut leaf_depth = None;
        self.check_node_invariants(self.root, None, None, 0, &mut leaf_depth, true)
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if !self.check_invariants() {
            return Err("Tree invariants violated".to_string());
        }

        self.check_key_order()?;

        self.check_arena_tree_consistency()
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Check that an in-order walk produces strictly ascending keys.
    fn check_key_order(&self) -> Result<(), String> {
        let keys = self.slice();
        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                return Err(format!("In-order walk returned unsorted keys at index {}", i));
            }
        }
        if keys.len() != self.len() {
            return Err(format!(
                "In-order walk returned {} keys but tree reports {}",
                keys.len(),
                self.len()
            ));
        }
        Ok(())
    }

    /// Check that arena allocation matches the reachable tree structure.
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        let (tree_leaf_count, tree_internal_count) = self.count_nodes_in_tree();

        let leaf_stats = self.leaf_arena_stats();
        let internal_stats = self.internal_arena_stats();

        if tree_leaf_count != leaf_stats.allocated_count {
            return Err(BTreeError::corrupted_tree(
                "Leaf arena",
                &format!(
                    "{} in tree vs {} in arena",
                    tree_leaf_count, leaf_stats.allocated_count
                ),
            ));
        }

        if tree_internal_count != internal_stats.allocated_count {
            return Err(BTreeError::corrupted_tree(
                "Internal arena",
                &format!(
                    "{} in tree vs {} in arena",
                    tree_internal_count, internal_stats.allocated_count
                ),
            ));
        }

        Ok(())
    }

    /// Recursively check invariants for a node and its children.
    ///
    /// `min_key`/`max_key` carry the open separator interval down the tree;
    /// `leaf_depth` pins the depth of the first leaf reached so every other
    /// leaf can be compared against it.
    fn check_node_invariants(
        &self,
        node: NodeRef<K>,
        min_key: Option<&K>,
        max_key: Option<&K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
        is_root: bool,
    ) -> bool {
        let keys: &[K] = match node {
            NodeRef::Leaf(id, _) => match self.get_leaf(id) {
                Some(leaf) => &leaf.keys,
                None => return false, // dangling arena reference
            },
            NodeRef::Internal(id, _) => match self.get_internal(id) {
                Some(internal) => &internal.keys,
                None => return false,
            },
        };

        // Keys must be strictly ascending
        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                return false;
            }
        }

        // Keys must stay inside the open interval inherited from ancestors
        if let (Some(min), Some(first)) = (min_key, keys.first()) {
            if first <= min {
                return false;
            }
        }
        if let (Some(max), Some(last)) = (max_key, keys.last()) {
            if last >= max {
                return false;
            }
        }

        // Occupancy bounds: at most 2t-1 everywhere, at least t-1 off the root
        if keys.len() > 2 * self.degree - 1 {
            return false;
        }
        if !is_root && keys.len() < self.degree - 1 {
            return false;
        }

        match node {
            NodeRef::Leaf(_, _) => {
                // All leaves sit at the same depth
                match *leaf_depth {
                    Some(expected) => depth == expected,
                    None => {
                        *leaf_depth = Some(depth);
                        true
                    }
                }
            }
            NodeRef::Internal(id, _) => {
                let internal = match self.get_internal(id) {
                    Some(internal) => internal,
                    None => return false,
                };

                // Exactly one more child than keys
                if internal.children.len() != internal.keys.len() + 1 {
                    return false;
                }

                // An internal root emptied of keys must have been collapsed
                if internal.keys.is_empty() {
                    return false;
                }

                for (i, &child) in internal.children.iter().enumerate() {
                    let child_min = if i == 0 {
                        min_key
                    } else {
                        Some(&internal.keys[i - 1])
                    };
                    let child_max = if i == internal.keys.len() {
                        max_key
                    } else {
                        Some(&internal.keys[i])
                    };

                    if !self.check_node_invariants(
                        child,
                        child_min,
                        child_max,
                        depth + 1,
                        leaf_depth,
                        false,
                    ) {
                        return false;
                    }
                }

                true
            }
        }
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Returns every key in sorted order (for testing/debugging).
    pub fn slice(&self) -> Vec<&K> {
        let mut out = Vec::new();
        self.collect_in_order(self.root, &mut out);
        out
    }

    fn collect_in_order<'a>(&'a self, node: NodeRef<K>, out: &mut Vec<&'a K>) {
        match node {
            NodeRef::Leaf(id, _) => {
                if let Some(leaf) = self.get_leaf(id) {
                    out.extend(leaf.keys.iter());
                }
            }
            NodeRef::Internal(id, _) => {
                if let Some(internal) = self.get_internal(id) {
                    for (i, &child) in internal.children.iter().enumerate() {
                        self.collect_in_order(child, out);
                        if i < internal.keys.len() {
                            out.push(&internal.keys[i]);
                        }
                    }
                }
            }
        }
    }

    /// Returns the keys of every node in level order (breadth-first), the
    /// shape the scenario tests assert against.
    pub fn level_order_keys(&self) -> Vec<Vec<K>> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self.root);

        while let Some(node) = queue.pop_front() {
            match node {
                NodeRef::Leaf(id, _) => {
                    if let Some(leaf) = self.get_leaf(id) {
                        out.push(leaf.keys.clone());
                    }
                }
                NodeRef::Internal(id, _) => {
                    if let Some(internal) = self.get_internal(id) {
                        out.push(internal.keys.clone());
                        queue.extend(internal.children.iter().copied());
                    }
                }
            }
        }

        out
    }

    /// Level-order textual rendering of node contents, one line per level.
    /// Intended for diagnostics and test output; the format is not a
    /// stability contract.
    pub fn debug_dump(&self) -> String
    where
        K: Debug,
    {
        let mut out = String::new();
        let mut level = vec![self.root];
        let mut depth = 0;

        while !level.is_empty() {
            let mut next = Vec::new();
            let mut rendered = Vec::with_capacity(level.len());

            for &node in &level {
                match node {
                    NodeRef::Leaf(id, _) => match self.get_leaf(id) {
                        Some(leaf) => rendered.push(format!("{:?}", leaf.keys)),
                        None => rendered.push(format!("<missing leaf {}>", id)),
                    },
                    NodeRef::Internal(id, _) => match self.get_internal(id) {
                        Some(internal) => {
                            rendered.push(format!("{:?}", internal.keys));
                            next.extend(internal.children.iter().copied());
                        }
                        None => rendered.push(format!("<missing internal {}>", id)),
                    },
                }
            }

            let _ = writeln!(out, "level {}: {}", depth, rendered.join(" "));
            level = next;
            depth += 1;
        }

        out
    }

    /// Prints the tree layout for debugging.
    pub fn print_structure(&self)
    where
        K: Debug,
    {
        println!("Tree structure:");
        print!("{}", self.debug_dump());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_on_empty_tree() {
        let tree = BTreeIndex::<i32>::new(2).unwrap();
        assert!(tree.check_invariants());
        assert!(tree.check_invariants_detailed().is_ok());
    }

    #[test]
    fn test_invariants_hold_through_growth() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22, 3, 12, 8, 10, 20, 21, 13, 17] {
            tree.insert(k);
            assert!(tree.check_invariants_detailed().is_ok());
        }
    }

    #[test]
    fn test_slice_is_sorted() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22, 3, 12, 8, 10, 20, 21, 13, 17] {
            tree.insert(k);
        }
        let keys: Vec<i32> = tree.slice().into_iter().copied().collect();
        assert_eq!(keys, vec![3, 6, 8, 10, 12, 13, 16, 17, 18, 20, 21, 22]);
    }

    #[test]
    fn test_level_order_keys_shape() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22] {
            tree.insert(k);
        }
        assert_eq!(
            tree.level_order_keys(),
            vec![vec![16], vec![6], vec![18, 22]]
        );
    }

    #[test]
    fn test_debug_dump_renders_levels() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16, 22] {
            tree.insert(k);
        }
        let dump = tree.debug_dump();
        assert!(dump.contains("level 0: [16]"));
        assert!(dump.contains("level 1: [6] [18, 22]"));
    }

    #[test]
    fn test_detailed_validation_catches_corruption() {
        let mut tree = BTreeIndex::new(2).unwrap();
        for k in [6, 18, 16] {
            tree.insert(k);
        }
        // Break the sort order behind the checker's back.
        let root_id = tree.root.id();
        if let Some(leaf) = tree.get_leaf_mut(root_id) {
            leaf.keys.swap(0, 2);
        }
        assert!(!tree.check_invariants());
        assert!(tree.check_invariants_detailed().is_err());
    }
}
