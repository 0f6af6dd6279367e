//! Randomized cross-checks against `std::collections::BTreeSet`.
//!
//! The standard library set is the reference model: after every batch of
//! operations both structures must agree on membership and sorted content,
//! and the tree must still satisfy all structural invariants.

use btreeindex::BTreeIndex;
use rand::prelude::*;
use std::collections::BTreeSet;

fn sorted_content(tree: &BTreeIndex<i32>) -> Vec<i32> {
    tree.slice().into_iter().copied().collect()
}

#[test]
fn test_random_inserts_match_btreeset() {
    let mut rng = StdRng::seed_from_u64(0xB7EE);
    let mut tree = BTreeIndex::new(2).unwrap();
    let mut model = BTreeSet::new();

    for _ in 0..2_000 {
        let key = rng.gen_range(0..500);
        tree.insert(key);
        model.insert(key);
    }

    assert_eq!(sorted_content(&tree), model.iter().copied().collect::<Vec<_>>());
    assert_eq!(tree.len(), model.len());
    assert!(tree.check_invariants_detailed().is_ok());
}

#[test]
fn test_random_mixed_operations_match_btreeset() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for degree in [2, 3, 5] {
        let mut tree = BTreeIndex::new(degree).unwrap();
        let mut model = BTreeSet::new();

        for step in 0..3_000 {
            let key = rng.gen_range(0..300);
            if rng.gen_bool(0.6) {
                tree.insert(key);
                model.insert(key);
            } else {
                tree.delete(&key);
                model.remove(&key);
            }

            assert_eq!(
                tree.contains(&key),
                model.contains(&key),
                "membership of {} diverged at step {} (degree {})",
                key,
                step,
                degree
            );

            if step % 100 == 0 {
                assert!(
                    tree.check_invariants_detailed().is_ok(),
                    "invariants broken at step {} (degree {})",
                    step,
                    degree
                );
            }
        }

        assert_eq!(
            sorted_content(&tree),
            model.iter().copied().collect::<Vec<_>>(),
            "content diverged (degree {})",
            degree
        );
        assert!(tree.check_invariants_detailed().is_ok());
    }
}

#[test]
fn test_random_searches_agree_with_model() {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    let mut tree = BTreeIndex::new(3).unwrap();
    let mut model = BTreeSet::new();

    for _ in 0..1_000 {
        let key = rng.gen_range(0..2_000);
        tree.insert(key);
        model.insert(key);
    }

    for _ in 0..2_000 {
        let probe = rng.gen_range(-100..2_100);
        assert_eq!(tree.search(&probe).copied(), model.get(&probe).copied());
    }
}

#[test]
fn test_insertion_order_does_not_change_content() {
    let mut rng = StdRng::seed_from_u64(0x08D3);
    let mut keys: Vec<i32> = (0..200).collect();
    let expected: Vec<i32> = keys.clone();

    for _ in 0..10 {
        keys.shuffle(&mut rng);
        let mut tree = BTreeIndex::new(2).unwrap();
        for &k in &keys {
            tree.insert(k);
        }
        assert_eq!(sorted_content(&tree), expected);
        assert!(tree.check_invariants_detailed().is_ok());
    }
}

#[test]
fn test_drain_in_random_order_empties_tree() {
    let mut rng = StdRng::seed_from_u64(0xD7A1);
    let mut keys: Vec<i32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = BTreeIndex::new(4).unwrap();
    for &k in &keys {
        tree.insert(k);
    }

    keys.shuffle(&mut rng);
    for (i, &k) in keys.iter().enumerate() {
        tree.delete(&k);
        if i % 50 == 0 {
            assert!(tree.check_invariants_detailed().is_ok());
        }
    }

    assert!(tree.is_empty());
    assert!(tree.is_leaf_root());
    assert_eq!(tree.internal_arena_stats().allocated_count, 0);
}
