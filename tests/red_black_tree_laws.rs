//! Property-based tests for RedBlackTree.
//!
//! These tests check the tree against a `BTreeMap` model and verify that the
//! red-black properties survive arbitrary sequences of puts and removes.

use proptest::prelude::*;
use rbmap::tree::RedBlackTree;
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Put(i16, i32),
    Remove(i16),
}

/// Strategy for a mixed sequence of puts and removes over a small key space,
/// so that overwrites and removals of present keys are common.
fn arbitrary_operations(max_size: usize) -> impl Strategy<Value = Vec<Operation>> {
    let operation = prop_oneof![
        3 => (-64i16..64, any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
        2 => (-64i16..64).prop_map(Operation::Remove),
    ];
    prop::collection::vec(operation, 0..max_size)
}

fn apply(operations: &[Operation]) -> (RedBlackTree<i16, i32>, BTreeMap<i16, i32>) {
    let mut tree = RedBlackTree::new();
    let mut model = BTreeMap::new();
    for operation in operations {
        match *operation {
            Operation::Put(key, value) => {
                tree.put(key, value);
                model.insert(key, value);
            }
            Operation::Remove(key) => {
                tree.remove(&key);
                model.remove(&key);
            }
        }
    }
    (tree, model)
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Law: keys come out sorted ascending regardless of insertion order.
    #[test]
    fn prop_keys_are_sorted(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let tree: RedBlackTree<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let mut expected = keys;
        expected.sort_unstable();
        expected.dedup();
        let actual: Vec<i32> = tree.keys().into_iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Law: overwriting a key changes its value and nothing else.
    #[test]
    fn prop_overwrite_keeps_size(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 1..50),
        index in any::<prop::sample::Index>(),
        value: i32
    ) {
        let mut tree: RedBlackTree<i32, i32> = entries.iter().copied().collect();
        let key = entries[index.index(entries.len())].0;
        let size = tree.size();
        let keys_before: Vec<i32> = tree.keys().into_iter().copied().collect();

        tree.put(key, value);

        prop_assert_eq!(tree.size(), size);
        prop_assert_eq!(tree.get(&key), Some(&value));
        let keys_after: Vec<i32> = tree.keys().into_iter().copied().collect();
        prop_assert_eq!(keys_after, keys_before);
    }
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: any sequence of puts and removes yields the same entries as BTreeMap.
    #[test]
    fn prop_matches_btreemap_model(operations in arbitrary_operations(300)) {
        let (tree, model) = apply(&operations);
        prop_assert_eq!(tree.size(), model.len());
        prop_assert_eq!(tree.is_empty(), model.is_empty());
        let actual: Vec<(i16, i32)> = tree.iter().map(|(key, value)| (*key, *value)).collect();
        let expected: Vec<(i16, i32)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Law: the red-black properties hold after every operation.
    #[test]
    fn prop_invariants_hold_after_every_operation(operations in arbitrary_operations(200)) {
        let mut tree = RedBlackTree::new();
        for operation in operations {
            match operation {
                Operation::Put(key, value) => tree.put(key, value),
                Operation::Remove(key) => tree.remove(&key),
            }
            prop_assert_eq!(tree.validate(), Ok(()));
        }
    }

    /// Law: removing an absent key changes nothing.
    #[test]
    fn prop_remove_absent_is_noop(operations in arbitrary_operations(100), key in 64i16..128) {
        let (mut tree, _) = apply(&operations);
        let before = tree.clone();
        tree.remove(&key);
        prop_assert_eq!(tree, before);
    }

    /// Law: left and right are the minimum and maximum keys.
    #[test]
    fn prop_left_right_are_extremes(operations in arbitrary_operations(100)) {
        let (tree, model) = apply(&operations);
        prop_assert_eq!(tree.left().map(|node| *node.key()), model.keys().next().copied());
        prop_assert_eq!(tree.right().map(|node| *node.key()), model.keys().next_back().copied());
    }
}

// =============================================================================
// Floor / Ceiling Laws
// =============================================================================

proptest! {
    /// Law: floor is the largest stored key not above the probe.
    #[test]
    fn prop_floor_matches_brute_force(operations in arbitrary_operations(100), probe in -80i16..80) {
        let (tree, model) = apply(&operations);
        let expected = model.keys().copied().filter(|key| *key <= probe).max();
        prop_assert_eq!(tree.floor(&probe).map(|node| *node.key()), expected);
    }

    /// Law: ceiling is the smallest stored key not below the probe.
    #[test]
    fn prop_ceiling_matches_brute_force(operations in arbitrary_operations(100), probe in -80i16..80) {
        let (tree, model) = apply(&operations);
        let expected = model.keys().copied().filter(|key| *key >= probe).min();
        prop_assert_eq!(tree.ceiling(&probe).map(|node| *node.key()), expected);
    }
}

// =============================================================================
// Cursor Laws
// =============================================================================

proptest! {
    /// Law: a full forward pass then a full backward pass visit every key
    /// once each, in mutually reverse order.
    #[test]
    fn prop_cursor_passes_are_symmetric(operations in arbitrary_operations(150)) {
        let (tree, _) = apply(&operations);
        let mut cursor = tree.iterator();

        let mut forward = Vec::new();
        while cursor.next() {
            forward.push(*cursor.key().unwrap());
        }
        let mut backward = Vec::new();
        while cursor.prev() {
            backward.push(*cursor.key().unwrap());
        }

        prop_assert_eq!(forward.len(), tree.size());
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// Law: the cursor and the iterator agree on order.
    #[test]
    fn prop_cursor_matches_iter(operations in arbitrary_operations(150)) {
        let (tree, _) = apply(&operations);
        let mut cursor = tree.iterator();
        let mut visited = Vec::new();
        while cursor.next() {
            visited.push(cursor.entry().unwrap());
        }
        let iterated: Vec<(&i16, &i32)> = tree.iter().collect();
        prop_assert_eq!(visited, iterated);
    }

    /// Law: subtree size at the root equals the tree size.
    #[test]
    fn prop_root_subtree_size_is_tree_size(operations in arbitrary_operations(150)) {
        let (tree, _) = apply(&operations);
        prop_assert_eq!(tree.root().map_or(0, |node| node.size()), tree.size());
    }
}
