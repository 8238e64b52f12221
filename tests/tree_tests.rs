pub mod common;

use holt::{Avl, AvlTree, BstTree, Error, Plain};
use itertools::Itertools;

/// Level-order keys for a perfect five-level tree over 1..=31.
const PERFECT_31: [i32; 31] = [
    16, 8, 24, 4, 12, 20, 28, 2, 6, 10, 14, 18, 22, 26, 30, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21,
    23, 25, 27, 29, 31,
];

#[test]
fn perfect_tree_survives_root_removal() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    for key in PERFECT_31 {
        tree.insert(key).unwrap();
        tree.assert_invariants();
    }
    assert_eq!(tree.len(), 31);

    // removing the root forces a successor graft at depth
    assert_eq!(tree.remove(&16), Some(16));
    tree.assert_invariants();
    assert_eq!(tree.len(), 30);
    assert!(!tree.contains(&16));
    assert!(tree.iter().copied().eq((1..=31).filter(|&k| k != 16)));
}

#[test]
fn all_insertion_orders_agree_on_small_sets() {
    for perm in (1..=6).permutations(6) {
        let tree: AvlTree<i32> = perm.iter().copied().collect();
        tree.assert_invariants();
        assert!(tree.iter().copied().eq(1..=6));
    }
}

#[test]
fn duplicate_insert_leaves_the_tree_unchanged() {
    let mut tree: AvlTree<i32> = (0..50).collect();
    for key in 0..50 {
        assert_eq!(tree.insert(key), Err(Error::Duplicate));
    }
    tree.assert_invariants();
    assert_eq!(tree.len(), 50);
}

#[test]
fn missing_key_removal_is_a_no_op() {
    let mut tree: BstTree<i32> = [5, 3, 8].into_iter().collect();
    assert_eq!(tree.remove(&4), None);
    assert_eq!(tree.len(), 3);
    tree.assert_invariants();
}

#[test]
fn first_and_last_track_the_extremes() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    for key in [7, 2, 9, 4] {
        tree.insert(key).unwrap();
    }
    assert_eq!(tree.first(), Some(&2));
    assert_eq!(tree.last(), Some(&9));
    tree.remove(&2);
    tree.remove(&9);
    assert_eq!(tree.first(), Some(&4));
    assert_eq!(tree.last(), Some(&7));
}

#[test]
fn clear_empties_and_the_tree_is_reusable() {
    let mut tree: AvlTree<i32> = (0..100).collect();
    tree.clear();
    assert!(tree.is_empty());
    tree.assert_invariants();
    tree.insert(1).unwrap();
    assert_eq!(tree.len(), 1);
}

#[test]
fn custom_comparator_reverses_the_order() {
    let mut tree: AvlTree<i32> = AvlTree::with_comparator(|a, b| b.cmp(a));
    for key in 0..10 {
        tree.insert(key).unwrap();
    }
    tree.assert_invariants();
    assert!(tree.iter().copied().eq((0..10).rev()));
    assert_eq!(tree.first(), Some(&9));
}

#[test]
fn balanced_and_plain_trees_match_the_model() {
    common::check_tree_against_model::<Avl>(0xB0A710AD, 2_000);
    common::check_tree_against_model::<Plain>(0xB0A710AD, 2_000);
}

#[test]
fn deep_ascending_then_descending_removal() {
    let mut tree: AvlTree<u32> = (0..2_000).collect();
    tree.assert_invariants();
    for key in (0..2_000).rev() {
        assert_eq!(tree.remove(&key), Some(key));
        if key % 97 == 0 {
            tree.assert_invariants();
        }
    }
    tree.assert_invariants();
    assert!(tree.is_empty());
}
