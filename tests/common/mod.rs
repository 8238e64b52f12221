//! Shared model-checking helpers: drive a container and a std reference
//! model through the same random operation sequence and compare after
//! every step.

use std::collections::{BTreeSet, VecDeque};

use holt::{Balance, SegDeque, Tree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn check_tree_against_model<B: Balance>(seed: u64, rounds: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree: Tree<i64, B> = Tree::new();
    let mut model: BTreeSet<i64> = BTreeSet::new();

    for _ in 0..rounds {
        let key = rng.gen_range(-200..200);
        if rng.gen_bool(0.6) {
            let inserted = tree.insert(key).is_ok();
            assert_eq!(inserted, model.insert(key));
        } else {
            assert_eq!(tree.remove(&key), model.take(&key));
        }
        tree.assert_invariants();
        assert_eq!(tree.len(), model.len());
    }
    assert!(tree.iter().copied().eq(model.iter().copied()));
}

pub fn check_deque_against_model(seed: u64, rounds: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deque: SegDeque<i64> = SegDeque::new();
    let mut model: VecDeque<i64> = VecDeque::new();

    for round in 0..rounds {
        match rng.gen_range(0..6) {
            0 => {
                let v = round as i64;
                deque.push_front(v).unwrap();
                model.push_front(v);
            }
            1 => {
                let v = round as i64;
                deque.push_back(v).unwrap();
                model.push_back(v);
            }
            2 => assert_eq!(deque.pop_front(), model.pop_front()),
            3 => assert_eq!(deque.pop_back(), model.pop_back()),
            4 => {
                let index = rng.gen_range(0..=model.len());
                let v = round as i64;
                deque.insert_at(index, v).unwrap();
                model.insert(index, v);
            }
            _ => {
                if !model.is_empty() {
                    let index = rng.gen_range(0..model.len());
                    assert_eq!(deque.remove_at(index), model.remove(index));
                }
            }
        }
        assert_eq!(deque.len(), model.len());
        if !model.is_empty() {
            let probe = rng.gen_range(0..model.len());
            assert_eq!(deque.get(probe), model.get(probe));
        }
    }
    assert!(deque.iter().copied().eq(model.iter().copied()));
}
