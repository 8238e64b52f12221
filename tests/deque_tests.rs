pub mod common;

use holt::SegDeque;

#[test]
fn fifo_and_lifo_laws_hold() {
    let mut deque: SegDeque<u32> = SegDeque::new();
    for i in 0..100 {
        deque.push_back(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert!(deque.is_empty());

    for i in 0..100 {
        deque.push_back(i).unwrap();
    }
    for i in (0..100).rev() {
        assert_eq!(deque.pop_back(), Some(i));
    }
    assert!(deque.is_empty());
}

#[test]
fn heavy_front_loading_reverses_cleanly() {
    // enough elements to force the block-pointer array to regrow several
    // times on the front side alone
    const N: u64 = 20_000;
    let mut deque: SegDeque<u64> = SegDeque::new();
    for i in 0..N {
        deque.push_front(i).unwrap();
    }
    assert_eq!(deque.len(), N as usize);
    assert_eq!(deque.front(), Some(&(N - 1)));
    assert_eq!(deque.back(), Some(&0));
    for i in (0..N).rev() {
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert!(deque.is_empty());
}

#[test]
fn growth_preserves_order_with_mixed_pushes() {
    let mut deque: SegDeque<u64> = SegDeque::new();
    let mut model = std::collections::VecDeque::new();
    for i in 0..10_000u64 {
        if i % 2 == 0 {
            deque.push_back(i).unwrap();
            model.push_back(i);
        } else {
            deque.push_front(i).unwrap();
            model.push_front(i);
        }
    }
    assert!(deque.iter().copied().eq(model.iter().copied()));
    for probe in [0, 1, 4_999, 5_000, 9_998, 9_999] {
        assert_eq!(deque.get(probe), model.get(probe));
    }
}

#[test]
fn large_payloads_use_one_slot_per_block() {
    // each element fills a whole block, so every push touches the
    // block-pointer array
    let mut deque: SegDeque<[u8; 600]> = SegDeque::new();
    for i in 0..40u8 {
        deque.push_back([i; 600]).unwrap();
    }
    assert_eq!(deque.len(), 40);
    for i in 0..40u8 {
        assert_eq!(deque.get(i as usize), Some(&[i; 600]));
    }
}

#[test]
fn middle_insertion_keeps_order_across_growth() {
    let mut deque: SegDeque<i64> = SegDeque::new();
    let mut model: Vec<i64> = Vec::new();
    for i in 0..3_000 {
        let index = (i as usize * 7) % (model.len() + 1);
        deque.insert_at(index, i).unwrap();
        model.insert(index, i);
    }
    assert!(deque.iter().copied().eq(model.iter().copied()));
}

#[test]
fn random_ops_match_the_model() {
    common::check_deque_against_model(0x5E6D_E04E, 5_000);
}

#[test]
fn drop_runs_for_every_live_element() {
    use std::rc::Rc;

    let witness = Rc::new(());
    {
        let mut deque: SegDeque<Rc<()>> = SegDeque::new();
        for _ in 0..500 {
            deque.push_back(Rc::clone(&witness)).unwrap();
            deque.push_front(Rc::clone(&witness)).unwrap();
        }
        for _ in 0..100 {
            deque.pop_front();
        }
        assert_eq!(Rc::strong_count(&witness), 901);
    }
    assert_eq!(Rc::strong_count(&witness), 1);
}
