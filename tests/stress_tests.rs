//! Extreme stress tests that really push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_mergeable_heaps::binomial::BinomialQueue;
use rust_mergeable_heaps::leftist::LeftistHeap;
use rust_mergeable_heaps::{HeapError, MergeableHeap};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Minimal LCG so the workloads are reproducible without a rand dependency
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }
}

/// Test massive numbers of inserts and removals
fn test_massive_operations<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..20_000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 20_000);

    for i in 0..20_000 {
        assert_eq!(heap.delete_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test pseudo-random values against a sorted copy
fn test_random_values<H: MergeableHeap<u64>>() {
    let mut rng = Lcg::new(0x5eed);
    let mut heap = H::new();
    let mut values = Vec::new();

    for _ in 0..10_000 {
        let v = rng.next() % 1000;
        heap.insert(v);
        values.push(v);
    }
    values.sort_unstable();

    for expected in values {
        assert_eq!(heap.delete_min(), Ok(expected));
    }
    assert_eq!(heap.delete_min(), Err(HeapError::Underflow));
}

/// Test alternating insert and delete_min
fn test_alternating_ops<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..2000 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert!(heap.delete_min().is_ok());
    }
    assert_eq!(heap.len(), 2000);

    let mut last = i32::MIN;
    while let Ok(min) = heap.delete_min() {
        assert!(min >= last);
        last = min;
    }
}

/// Test merge with large heaps
fn test_large_merge<H: MergeableHeap<i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..5000 {
        heap1.insert(i * 2);
        heap2.insert(i * 2 + 1);
    }

    heap1.merge(&mut heap2);
    assert_eq!(heap1.len(), 10_000);
    assert!(heap2.is_empty());

    for i in 0..10_000 {
        assert_eq!(heap1.delete_min(), Ok(i));
    }
}

/// Test folding many singleton heaps together, tournament style
fn test_pairwise_merge_tree<H: MergeableHeap<u64>>() {
    let mut rng = Lcg::new(42);
    let mut heaps: Vec<H> = (0..1024).map(|_| H::singleton(rng.next())).collect();

    while heaps.len() > 1 {
        let mut next = Vec::with_capacity(heaps.len() / 2);
        let mut iter = heaps.into_iter();
        while let Some(mut a) = iter.next() {
            if let Some(mut b) = iter.next() {
                a.merge(&mut b);
                assert!(b.is_empty());
            }
            next.push(a);
        }
        heaps = next;
    }

    let mut heap = heaps.pop().unwrap();
    assert_eq!(heap.len(), 1024);

    let mut last = 0;
    while let Some(min) = heap.pop() {
        assert!(min >= last);
        last = min;
    }
}

/// Test interleaving deletes with merges of partially drained heaps
fn test_drain_and_merge<H: MergeableHeap<i32>>() {
    let mut main = H::new();
    let mut expected_len = 0;

    for round in 0..50 {
        let mut side = H::new();
        for i in 0..100 {
            side.insert(round * 100 + i);
        }
        for _ in 0..30 {
            assert!(side.delete_min().is_ok());
        }
        main.merge(&mut side);
        expected_len += 70;
        assert_eq!(main.len(), expected_len);

        for _ in 0..20 {
            assert!(main.delete_min().is_ok());
            expected_len -= 1;
        }
    }

    let mut last = i32::MIN;
    let mut count = 0;
    while let Ok(min) = main.delete_min() {
        assert!(min >= last);
        last = min;
        count += 1;
    }
    assert_eq!(count, expected_len);
}

#[test]
fn test_leftist_massive() {
    test_massive_operations::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_random_values() {
    test_random_values::<LeftistHeap<u64>>();
}

#[test]
fn test_leftist_alternating() {
    test_alternating_ops::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_large_merge() {
    test_large_merge::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_pairwise_merge_tree() {
    test_pairwise_merge_tree::<LeftistHeap<u64>>();
}

#[test]
fn test_leftist_drain_and_merge() {
    test_drain_and_merge::<LeftistHeap<i32>>();
}

/// Descending inserts give a leftist heap an O(n) left spine; every operation
/// must stay iterative or bounded by the right spine.
#[test]
fn test_leftist_adversarial_descending() {
    init_logger();
    let mut heap = LeftistHeap::new();
    for i in (0..500_000).rev() {
        heap.insert(i);
    }

    let mut other: LeftistHeap<i32> = (500_000..600_000).rev().collect();
    heap.merge(&mut other);

    for i in 0..1000 {
        assert_eq!(heap.delete_min(), Ok(i));
    }
    assert_eq!(heap.len(), 599_000);
}

#[test]
fn test_binomial_massive() {
    test_massive_operations::<BinomialQueue<i32>>();
}

#[test]
fn test_binomial_random_values() {
    test_random_values::<BinomialQueue<u64>>();
}

#[test]
fn test_binomial_alternating() {
    test_alternating_ops::<BinomialQueue<i32>>();
}

#[test]
fn test_binomial_large_merge() {
    test_large_merge::<BinomialQueue<i32>>();
}

#[test]
fn test_binomial_pairwise_merge_tree() {
    test_pairwise_merge_tree::<BinomialQueue<u64>>();
}

#[test]
fn test_binomial_drain_and_merge() {
    test_drain_and_merge::<BinomialQueue<i32>>();
}

#[test]
fn test_binomial_power_of_two_boundaries() {
    init_logger();
    for size in [1usize, 2, 3, 4, 7, 8, 15, 16, 31, 32, 1023, 1024, 1025] {
        let mut queue: BinomialQueue<usize> = (0..size).rev().collect();
        assert_eq!(queue.len(), size);
        for expected in 0..size {
            assert_eq!(queue.delete_min(), Ok(expected));
        }
        assert!(queue.is_empty());
    }
}
