//! SparseSet generational handle tests.
//!
//! These tests cover slot reuse, generation bumps and stale-handle lookups,
//! which the widget arena relies on to keep detached ids from resolving.

use trellis_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    assert_eq!(set.get(idx), Some(&42));

    let idx2 = set.push(100);
    assert_eq!(set.get(idx2), Some(&100));

    // Original value should still be accessible
    assert_eq!(set.get(idx), Some(&42));
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    if let Some(value) = set.get_mut(idx) {
        *value = 100;
    }

    assert_eq!(set.get(idx), Some(&100));
}

#[test]
fn test_unknown_slot_returns_none() {
    let set = SparseSet::<i32>::new();
    assert_eq!(set.get(IndexSlot::new(0, 999)), None);
    assert!(!set.contains(IndexSlot::new(0, 0)));
}

#[test]
fn test_get_after_remove_returns_none() {
    let mut set = SparseSet::new();

    let idx = set.push(7);
    assert_eq!(set.remove(idx), Some(7));
    assert_eq!(set.get(idx), None);
    assert!(set.is_empty());
}

#[test]
fn test_generation_increment() {
    let mut set = SparseSet::new();

    let first = set.push("a");
    set.remove(first);
    let second = set.push("b");
    set.remove(second);
    let third = set.push("c");

    assert_eq!(first.index(), third.index());
    assert_eq!(first.generation(), 0);
    assert_eq!(second.generation(), 1);
    assert_eq!(third.generation(), 2);
    assert_eq!(set.get(second), None);
    assert_eq!(set.get(third), Some(&"c"));
}

#[test]
fn test_complex_interleaved_operations() {
    let mut set = SparseSet::new();

    let a = set.push(1);
    let b = set.push(2);
    let c = set.push(3);
    set.remove(b);
    let d = set.push(4);
    set.remove(a);

    assert_eq!(d.index(), b.index());
    assert_eq!(set.len(), 2);
    let live: Vec<_> = set.iter().map(|(slot, v)| (slot, *v)).collect();
    assert_eq!(live, vec![(d, 4), (c, 3)]);
}

#[test]
fn test_index_slot_bits_are_stable() {
    let slot = IndexSlot::new(3, 9);
    assert_eq!(slot.generation(), 3);
    assert_eq!(slot.index(), 9);
    assert_eq!(IndexSlot::new(3, 9).to_bits(), slot.to_bits());
    assert_ne!(IndexSlot::new(4, 9), slot);
}

#[test]
fn test_stress_many_removals_and_reuses() {
    let mut set = SparseSet::new();
    let mut live = Vec::new();

    for round in 0..10 {
        for i in 0..100 {
            live.push(set.push(round * 100 + i));
        }
        for slot in live.drain(..50) {
            assert!(set.remove(slot).is_some());
        }
    }

    assert_eq!(set.len(), 500);
    for slot in &live {
        assert!(set.contains(*slot));
    }
}
