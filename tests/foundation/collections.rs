//! Integration tests for read-only collections
//!
//! Tests FrozenVec construction, access, ordering, and sharing.

use proptest::prelude::*;
use rosmop_foundation::FrozenVec;

// =============================================================================
// FrozenVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: FrozenVec<String> = FrozenVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.get(0), None);
}

#[test]
fn vector_from_vec() {
    let v: FrozenVec<&str> = vec!["public", "connected"].into();
    assert_eq!(v.len(), 2);
    assert_eq!(v.get(0), Some(&"public"));
    assert_eq!(v[1], "connected");
}

#[test]
fn vector_iteration_order() {
    let v: FrozenVec<i64> = (1..=5).rev().collect();
    let items: Vec<i64> = v.iter().copied().collect();
    assert_eq!(items, vec![5, 4, 3, 2, 1]);

    let mut seen = Vec::new();
    for item in &v {
        seen.push(*item);
    }
    assert_eq!(seen, items);

    let owned: Vec<i64> = v.into_iter().collect();
    assert_eq!(owned, items);
}

#[test]
fn vector_clone_is_equal() {
    let v1: FrozenVec<String> = vec!["a".to_string(), "b".to_string()].into();
    let v2 = v1.clone();
    assert_eq!(v1, v2);
    assert_eq!(v1.to_vec(), v2.to_vec());
}

#[test]
fn vector_contains() {
    let v: FrozenVec<char> = "abc".chars().collect();
    assert!(v.contains(&'b'));
    assert!(!v.contains(&'z'));
}

#[test]
fn vector_debug_is_list() {
    let v: FrozenVec<i32> = vec![1, 2].into();
    assert_eq!(format!("{v:?}"), "[1, 2]");
}

#[test]
fn vector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrozenVec<String>>();
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn collect_and_into_iter_round_trip(items in prop::collection::vec(any::<u32>(), 0..300)) {
        let v: FrozenVec<u32> = items.iter().copied().collect();
        let back: Vec<u32> = v.clone().into_iter().collect();
        prop_assert_eq!(&back, &items);
        prop_assert!(v == items);
    }

    #[test]
    fn clones_stay_equal(items in prop::collection::vec(any::<u8>(), 0..100)) {
        let v1: FrozenVec<u8> = items.into();
        let v2 = v1.clone();
        prop_assert_eq!(v1.to_vec(), v2.to_vec());
        prop_assert_eq!(v1, v2);
    }
}
