//! Tests for PrimitiveSet

use super::*;
use crate::traits::AsPrimitive;
use crate::vec;
use pretty_assertions::assert_eq;

#[test]
fn test_add_reports_duplicates() {
    let mut set = PrimitiveSet::<i32>::new();
    assert!(set.add(1).unwrap());
    assert!(!set.add(1).unwrap());
    assert!(set.add(2).unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_nan_is_a_member() {
    let mut set = PrimitiveSet::<f64>::new();
    assert!(set.add(f64::NAN).unwrap());
    assert!(!set.add(f64::NAN).unwrap());
    assert!(set.contains(f64::NAN).unwrap());
    assert!(set.add(-0.0).unwrap());
    assert!(set.add(0.0).unwrap());
    assert_eq!(set.len(), 3);
}

#[test]
fn test_remove_keeps_index_consistent() {
    let mut set: PrimitiveSet<i64> = (0..5).collect();
    assert!(set.remove(1).unwrap());
    assert!(!set.remove(1).unwrap());
    assert_eq!(set.as_slice(), &[0, 4, 2, 3]);
    for v in [0, 2, 3, 4] {
        assert!(set.contains(v).unwrap(), "{v}");
    }
    assert!(set.remove(4).unwrap());
    assert!(set.add(1).unwrap());
    assert_eq!(set.len(), 4);
}

#[test]
fn test_iterator_remove_visits_swapped_element() {
    let mut set: PrimitiveSet<i32> = (1..=5).collect();
    let mut seen = Vec::new();
    let mut iter = set.iter_mut().unwrap();
    while let Some(v) = iter.next_value().unwrap() {
        seen.push(v);
        if v % 2 == 1 {
            iter.remove().unwrap();
        }
    }
    drop(iter);
    seen.sort();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    let mut left = set.to_vec().unwrap();
    left.sort();
    assert_eq!(left, vec![2, 4]);
    assert!(!set.contains(3).unwrap());
}

#[test]
fn test_default_bulk_operations() {
    let mut set: PrimitiveSet<i32> = (0..6).collect();
    let evens: PrimitiveSet<i32> = [0, 2, 4, 6].into_iter().collect();
    assert!(set.retain_all(&evens).unwrap());
    assert_eq!(set.len(), 3);
    assert!(evens.contains_all(&set).unwrap());
    set.clear().unwrap();
    assert!(set.is_empty());
    assert!(!set.contains(0).unwrap());
}

#[test]
fn test_spliterator_is_distinct() {
    let set: PrimitiveSet<f64> = [1.0, 2.0].into_iter().collect();
    let split = set.spliterator().unwrap();
    assert!(split.has_characteristics(Characteristics::DISTINCT | Characteristics::SIZED));
}

#[test]
fn test_equality_ignores_order() {
    let a: PrimitiveSet<i32> = [1, 2, 3].into_iter().collect();
    let b: PrimitiveSet<i32> = [3, 1, 2].into_iter().collect();
    let c: PrimitiveSet<i32> = [1, 2].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_as_primitive_matches_own_width_only() {
    let set = PrimitiveSet::<f64>::new();
    assert!(AsPrimitive::<f64>::as_primitive(&set).is_some());
    assert!(AsPrimitive::<i64>::as_primitive(&set).is_none());
}

#[test]
fn test_postcard_round_trip_dedupes() {
    let bytes = postcard::to_allocvec(&vec![1i32, 2, 2, 3]).unwrap();
    let set: PrimitiveSet<i32> = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(set.len(), 3);

    let again: PrimitiveSet<i32> = postcard::from_bytes(&postcard::to_allocvec(&set).unwrap()).unwrap();
    assert_eq!(again, set);
}
