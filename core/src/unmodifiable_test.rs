//! Tests for read-only views

use super::*;
use crate::error::{Error, Operation};
use crate::forwarding::ForwardingDiscipline;
use crate::test_utils::init_test_logging;
use crate::traits::{Collection, PrimitiveIterator};
use crate::{Vec, vec};
use pretty_assertions::assert_eq;

fn boxed_bag(values: &[i32]) -> BoxedCollection<'static, i32> {
    Box::new(values.iter().copied().collect::<ArrayBag<i32>>())
}

#[test]
fn test_wraps_modifiable_collection() {
    init_test_logging();

    let mut view = unmodifiable(boxed_bag(&[1, 2, 3]));
    assert!(view.is_unmodifiable());
    assert_eq!(view.len(), 3);
    assert!(view.contains(2).unwrap());
    assert_eq!(view.add(4).unwrap_err(), Error::Unsupported { op: Operation::Add });
    assert_eq!(view.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_already_unmodifiable_is_returned_as_is() {
    init_test_logging();

    let view = unmodifiable(boxed_bag(&[1, 2]));
    let first = &*view as *const dyn PrimitiveCollection<i32> as *const ();
    let again = unmodifiable(view);
    let second = &*again as *const dyn PrimitiveCollection<i32> as *const ();
    assert_eq!(first, second);
}

#[test]
fn test_iterators_from_view_cannot_remove() {
    let mut view = unmodifiable(boxed_bag(&[5, 6]));
    let mut iter = view.iter_mut().unwrap();
    assert!(iter.is_unmodifiable());
    assert_eq!(iter.next_value().unwrap(), Some(5));
    assert!(matches!(iter.remove(), Err(Error::Unsupported { .. })));
}

#[test]
fn test_into_unmodifiable_on_container() {
    let bag: ArrayBag<i64> = [1, 2].into_iter().collect();
    let mut view = bag.into_unmodifiable();
    assert!(view.is_unmodifiable());
    assert_eq!(view.discipline(), ForwardingDiscipline::Pure);
    assert!(matches!(view.clear(), Err(Error::Unsupported { .. })));
    assert_eq!(view.into_inner().as_slice(), &[1, 2]);
}

#[test]
fn test_into_unmodifiable_does_not_nest() {
    let set: PrimitiveSet<f64> = [1.0].into_iter().collect();
    let view = set.into_unmodifiable();
    let again = view.into_unmodifiable();
    // Still a single wrapper directly over the set.
    let set: &PrimitiveSet<f64> = again.delegate();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_into_unmodifiable_remasks_forwarding_collection() {
    let shallow = ForwardingCollection::<i32, _>::shallow(ArrayBag::<i32>::new());
    let view = shallow.into_unmodifiable();
    assert!(view.is_unmodifiable());
    assert_eq!(view.discipline(), ForwardingDiscipline::Shallow);
}

#[test]
fn test_view_reflects_later_delegate_state() {
    let bag: ArrayBag<i32> = [1].into_iter().collect();
    let mut open = ForwardingCollection::<i32, _>::pure(bag);
    open.add(2).unwrap();
    let view = open.into_unmodifiable();
    let values: Vec<i32> = view.values().unwrap().map(|v| v.unwrap()).collect();
    assert_eq!(values, vec![1, 2]);
}
