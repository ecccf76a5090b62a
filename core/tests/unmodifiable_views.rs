//! Integration tests for read-only views over every width.

use primcoll_core::containers::{ArrayBag, PrimitiveSet};
use primcoll_core::forwarding::{ForwardingCollection, ForwardingDiscipline, MaskingDiscipline};
use primcoll_core::specialized::{DoubleSet, LongBag, LongCollection};
use primcoll_core::split::Characteristics;
use primcoll_core::traits::{Collection, Modifiability, PrimitiveCollection, PrimitiveIterator};
use primcoll_core::unmodifiable::{BoxedCollection, IntoUnmodifiable, unmodifiable};
use primcoll_core::{Error, Operation};

mod common;

fn address<P: primcoll_core::Primitive>(c: &BoxedCollection<'_, P>) -> *const () {
    core::ptr::from_ref(&**c).cast::<()>()
}

#[test]
fn test_wrapping_is_idempotent() {
    common::init_logging();

    let bag: LongBag = (0..4).collect();
    let boxed: Box<LongCollection<'static>> = Box::new(bag);
    let view = unmodifiable(boxed);
    let first = address(&view);

    let view = unmodifiable(unmodifiable(view));
    assert_eq!(address(&view), first);
    assert_eq!(common::sorted_bits::<i64>(&*view), vec![0, 1, 2, 3]);
}

#[test]
fn test_read_only_collection_is_not_wrapped() {
    let masked = ForwardingCollection::<f64, _>::unmodifiable(DoubleSet::from_iter([1.5]));
    let boxed: BoxedCollection<'_, f64> = Box::new(masked);
    let before = address(&boxed);
    let view = unmodifiable(boxed);
    assert_eq!(address(&view), before);
}

#[test]
fn test_view_masks_every_route_to_mutation() {
    let set: PrimitiveSet<i32> = (0..3).collect();
    let mut view = set.into_unmodifiable();
    let other: ArrayBag<i32> = [1].into_iter().collect();

    let refused = [
        view.add(9).err(),
        view.remove(0).err(),
        view.add_all(&other).err(),
        view.remove_all(&other).err(),
        view.retain_all(&other).err(),
        view.remove_if(&mut |_| true).err(),
        view.clear().err(),
        view.add_boxed(&9i32).err(),
        view.remove_boxed(&0i32).err(),
    ];
    for err in refused {
        let op = err.as_ref().and_then(Error::operation);
        assert!(matches!(err, Some(Error::Unsupported { .. })), "{op:?}");
    }

    let mut iter = view.iter_mut().unwrap();
    while iter.next_value().unwrap().is_some() {
        assert_eq!(
            iter.remove().unwrap_err(),
            Error::Unsupported { op: Operation::IteratorRemove }
        );
    }
    drop(iter);

    let split = view.spliterator().unwrap();
    assert!(split.is_unmodifiable());
    assert!(split.has_characteristics(Characteristics::DISTINCT));
    assert_eq!(view.len(), 3);
}

#[test]
fn test_view_reads_match_delegate() {
    let bag: ArrayBag<f64> = [f64::NAN, -0.0, 0.0].into_iter().collect();
    let view = bag.clone().into_unmodifiable();

    assert_eq!(view.len(), bag.len());
    assert!(view.contains(f64::NAN).unwrap());
    assert!(view.contains(-0.0).unwrap());
    assert!(view.contains_all(&bag).unwrap());
    assert!(view.contains_boxed(&0.0f64).unwrap());
    assert_eq!(common::sorted_bits::<f64>(&view), common::sorted_bits::<f64>(&bag));
}

#[test]
fn test_shallow_view_keeps_discipline() {
    let shallow = ForwardingCollection::<i64, _>::new(
        ArrayBag::<i64>::from(vec![5, 6]),
        ForwardingDiscipline::Shallow,
        MaskingDiscipline::Delegate,
    );
    let view = shallow.into_unmodifiable();
    assert!(view.is_unmodifiable());
    assert_eq!(view.discipline(), ForwardingDiscipline::Shallow);
    assert_eq!(view.to_vec().unwrap(), vec![5, 6]);
}
