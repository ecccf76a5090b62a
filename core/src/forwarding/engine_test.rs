//! Tests for the forwarding dispatch table

use super::*;
use crate::traits::SliceCursor;
use crate::vec;
use pretty_assertions::assert_eq;

/// Stand-in delegate whose read-only flag is chosen by the test.
struct Flagged(bool);

impl Modifiability for Flagged {
    fn is_unmodifiable(&self) -> bool {
        self.0
    }
}

fn forwarder(discipline: ForwardingDiscipline, masking: MaskingDiscipline) -> Forwarder<Flagged> {
    Forwarder::new(Flagged(false), discipline, masking)
}

#[test]
fn test_pure_routes_everything_to_delegate() {
    let engine = forwarder(ForwardingDiscipline::Pure, MaskingDiscipline::Delegate);
    for op in [Operation::Len, Operation::Contains, Operation::RemoveIf, Operation::ToArray] {
        assert_eq!(engine.route(op).unwrap(), Route::Delegate, "{op}");
    }
}

#[test]
fn test_shallow_runs_defaults_for_derived_operations() {
    let engine = forwarder(ForwardingDiscipline::Shallow, MaskingDiscipline::Delegate);
    assert_eq!(engine.route(Operation::Contains).unwrap(), Route::Delegate);
    assert_eq!(engine.route(Operation::Add).unwrap(), Route::Delegate);
    assert_eq!(engine.route(Operation::Len).unwrap(), Route::Delegate);
    assert_eq!(engine.route(Operation::RemoveIf).unwrap(), Route::Default);
    assert_eq!(engine.route(Operation::AddAll).unwrap(), Route::Default);
    assert_eq!(engine.route(Operation::ForEachRemaining).unwrap(), Route::Default);
}

#[test]
fn test_minimal_refuses_typed_operations() {
    let engine = forwarder(ForwardingDiscipline::Minimal, MaskingDiscipline::Delegate);
    assert_eq!(engine.route(Operation::Len).unwrap(), Route::Delegate);
    assert_eq!(engine.route(Operation::HasNext).unwrap(), Route::Delegate);
    for op in [Operation::Contains, Operation::Next, Operation::ToArray, Operation::Add] {
        assert!(
            matches!(engine.route(op), Err(Error::InvalidState { .. })),
            "{op} should be refused"
        );
    }
}

#[test]
fn test_masking_rejects_mutation_before_discipline() {
    let engine = forwarder(ForwardingDiscipline::Minimal, MaskingDiscipline::Unmodifiable);
    assert_eq!(
        engine.route(Operation::Add).unwrap_err(),
        Error::Unsupported { op: Operation::Add }
    );
    assert!(matches!(
        engine.route(Operation::Contains),
        Err(Error::InvalidState { .. })
    ));
}

#[test]
fn test_masking_flags() {
    let requested = Forwarder::new(Flagged(false), ForwardingDiscipline::Pure, MaskingDiscipline::Unmodifiable);
    assert!(requested.is_unmodifiable());
    assert!(requested.needs_mask());

    let inherited = Forwarder::new(Flagged(true), ForwardingDiscipline::Pure, MaskingDiscipline::Delegate);
    assert!(inherited.is_unmodifiable());
    assert!(!inherited.needs_mask());
    assert_eq!(inherited.masking(), MaskingDiscipline::Unmodifiable);

    let both = Forwarder::new(Flagged(true), ForwardingDiscipline::Pure, MaskingDiscipline::Unmodifiable);
    assert!(!both.needs_mask());

    let open = forwarder(ForwardingDiscipline::Shallow, MaskingDiscipline::Delegate);
    assert!(!open.is_unmodifiable());
    assert_eq!(open.masking(), MaskingDiscipline::Delegate);
}

#[test]
fn test_delegate_mut_guarded() {
    let mut masked = forwarder(ForwardingDiscipline::Pure, MaskingDiscipline::Unmodifiable);
    assert!(matches!(
        masked.delegate_mut(),
        Err(Error::Unsupported { op: Operation::DelegateMut })
    ));

    let mut open = forwarder(ForwardingDiscipline::Pure, MaskingDiscipline::Delegate);
    assert!(open.delegate_mut().is_ok());
    assert!(!open.into_inner().0);
}

#[test]
fn test_mask_iterator_skips_read_only_iterators() {
    let values = vec![1i32, 2];
    let read_only: Box<dyn PrimitiveIterator<i32> + '_> = Box::new(SliceCursor::new(&values));
    let kept = mask_iterator(true, read_only);
    assert!(kept.is_unmodifiable());

    let mut bag: crate::containers::ArrayBag<i32> = values.iter().copied().collect();
    let writable = crate::traits::PrimitiveCollection::iter_mut(&mut bag).unwrap();
    assert!(!writable.is_unmodifiable());
    let mut masked = mask_iterator(true, writable);
    assert!(masked.is_unmodifiable());
    assert_eq!(masked.next_value().unwrap(), Some(1));
    assert_eq!(masked.remove().unwrap_err(), Error::Unsupported { op: Operation::IteratorRemove });
}
