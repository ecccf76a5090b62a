//! Bulk and conditional operations built on `iter`, `iter_mut`, `contains`
//! and `add`.

use core::any::Any;

use tracing::trace;

use crate::error::{Error, Operation, Result};
use crate::format;
use crate::traits::{AsPrimitive, PrimitiveCollection};
use crate::width::Primitive;

/// Views `other` as a `P` collection or reports what it holds instead.
pub fn typed_other<'o, P: Primitive>(
    other: &'o dyn AsPrimitive<P>,
    op: Operation,
) -> Result<&'o dyn PrimitiveCollection<P>> {
    match other.as_primitive() {
        Some(other) => Ok(other),
        None => {
            trace!(%op, expected = %P::WIDTH, "bulk operand is not a primitive collection");
            Err(Error::type_mismatch(op, P::WIDTH, other.width()))
        }
    }
}

/// Removes the first element with the same identity as `value`.
pub fn remove<P, C>(collection: &mut C, value: P) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let mut iter = collection.iter_mut()?;
    while let Some(current) = iter.next_value()? {
        if current.same(value) {
            iter.remove()?;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Single pass over `iter_mut`, removing each accepted element.
pub fn try_remove_if<P, C>(
    collection: &mut C,
    predicate: &mut dyn FnMut(P) -> Result<bool>,
) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let mut removed = false;
    let mut iter = collection.iter_mut()?;
    while let Some(current) = iter.next_value()? {
        if predicate(current)? {
            iter.remove()?;
            removed = true;
        }
    }
    Ok(removed)
}

pub fn add_all<P, C>(collection: &mut C, other: &dyn AsPrimitive<P>) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let other = typed_other(other, Operation::AddAll)?;
    let mut changed = false;
    let mut iter = other.iter()?;
    while let Some(value) = iter.next_value()? {
        changed |= collection.add(value)?;
    }
    Ok(changed)
}

pub fn remove_all<P, C>(collection: &mut C, other: &dyn AsPrimitive<P>) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let other = typed_other(other, Operation::RemoveAll)?;
    collection.try_remove_if(&mut |value| other.contains(value))
}

pub fn retain_all<P, C>(collection: &mut C, other: &dyn AsPrimitive<P>) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let other = typed_other(other, Operation::RetainAll)?;
    collection.try_remove_if(&mut |value| other.contains(value).map(|kept| !kept))
}

pub fn contains_all<P, C>(collection: &C, other: &dyn AsPrimitive<P>) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let other = typed_other(other, Operation::ContainsAll)?;
    let mut iter = other.iter()?;
    while let Some(value) = iter.next_value()? {
        if !collection.contains(value)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn clear<P, C>(collection: &mut C) -> Result<()>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    collection.try_remove_if(&mut |_| Ok(true))?;
    Ok(())
}

pub fn for_each<P, C>(collection: &C, action: &mut dyn FnMut(P)) -> Result<()>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    collection.iter()?.for_each_remaining(action)
}

pub fn contains_boxed<P, C>(collection: &C, value: &dyn Any) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    match P::from_boxed(value) {
        Some(value) => collection.contains(value),
        None => Ok(false),
    }
}

pub fn add_boxed<P, C>(collection: &mut C, value: &dyn Any) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    match P::from_boxed(value) {
        Some(value) => collection.add(value),
        None => Err(Error::invalid_argument(
            Operation::AddBoxed,
            format!("expected a boxed {} value", P::WIDTH),
        )),
    }
}

pub fn remove_boxed<P, C>(collection: &mut C, value: &dyn Any) -> Result<bool>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    match P::from_boxed(value) {
        Some(value) => collection.remove(value),
        None => Ok(false),
    }
}

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;
