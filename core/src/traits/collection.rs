//! Collection contracts.
//!
//! [`Collection`] is the element-agnostic surface every container has, typed
//! or not. [`PrimitiveCollection`] adds the element-typed operations for one
//! width. Containers implement three primary operations (`contains`, `iter`,
//! `iter_mut`) plus `add` when they grow; everything else has a default
//! expressed through those, in [`crate::algo`].

use core::any::Any;

use crate::Box;
use crate::Vec;
use crate::algo::{bulk, to_array};
use crate::error::{Error, Operation, Result};
use crate::split::{Characteristics, IteratorSpliterator, PrimitiveSpliterator};
use crate::traits::{Cursor, PrimitiveIterator, Values};
use crate::width::{Primitive, Width};

/// Read-only capability.
///
/// A value reporting `true` rejects every mutation with
/// [`Error::Unsupported`], and so does every sub-view it hands out.
pub trait Modifiability {
    fn is_unmodifiable(&self) -> bool {
        false
    }
}

/// The element-agnostic part of a container.
pub trait Collection: Modifiability {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The primitive width of the elements, if the container is typed.
    fn width(&self) -> Option<Width> {
        None
    }

    /// A cursor that can only report whether more elements remain.
    fn cursor(&self) -> Box<dyn Cursor + '_>;
}

/// Access to a collection as a primitive collection of width `P`.
///
/// Returns `None` when the container does not hold `P` elements. Forwarding
/// wrappers turn that into [`Error::TypeMismatch`].
pub trait AsPrimitive<P: Primitive>: Collection {
    fn as_primitive(&self) -> Option<&dyn PrimitiveCollection<P>>;

    fn as_primitive_mut(&mut self) -> Option<&mut dyn PrimitiveCollection<P>>;
}

/// A container of unboxed `P` elements.
///
/// Bulk operations take the other side as `&dyn AsPrimitive<P>` and fail
/// with [`Error::TypeMismatch`] when it is not a `P` collection. Boxed entry
/// points (`*_boxed`) accept `&dyn Any` and unbox it first.
pub trait PrimitiveCollection<P: Primitive>: AsPrimitive<P> {
    fn contains(&self, value: P) -> Result<bool>;

    /// A read-only iterator. Its `remove` is never supported.
    fn iter(&self) -> Result<Box<dyn PrimitiveIterator<P> + '_>>;

    /// An iterator whose `remove` deletes the element last returned.
    fn iter_mut(&mut self) -> Result<Box<dyn PrimitiveIterator<P> + '_>>;

    /// Adds `value`; returns whether the collection changed.
    fn add(&mut self, value: P) -> Result<bool> {
        let _ = value;
        Err(Error::unsupported(Operation::Add))
    }

    /// Removes one element equal to `value`.
    fn remove(&mut self, value: P) -> Result<bool> {
        bulk::remove(self, value)
    }

    fn add_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        bulk::add_all(self, other)
    }

    fn remove_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        bulk::remove_all(self, other)
    }

    fn retain_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        bulk::retain_all(self, other)
    }

    fn contains_all(&self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        bulk::contains_all(self, other)
    }

    /// Removes every element the predicate accepts. A predicate error stops
    /// the scan and is returned as is; removals already made stay made.
    ///
    /// This is the conditional-removal hook: [`remove_if`], [`remove_all`],
    /// [`retain_all`] and [`clear`] all end up here by default.
    ///
    /// [`remove_if`]: PrimitiveCollection::remove_if
    /// [`remove_all`]: PrimitiveCollection::remove_all
    /// [`retain_all`]: PrimitiveCollection::retain_all
    /// [`clear`]: PrimitiveCollection::clear
    fn try_remove_if(&mut self, predicate: &mut dyn FnMut(P) -> Result<bool>) -> Result<bool> {
        bulk::try_remove_if(self, predicate)
    }

    fn remove_if(&mut self, predicate: &mut dyn FnMut(P) -> bool) -> Result<bool> {
        self.try_remove_if(&mut |value| -> Result<bool> { Ok(predicate(value)) })
    }

    fn clear(&mut self) -> Result<()> {
        bulk::clear::<P, Self>(self)
    }

    /// Copies the elements out in iteration order.
    fn to_vec(&self) -> Result<Vec<P>> {
        to_array::to_vec(self)
    }

    fn for_each(&self, action: &mut dyn FnMut(P)) -> Result<()> {
        bulk::for_each(self, action)
    }

    /// A late-binding spliterator: the iterator and size are fetched on the
    /// first traversal, split or size query, not here.
    fn spliterator(&self) -> Result<Box<dyn PrimitiveSpliterator<P> + '_>> {
        Ok(Box::new(IteratorSpliterator::over(
            self,
            Characteristics::empty(),
        )))
    }

    /// `contains` for a boxed value. A value of another type is never
    /// contained.
    fn contains_boxed(&self, value: &dyn Any) -> Result<bool> {
        bulk::contains_boxed::<P, Self>(self, value)
    }

    /// `add` for a boxed value. A value of another type is an
    /// [`Error::InvalidArgument`].
    fn add_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        bulk::add_boxed::<P, Self>(self, value)
    }

    fn remove_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        bulk::remove_boxed::<P, Self>(self, value)
    }

    /// Adapts [`iter`](PrimitiveCollection::iter) to a standard iterator.
    fn values(&self) -> Result<Values<'_, P>> {
        Ok(Values::new(self.iter()?))
    }
}

// ============================================================================
// Boxed collections
// ============================================================================

impl<T: Modifiability + ?Sized> Modifiability for Box<T> {
    fn is_unmodifiable(&self) -> bool {
        (**self).is_unmodifiable()
    }
}

impl<T: Collection + ?Sized> Collection for Box<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn width(&self) -> Option<Width> {
        (**self).width()
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        (**self).cursor()
    }
}

impl<P: Primitive, T: AsPrimitive<P> + ?Sized> AsPrimitive<P> for Box<T> {
    fn as_primitive(&self) -> Option<&dyn PrimitiveCollection<P>> {
        (**self).as_primitive()
    }

    fn as_primitive_mut(&mut self) -> Option<&mut dyn PrimitiveCollection<P>> {
        (**self).as_primitive_mut()
    }
}

impl<P: Primitive, T: PrimitiveCollection<P> + ?Sized> PrimitiveCollection<P> for Box<T> {
    fn contains(&self, value: P) -> Result<bool> {
        (**self).contains(value)
    }

    fn iter(&self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        (**self).iter()
    }

    fn iter_mut(&mut self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        (**self).iter_mut()
    }

    fn add(&mut self, value: P) -> Result<bool> {
        (**self).add(value)
    }

    fn remove(&mut self, value: P) -> Result<bool> {
        (**self).remove(value)
    }

    fn add_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        (**self).add_all(other)
    }

    fn remove_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        (**self).remove_all(other)
    }

    fn retain_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        (**self).retain_all(other)
    }

    fn contains_all(&self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        (**self).contains_all(other)
    }

    fn try_remove_if(&mut self, predicate: &mut dyn FnMut(P) -> Result<bool>) -> Result<bool> {
        (**self).try_remove_if(predicate)
    }

    fn remove_if(&mut self, predicate: &mut dyn FnMut(P) -> bool) -> Result<bool> {
        (**self).remove_if(predicate)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn to_vec(&self) -> Result<Vec<P>> {
        (**self).to_vec()
    }

    fn for_each(&self, action: &mut dyn FnMut(P)) -> Result<()> {
        (**self).for_each(action)
    }

    fn spliterator(&self) -> Result<Box<dyn PrimitiveSpliterator<P> + '_>> {
        (**self).spliterator()
    }

    fn contains_boxed(&self, value: &dyn Any) -> Result<bool> {
        (**self).contains_boxed(value)
    }

    fn add_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        (**self).add_boxed(value)
    }

    fn remove_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        (**self).remove_boxed(value)
    }
}
