//! Iterator contracts.

use crate::Box;
use crate::error::{Error, Operation, Result};
use crate::traits::Modifiability;
use crate::width::Primitive;

/// The element-agnostic part of an iterator.
pub trait Cursor: Modifiability {
    fn has_next(&self) -> bool;
}

/// Iterator over unboxed `P` values.
///
/// Advancing and removing both return `Result`: a forwarding iterator can
/// refuse either, and `remove` without a preceding advance is an
/// [`Error::InvalidState`].
pub trait PrimitiveIterator<P: Primitive>: Cursor {
    fn next_value(&mut self) -> Result<Option<P>>;

    /// Removes the element last returned by `next_value`.
    fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported(Operation::IteratorRemove))
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        while let Some(value) = self.next_value()? {
            action(value);
        }
        Ok(())
    }
}

/// Access to an iterator as a primitive iterator of width `P`.
pub trait AsPrimitiveIterator<P: Primitive>: Cursor {
    fn as_primitive_iter(&mut self) -> Option<&mut dyn PrimitiveIterator<P>>;
}

impl<T: Cursor + ?Sized> Cursor for Box<T> {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }
}

impl<P: Primitive, T: PrimitiveIterator<P> + ?Sized> PrimitiveIterator<P> for Box<T> {
    fn next_value(&mut self) -> Result<Option<P>> {
        (**self).next_value()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        (**self).for_each_remaining(action)
    }
}

impl<'a, P: Primitive> AsPrimitiveIterator<P> for Box<dyn PrimitiveIterator<P> + 'a> {
    fn as_primitive_iter(&mut self) -> Option<&mut dyn PrimitiveIterator<P>> {
        let iter: &mut dyn PrimitiveIterator<P> = &mut **self;
        Some(iter)
    }
}

/// Cursors from untyped collections never yield `P` values.
impl<'a, P: Primitive> AsPrimitiveIterator<P> for Box<dyn Cursor + 'a> {
    fn as_primitive_iter(&mut self) -> Option<&mut dyn PrimitiveIterator<P>> {
        None
    }
}

/// Standard-library adapter over a [`PrimitiveIterator`].
///
/// Yields `Err` at most once, then stops.
pub struct Values<'a, P: Primitive> {
    inner: Box<dyn PrimitiveIterator<P> + 'a>,
    done: bool,
}

impl<'a, P: Primitive> Values<'a, P> {
    pub fn new(inner: Box<dyn PrimitiveIterator<P> + 'a>) -> Self {
        Self { inner, done: false }
    }
}

impl<P: Primitive> Iterator for Values<'_, P> {
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next_value() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
