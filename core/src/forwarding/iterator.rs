use core::marker::PhantomData;

use crate::error::{Error, Operation, Result};
use crate::forwarding::{Forwarder, ForwardingDiscipline, MaskingDiscipline, Route};
use crate::traits::{AsPrimitiveIterator, Cursor, Modifiability, PrimitiveIterator};
use crate::width::Primitive;

/// Iterator that forwards to another iterator under a discipline.
///
/// `has_next` always forwards. `next_value` and `remove` are primary;
/// `for_each_remaining` is derived. A masked iterator rejects `remove` with
/// [`Error::Unsupported`].
#[derive(Debug, Clone)]
pub struct ForwardingIterator<P, I> {
    engine: Forwarder<I>,
    _marker: PhantomData<fn() -> P>,
}

impl<P: Primitive, I: AsPrimitiveIterator<P>> ForwardingIterator<P, I> {
    pub fn new(delegate: I, discipline: ForwardingDiscipline, masking: MaskingDiscipline) -> Self {
        Self {
            engine: Forwarder::new(delegate, discipline, masking),
            _marker: PhantomData,
        }
    }

    pub fn engine(&self) -> &Forwarder<I> {
        &self.engine
    }

    pub fn into_inner(self) -> I {
        self.engine.into_inner()
    }

    fn typed(&mut self, op: Operation) -> Result<&mut dyn PrimitiveIterator<P>> {
        self.engine
            .dispatch_mut()
            .as_primitive_iter()
            .ok_or(Error::type_mismatch(op, P::WIDTH, None))
    }
}

impl<P, I: Modifiability> Modifiability for ForwardingIterator<P, I> {
    fn is_unmodifiable(&self) -> bool {
        self.engine.is_unmodifiable()
    }
}

impl<P, I: Cursor> Cursor for ForwardingIterator<P, I> {
    fn has_next(&self) -> bool {
        self.engine.delegate().has_next()
    }
}

impl<P: Primitive, I: AsPrimitiveIterator<P>> PrimitiveIterator<P> for ForwardingIterator<P, I> {
    fn next_value(&mut self) -> Result<Option<P>> {
        self.engine.admit(Operation::Next)?;
        self.typed(Operation::Next)?.next_value()
    }

    fn remove(&mut self) -> Result<()> {
        self.engine.admit(Operation::IteratorRemove)?;
        self.typed(Operation::IteratorRemove)?.remove()
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        match self.engine.route(Operation::ForEachRemaining)? {
            Route::Delegate => self
                .typed(Operation::ForEachRemaining)?
                .for_each_remaining(action),
            Route::Default => {
                while let Some(value) = self.next_value()? {
                    action(value);
                }
                Ok(())
            }
        }
    }
}

impl<P: Primitive, I: AsPrimitiveIterator<P>> AsPrimitiveIterator<P> for ForwardingIterator<P, I> {
    fn as_primitive_iter(&mut self) -> Option<&mut dyn PrimitiveIterator<P>> {
        let iter: &mut dyn PrimitiveIterator<P> = self;
        Some(iter)
    }
}
