use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::algo::{bulk, to_array};
use crate::error::{Error, Operation, Result};
use crate::forwarding::{
    Forwarder, ForwardingDiscipline, ForwardingIterator, MaskingDiscipline, Route, mask_iterator,
};
use crate::split::{Characteristics, IteratorSpliterator, PrimitiveSpliterator};
use crate::traits::{
    AsPrimitive, Collection, Cursor, Modifiability, PrimitiveCollection, PrimitiveIterator,
};
use crate::width::{Primitive, Width};
use crate::{Box, Vec};

/// A `P` collection that forwards to a delegate.
///
/// The delegate is reached through [`AsPrimitive`]; a delegate that is not a
/// `P` collection makes every typed operation fail with
/// [`Error::TypeMismatch`], except under
/// [`Minimal`](ForwardingDiscipline::Minimal), which never touches the typed
/// surface. Iteration under `Minimal` hands out a `Minimal` iterator over the
/// delegate's cursor.
///
/// Extend behavior by wrapping a `ForwardingCollection` in your own type and
/// overriding the operations you need; everything else can call through.
pub struct ForwardingCollection<P, D> {
    engine: Forwarder<D>,
    _marker: PhantomData<fn() -> P>,
}

impl<P: Primitive, D: AsPrimitive<P>> ForwardingCollection<P, D> {
    pub fn new(delegate: D, discipline: ForwardingDiscipline, masking: MaskingDiscipline) -> Self {
        Self {
            engine: Forwarder::new(delegate, discipline, masking),
            _marker: PhantomData,
        }
    }

    /// Pure forwarding, no masking.
    pub fn pure(delegate: D) -> Self {
        Self::new(delegate, ForwardingDiscipline::Pure, MaskingDiscipline::Delegate)
    }

    /// Shallow forwarding, no masking.
    pub fn shallow(delegate: D) -> Self {
        Self::new(delegate, ForwardingDiscipline::Shallow, MaskingDiscipline::Delegate)
    }

    /// Minimal forwarding, no masking.
    pub fn minimal(delegate: D) -> Self {
        Self::new(delegate, ForwardingDiscipline::Minimal, MaskingDiscipline::Delegate)
    }

    /// Pure forwarding with unmodifiable masking.
    pub fn unmodifiable(delegate: D) -> Self {
        Self::new(delegate, ForwardingDiscipline::Pure, MaskingDiscipline::Unmodifiable)
    }

    pub fn engine(&self) -> &Forwarder<D> {
        &self.engine
    }

    pub fn discipline(&self) -> ForwardingDiscipline {
        self.engine.discipline()
    }

    pub fn delegate(&self) -> &D {
        self.engine.delegate()
    }

    /// Refused with [`Error::Unsupported`] when this wrapper is
    /// unmodifiable.
    pub fn delegate_mut(&mut self) -> Result<&mut D> {
        self.engine.delegate_mut()
    }

    pub fn into_inner(self) -> D {
        self.engine.into_inner()
    }

    /// The delegate through its typed surface.
    pub fn pure_delegate(&self) -> Result<&dyn PrimitiveCollection<P>> {
        self.typed(Operation::Iter)
    }

    /// The delegate through its element-agnostic surface.
    pub fn erased_delegate(&self) -> &dyn Collection {
        self.engine.delegate()
    }

    /// Same delegate and discipline, new masking.
    pub fn remask(self, masking: MaskingDiscipline) -> Self {
        let discipline = self.discipline();
        Self::new(self.into_inner(), discipline, masking)
    }

    fn typed(&self, op: Operation) -> Result<&dyn PrimitiveCollection<P>> {
        let delegate = self.engine.delegate();
        delegate.as_primitive().ok_or_else(|| {
            trace!(%op, expected = %P::WIDTH, "delegate is not a primitive collection of this width");
            Error::type_mismatch(op, P::WIDTH, delegate.width())
        })
    }

    fn typed_mut(&mut self, op: Operation) -> Result<&mut dyn PrimitiveCollection<P>> {
        let found = self.engine.delegate().width();
        self.engine
            .dispatch_mut()
            .as_primitive_mut()
            .ok_or(Error::type_mismatch(op, P::WIDTH, found))
    }

    fn minimal_iterator(&self) -> Box<dyn PrimitiveIterator<P> + '_> {
        Box::new(ForwardingIterator::<P, _>::new(
            self.engine.delegate().cursor(),
            ForwardingDiscipline::Minimal,
            self.engine.masking(),
        ))
    }
}

impl<P, D: Modifiability> Modifiability for ForwardingCollection<P, D> {
    fn is_unmodifiable(&self) -> bool {
        self.engine.is_unmodifiable()
    }
}

impl<P: Primitive, D: AsPrimitive<P>> Collection for ForwardingCollection<P, D> {
    fn len(&self) -> usize {
        self.engine.delegate().len()
    }

    fn is_empty(&self) -> bool {
        self.engine.delegate().is_empty()
    }

    fn width(&self) -> Option<Width> {
        Some(P::WIDTH)
    }

    fn cursor(&self) -> Box<dyn Cursor + '_> {
        self.engine.delegate().cursor()
    }
}

impl<P: Primitive, D: AsPrimitive<P>> AsPrimitive<P> for ForwardingCollection<P, D> {
    fn as_primitive(&self) -> Option<&dyn PrimitiveCollection<P>> {
        let this: &dyn PrimitiveCollection<P> = self;
        Some(this)
    }

    fn as_primitive_mut(&mut self) -> Option<&mut dyn PrimitiveCollection<P>> {
        let this: &mut dyn PrimitiveCollection<P> = self;
        Some(this)
    }
}

impl<P: Primitive, D: AsPrimitive<P>> PrimitiveCollection<P> for ForwardingCollection<P, D> {
    fn contains(&self, value: P) -> Result<bool> {
        self.engine.admit(Operation::Contains)?;
        self.typed(Operation::Contains)?.contains(value)
    }

    fn iter(&self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        match self.engine.discipline() {
            ForwardingDiscipline::Minimal => Ok(self.minimal_iterator()),
            ForwardingDiscipline::Pure | ForwardingDiscipline::Shallow => {
                let iter = self.typed(Operation::Iter)?.iter()?;
                Ok(mask_iterator(self.engine.needs_mask(), iter))
            }
        }
    }

    fn iter_mut(&mut self) -> Result<Box<dyn PrimitiveIterator<P> + '_>> {
        match self.engine.discipline() {
            ForwardingDiscipline::Minimal => Ok(self.minimal_iterator()),
            ForwardingDiscipline::Pure | ForwardingDiscipline::Shallow => {
                let needs_mask = self.engine.needs_mask();
                let iter = self.typed_mut(Operation::IterMut)?.iter_mut()?;
                Ok(mask_iterator(needs_mask, iter))
            }
        }
    }

    fn add(&mut self, value: P) -> Result<bool> {
        self.engine.admit(Operation::Add)?;
        self.typed_mut(Operation::Add)?.add(value)
    }

    fn remove(&mut self, value: P) -> Result<bool> {
        match self.engine.route(Operation::Remove)? {
            Route::Delegate => self.typed_mut(Operation::Remove)?.remove(value),
            Route::Default => bulk::remove(self, value),
        }
    }

    fn add_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        match self.engine.route(Operation::AddAll)? {
            Route::Delegate => self.typed_mut(Operation::AddAll)?.add_all(other),
            Route::Default => bulk::add_all(self, other),
        }
    }

    fn remove_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        match self.engine.route(Operation::RemoveAll)? {
            Route::Delegate => self.typed_mut(Operation::RemoveAll)?.remove_all(other),
            Route::Default => bulk::remove_all(self, other),
        }
    }

    fn retain_all(&mut self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        match self.engine.route(Operation::RetainAll)? {
            Route::Delegate => self.typed_mut(Operation::RetainAll)?.retain_all(other),
            Route::Default => bulk::retain_all(self, other),
        }
    }

    fn contains_all(&self, other: &dyn AsPrimitive<P>) -> Result<bool> {
        match self.engine.route(Operation::ContainsAll)? {
            Route::Delegate => self.typed(Operation::ContainsAll)?.contains_all(other),
            Route::Default => bulk::contains_all(self, other),
        }
    }

    fn try_remove_if(&mut self, predicate: &mut dyn FnMut(P) -> Result<bool>) -> Result<bool> {
        match self.engine.route(Operation::RemoveIf)? {
            Route::Delegate => self.typed_mut(Operation::RemoveIf)?.try_remove_if(predicate),
            Route::Default => bulk::try_remove_if(self, predicate),
        }
    }

    fn clear(&mut self) -> Result<()> {
        match self.engine.route(Operation::Clear)? {
            Route::Delegate => self.typed_mut(Operation::Clear)?.clear(),
            Route::Default => bulk::clear::<P, Self>(self),
        }
    }

    fn to_vec(&self) -> Result<Vec<P>> {
        match self.engine.route(Operation::ToArray)? {
            Route::Delegate => self.typed(Operation::ToArray)?.to_vec(),
            Route::Default => to_array::to_vec(self),
        }
    }

    fn for_each(&self, action: &mut dyn FnMut(P)) -> Result<()> {
        match self.engine.route(Operation::ForEach)? {
            Route::Delegate => self.typed(Operation::ForEach)?.for_each(action),
            Route::Default => bulk::for_each(self, action),
        }
    }

    fn spliterator(&self) -> Result<Box<dyn PrimitiveSpliterator<P> + '_>> {
        match self.engine.route(Operation::Spliterator)? {
            Route::Delegate => self.typed(Operation::Spliterator)?.spliterator(),
            Route::Default => Ok(Box::new(IteratorSpliterator::over(
                self,
                Characteristics::empty(),
            ))),
        }
    }

    fn contains_boxed(&self, value: &dyn Any) -> Result<bool> {
        match self.engine.route(Operation::ContainsBoxed)? {
            Route::Delegate => self.typed(Operation::ContainsBoxed)?.contains_boxed(value),
            Route::Default => bulk::contains_boxed::<P, Self>(self, value),
        }
    }

    fn add_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        match self.engine.route(Operation::AddBoxed)? {
            Route::Delegate => self.typed_mut(Operation::AddBoxed)?.add_boxed(value),
            Route::Default => bulk::add_boxed::<P, Self>(self, value),
        }
    }

    fn remove_boxed(&mut self, value: &dyn Any) -> Result<bool> {
        match self.engine.route(Operation::RemoveBoxed)? {
            Route::Delegate => self.typed_mut(Operation::RemoveBoxed)?.remove_boxed(value),
            Route::Default => bulk::remove_boxed::<P, Self>(self, value),
        }
    }
}

impl<P: Primitive, D: AsPrimitive<P> + Clone> Clone for ForwardingCollection<P, D> {
    fn clone(&self) -> Self {
        Self::new(
            self.engine.delegate().clone(),
            self.engine.discipline(),
            self.engine.masking(),
        )
    }
}

impl<P, D: fmt::Debug> fmt::Debug for ForwardingCollection<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardingCollection")
            .field("delegate", self.engine.delegate())
            .field("discipline", &self.engine.discipline())
            .field("masking", &self.engine.masking())
            .finish()
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl<P, D: Serialize> Serialize for ForwardingCollection<P, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ForwardingCollection", 3)?;
        state.serialize_field("delegate", self.engine.delegate())?;
        state.serialize_field("discipline", &self.engine.discipline())?;
        state.serialize_field("masking", &self.engine.masking())?;
        state.end()
    }
}

impl<'de, P, D> Deserialize<'de> for ForwardingCollection<P, D>
where
    P: Primitive,
    D: AsPrimitive<P> + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "ForwardingCollection")]
        struct Repr<T> {
            delegate: T,
            discipline: ForwardingDiscipline,
            masking: MaskingDiscipline,
        }

        let repr = Repr::<D>::deserialize(deserializer)?;
        Ok(Self::new(repr.delegate, repr.discipline, repr.masking))
    }
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;
