//! Read-only views.
//!
//! Wrapping is idempotent: asking for a read-only view of something that is
//! already read-only returns it unchanged instead of stacking wrappers.
//!
//! ```
//! use primcoll_core::containers::ArrayBag;
//! use primcoll_core::traits::{Modifiability, PrimitiveCollection};
//! use primcoll_core::unmodifiable::unmodifiable;
//!
//! let bag: Box<dyn PrimitiveCollection<i64>> = Box::new(ArrayBag::from(vec![1, 2]));
//! let view = unmodifiable(bag);
//! assert!(view.is_unmodifiable());
//!
//! let again = unmodifiable(view);
//! assert!(again.is_unmodifiable());
//! assert_eq!(again.to_vec().unwrap(), [1, 2]);
//! ```

use tracing::debug;

use crate::Box;
use crate::containers::{ArrayBag, PrimitiveSet};
use crate::forwarding::{ForwardingCollection, ForwardingDiscipline, MaskingDiscipline};
use crate::traits::{AsPrimitive, Modifiability, PrimitiveCollection};
use crate::width::Primitive;

/// A boxed primitive collection.
pub type BoxedCollection<'a, P> = Box<dyn PrimitiveCollection<P> + 'a>;

/// Returns a read-only view of `collection`.
///
/// The same box comes back when the collection already reports
/// `is_unmodifiable()`. Otherwise it is wrapped in a pure forwarding
/// collection with unmodifiable masking.
pub fn unmodifiable<'a, P: Primitive>(collection: BoxedCollection<'a, P>) -> BoxedCollection<'a, P> {
    if collection.is_unmodifiable() {
        debug!(width = %P::WIDTH, "collection is already unmodifiable, not wrapping");
        return collection;
    }
    Box::new(ForwardingCollection::new(
        collection,
        ForwardingDiscipline::Pure,
        MaskingDiscipline::Unmodifiable,
    ))
}

/// Conversion into a read-only view, keeping the concrete type.
pub trait IntoUnmodifiable<P: Primitive>: Sized {
    type View: PrimitiveCollection<P>;

    fn into_unmodifiable(self) -> Self::View;
}

impl<'a, P: Primitive> IntoUnmodifiable<P> for BoxedCollection<'a, P> {
    type View = Self;

    fn into_unmodifiable(self) -> Self {
        unmodifiable(self)
    }
}

/// A forwarding collection is re-masked in place rather than wrapped again.
impl<P: Primitive, D: AsPrimitive<P>> IntoUnmodifiable<P> for ForwardingCollection<P, D> {
    type View = Self;

    fn into_unmodifiable(self) -> Self {
        if self.engine().is_unmodifiable() {
            debug!(width = %P::WIDTH, "forwarding collection is already unmodifiable");
            return self;
        }
        self.remask(MaskingDiscipline::Unmodifiable)
    }
}

macro_rules! into_unmodifiable_container {
    ($($container:ident),+) => {
        $(
            impl<P: Primitive> IntoUnmodifiable<P> for $container<P> {
                type View = ForwardingCollection<P, $container<P>>;

                fn into_unmodifiable(self) -> Self::View {
                    ForwardingCollection::unmodifiable(self)
                }
            }
        )+
    };
}

into_unmodifiable_container!(ArrayBag, PrimitiveSet);

#[cfg(test)]
#[path = "unmodifiable_test.rs"]
mod unmodifiable_test;
