//! Concrete modifiable containers.
//!
//! - [`ArrayBag`]: insertion-ordered multiset, inline storage for small bags.
//! - [`PrimitiveSet`]: set keyed by bit pattern, so `f64::NAN` is a member
//!   like any other value.
//!
//! Both answer [`AsPrimitive`](crate::traits::AsPrimitive) for every width
//! and return `None` for the ones they do not hold, which is what lets a
//! forwarding wrapper of the wrong width report a type mismatch at run time.

mod array_bag;
mod set;

pub use array_bag::ArrayBag;
pub use set::PrimitiveSet;

/// Implements `AsPrimitive<Q>` for every width `Q` on a container generic
/// over its own width, by downcasting to the `Q` instantiation.
macro_rules! as_primitive_by_downcast {
    ($($container:ident),+ $(,)?) => {
        $(
            impl<P: $crate::Primitive, Q: $crate::Primitive> $crate::traits::AsPrimitive<Q>
                for $container<P>
            {
                fn as_primitive(&self) -> Option<&dyn $crate::traits::PrimitiveCollection<Q>> {
                    let any: &dyn core::any::Any = self;
                    any.downcast_ref::<$container<Q>>()
                        .map(|c| c as &dyn $crate::traits::PrimitiveCollection<Q>)
                }

                fn as_primitive_mut(
                    &mut self,
                ) -> Option<&mut dyn $crate::traits::PrimitiveCollection<Q>> {
                    let any: &mut dyn core::any::Any = self;
                    any.downcast_mut::<$container<Q>>()
                        .map(|c| c as &mut dyn $crate::traits::PrimitiveCollection<Q>)
                }
            }
        )+
    };
}

as_primitive_by_downcast!(ArrayBag, PrimitiveSet);
