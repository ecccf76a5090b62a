//! Materializing a collection into a `Vec`.

use primcoll_fill_array::{MAX_ARRAY_SIZE, fill_array_with_limit};

use crate::Vec;
use crate::error::Result;
use crate::traits::PrimitiveCollection;
use crate::width::Primitive;

/// Copies every element of `collection` out in iteration order.
///
/// `len()` is read once up front and treated as a hint only; the iterator
/// decides how many elements there really are.
pub fn to_vec<P, C>(collection: &C) -> Result<Vec<P>>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    to_vec_with_limit(collection, MAX_ARRAY_SIZE)
}

/// Like [`to_vec`], with a custom upper bound on the array length.
pub fn to_vec_with_limit<P, C>(collection: &C, limit: usize) -> Result<Vec<P>>
where
    P: Primitive,
    C: PrimitiveCollection<P> + ?Sized,
{
    let declared = collection.len();
    let mut iter = collection.iter()?;
    fill_array_with_limit(declared, limit, || iter.next_value())
}

#[cfg(test)]
#[path = "to_array_test.rs"]
mod to_array_test;
