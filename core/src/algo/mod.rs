//! Default algorithms expressed through the primary operations.
//!
//! These back the default methods of
//! [`PrimitiveCollection`](crate::traits::PrimitiveCollection) and the
//! shallow forwarding discipline, which runs them against the wrapper
//! itself instead of calling the delegate.

pub mod bulk;
pub mod to_array;
