//! Forwarding wrappers.
//!
//! [`ForwardingCollection`] and [`ForwardingIterator`] hold a delegate and
//! route each operation according to a [`ForwardingDiscipline`], while a
//! [`MaskingDiscipline`] decides whether mutations are allowed. The routing
//! table itself lives in [`Forwarder`], which custom wrappers can reuse.
//!
//! ```
//! use primcoll_core::containers::ArrayBag;
//! use primcoll_core::forwarding::{ForwardingCollection, ForwardingDiscipline, MaskingDiscipline};
//! use primcoll_core::traits::PrimitiveCollection;
//! use primcoll_core::Error;
//!
//! let bag = ArrayBag::from(vec![1i32, 2, 3]);
//! let mut view = ForwardingCollection::<i32, _>::new(
//!     bag,
//!     ForwardingDiscipline::Pure,
//!     MaskingDiscipline::Unmodifiable,
//! );
//!
//! assert!(view.contains(2).unwrap());
//! assert!(matches!(view.add(4), Err(Error::Unsupported { .. })));
//! ```

mod collection;
mod engine;
mod iterator;

pub use collection::ForwardingCollection;
pub use engine::{Forwarder, ForwardingDiscipline, MaskingDiscipline, Route, mask_iterator};
pub use iterator::ForwardingIterator;
