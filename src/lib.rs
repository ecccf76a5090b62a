//! primcoll - collections of unboxed `i32`, `i64` and `f64` values
//!
//! # Overview
//!
//! primcoll stores primitive values directly instead of boxing each
//! element, and layers two reusable pieces on top of its containers:
//!
//! - **Forwarding**: wrap any collection and choose, per wrapper, whether
//!   derived operations call the delegate (`Pure`), run generic defaults
//!   against the wrapper (`Shallow`), or are refused (`Minimal`).
//! - **Read-only views**: mask every mutating path, including removal
//!   through iterators, without copying the data.
//!
//! A batching spliterator carves any collection into owned array ranges
//! that can be processed on other threads.
//!
//! # Quick Start
//!
//! ```
//! use primcoll::{IntBag, ForwardingCollection, PrimitiveCollection, Error};
//!
//! let mut bag: IntBag = [3, 1, 4, 1, 5].into_iter().collect();
//! bag.remove_if(&mut |v| v == 1).unwrap();
//! assert_eq!(bag.to_vec().unwrap(), [3, 4, 5]);
//!
//! let view = ForwardingCollection::<i32, _>::unmodifiable(bag);
//! assert!(view.contains(4).unwrap());
//! assert!(matches!(view.clone().add(9), Err(Error::Unsupported { .. })));
//! ```
//!
//! # Parallel traversal
//!
//! ```
//! use primcoll::{LongBag, PrimitiveCollection, PrimitiveSpliterator};
//!
//! let bag: LongBag = (0..5000).collect();
//! let mut split = bag.spliterator().unwrap();
//!
//! let mut batches = Vec::new();
//! while let Some(batch) = split.try_split().unwrap() {
//!     batches.push(batch.len());
//! }
//! assert_eq!(batches, [1024, 2048, 1928]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the container contract
pub use primcoll_core::traits::{
    AsPrimitive, AsPrimitiveIterator, Collection, Cursor, Modifiability, PrimitiveCollection,
    PrimitiveIterator, Values,
};
pub use primcoll_core::{Error, Operation, Primitive, Result, Width};

// Re-export containers and the machinery around them
pub use primcoll_core::containers::{ArrayBag, PrimitiveSet};
pub use primcoll_core::forwarding::{
    ForwardingCollection, ForwardingDiscipline, ForwardingIterator, MaskingDiscipline,
};
pub use primcoll_core::split::{
    ArraySpliterator, BatchPolicy, Characteristics, IteratorSpliterator, PrimitiveSpliterator,
};
pub use primcoll_core::unmodifiable::{BoxedCollection, IntoUnmodifiable, unmodifiable};

// Width-specific aliases
pub use primcoll_core::specialized::*;

pub use primcoll_core::{algo, specialized};
