//! Splittable traversal for parallel consumers.
//!
//! A [`PrimitiveSpliterator`] walks a range of elements and can hand part of
//! that range off to another consumer. Two implementations live here:
//!
//! - [`ArraySpliterator`] covers an owned array range and splits it in half.
//!   It is `Send`, so splits can move to worker threads.
//! - [`IteratorSpliterator`] wraps a collection's iterator. It splits by
//!   copying growing batches into [`ArraySpliterator`]s and binds to its
//!   source only on first use.

mod array;
mod characteristics;
mod iter;

pub use array::ArraySpliterator;
pub use characteristics::Characteristics;
pub use iter::IteratorSpliterator;

use primcoll_fill_array::MAX_ARRAY_SIZE;

use crate::error::{Error, Operation, Result};
use crate::traits::Modifiability;
use crate::width::Primitive;

/// Batch growth increment of [`BatchPolicy::DEFAULT`].
pub const BATCH_UNIT: usize = 1 << 10;

/// Largest batch [`BatchPolicy::DEFAULT`] copies in one split.
pub const MAX_BATCH: usize = 1 << 25;

static_assertions::const_assert!(BATCH_UNIT <= MAX_BATCH);
static_assertions::const_assert!(MAX_BATCH <= MAX_ARRAY_SIZE);

/// Splittable traversal over `P` values.
///
/// Spliterators never mutate their source and always report
/// `is_unmodifiable() == true`.
pub trait PrimitiveSpliterator<P: Primitive>: Modifiability {
    /// Feeds the next element to `action`; `false` once exhausted.
    fn try_advance(&mut self, action: &mut dyn FnMut(P)) -> Result<bool>;

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        while self.try_advance(action)? {}
        Ok(())
    }

    /// Splits off a prefix of the remaining elements, or `None` if this
    /// spliterator declines to split.
    fn try_split(&mut self) -> Result<Option<ArraySpliterator<P>>>;

    /// Remaining elements; `u64::MAX` when unknown.
    fn estimate_size(&mut self) -> Result<u64>;

    /// The remaining count when it is known exactly.
    fn exact_size(&mut self) -> Result<Option<u64>> {
        if self.characteristics().contains(Characteristics::SIZED) {
            self.estimate_size().map(Some)
        } else {
            Ok(None)
        }
    }

    fn characteristics(&self) -> Characteristics;

    fn has_characteristics(&self, wanted: Characteristics) -> bool {
        self.characteristics().contains(wanted)
    }
}

/// Batch sizing for [`IteratorSpliterator::try_split`].
///
/// Each split copies `unit` more elements than the previous one, never more
/// than `max_batch` and never more than the size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    unit: usize,
    max_batch: usize,
}

impl BatchPolicy {
    pub const DEFAULT: BatchPolicy = BatchPolicy {
        unit: BATCH_UNIT,
        max_batch: MAX_BATCH,
    };

    pub fn new(unit: usize, max_batch: usize) -> Result<Self> {
        if unit == 0 {
            return Err(Error::invalid_argument(
                Operation::ConfigureBatching,
                "batch unit must be positive",
            ));
        }
        if max_batch < unit || max_batch > MAX_ARRAY_SIZE {
            return Err(Error::invalid_argument(
                Operation::ConfigureBatching,
                crate::format!("max batch {max_batch} must lie in {unit}..={MAX_ARRAY_SIZE}"),
            ));
        }
        Ok(Self { unit, max_batch })
    }

    pub fn unit(&self) -> usize {
        self.unit
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Size of the batch that follows one of `previous` elements.
    pub fn next_batch(&self, previous: usize, estimate: u64) -> usize {
        let grown = previous.saturating_add(self.unit);
        let capped = if grown as u64 > estimate {
            estimate as usize
        } else {
            grown
        };
        capped.min(self.max_batch)
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
