use core::mem;

use tracing::trace;

use crate::error::{Error, Operation, Result};
use crate::split::{ArraySpliterator, BatchPolicy, Characteristics, PrimitiveSpliterator};
use crate::traits::{Modifiability, PrimitiveCollection, PrimitiveIterator};
use crate::width::Primitive;
use crate::{Box, Vec};

type Binder<'a, P> =
    Box<dyn FnOnce() -> Result<(Box<dyn PrimitiveIterator<P> + 'a>, u64)> + 'a>;

enum Source<'a, P: Primitive> {
    /// Not yet bound: iterator and size are fetched on first use.
    Unbound(Binder<'a, P>),
    Bound(Box<dyn PrimitiveIterator<P> + 'a>),
    /// Binding failed; the spliterator is unusable.
    Failed,
}

/// Spliterator over an iterator, splitting by copying batches out.
///
/// Each successful [`try_split`](PrimitiveSpliterator::try_split) pulls up to
/// one [`BatchPolicy::unit`] more elements than the previous split into an
/// [`ArraySpliterator`], so work handed to other threads grows
/// arithmetically while this spliterator keeps the tail. The estimate is
/// decremented by each batch unless it is unknown (`u64::MAX`).
pub struct IteratorSpliterator<'a, P: Primitive> {
    source: Source<'a, P>,
    estimate: u64,
    batch: usize,
    characteristics: Characteristics,
    policy: BatchPolicy,
}

impl<'a, P: Primitive> IteratorSpliterator<'a, P> {
    /// Late-binding spliterator over `collection`.
    ///
    /// `SIZED | SUBSIZED` are added unless `characteristics` contains
    /// `CONCURRENT`.
    pub fn over<C>(collection: &'a C, characteristics: Characteristics) -> Self
    where
        C: PrimitiveCollection<P> + ?Sized,
    {
        Self::late_bound(
            move || {
                let iter = collection.iter()?;
                Ok((iter, collection.len() as u64))
            },
            characteristics,
        )
    }

    /// Spliterator whose iterator and size come from `bind`, called once on
    /// first traversal, split or size query.
    pub fn late_bound(
        bind: impl FnOnce() -> Result<(Box<dyn PrimitiveIterator<P> + 'a>, u64)> + 'a,
        characteristics: Characteristics,
    ) -> Self {
        Self {
            source: Source::Unbound(Box::new(bind)),
            estimate: 0,
            batch: 0,
            characteristics: characteristics.sized_unless_concurrent(),
            policy: BatchPolicy::DEFAULT,
        }
    }

    /// Spliterator over an already created iterator of known size.
    pub fn new(
        iter: Box<dyn PrimitiveIterator<P> + 'a>,
        size: u64,
        characteristics: Characteristics,
    ) -> Self {
        Self {
            source: Source::Bound(iter),
            estimate: size,
            batch: 0,
            characteristics: characteristics.sized_unless_concurrent(),
            policy: BatchPolicy::DEFAULT,
        }
    }

    /// Spliterator over an iterator whose size is unknown. Never `SIZED`.
    pub fn unknown_size(
        iter: Box<dyn PrimitiveIterator<P> + 'a>,
        characteristics: Characteristics,
    ) -> Self {
        Self {
            source: Source::Bound(iter),
            estimate: u64::MAX,
            batch: 0,
            characteristics: characteristics - (Characteristics::SIZED | Characteristics::SUBSIZED),
            policy: BatchPolicy::DEFAULT,
        }
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the source has been bound yet.
    pub fn is_bound(&self) -> bool {
        matches!(self.source, Source::Bound(_))
    }

    fn bind(&mut self, op: Operation) -> Result<()> {
        match mem::replace(&mut self.source, Source::Failed) {
            Source::Unbound(bind) => {
                let (iter, size) = bind()?;
                trace!(size, "bound spliterator to its source");
                self.estimate = size;
                self.source = Source::Bound(iter);
                Ok(())
            }
            Source::Bound(iter) => {
                self.source = Source::Bound(iter);
                Ok(())
            }
            Source::Failed => Err(Error::invalid_state(
                op,
                "spliterator source failed to bind earlier",
            )),
        }
    }

    fn iter(&mut self, op: Operation) -> Result<&mut (dyn PrimitiveIterator<P> + 'a)> {
        self.bind(op)?;
        match &mut self.source {
            Source::Bound(iter) => Ok(iter.as_mut()),
            _ => Err(Error::invalid_state(op, "spliterator source is not bound")),
        }
    }
}

impl<P: Primitive> Modifiability for IteratorSpliterator<'_, P> {
    fn is_unmodifiable(&self) -> bool {
        true
    }
}

impl<P: Primitive> PrimitiveSpliterator<P> for IteratorSpliterator<'_, P> {
    fn try_advance(&mut self, action: &mut dyn FnMut(P)) -> Result<bool> {
        match self.iter(Operation::TryAdvance)?.next_value()? {
            Some(value) => {
                action(value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(P)) -> Result<()> {
        self.iter(Operation::ForEachRemaining)?
            .for_each_remaining(action)
    }

    fn try_split(&mut self) -> Result<Option<ArraySpliterator<P>>> {
        self.bind(Operation::TrySplit)?;
        let Source::Bound(iter) = &mut self.source else {
            return Err(Error::invalid_state(
                Operation::TrySplit,
                "spliterator source is not bound",
            ));
        };

        if self.estimate <= 1 || !iter.has_next() {
            return Ok(None);
        }

        let n = self.policy.next_batch(self.batch, self.estimate);
        let mut batch = Vec::with_capacity(n);
        while batch.len() < n {
            match iter.next_value()? {
                Some(value) => batch.push(value),
                None => break,
            }
        }

        self.batch = batch.len();
        if self.estimate != u64::MAX {
            self.estimate = self.estimate.saturating_sub(batch.len() as u64);
        }
        trace!(batch = self.batch, remaining = self.estimate, "split off batch");
        Ok(Some(ArraySpliterator::new(batch, self.characteristics)))
    }

    fn estimate_size(&mut self) -> Result<u64> {
        self.bind(Operation::EstimateSize)?;
        Ok(self.estimate)
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}
