//! The dispatch rules shared by every forwarding wrapper.
//!
//! A [`Forwarder`] owns a delegate and decides, per [`Operation`], whether a
//! call is admitted and where it goes:
//!
//! | discipline | element-agnostic | primary  | derived          |
//! |------------|------------------|----------|------------------|
//! | `Pure`     | delegate         | delegate | delegate         |
//! | `Shallow`  | delegate         | delegate | default algorithm |
//! | `Minimal`  | delegate         | refused  | refused          |
//!
//! Masking is checked first: a wrapper that is unmodifiable rejects every
//! mutating operation with [`Error::Unsupported`] regardless of discipline.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Box;
use crate::error::{Error, Operation, Result, Shape};
use crate::forwarding::ForwardingIterator;
use crate::traits::{Modifiability, PrimitiveIterator};
use crate::width::Primitive;

/// How a wrapper dispatches element-typed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForwardingDiscipline {
    /// Every operation goes to the delegate through its typed surface.
    Pure,
    /// Primary operations go to the delegate; derived ones run the default
    /// algorithm against the wrapper.
    Shallow,
    /// Only element-agnostic operations are forwarded; anything typed fails
    /// with [`Error::InvalidState`].
    Minimal,
}

/// Whether a wrapper enforces read-only access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskingDiscipline {
    /// Reject every mutation, on the wrapper and on every iterator it hands
    /// out.
    Unmodifiable,
    /// Inherit whatever the delegate allows.
    Delegate,
}

/// Where an admitted operation should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Call the delegate's implementation.
    Delegate,
    /// Run the default algorithm against the wrapper itself.
    Default,
}

const MINIMAL_REFUSAL: &str = "minimal forwarding only supports element-agnostic operations";

/// Delegate plus dispatch state for one wrapper.
#[derive(Debug, Clone)]
pub struct Forwarder<D> {
    delegate: D,
    discipline: ForwardingDiscipline,
    unmodifiable: bool,
    needs_mask: bool,
}

impl<D: Modifiability> Forwarder<D> {
    /// Builds the dispatch state.
    ///
    /// The result is unmodifiable when masking was requested or the
    /// delegate is already unmodifiable. Iterators only need re-wrapping
    /// when masking was requested over a modifiable delegate.
    pub fn new(
        delegate: D,
        discipline: ForwardingDiscipline,
        masking: MaskingDiscipline,
    ) -> Self {
        let requested = masking == MaskingDiscipline::Unmodifiable;
        let inherited = delegate.is_unmodifiable();
        trace!(
            ?discipline,
            ?masking,
            delegate_unmodifiable = inherited,
            "created forwarder"
        );
        Self {
            delegate,
            discipline,
            unmodifiable: requested || inherited,
            needs_mask: requested && !inherited,
        }
    }
}

impl<D> Forwarder<D> {
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate, refused when the wrapper is
    /// unmodifiable.
    pub fn delegate_mut(&mut self) -> Result<&mut D> {
        self.ensure_mutable(Operation::DelegateMut)?;
        Ok(&mut self.delegate)
    }

    /// Mutable access for dispatch. Callers must have admitted the
    /// operation first.
    pub(crate) fn dispatch_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn into_inner(self) -> D {
        self.delegate
    }

    pub fn discipline(&self) -> ForwardingDiscipline {
        self.discipline
    }

    pub fn is_unmodifiable(&self) -> bool {
        self.unmodifiable
    }

    /// Whether iterators obtained from the delegate must be re-wrapped.
    pub fn needs_mask(&self) -> bool {
        self.needs_mask
    }

    /// The masking this forwarder effectively applies.
    pub fn masking(&self) -> MaskingDiscipline {
        if self.unmodifiable {
            MaskingDiscipline::Unmodifiable
        } else {
            MaskingDiscipline::Delegate
        }
    }

    pub fn ensure_mutable(&self, op: Operation) -> Result<()> {
        if op.is_mutating() && self.unmodifiable {
            trace!(%op, "rejected mutation through unmodifiable view");
            return Err(Error::unsupported(op));
        }
        Ok(())
    }

    /// Checks masking and discipline for `op`.
    pub fn admit(&self, op: Operation) -> Result<()> {
        self.ensure_mutable(op)?;
        if self.discipline == ForwardingDiscipline::Minimal && op.shape() != Shape::ElementAgnostic
        {
            trace!(%op, "refused typed operation under minimal forwarding");
            return Err(Error::invalid_state(op, MINIMAL_REFUSAL));
        }
        Ok(())
    }

    /// Admits `op` and picks where it runs.
    pub fn route(&self, op: Operation) -> Result<Route> {
        self.admit(op)?;
        Ok(match (self.discipline, op.shape()) {
            (ForwardingDiscipline::Shallow, Shape::Derived) => Route::Default,
            _ => Route::Delegate,
        })
    }
}

/// Wraps `iter` in an unmodifiable forwarding iterator when `needs_mask` is
/// set and the iterator is not already read-only.
pub fn mask_iterator<'a, P: Primitive>(
    needs_mask: bool,
    iter: Box<dyn PrimitiveIterator<P> + 'a>,
) -> Box<dyn PrimitiveIterator<P> + 'a> {
    if needs_mask && !iter.is_unmodifiable() {
        Box::new(ForwardingIterator::new(
            iter,
            ForwardingDiscipline::Pure,
            MaskingDiscipline::Unmodifiable,
        ))
    } else {
        iter
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
