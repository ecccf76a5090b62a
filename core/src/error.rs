//! Error types for collection operations.
//!
//! Every failure is local, synchronous and permanent: it reflects either a
//! contract violation by the caller or a capability the collection does not
//! have. Nothing here is worth retrying.

use core::fmt;

use crate::String;
use crate::width::Width;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error type for all collection, iterator and spliterator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation is forbidden: the collection (or a view over it) is
    /// read-only, or the container never supports it.
    #[error("`{op}` is not supported by this collection")]
    Unsupported { op: Operation },

    /// The value was rejected for a reason other than already being present.
    #[error("invalid argument to `{op}`: {reason}")]
    InvalidArgument { op: Operation, reason: String },

    /// The operation is not valid in the receiver's current state.
    ///
    /// Raised by element-typed operations on a
    /// [`Minimal`](crate::forwarding::ForwardingDiscipline::Minimal) wrapper
    /// and by iterator misuse such as removing twice after one advance.
    #[error("invalid state for `{op}`: {reason}")]
    InvalidState { op: Operation, reason: &'static str },

    /// A forwarding wrapper was asked to treat its delegate as a collection
    /// of `expected` elements, but the delegate holds something else.
    ///
    /// This is an integration defect, not a recoverable condition.
    #[error(
        "type mismatch in `{op}`: expected {expected} elements, found {}",
        .found.map_or("unknown", Width::name)
    )]
    TypeMismatch {
        op: Operation,
        expected: Width,
        found: Option<Width>,
    },

    /// An array could not grow far enough to hold every element.
    #[error("cannot materialize {required} elements: maximum array length is {max}")]
    ResourceExhausted { required: usize, max: usize },
}

impl Error {
    pub(crate) fn unsupported(op: Operation) -> Self {
        Error::Unsupported { op }
    }

    pub(crate) fn invalid_argument(op: Operation, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(op: Operation, reason: &'static str) -> Self {
        Error::InvalidState { op, reason }
    }

    pub(crate) fn type_mismatch(op: Operation, expected: Width, found: Option<Width>) -> Self {
        Error::TypeMismatch {
            op,
            expected,
            found,
        }
    }

    /// The operation named in the error, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Unsupported { op }
            | Error::InvalidArgument { op, .. }
            | Error::InvalidState { op, .. }
            | Error::TypeMismatch { op, .. } => Some(*op),
            Error::ResourceExhausted { .. } => None,
        }
    }
}

impl From<primcoll_fill_array::CapacityExceeded> for Error {
    fn from(err: primcoll_fill_array::CapacityExceeded) -> Self {
        Error::ResourceExhausted {
            required: err.required,
            max: err.limit,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

/// How an operation relates to the element type, which decides how a
/// forwarding wrapper may dispatch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Does not touch elements (`len`, `has_next`); always forwardable.
    ElementAgnostic,
    /// Part of the minimal surface every container supplies directly.
    Primary,
    /// Has a default algorithm expressed through the primary operations.
    Derived,
}

/// Every operation a collection, iterator or spliterator exposes.
///
/// Used both to label errors and to drive forwarding dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Collections
    Len,
    Cursor,
    Contains,
    Iter,
    IterMut,
    Add,
    Remove,
    AddAll,
    RemoveAll,
    RetainAll,
    ContainsAll,
    RemoveIf,
    Clear,
    ToArray,
    ForEach,
    Spliterator,
    ContainsBoxed,
    AddBoxed,
    RemoveBoxed,
    DelegateMut,
    // Iterators
    HasNext,
    Next,
    IteratorRemove,
    ForEachRemaining,
    // Spliterators
    TryAdvance,
    TrySplit,
    EstimateSize,
    ConfigureBatching,
}

impl Operation {
    /// Method-style name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Len => "len",
            Operation::Cursor => "cursor",
            Operation::Contains => "contains",
            Operation::Iter => "iter",
            Operation::IterMut => "iter_mut",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::AddAll => "add_all",
            Operation::RemoveAll => "remove_all",
            Operation::RetainAll => "retain_all",
            Operation::ContainsAll => "contains_all",
            Operation::RemoveIf => "remove_if",
            Operation::Clear => "clear",
            Operation::ToArray => "to_vec",
            Operation::ForEach => "for_each",
            Operation::Spliterator => "spliterator",
            Operation::ContainsBoxed => "contains_boxed",
            Operation::AddBoxed => "add_boxed",
            Operation::RemoveBoxed => "remove_boxed",
            Operation::DelegateMut => "delegate_mut",
            Operation::HasNext => "has_next",
            Operation::Next => "next_value",
            Operation::IteratorRemove => "iterator remove",
            Operation::ForEachRemaining => "for_each_remaining",
            Operation::TryAdvance => "try_advance",
            Operation::TrySplit => "try_split",
            Operation::EstimateSize => "estimate_size",
            Operation::ConfigureBatching => "batch policy",
        }
    }

    pub const fn shape(self) -> Shape {
        match self {
            Operation::Len
            | Operation::Cursor
            | Operation::HasNext
            | Operation::DelegateMut
            | Operation::EstimateSize
            | Operation::ConfigureBatching => Shape::ElementAgnostic,
            Operation::Contains
            | Operation::Iter
            | Operation::IterMut
            | Operation::Add
            | Operation::Next
            | Operation::IteratorRemove
            | Operation::TryAdvance
            | Operation::TrySplit => Shape::Primary,
            Operation::Remove
            | Operation::AddAll
            | Operation::RemoveAll
            | Operation::RetainAll
            | Operation::ContainsAll
            | Operation::RemoveIf
            | Operation::Clear
            | Operation::ToArray
            | Operation::ForEach
            | Operation::Spliterator
            | Operation::ContainsBoxed
            | Operation::AddBoxed
            | Operation::RemoveBoxed
            | Operation::ForEachRemaining => Shape::Derived,
        }
    }

    /// Whether the operation changes the receiver (or its delegate).
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Remove
                | Operation::AddAll
                | Operation::RemoveAll
                | Operation::RetainAll
                | Operation::RemoveIf
                | Operation::Clear
                | Operation::AddBoxed
                | Operation::RemoveBoxed
                | Operation::DelegateMut
                | Operation::IteratorRemove
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;

    #[test]
    fn test_display_messages() {
        let err = Error::unsupported(Operation::Add);
        assert_eq!(err.to_string(), "`add` is not supported by this collection");

        let err = Error::type_mismatch(Operation::Contains, Width::Int32, None);
        assert_eq!(
            err.to_string(),
            "type mismatch in `contains`: expected int32 elements, found unknown"
        );

        let err = Error::type_mismatch(Operation::Iter, Width::Int64, Some(Width::Float64));
        assert_eq!(
            err.to_string(),
            "type mismatch in `iter`: expected int64 elements, found float64"
        );
    }

    #[test]
    fn test_capacity_conversion() {
        let err: Error = primcoll_fill_array::CapacityExceeded {
            required: 11,
            limit: 10,
        }
        .into();
        assert_eq!(err, Error::ResourceExhausted { required: 11, max: 10 });
        assert_eq!(err.operation(), None);
    }

    #[test]
    fn test_mutating_operations_are_not_agnostic_reads() {
        assert!(Operation::Add.is_mutating());
        assert!(Operation::IteratorRemove.is_mutating());
        assert!(!Operation::Contains.is_mutating());
        assert_eq!(Operation::Len.shape(), Shape::ElementAgnostic);
        assert_eq!(Operation::RemoveIf.shape(), Shape::Derived);
    }
}
