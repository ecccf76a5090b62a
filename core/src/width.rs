//! The three element widths and the trait that ties a Rust type to each.
//!
//! Every generic component in the crate is parameterized by exactly one
//! `P: Primitive`. The trait is sealed: the set of widths is closed.
//!
//! ```
//! use primcoll_core::{Primitive, Width};
//!
//! assert_eq!(i32::WIDTH, Width::Int32);
//! assert!(f64::NAN.same(f64::NAN));
//! assert!(!0.0f64.same(-0.0));
//! ```

use core::any::Any;
use core::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Closed tag naming a primitive element width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Width {
    Int32,
    Int64,
    Float64,
}

impl Width {
    pub const ALL: [Width; 3] = [Width::Int32, Width::Int64, Width::Float64];

    pub const fn name(self) -> &'static str {
        match self {
            Width::Int32 => "int32",
            Width::Int64 => "int64",
            Width::Float64 => "float64",
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod private {
    pub trait Sealed {}
}

/// A fixed-width numeric element type stored unboxed.
///
/// Element identity is defined by [`bit_pattern`](Primitive::bit_pattern):
/// two values are the same element when their bits match. For `f64` this
/// makes `NaN` equal to itself and keeps `0.0` and `-0.0` apart, so a set
/// never loses a `NaN` it was given.
pub trait Primitive:
    private::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + Serialize
    + for<'de> Deserialize<'de>
    + 'static
{
    /// The width tag for this type.
    const WIDTH: Width;

    /// The value's bits, zero-extended to 64 bits.
    fn bit_pattern(self) -> u64;

    /// Element identity used by `contains`, `remove` and sets.
    #[inline]
    fn same(self, other: Self) -> bool {
        self.bit_pattern() == other.bit_pattern()
    }

    /// Recovers an unboxed value from a boxed one, if it has this width.
    #[inline]
    fn from_boxed(value: &dyn Any) -> Option<Self> {
        value.downcast_ref::<Self>().copied()
    }
}

macro_rules! primitive_width {
    ($($ty:ty => $width:ident, |$v:ident| $bits:expr;)+) => {
        $(
            impl private::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: Width = Width::$width;

                #[inline]
                fn bit_pattern(self) -> u64 {
                    let $v = self;
                    $bits
                }
            }
        )+
    };
}

primitive_width! {
    i32 => Int32, |v| v as u32 as u64;
    i64 => Int64, |v| v as u64;
    f64 => Float64, |v| v.to_bits();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_tags() {
        assert_eq!(i32::WIDTH, Width::Int32);
        assert_eq!(i64::WIDTH, Width::Int64);
        assert_eq!(f64::WIDTH, Width::Float64);
        assert_eq!(Width::ALL.len(), 3);
    }

    #[test]
    fn test_bit_pattern_identity() {
        assert!((-1i32).same(-1));
        assert_eq!((-1i32).bit_pattern(), u32::MAX as u64);
        assert!(!1i64.same(2));
        assert!(f64::NAN.same(f64::NAN));
        assert!(!0.0f64.same(-0.0));
    }

    #[test]
    fn test_from_boxed() {
        let boxed: &dyn Any = &7i64;
        assert_eq!(i64::from_boxed(boxed), Some(7));
        assert_eq!(i32::from_boxed(boxed), None);
        assert_eq!(f64::from_boxed(&"seven"), None);
    }
}
