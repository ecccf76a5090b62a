//! Primitive-specialized collections with forwarding and read-only views.
//!
//! Collections here hold `i32`, `i64` or `f64` values directly, without boxing
//! each element. On top of the container contract sit two pieces of
//! machinery:
//!
//! - [`forwarding`]: wrappers that delegate to another collection under a
//!   [`ForwardingDiscipline`](forwarding::ForwardingDiscipline) (call the
//!   delegate, run a generic default, or refuse) and a
//!   [`MaskingDiscipline`](forwarding::MaskingDiscipline) (enforce read-only
//!   access, including on every iterator handed out).
//! - [`split`]: a late-binding, batching spliterator that carves any
//!   collection into independent array-backed ranges for parallel work.
//!
//! Every generic component is written once over [`Primitive`] and
//! instantiated for the three widths; see [`specialized`] for the aliases.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{
        boxed::Box, format, string::String, string::ToString, sync::Arc, vec, vec::Vec,
    };
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod algo;
pub mod containers;
pub mod error;
pub mod forwarding;
pub mod specialized;
pub mod split;
pub mod traits;
pub mod unmodifiable;
pub mod width;

pub use error::{Error, Operation, Result};
pub use width::{Primitive, Width};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
