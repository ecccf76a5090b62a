//! Shared helpers for integration tests.

#![allow(dead_code)]

use primcoll_core::traits::PrimitiveCollection;
use primcoll_core::Primitive;

/// Initialize tracing for integration tests, honoring `RUST_LOG`.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Collects a collection's elements and sorts them by bit pattern, so
/// contents can be compared without caring about iteration order.
pub fn sorted_bits<P: Primitive>(collection: &dyn PrimitiveCollection<P>) -> Vec<u64> {
    let mut bits: Vec<u64> = collection
        .to_vec()
        .expect("collection should materialize")
        .into_iter()
        .map(Primitive::bit_pattern)
        .collect();
    bits.sort_unstable();
    bits
}
