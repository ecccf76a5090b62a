//! Array materialization from a source whose reported length may be stale.
//!
//! A collection reports its length before iteration starts, but nothing stops
//! that length from being wrong by the time the elements are pulled out. The
//! functions here treat the reported length as a first guess only:
//!
//! ```text
//! declared n ──▶ [ fill up to n ] ──▶ source ended early? ──▶ return the filled prefix
//!                        │
//!                        └──▶ source still has elements ──▶ grow by cap + cap/2 + 1
//!                                                           (saturating at the limit)
//!                                                           ──▶ trim to exact length
//! ```
//!
//! # Example
//!
//! ```
//! use primcoll_fill_array::{fill_array, CapacityExceeded};
//!
//! // Declared 5, but the source only produces 3.
//! let mut source = [1, 2, 3].into_iter();
//! let out = fill_array::<_, CapacityExceeded>(5, || Ok(source.next())).unwrap();
//! assert_eq!(out, [1, 2, 3]);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Largest array length the materialization functions will produce.
///
/// Matches the conventional JVM-style ceiling of `2^31 - 9` so arrays stay
/// addressable with a signed 32-bit index on every platform.
pub const MAX_ARRAY_SIZE: usize = i32::MAX as usize - 8;

static_assertions::const_assert_eq!(MAX_ARRAY_SIZE, (1usize << 31) - 9);

/// The array cannot grow far enough to hold the next element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot grow array to {required} elements: limit is {limit}")]
pub struct CapacityExceeded {
    /// Number of slots that were needed.
    pub required: usize,
    /// The ceiling that was in effect.
    pub limit: usize,
}

/// Computes the next capacity after `cap` is exhausted.
///
/// Grows by `cap + cap / 2 + 1`, saturating at `limit`. Fails when even a
/// single extra slot would exceed `limit`.
pub fn grow_capacity(cap: usize, limit: usize) -> Result<usize, CapacityExceeded> {
    if cap >= limit {
        return Err(CapacityExceeded {
            required: cap.saturating_add(1),
            limit,
        });
    }
    let grown = cap.saturating_add(cap / 2).saturating_add(1);
    Ok(grown.min(limit))
}

/// Materializes `pull` into a `Vec`, using `declared` as the initial guess.
///
/// See [`fill_array_with_limit`]; the limit here is [`MAX_ARRAY_SIZE`].
pub fn fill_array<T, E>(
    declared: usize,
    pull: impl FnMut() -> Result<Option<T>, E>,
) -> Result<Vec<T>, E>
where
    E: From<CapacityExceeded>,
{
    fill_array_with_limit(declared, MAX_ARRAY_SIZE, pull)
}

/// Materializes `pull` into a `Vec` of exactly the number of elements produced.
///
/// `pull` yields `Ok(Some(_))` per element and `Ok(None)` once exhausted; its
/// errors are returned unchanged. `declared` sizes the first allocation. If
/// the source ends before `declared` elements, the shorter result is returned.
/// If it keeps going, the buffer grows geometrically up to `limit` and a
/// [`CapacityExceeded`] is raised once no more room can be made.
pub fn fill_array_with_limit<T, E>(
    declared: usize,
    limit: usize,
    mut pull: impl FnMut() -> Result<Option<T>, E>,
) -> Result<Vec<T>, E>
where
    E: From<CapacityExceeded>,
{
    if declared > limit {
        return Err(CapacityExceeded {
            required: declared,
            limit,
        }
        .into());
    }

    let mut out = Vec::with_capacity(declared);
    while out.len() < declared {
        match pull()? {
            Some(value) => out.push(value),
            None => {
                tracing::debug!(
                    declared,
                    filled = out.len(),
                    "source ended before its declared length"
                );
                out.shrink_to_fit();
                return Ok(out);
            }
        }
    }

    let mut cap = declared;
    while let Some(value) = pull()? {
        if out.len() == cap {
            if cap == declared {
                tracing::debug!(declared, "source outran its declared length; growing");
            }
            cap = grow_capacity(cap, limit)?;
            out.reserve_exact(cap - out.len());
        }
        out.push(value);
    }
    out.shrink_to_fit();
    Ok(out)
}
