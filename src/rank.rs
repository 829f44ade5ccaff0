//! Rank type for per-node structural bookkeeping.
//!
//! # Why u8?
//!
//! The null path length of a leftist heap node is the length of its right
//! spine, which the leftist property bounds by `log₂(n + 1)`. A heap with
//! 2⁶⁴ elements therefore never needs a rank above 64, so `u8` leaves ample
//! headroom while keeping the node header small.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the theoretical limit is ever exceeded,
//! which can only happen if the structural invariant has been broken.

/// Type alias for node rank (null path length).
///
/// The maximum value (255) supports heaps with up to 2²⁵⁵ elements.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: a null path length is at most log₂(n + 1) \
         and u8::MAX (255) supports heaps with up to 2²⁵⁵ elements",
    )
}
