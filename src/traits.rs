//! Common traits for mergeable heap data structures
//!
//! This module provides the contract shared by every heap in the crate:
//!
//! - [`MergeableHeap`]: insertion, minimum retrieval, minimum removal and
//!   destructive union (meld) of two heaps of the same type
//! - [`HeapError`]: the single failure mode, signalled when a minimum is
//!   requested from an empty heap
//!
//! Elements are ordered by their own [`Ord`] implementation. Wrap elements in
//! [`std::cmp::Reverse`] to get max-heap behavior.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// A minimum was requested from an empty heap
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap underflow: the heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for mergeable priority queues
///
/// The fallible operations (`find_min`, `delete_min`) return
/// `Err(HeapError::Underflow)` on an empty heap and leave it untouched.
/// For an API shaped like `std::collections::BinaryHeap`, use the provided
/// [`peek`](MergeableHeap::peek) and [`pop`](MergeableHeap::pop).
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::{HeapError, MergeableHeap};
/// use rust_mergeable_heaps::leftist::LeftistHeap;
///
/// let mut a = LeftistHeap::singleton(3);
/// let mut b = LeftistHeap::singleton(5);
/// a.merge(&mut b);
///
/// assert!(b.is_empty());
/// assert_eq!(a.find_min(), Ok(&3));
/// assert_eq!(a.delete_min(), Ok(3));
/// assert_eq!(a.delete_min(), Ok(5));
/// assert_eq!(a.find_min(), Err(HeapError::Underflow));
/// ```
///
/// A heap cannot be merged with itself; the borrow checker rejects it:
///
/// ```compile_fail
/// use rust_mergeable_heaps::MergeableHeap;
/// use rust_mergeable_heaps::binomial::BinomialQueue;
///
/// let mut q = BinomialQueue::singleton(1);
/// q.merge(&mut q);
/// ```
pub trait MergeableHeap<T: Ord>: Sized {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Creates a heap holding exactly one element
    fn singleton(item: T) -> Self;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for both implementations.
    fn insert(&mut self, item: T);

    /// Returns a reference to the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::Underflow` if the heap is empty.
    fn find_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::Underflow` if the heap is empty. The heap is not
    /// modified in that case.
    ///
    /// # Time Complexity
    /// O(log n) for both implementations.
    fn delete_min(&mut self) -> Result<T, HeapError>;

    /// Melds `other` into this heap
    ///
    /// Every element of `other` moves into `self`; `other` is left empty but
    /// valid and may be reused. Merging a heap with itself is a no-op.
    ///
    /// # Time Complexity
    /// O(log n) for both implementations.
    fn merge(&mut self, other: &mut Self);

    /// Drops every element
    fn clear(&mut self);

    /// Returns the minimum element, or `None` if the heap is empty
    fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty
    fn pop(&mut self) -> Option<T> {
        self.delete_min().ok()
    }

    /// Melds `other` into this heap, consuming it
    fn meld(&mut self, mut other: Self) {
        self.merge(&mut other);
    }
}
