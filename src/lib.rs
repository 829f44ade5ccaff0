//! Mergeable Heap Data Structures for Rust
//!
//! This crate provides priority queues whose defining operation is the
//! destructive union (meld) of two queues in better-than-linear time.
//!
//! # Features
//!
//! - **Leftist Heap**: a single binary tree; O(log n) insert, delete_min and
//!   merge by walking the right spines
//! - **Binomial Queue**: a forest of binomial trees mirroring the binary digits
//!   of the size; O(log n) insert, delete_min and merge by carry propagation
//!
//! Both implement [`MergeableHeap`]. Elements are ordered by their own [`Ord`]
//! implementation; `find_min` and `delete_min` report [`HeapError::Underflow`]
//! on an empty heap.
//!
//! # Example
//!
//! ```rust
//! use rust_mergeable_heaps::binomial::BinomialQueue;
//! use rust_mergeable_heaps::{HeapError, MergeableHeap};
//!
//! let mut odds = BinomialQueue::new();
//! let mut evens = BinomialQueue::new();
//! let mut i = 37;
//! while i != 0 {
//!     if i % 2 == 0 {
//!         evens.insert(i);
//!     } else {
//!         odds.insert(i);
//!     }
//!     i = (i + 37) % 100;
//! }
//!
//! odds.merge(&mut evens);
//! assert!(evens.is_empty());
//! for expected in 1..100 {
//!     assert_eq!(odds.delete_min(), Ok(expected));
//! }
//! assert_eq!(odds.delete_min(), Err(HeapError::Underflow));
//! ```

pub mod binomial;
pub mod leftist;
pub mod rank;
pub mod sorted;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{HeapError, MergeableHeap};
