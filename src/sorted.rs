//! Draining iterator shared by every heap in the crate
//!
//! [`IntoSorted`] owns a heap and yields its elements by repeated
//! `delete_min`, so the sequence is non-decreasing.

use crate::traits::MergeableHeap;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An owning iterator that drains a heap in non-decreasing order
///
/// Created by the `IntoIterator` implementations of
/// [`LeftistHeap`](crate::leftist::LeftistHeap) and
/// [`BinomialQueue`](crate::binomial::BinomialQueue).
#[derive(Debug)]
pub struct IntoSorted<T, H> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: MergeableHeap<T>> IntoSorted<T, H> {
    pub(crate) fn new(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }
}

impl<T: Ord, H: MergeableHeap<T>> Iterator for IntoSorted<T, H> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord, H: MergeableHeap<T>> ExactSizeIterator for IntoSorted<T, H> {}

impl<T: Ord, H: MergeableHeap<T>> FusedIterator for IntoSorted<T, H> {}
