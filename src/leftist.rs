//! Leftist Heap implementation
//!
//! A leftist heap is a single heap-ordered binary tree with:
//! - O(log n) insert, delete_min and merge
//! - O(1) find_min
//!
//! # Algorithm Overview
//!
//! Every node records its **null path length** (npl): the length of the
//! shortest path from the node to an absent child. An absent child has
//! npl 0 and a leaf has npl 1.
//!
//! **Leftist property**: for every node, `npl(left) >= npl(right)`. The right
//! spine is therefore the shortest root-to-leaf path, and a tree with n nodes
//! has a right spine of at most `log₂(n + 1)` nodes.
//!
//! **Key Operations**:
//! - **Merge**: walk down the right spines of both trees, always continuing in
//!   the tree whose root is larger. On the way back up, swap children wherever
//!   the leftist property was broken and refresh the npl.
//! - **Insert**: merge a singleton tree.
//! - **Delete-min**: merge the two subtrees of the root.
//!
//! Only nodes on the merged right spines are touched, so every operation is
//! bounded by the spine lengths.

use crate::rank::{checked_increment, Rank};
use crate::sorted::IntoSorted;
use crate::traits::{HeapError, MergeableHeap};
use log::trace;
use std::fmt;
use std::mem;
use std::ptr;

/// Type alias for an optional owned subtree
type Link<T> = Option<Box<Node<T>>>;

/// Internal node structure for leftist heap
///
/// Nodes are created as singletons on insertion and are re-parented, never
/// copied, by merges.
struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
    /// Null path length: `npl(right) + 1`, or 1 for a node without a right child
    npl: Rank,
}

impl<T> Node<T> {
    fn new(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            left: None,
            right: None,
            npl: 1,
        })
    }
}

/// Leftist Heap
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::leftist::LeftistHeap;
/// use rust_mergeable_heaps::MergeableHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
///
/// let mut other: LeftistHeap<i32> = [4, 2].into_iter().collect();
/// heap.merge(&mut other);
///
/// assert!(other.is_empty());
/// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub struct LeftistHeap<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Drop for LeftistHeap<T> {
    fn drop(&mut self) {
        Self::free_tree(self.root.take());
    }
}

impl<T: Ord> MergeableHeap<T> for LeftistHeap<T> {
    fn new() -> Self {
        Self { root: None, len: 0 }
    }

    fn singleton(item: T) -> Self {
        Self {
            root: Some(Node::new(item)),
            len: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, item: T) {
        self.root = Self::merge_roots(Some(Node::new(item)), self.root.take());
        self.len += 1;
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.root
            .as_ref()
            .map(|node| &node.element)
            .ok_or(HeapError::Underflow)
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Both subtrees of the root are valid leftist heaps already, so the new
    /// root is simply their merge.
    fn delete_min(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::Underflow)?;
        let Node {
            element,
            left,
            right,
            ..
        } = *root;

        self.root = Self::merge_roots(left, right);
        self.len -= 1;
        Ok(element)
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The nodes of `other` are relinked into this tree; `other` is left
    /// empty.
    fn merge(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }

        if !self.is_empty() && !other.is_empty() {
            trace!(
                "merging leftist heaps of {} and {} elements",
                self.len,
                other.len
            );
        }

        self.root = Self::merge_roots(self.root.take(), other.root.take());
        self.len += mem::take(&mut other.len);
    }

    fn clear(&mut self) {
        Self::free_tree(self.root.take());
        self.len = 0;
    }
}

impl<T: Ord> LeftistHeap<T> {
    /// Consumes the heap and returns its elements in non-decreasing order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Merges two (possibly absent) trees
    ///
    /// Deals with the empty cases and orders the roots so that the first
    /// argument of [`merge_nonempty`](Self::merge_nonempty) holds the smaller
    /// element.
    fn merge_roots(h1: Link<T>, h2: Link<T>) -> Link<T> {
        match (h1, h2) {
            (None, h) | (h, None) => h,
            (Some(h1), Some(h2)) => Some(if h1.element < h2.element {
                Self::merge_nonempty(h1, h2)
            } else {
                Self::merge_nonempty(h2, h1)
            }),
        }
    }

    /// Merges `h2` into `h1`, whose root holds the smaller element
    ///
    /// **Algorithm**:
    /// 1. If `h1` has no left child it is a single node (the leftist property
    ///    forbids a lone right child), so `h2` becomes its left child. The npl
    ///    of `h1` stays 1.
    /// 2. Otherwise merge `h2` with the right subtree of `h1`, swap children
    ///    if the new right subtree has the larger npl, and set
    ///    `npl = npl(right) + 1`.
    ///
    /// Recursion only follows right spines, so the depth is O(log n).
    fn merge_nonempty(mut h1: Box<Node<T>>, h2: Box<Node<T>>) -> Box<Node<T>> {
        if h1.left.is_none() {
            h1.left = Some(h2);
        } else {
            h1.right = Self::merge_roots(h1.right.take(), Some(h2));
            if Self::npl(&h1.left) < Self::npl(&h1.right) {
                mem::swap(&mut h1.left, &mut h1.right);
            }
            h1.npl = checked_increment(Self::npl(&h1.right));
        }

        debug_assert!(Self::npl(&h1.left) >= Self::npl(&h1.right));
        h1
    }

    fn npl(link: &Link<T>) -> Rank {
        link.as_ref().map_or(0, |node| node.npl)
    }
}

impl<T> LeftistHeap<T> {
    /// Frees a tree without recursion
    ///
    /// The left spine of a leftist tree can be O(n) long (descending inserts
    /// build exactly that), which would exhaust the stack under the default
    /// recursive drop of `Box`.
    fn free_tree(root: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Default for LeftistHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LeftistHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("min", &self.root.as_ref().map(|node| &node.element))
            .finish()
    }
}

impl<T: Ord> Extend<T> for LeftistHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for LeftistHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> IntoIterator for LeftistHeap<T> {
    type Item = T;
    type IntoIter = IntoSorted<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSorted::new(self)
    }
}
