//! Binomial Queue implementation
//!
//! A binomial queue is a forest of binomial trees with:
//! - O(log n) insert, delete_min and merge
//! - O(log n) find_min (scan of at most log n roots)
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by attaching one B_{k-1} as the new first child of another
//! - Bₖ has exactly 2ᵏ nodes; the children of its root are B_{k-1}, ..., B₀,
//!   in that order along the sibling chain
//!
//! **Forest**: slot `i` of the forest holds either nothing or a Bᵢ. A tree
//! occupies slot `i` exactly when bit `i` of the element count is set, so the
//! forest is the binary representation of the size.
//!
//! **Key Operations**:
//! - **Merge**: ripple-carry addition of the two forests. At every order up
//!   to three trees meet (ours, theirs, and the carry); see [`add_with_carry`].
//! - **Insert**: merge a single-node queue.
//! - **Delete-min**: remove the tree with the smallest root, turn its
//!   children into a forest of their own and merge that forest back.

use crate::sorted::IntoSorted;
use crate::traits::{HeapError, MergeableHeap};
use log::trace;
use std::fmt;
use std::ptr;

/// Type alias for an optional binomial tree
type Tree<T> = Option<Box<Node<T>>>;

/// Internal node structure for binomial queue
///
/// The order of a tree is implied by the forest slot holding its root (or,
/// for a child, by its position in the parent's sibling chain), so nodes do
/// not store it.
struct Node<T> {
    element: T,
    /// First (highest-order) child
    child: Tree<T>,
    /// Next sibling in the parent's child list (one order lower)
    sibling: Tree<T>,
}

impl<T> Node<T> {
    fn new(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            child: None,
            sibling: None,
        })
    }
}

/// Binomial Queue
///
/// Trees are O(log n) deep and sibling chains O(log n) long, so the default
/// recursive drop of `Box` is used.
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::binomial::BinomialQueue;
/// use rust_mergeable_heaps::MergeableHeap;
///
/// let mut queue = BinomialQueue::new();
/// let mut other = BinomialQueue::new();
/// for i in 1..=6 {
///     if i % 2 == 0 {
///         other.insert(i);
///     } else {
///         queue.insert(i);
///     }
/// }
///
/// queue.merge(&mut other);
/// assert!(other.is_empty());
/// assert_eq!(queue.delete_min(), Ok(1));
/// assert_eq!(queue.into_sorted_vec(), vec![2, 3, 4, 5, 6]);
/// ```
pub struct BinomialQueue<T> {
    /// Slot `i` holds a tree of order `i`, or nothing. Never shrinks.
    trees: Vec<Tree<T>>,
    /// Number of elements in the queue
    len: usize,
}

impl<T: Ord> MergeableHeap<T> for BinomialQueue<T> {
    fn new() -> Self {
        Self {
            trees: Vec::new(),
            len: 0,
        }
    }

    fn singleton(item: T) -> Self {
        Self {
            trees: vec![Some(Node::new(item))],
            len: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts an element by merging a single-node queue
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized over a run of
    /// inserts (the carry chain behaves like incrementing a binary counter).
    fn insert(&mut self, item: T) {
        self.merge(&mut Self::singleton(item));
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.find_min_root()
            .map(|(_, element)| element)
            .ok_or(HeapError::Underflow)
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Find the slot `k` whose root is smallest and take its tree out.
    /// 2. The root's children are trees of order k-1, ..., 0 along the
    ///    sibling chain. Detach them one by one into a fresh forest, child of
    ///    order j going to slot j. That forest holds 2ᵏ - 1 elements.
    /// 3. Shrink the size by 2ᵏ and merge the fresh forest back in.
    fn delete_min(&mut self) -> Result<T, HeapError> {
        let (min_index, root) = self.take_min_tree().ok_or(HeapError::Underflow)?;
        let Node { element, child, .. } = *root;

        let mut deleted = BinomialQueue {
            trees: Vec::with_capacity(min_index),
            len: (1 << min_index) - 1,
        };
        deleted.trees.resize_with(min_index, || None);

        let mut order = min_index;
        let mut next = child;
        while let Some(mut tree) = next {
            next = tree.sibling.take();
            order -= 1;
            deleted.trees[order] = Some(tree);
        }
        debug_assert_eq!(order, 0, "root of order {min_index} had too few children");

        self.len -= deleted.len + 1;
        self.merge(&mut deleted);
        Ok(element)
    }

    /// Merges another queue into this queue
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: binary addition of the two sizes, one order at a time
    /// 1. Grow the forest if the combined size does not fit. The new length is
    ///    one more than the longer of the two forests, which leaves room for a
    ///    final carry.
    /// 2. For every order `i` with `2ⁱ <= combined size`, resolve our tree,
    ///    their tree and the incoming carry with [`add_with_carry`].
    /// 3. Empty the slots of `other`; every node now belongs to `self`.
    fn merge(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }

        let new_len = self.len + other.len;
        if new_len > self.capacity() {
            let new_trees = self.trees.len().max(other.trees.len()) + 1;
            trace!(
                "growing binomial forest from {} to {} slots for {} elements",
                self.trees.len(),
                new_trees,
                new_len
            );
            self.trees.resize_with(new_trees, || None);
        }

        let mut carry: Tree<T> = None;
        for (order, slot) in self.trees.iter_mut().enumerate() {
            if new_len.checked_shr(order as u32).unwrap_or(0) == 0 {
                break;
            }
            let theirs = other.trees.get_mut(order).and_then(Option::take);
            let (sum, next_carry) = add_with_carry(slot.take(), theirs, carry);
            *slot = sum;
            carry = next_carry;
        }
        debug_assert!(carry.is_none(), "carry left over after merge");

        other.clear();
        self.len = new_len;

        #[cfg(debug_assertions)]
        self.debug_check_forest();
    }

    /// Drops every tree; the forest keeps its length
    fn clear(&mut self) {
        self.trees.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }
}

impl<T: Ord> BinomialQueue<T> {
    /// Consumes the queue and returns its elements in non-decreasing order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Largest size the current forest can represent: 2^slots - 1
    fn capacity(&self) -> usize {
        1usize
            .checked_shl(self.trees.len() as u32)
            .map_or(usize::MAX, |span| span - 1)
    }

    /// Occupied slot with the smallest root, together with that root's element
    ///
    /// Skips to the first occupied slot, then scans the rest. Ties keep the
    /// lowest index.
    fn find_min_root(&self) -> Option<(usize, &T)> {
        let mut roots = self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|root| (index, &root.element)));

        let (mut min_index, mut min) = roots.next()?;
        for (index, element) in roots {
            if element < min {
                min_index = index;
                min = element;
            }
        }
        Some((min_index, min))
    }

    /// Removes the tree with the smallest root from the forest
    fn take_min_tree(&mut self) -> Option<(usize, Box<Node<T>>)> {
        let (min_index, _) = self.find_min_root()?;
        self.trees[min_index].take().map(|root| (min_index, root))
    }

    /// Checks that occupied slots match the bits of `len`
    #[cfg(debug_assertions)]
    fn debug_check_forest(&self) {
        let mut represented = 0usize;
        for (order, slot) in self.trees.iter().enumerate() {
            if slot.is_some() {
                represented += 1 << order;
            }
        }
        assert_eq!(
            represented, self.len,
            "forest represents {} elements but len is {}",
            represented, self.len
        );
    }
}

/// Resolves one order of the forest addition
///
/// Takes our tree, their tree and the incoming carry (all of the same order,
/// each possibly absent) and returns the tree that stays at this order and the
/// carry into the next one:
///
/// | ours | theirs | carry | stays        | next carry            |
/// |------|--------|-------|--------------|-----------------------|
/// | -    | -      | -     | -            | -                     |
/// | a    | -      | -     | a            | -                     |
/// | -    | b      | -     | b            | -                     |
/// | -    | -      | c     | c            | -                     |
/// | a    | b      | -     | -            | combine(a, b)         |
/// | a    | -      | c     | -            | combine(a, c)         |
/// | -    | b      | c     | -            | combine(b, c)         |
/// | a    | b      | c     | c            | combine(a, b)         |
fn add_with_carry<T: Ord>(ours: Tree<T>, theirs: Tree<T>, carry: Tree<T>) -> (Tree<T>, Tree<T>) {
    match (ours, theirs, carry) {
        (None, None, None) => (None, None),
        (Some(t), None, None) | (None, Some(t), None) | (None, None, Some(t)) => (Some(t), None),
        (Some(t1), Some(t2), None) | (Some(t1), None, Some(t2)) | (None, Some(t1), Some(t2)) => {
            (None, Some(combine_trees(t1, t2)))
        }
        (Some(t1), Some(t2), Some(c)) => (Some(c), Some(combine_trees(t1, t2))),
    }
}

/// Links two trees of order k into one tree of order k+1
///
/// **Time Complexity**: O(1)
///
/// The root with the larger element becomes the first child of the other.
/// Which of two equal roots becomes the parent is unspecified.
fn combine_trees<T: Ord>(t1: Box<Node<T>>, t2: Box<Node<T>>) -> Box<Node<T>> {
    let (mut parent, mut child) = if t1.element > t2.element {
        (t2, t1)
    } else {
        (t1, t2)
    };
    child.sibling = parent.child.take();
    parent.child = Some(child);
    parent
}

impl<T: Ord> Default for BinomialQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinomialQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders: Vec<usize> = self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.as_ref().map(|_| order))
            .collect();
        f.debug_struct("BinomialQueue")
            .field("len", &self.len)
            .field("min", &self.find_min().ok())
            .field("orders", &orders)
            .finish()
    }
}

impl<T: Ord> Extend<T> for BinomialQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinomialQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord> IntoIterator for BinomialQueue<T> {
    type Item = T;
    type IntoIter = IntoSorted<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSorted::new(self)
    }
}
