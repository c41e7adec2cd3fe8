//! An array-backed priority heap.
//!
//! Elements live in a dense `Vec` read as a complete tree: for the default binary arity the
//! children of index `i` are `2i + 1` and `2i + 2`. The element at the root is always the
//! "top", meaning the element no other compares `Less` than under the heap's
//! [`Comparator`]. With [`Natural`] ordering that is a min-heap, and with [`Reversed`] it is a
//! max-heap.
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_top` | O(log n)   |
//! | `peek_top`    | O(1)       |
//! | `from_iter`   | O(n)       |
//!
//! # Examples
//!
//! ```
//! use grove::heap::Heap;
//!
//! let mut heap = Heap::new();
//! for x in [5, 3, 8, 1] {
//!     heap.insert(x);
//! }
//!
//! assert_eq!(heap.peek_top(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
//!
//! let mut heap = Heap::new_max();
//! heap.extend([5, 3, 8, 1]);
//! assert_eq!(heap.extract_top(), Ok(8));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::slice;

use log::trace;

use crate::compare::{Comparator, Natural, Reversed};
use crate::error::{Error, Result};

const DEFAULT_ARITY: usize = 2;

/// A d-ary heap ordered by `C`. See the [module docs](self) for an overview.
#[derive(Clone)]
pub struct Heap<T, C = Natural> {
    data: Vec<T>,
    comparator: C,
    arity: usize,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Heap<T, Reversed> {
    /// Creates an empty max-heap.
    pub fn new_max() -> Self {
        Self::with_comparator(Reversed)
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates an empty binary heap ordered by `comparator`. The top of the heap is whichever
    /// element compares `Less` than the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::heap::Heap;
    ///
    /// // Longest word first.
    /// let mut heap = Heap::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
    /// heap.insert("fig");
    /// heap.insert("banana");
    /// heap.insert("kiwi");
    ///
    /// assert_eq!(heap.extract_top(), Ok("banana"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
            arity: DEFAULT_ARITY,
        }
    }

    /// Builds a heap out of an arbitrary `Vec` in O(n) by sifting down every internal node,
    /// deepest first.
    pub fn from_vec_with(data: Vec<T>, comparator: C) -> Self {
        let mut heap = Self {
            data,
            comparator,
            arity: DEFAULT_ARITY,
        };
        heap.rebuild();
        heap
    }

    /// Changes the number of children per node. Any existing elements are re-heapified for the
    /// new shape.
    ///
    /// Fails with [`Error::InvalidArity`] for arities below 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{heap::Heap, Error};
    ///
    /// let mut heap = Heap::new().with_arity(4).unwrap();
    /// heap.extend([9, 2, 7, 4, 1]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 4, 7, 9]);
    ///
    /// assert_eq!(Heap::<i32>::new().with_arity(1).err(), Some(Error::InvalidArity(1)));
    /// ```
    pub fn with_arity(mut self, arity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(Error::InvalidArity(arity));
        }
        self.arity = arity;
        self.rebuild();
        Ok(self)
    }

    /// The number of children each node may have.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Adds `element`, sifting it up until its parent no longer compares worse.
    pub fn insert(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the top element without removing it.
    ///
    /// Fails with [`Error::EmptyStructure`] if the heap is empty.
    pub fn peek_top(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyStructure)
    }

    /// Removes and returns the top element. The last element is moved to the root and sifted
    /// down.
    ///
    /// Fails with [`Error::EmptyStructure`] if the heap is empty.
    pub fn extract_top(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in backing-array order. Only the first element is
    /// guaranteed to be the top. The rest follow the heap layout, not sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Consumes the heap, returning its elements ordered top first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(top) = self.extract_top() {
            sorted.push(top);
        }
        sorted
    }

    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    fn first_child(&self, index: usize) -> usize {
        self.arity * index + 1
    }

    /// `true` when the element at `a` should sit above the element at `b`.
    fn is_better(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        let start = index;
        while index > 0 {
            let parent = self.parent(index);
            if !self.is_better(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
        trace!("sift_up moved element from {} to {}", start, index);
    }

    fn sift_down(&mut self, mut index: usize) {
        let start = index;
        let len = self.data.len();
        loop {
            let first = self.first_child(index);
            if first >= len {
                break;
            }

            // Strictly better only, so ties keep the lowest (left-most) child.
            let last = (first + self.arity).min(len);
            let mut best = first;
            for child in first + 1..last {
                if self.is_better(child, best) {
                    best = child;
                }
            }

            if !self.is_better(best, index) {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
        trace!("sift_down moved element from {} to {}", start, index);
    }

    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        for index in (0..=self.parent(len - 1)).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("arity", &self.arity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), Natural)
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Heap`] in backing-array order. Created by [`Heap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
