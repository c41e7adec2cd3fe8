//! Generic containers with real invariants to keep: a priority [`heap`], an unbalanced binary
//! search tree ([`bst`]) and a prefix tree ([`trie`]).
//!
//! ## Heap
//!
//! A heap is a complete tree stored densely in an array where no child is ordered before its
//! parent. The best element is always at the root, so peeking is `O(1)`, while inserting and
//! extracting restore the invariant by sifting a single element up or down in `O(lg N)`.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! Searching takes `O(height)` (the longest path from the root to a leaf). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree. The tree here never rebalances, so inserting sorted keys makes `height == N`.
//!
//! ## Trie
//!
//! A trie stores sequences of symbols by sharing common prefixes: each edge is one symbol and
//! keys end at nodes marked terminal. Lookups cost `O(L)` in the length of the key regardless
//! of how many keys are stored, and asking whether any key starts with a prefix is just as
//! cheap.
//!
//! ## Ordering and alphabets
//!
//! Heaps and trees take a [`Comparator`](compare::Comparator) at construction: natural order by
//! default, or [`Reversed`](compare::Reversed), or any closure. Tries take an
//! [`Alphabet`](alphabet::Alphabet) that decides which symbols keys may contain.
//!
//! None of the structures are synchronized. Iterators borrow their structure, so mutation
//! during a traversal is a compile error.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod alphabet;
pub mod bst;
pub mod compare;
pub mod error;
pub mod heap;
pub mod trie;

pub use error::{Error, Result};
