//! An unbalanced Binary Search Tree.
//!
//! Nodes exclusively own their children through `Option<Box<Node>>` links, so there are no
//! parent pointers and no cycles. Nothing rebalances the tree: inserting keys in sorted order
//! produces a chain whose height equals its length, and every operation is `O(height)`.
//!
//! Duplicate keys are never stored. [`Tree::insert`] rejects an existing key with
//! [`Error::DuplicateKey`], while [`Tree::replace`] overwrites its value instead.
//!
//! # Examples
//!
//! ```
//! use grove::{bst::Tree, Error};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key, key * 10).unwrap();
//! }
//!
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! assert_eq!(tree.search(&4), Ok(&40));
//! assert_eq!(tree.insert(4, 0), Err(Error::DuplicateKey));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.remove(&5), Ok(50));
//! assert_eq!(tree.search(&5), Err(Error::KeyNotFound));
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 3, 4, 8]);
//! ```
//!
//! Iterators borrow the tree, so it can't be modified while a traversal is in progress.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::compare::{Comparator, Natural};
use crate::error::{Error, Result};

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping keys to values, ordered by `C`.
pub struct Tree<K, V = (), C = Natural> {
    root: Link<K, V>,
    len: usize,
    comparator: C,
}

impl<K: Ord, V> Tree<K, V> {
    /// Generates a new, empty `Tree` using the keys' natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> fmt::Debug for Tree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order()).finish()
    }
}

impl<K, V, C> Tree<K, V, C> {
    /// Generates a new, empty `Tree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{bst::Tree, compare::Reversed};
    ///
    /// let mut tree = Tree::with_comparator(Reversed);
    /// tree.insert(1, "one").unwrap();
    /// tree.insert(2, "two").unwrap();
    ///
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root to
    /// a leaf. An empty tree has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=5 {
    ///     tree.insert(key, ()).unwrap();
    /// }
    ///
    /// // Sorted inserts degrade into a chain.
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The key and value at the root.
    ///
    /// Fails with [`Error::EmptyStructure`] on an empty tree.
    pub fn root(&self) -> Result<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::entry)
            .ok_or(Error::EmptyStructure)
    }

    /// The smallest key and its value.
    ///
    /// Fails with [`Error::EmptyStructure`] on an empty tree.
    pub fn min(&self) -> Result<(&K, &V)> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyStructure)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(node.entry())
    }

    /// The largest key and its value.
    ///
    /// Fails with [`Error::EmptyStructure`] on an empty tree.
    pub fn max(&self) -> Result<(&K, &V)> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyStructure)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(node.entry())
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        // Unlinked one node at a time so a degenerate chain doesn't drop recursively.
        let mut doomed: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = doomed.pop() {
            doomed.extend(node.left.take());
            doomed.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Visits left subtree, node, right subtree. This yields keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// Visits node, left subtree, right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Visits left subtree, right subtree, node.
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
            remaining: self.len,
        }
    }

    /// Same as [`Tree::in_order`].
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order()
    }

    /// The keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.in_order().map(|(key, _)| key)
    }
}

impl<K, V, C: Comparator<K>> Tree<K, V, C> {
    /// Inserts `key` with `value` as a new leaf.
    ///
    /// Fails with [`Error::DuplicateKey`] if the key is already present, in which case the
    /// tree is untouched. Use [`Tree::replace`] to overwrite instead.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        Node::insert(&mut self.root, key, value, &self.comparator)?;
        self.len += 1;
        Ok(())
    }

    /// Inserts the given value stored at the given key. Inserting a new value for an existing
    /// key overwrites its value and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.replace(1, 2), None);
    /// assert_eq!(tree.replace(1, 3), Some(2));
    /// assert_eq!(tree.get(&1), Some(&3));
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        let old = Node::replace(&mut self.root, key, value, &self.comparator);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Finds the value associated with `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] if no node has the key.
    pub fn search(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Mutable access to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns its value.
    ///
    /// A node with two children takes the key and value of its in-order successor (the
    /// leftmost node of its right subtree), and the successor is unlinked in its place.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent, in which case the tree is
    /// untouched.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let (_, value) =
            Node::remove(&mut self.root, key, &self.comparator).ok_or(Error::KeyNotFound)?;
        self.len -= 1;
        Ok(value)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for Tree<K, V, C> {
    fn clone(&self) -> Self {
        let mut root = None;
        // Each source node paired with the empty link its copy goes into.
        let mut pending = vec![(self.root.as_deref(), &mut root)];
        while let Some((source, target)) = pending.pop() {
            if let Some(source) = source {
                let copy = target.insert(Node::new_boxed(source.key.clone(), source.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                pending.push((source.left.as_deref(), left));
                pending.push((source.right.as_deref(), right));
            }
        }

        Self {
            root,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, V, C> Drop for Tree<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, K, V, C> IntoIterator for &'a Tree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

fn height<K, V>(link: &Link<K, V>) -> usize {
    let mut height = 0;
    let mut stack: Vec<_> = link.as_deref().map(|root| (root, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
    }
    height
}

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Walks down from `link` to the link holding `key`, or to the empty link where it
    /// belongs.
    fn find_link<'l, C: Comparator<K>>(
        mut link: &'l mut Link<K, V>,
        key: &K,
        comparator: &C,
    ) -> &'l mut Link<K, V> {
        loop {
            let ordering = link
                .as_deref()
                .map(|node| comparator.compare(key, &node.key));
            let node = match ordering {
                None | Some(Ordering::Equal) => return link,
                Some(_) => link.as_mut().expect("Compared against a node => link is occupied"),
            };
            link = match ordering {
                Some(Ordering::Less) => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    fn insert<C: Comparator<K>>(
        link: &mut Link<K, V>,
        key: K,
        value: V,
        comparator: &C,
    ) -> Result<()> {
        let link = Self::find_link(link, &key, comparator);
        if link.is_some() {
            return Err(Error::DuplicateKey);
        }
        *link = Some(Self::new_boxed(key, value));
        Ok(())
    }

    fn replace<C: Comparator<K>>(
        link: &mut Link<K, V>,
        key: K,
        value: V,
        comparator: &C,
    ) -> Option<V> {
        let link = Self::find_link(link, &key, comparator);
        match link {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *link = Some(Self::new_boxed(key, value));
                None
            }
        }
    }

    /// Unlinks the node holding `key` from the subtree at `link`, returning its entry.
    fn remove<C: Comparator<K>>(link: &mut Link<K, V>, key: &K, comparator: &C) -> Option<(K, V)> {
        let link = Self::find_link(link, key, comparator);
        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_leftmost(&mut node.right)
                .expect("Two children => non-empty right subtree");
            trace!("replacing removed node with its in-order successor");
            let Node {
                key: successor_key,
                value: successor_value,
                ..
            } = *successor;
            let key = mem::replace(&mut node.key, successor_key);
            let value = mem::replace(&mut node.value, successor_value);
            return Some((key, value));
        }

        let mut removed = link.take()?;
        // At most one of these is occupied. Splice it into the removed node's slot.
        *link = removed.left.take().or_else(|| removed.right.take());
        Some((removed.key, removed.value))
    }

    /// Unlinks the leftmost node of the subtree at `link`, splicing its right child into its
    /// place.
    fn take_leftmost(mut link: &mut Link<K, V>) -> Option<Box<Self>> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut().expect("Has a left child => link is occupied").left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

/// In-order traversal of a [`Tree`]. Created by [`Tree::in_order`].
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for InOrder<'_, K, V> {}

/// Pre-order traversal of a [`Tree`]. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PreOrder<'_, K, V> {}

/// Post-order traversal of a [`Tree`]. Created by [`Tree::post_order`].
pub struct PostOrder<'a, K, V> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node<K, V>, bool)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(node.entry());
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PostOrder<'_, K, V> {}
