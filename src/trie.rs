//! A prefix tree keyed by symbol sequences.
//!
//! Each node maps symbols to children and may be *terminal*, meaning a stored key ends there.
//! A terminal node is the one holding a value. The root stands for the empty sequence. Nodes are
//! created lazily along an inserted key's path, and removing a key prunes any trailing nodes
//! that no longer lead to a stored key. Every node besides the root therefore lies on the
//! path of some stored key.
//!
//! Children are kept in a `BTreeMap`, so enumeration is in ascending symbol order.
//!
//! Alphabets are enforced: with anything but [`Unbounded`], every operation checks all of the
//! key's symbols up front and fails with [`Error::InvalidSymbol`] before touching the trie.
//!
//! # Examples
//!
//! ```
//! use grove::{alphabet::Lowercase, trie::Trie, Error};
//!
//! let mut trie = Trie::with_alphabet(Lowercase);
//! for word in ["cat", "car", "dog"] {
//!     trie.insert(word, ()).unwrap();
//! }
//!
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("ca"));
//! assert_eq!(trie.starts_with("ca"), Ok(true));
//! assert_eq!(trie.starts_with("do"), Ok(true));
//! assert_eq!(trie.insert("Cat", ()), Err(Error::InvalidSymbol { position: 0 }));
//!
//! let words: Vec<String> = trie.keys().map(|key| key.into_iter().collect()).collect();
//! assert_eq!(words, ["car", "cat", "dog"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::mem;

use log::trace;

use crate::alphabet::{Alphabet, Symbols, Unbounded};
use crate::error::{Error, Result};

/// A prefix tree from sequences of `S` to values `V`, accepting symbols in `A`.
pub struct Trie<S, V = (), A = Unbounded> {
    root: Node<S, V>,
    len: usize,
    alphabet: A,
}

impl<S: Ord, V> Trie<S, V> {
    /// Creates an empty trie that accepts any symbol.
    pub fn new() -> Self {
        Self::with_alphabet(Unbounded)
    }
}

impl<S: Ord, V> Default for Trie<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V, A> Trie<S, V, A> {
    /// Creates an empty trie that only accepts symbols in `alphabet`.
    pub fn with_alphabet(alphabet: A) -> Self {
        Self {
            root: Node::default(),
            len: 0,
            alphabet,
        }
    }

    /// The number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes, root included. A trie holding nothing has exactly one.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Removes every key, leaving only the root.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }
}

impl<S: Ord, V, A: Alphabet<S>> Trie<S, V, A> {
    /// Stores `key` with `value`, creating any missing nodes along its path. If the key was
    /// already stored its value is replaced and the old one returned.
    ///
    /// Fails with [`Error::InvalidSymbol`] if the key leaves the alphabet. Nothing is created
    /// in that case.
    pub fn insert<K>(&mut self, key: &K, value: V) -> Result<Option<V>>
    where
        K: Symbols<S> + ?Sized,
    {
        let symbols = self.spell(key)?;
        let mut node = &mut self.root;
        for symbol in symbols {
            node = node.children.entry(symbol).or_default();
        }

        let old = node.value.replace(value);
        if old.is_none() {
            self.len += 1;
        }
        Ok(old)
    }

    /// Finds the value stored at exactly `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] if `key` isn't stored, including when it is only a
    /// prefix of stored keys, and with [`Error::InvalidSymbol`] if it leaves the alphabet.
    pub fn search<K>(&self, key: &K) -> Result<&V>
    where
        K: Symbols<S> + ?Sized,
    {
        let symbols = self.spell(key)?;
        self.find(&symbols)
            .and_then(|node| node.value.as_ref())
            .ok_or(Error::KeyNotFound)
    }

    /// Like [`Trie::search`], but any failure is `None`.
    pub fn get<K>(&self, key: &K) -> Option<&V>
    where
        K: Symbols<S> + ?Sized,
    {
        self.search(key).ok()
    }

    /// Whether exactly `key` is stored.
    pub fn contains<K>(&self, key: &K) -> bool
    where
        K: Symbols<S> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Whether any stored key begins with `prefix`, that is, whether the node `prefix` spells
    /// exists and lies on the path of some stored key.
    ///
    /// The root always exists, so the empty prefix is the one case where "the node exists" and
    /// "some key passes through it" differ. Here it follows the second: `starts_with("")` is
    /// `true` only for a non-empty trie.
    ///
    /// Fails with [`Error::InvalidSymbol`] if the prefix leaves the alphabet.
    pub fn starts_with<K>(&self, prefix: &K) -> Result<bool>
    where
        K: Symbols<S> + ?Sized,
    {
        let symbols = self.spell(prefix)?;
        Ok(self.find(&symbols).map_or(false, Node::is_live))
    }

    /// Removes `key` and returns its value, pruning nodes that were only there for it.
    ///
    /// Fails with [`Error::KeyNotFound`] if `key` isn't stored and with
    /// [`Error::InvalidSymbol`] if it leaves the alphabet. The trie is unchanged either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("test", 1).unwrap();
    /// trie.insert("testing", 2).unwrap();
    ///
    /// assert_eq!(trie.remove("test"), Ok(1));
    /// assert_eq!(trie.get("testing"), Some(&2));
    ///
    /// assert_eq!(trie.remove("testing"), Ok(2));
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn remove<K>(&mut self, key: &K) -> Result<V>
    where
        K: Symbols<S> + ?Sized,
    {
        let symbols = self.spell(key)?;
        let value = self.root.remove(&symbols).ok_or(Error::KeyNotFound)?;
        self.len -= 1;
        Ok(value)
    }

    /// Enumerates the stored keys beneath `prefix` (including `prefix` itself if stored), in
    /// ascending order.
    ///
    /// Fails with [`Error::InvalidSymbol`] if the prefix leaves the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["car", "cat", "cart", "dog"] {
    ///     trie.insert(word, ()).unwrap();
    /// }
    ///
    /// let completions: Vec<String> = trie
    ///     .keys_with_prefix("ca")
    ///     .unwrap()
    ///     .map(|(key, _)| key.into_iter().collect())
    ///     .collect();
    /// assert_eq!(completions, ["car", "cart", "cat"]);
    /// ```
    pub fn keys_with_prefix<K>(&self, prefix: &K) -> Result<Iter<'_, S, V>>
    where
        K: Symbols<S> + ?Sized,
        S: Clone,
    {
        let symbols = self.spell(prefix)?;
        let stack = match self.find(&symbols) {
            Some(node) => vec![(symbols.len(), None, node)],
            None => Vec::new(),
        };
        Ok(Iter {
            stack,
            path: symbols,
        })
    }

    fn spell<K>(&self, key: &K) -> Result<Vec<S>>
    where
        K: Symbols<S> + ?Sized,
    {
        key.symbols()
            .enumerate()
            .map(|(position, symbol)| {
                if self.alphabet.contains(&symbol) {
                    Ok(symbol)
                } else {
                    Err(Error::InvalidSymbol { position })
                }
            })
            .collect()
    }

    fn find(&self, symbols: &[S]) -> Option<&Node<S, V>> {
        symbols
            .iter()
            .try_fold(&self.root, |node, symbol| node.children.get(symbol))
    }
}

impl<S: Clone, V, A> Trie<S, V, A> {
    /// Enumerates every stored key with its value, in ascending order.
    pub fn iter(&self) -> Iter<'_, S, V> {
        Iter {
            stack: vec![(0, None, &self.root)],
            path: Vec::new(),
        }
    }

    /// Enumerates every stored key, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Vec<S>> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<S: Clone + fmt::Debug, V: fmt::Debug, A> fmt::Debug for Trie<S, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S: Ord + Clone, V: Clone, A: Clone> Clone for Trie<S, V, A> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            alphabet: self.alphabet.clone(),
        }
    }
}

impl<'a, S: Clone, V, A> IntoIterator for &'a Trie<S, V, A> {
    type Item = (Vec<S>, &'a V);
    type IntoIter = Iter<'a, S, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Node<S, V> {
    children: BTreeMap<S, Node<S, V>>,
    /// `Some` exactly when this node is terminal.
    value: Option<V>,
}

impl<S, V> Default for Node<S, V> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            value: None,
        }
    }
}

impl<S, V> Node<S, V> {
    /// Whether some stored key ends at or passes through this node.
    fn is_live(&self) -> bool {
        self.value.is_some() || !self.children.is_empty()
    }

    fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl<S: Ord, V> Node<S, V> {
    /// Takes the value stored at `symbols` below this node, pruning the trailing nodes that
    /// only led to it.
    fn remove(&mut self, symbols: &[S]) -> Option<V> {
        // Depth of the deepest node on the path that must stay: the root, or one that is
        // terminal or has other children.
        let mut keep = 0;
        let mut node = &*self;
        for (depth, symbol) in symbols.iter().enumerate() {
            if node.value.is_some() || node.children.len() > 1 {
                keep = depth;
            }
            node = node.children.get(symbol)?;
        }
        if node.value.is_none() {
            return None;
        }

        if symbols.is_empty() || !node.children.is_empty() {
            return self.descend_mut(symbols)?.value.take();
        }

        let mut branch = self
            .descend_mut(&symbols[..keep])?
            .children
            .remove(&symbols[keep])?;
        trace!("pruned dead trie branch {} symbols from the key's end", symbols.len() - keep);
        for symbol in &symbols[keep + 1..] {
            branch = branch.children.remove(symbol)?;
        }
        branch.value.take()
    }

    fn descend_mut(&mut self, symbols: &[S]) -> Option<&mut Self> {
        symbols
            .iter()
            .try_fold(self, |node, symbol| node.children.get_mut(symbol))
    }
}

impl<S: Ord + Clone, V: Clone> Clone for Node<S, V> {
    fn clone(&self) -> Self {
        let mut root = Node {
            children: BTreeMap::new(),
            value: self.value.clone(),
        };
        // Each source node paired with its childless copy.
        let mut pending = vec![(self, &mut root)];
        while let Some((source, target)) = pending.pop() {
            target.children = source
                .children
                .iter()
                .map(|(symbol, child)| {
                    let copy = Node {
                        children: BTreeMap::new(),
                        value: child.value.clone(),
                    };
                    (symbol.clone(), copy)
                })
                .collect();
            pending.extend(source.children.values().zip(target.children.values_mut()));
        }
        root
    }
}

impl<S, V> Drop for Node<S, V> {
    fn drop(&mut self) {
        // Detach every level before it drops so a long key doesn't drop recursively.
        let mut doomed = vec![mem::take(&mut self.children)];
        while let Some(children) = doomed.pop() {
            for (_, mut child) in children {
                doomed.push(mem::take(&mut child.children));
            }
        }
    }
}

/// Iterator over a [`Trie`]'s keys and values in ascending order. Created by [`Trie::iter`]
/// and [`Trie::keys_with_prefix`].
pub struct Iter<'a, S, V> {
    /// Nodes still to visit, each with the length of its parent's key and the symbol on the
    /// edge leading to it.
    stack: Vec<(usize, Option<&'a S>, &'a Node<S, V>)>,
    /// The key of the node visited last.
    path: Vec<S>,
}

impl<'a, S: Clone, V> Iterator for Iter<'a, S, V> {
    type Item = (Vec<S>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((parent_len, symbol, node)) = self.stack.pop() {
            self.path.truncate(parent_len);
            self.path.extend(symbol.cloned());

            // Pushed in reverse so the smallest symbol is visited next.
            let len = self.path.len();
            self.stack
                .extend(node.children.iter().rev().map(|(symbol, child)| (len, Some(symbol), child)));

            if let Some(value) = &node.value {
                return Some((self.path.clone(), value));
            }
        }
        None
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::{Op, Word};

    quickcheck::quickcheck! {
        fn matches_btree_map(ops: Vec<Op<Word, u8>>) -> bool {
            let mut trie = Trie::new();
            let mut model = BTreeMap::new();

            for op in ops {
                let agrees = match op {
                    Op::Insert(Word(w), v) => trie.insert(w.as_str(), v) == Ok(model.insert(w, v)),
                    Op::Remove(Word(w)) => trie.remove(w.as_str()).ok() == model.remove(&w),
                    Op::Iter => trie
                        .iter()
                        .map(|(key, v)| (key.into_iter().collect::<String>(), *v))
                        .eq(model.iter().map(|(k, v)| (k.clone(), *v))),
                };
                if !agrees || trie.len() != model.len() {
                    return false;
                }
            }
            true
        }
    }

    quickcheck::quickcheck! {
        fn removing_everything_leaves_root(words: Vec<Word>) -> bool {
            let mut trie = Trie::new();
            for Word(w) in &words {
                trie.insert(w.as_str(), ()).unwrap();
            }
            for Word(w) in &words {
                let _ = trie.remove(w.as_str());
            }
            trie.is_empty() && trie.node_count() == 1
        }
    }
}
