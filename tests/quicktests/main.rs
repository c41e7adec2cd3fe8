#[macro_use]
extern crate quickcheck_macros;

mod bst;
mod heap;
mod trie;

use quickcheck::{Arbitrary, Gen};

/// Mutations to apply to a keyed structure and its model side by side.
#[derive(Clone, Debug)]
pub enum Op<K, V> {
    Insert(K, V),
    Remove(K),
}

impl<K: Arbitrary, V: Arbitrary> Arbitrary for Op<K, V> {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g), V::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
