use grove::bst::Tree;
use grove::Error;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.replace(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                let _ = bst.remove(k);
                map.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.in_order().eq(map.iter()) && tree.len() == map.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, ());
    }

    let keys: Vec<_> = tree.keys().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.replace(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.replace(*x, *x);
    }
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));
    still_present.sort_unstable();
    still_present.dedup();

    deletes.iter().all(|x| tree.get(x).is_none())
        && tree.keys().copied().eq(still_present.iter().copied())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<u8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = Tree::new();
    for x in &xs {
        tree.replace(*x, 0);
    }
    let before: Vec<_> = tree.pre_order().map(|(k, v)| (*k, *v)).collect();

    let key = xs[dup % xs.len()];
    let rejected = tree.insert(key, 1) == Err(Error::DuplicateKey);
    let after: Vec<_> = tree.pre_order().map(|(k, v)| (*k, *v)).collect();

    rejected && before == after
}
