use grove::alphabet::Lowercase;
use grove::trie::Trie;
use grove::Error;

use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use crate::Op;

/// A lowercase word of at most eight letters from `a..=e`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Word(String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 9;
        Word(
            (0..len)
                .map(|_| *g.choose(&['a', 'b', 'c', 'd', 'e']).unwrap())
                .collect(),
        )
    }
}

fn trie_of(words: &[Word]) -> Trie<char, (), Lowercase> {
    let mut trie = Trie::with_alphabet(Lowercase);
    for Word(w) in words {
        trie.insert(w.as_str(), ()).unwrap();
    }
    trie
}

#[quickcheck]
fn inserted_words_and_prefixes_are_found(words: Vec<Word>) -> bool {
    let trie = trie_of(&words);

    words.iter().all(|Word(w)| {
        trie.contains(w.as_str())
            && (0..=w.len()).all(|end| trie.starts_with(&w[..end]) == Ok(true))
    })
}

#[quickcheck]
fn uninserted_prefixes_are_not_found(words: Vec<Word>) -> bool {
    let trie = trie_of(&words);
    let stored: BTreeSet<&str> = words.iter().map(|Word(w)| w.as_str()).collect();

    words.iter().all(|Word(w)| {
        (0..w.len())
            .map(|end| &w[..end])
            .filter(|prefix| !stored.contains(prefix))
            .all(|prefix| trie.search(prefix) == Err(Error::KeyNotFound))
    })
}

#[quickcheck]
fn removing_everything_leaves_only_root(words: Vec<Word>, removals_first: Vec<Word>) -> bool {
    let mut trie = trie_of(&words);
    for Word(w) in removals_first.iter().chain(&words) {
        let _ = trie.remove(w.as_str());
    }

    trie.is_empty() && trie.node_count() == 1
}

#[quickcheck]
fn enumeration_matches_model(ops: Vec<Op<Word, ()>>) -> bool {
    let mut trie = Trie::with_alphabet(Lowercase);
    let mut model = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(Word(w), ()) => {
                trie.insert(w.as_str(), ()).unwrap();
                model.insert(w);
            }
            Op::Remove(Word(w)) => {
                let removed = trie.remove(w.as_str()).is_ok();
                if removed != model.remove(&w) {
                    return false;
                }
            }
        }
    }

    let keys: Vec<String> = trie.keys().map(|key| key.into_iter().collect()).collect();
    keys.iter().eq(model.iter())
}

#[quickcheck]
fn foreign_symbols_never_mutate(words: Vec<Word>, position: usize) -> bool {
    let mut trie = trie_of(&words);
    let nodes = trie.node_count();

    let mut bad = words.first().map(|Word(w)| w.clone()).unwrap_or_default();
    let position = position % (bad.len() + 1);
    bad.insert(position, 'X');

    trie.insert(bad.as_str(), ()) == Err(Error::InvalidSymbol { position })
        && trie.node_count() == nodes
}
