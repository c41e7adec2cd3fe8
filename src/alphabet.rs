//! How a [`Trie`](crate::trie::Trie) reads its keys.
//!
//! [`Symbols`] turns a key into the sequence of symbols that spells its path, and
//! [`Alphabet`] decides which symbols are legal. A trie over an [`Unbounded`] alphabet takes
//! anything. Any other alphabet makes the trie reject keys containing a foreign symbol.

use std::iter::Cloned;
use std::{slice, str};

/// The set of symbols a trie accepts.
pub trait Alphabet<S: ?Sized> {
    /// Whether `symbol` belongs to the alphabet.
    fn contains(&self, symbol: &S) -> bool;
}

/// Accepts every symbol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unbounded;

impl<S: ?Sized> Alphabet<S> for Unbounded {
    fn contains(&self, _symbol: &S) -> bool {
        true
    }
}

/// The 26 ASCII letters `a` through `z`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lowercase;

impl Alphabet<char> for Lowercase {
    fn contains(&self, symbol: &char) -> bool {
        symbol.is_ascii_lowercase()
    }
}

impl Alphabet<u8> for Lowercase {
    fn contains(&self, symbol: &u8) -> bool {
        symbol.is_ascii_lowercase()
    }
}

/// ASCII letters of either case and ASCII digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AsciiAlphanumeric;

impl Alphabet<char> for AsciiAlphanumeric {
    fn contains(&self, symbol: &char) -> bool {
        symbol.is_ascii_alphanumeric()
    }
}

impl Alphabet<u8> for AsciiAlphanumeric {
    fn contains(&self, symbol: &u8) -> bool {
        symbol.is_ascii_alphanumeric()
    }
}

impl<S, F> Alphabet<S> for F
where
    S: ?Sized,
    F: Fn(&S) -> bool,
{
    fn contains(&self, symbol: &S) -> bool {
        self(symbol)
    }
}

/// A key that can be spelled as a sequence of `S`.
///
/// Strings spell `char`s. Slices, arrays and `Vec`s spell their elements, so a byte trie takes
/// `&[u8]` keys (`"text".as_bytes()`, `b"text"`).
pub trait Symbols<S> {
    /// Iterator over the key's symbols.
    type Iter<'a>: Iterator<Item = S>
    where
        Self: 'a;

    /// The symbols of this key, first to last.
    fn symbols(&self) -> Self::Iter<'_>;
}

impl Symbols<char> for str {
    type Iter<'a> = str::Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Symbols<char> for String {
    type Iter<'a> = str::Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl<S: Clone> Symbols<S> for [S] {
    type Iter<'a> = Cloned<slice::Iter<'a, S>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<S: Clone, const N: usize> Symbols<S> for [S; N] {
    type Iter<'a> = Cloned<slice::Iter<'a, S>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<S: Clone> Symbols<S> for Vec<S> {
    type Iter<'a> = Cloned<slice::Iter<'a, S>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}
