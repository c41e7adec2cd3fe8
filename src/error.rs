//! The errors shared by every structure in this crate.
//!
//! A call that returns an [`Error`] has not modified the structure it was
//! called on.

/// Everything that can go wrong when operating on a `grove` structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element but the structure is empty.
    #[error("structure is empty")]
    EmptyStructure,
    /// The requested key isn't stored.
    #[error("key not found")]
    KeyNotFound,
    /// The key is already stored and the operation refuses to overwrite it.
    #[error("key already present")]
    DuplicateKey,
    /// The symbol at `position` of a trie key is outside the trie's alphabet.
    #[error("symbol at position {position} is not in the alphabet")]
    InvalidSymbol {
        /// Zero-based index of the first offending symbol in the key.
        position: usize,
    },
    /// A heap needs at least two children per node.
    #[error("heap arity must be at least 2, got {0}")]
    InvalidArity(usize),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
