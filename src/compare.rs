//! Total orders over keys.
//!
//! [`Heap`](crate::heap::Heap) and [`Tree`](crate::bst::Tree) are generic over a
//! [`Comparator`] chosen at construction. [`Natural`] defers to `Ord`, [`Reversed`] flips it,
//! and any `Fn(&T, &T) -> Ordering` closure can be used directly.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use grove::compare::{Comparator, Natural, Reversed};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed.compare(&1, &2), Ordering::Greater);
//!
//! let by_last_digit = |a: &u32, b: &u32| (a % 10).cmp(&(b % 10));
//! assert_eq!(by_last_digit.compare(&19, &21), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way comparison defining a total order over `T`.
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of `compare(b, a)` and
/// the order is transitive. The structures' invariants are only as good as the comparator.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ascending order using `T`'s `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order using `T`'s `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord + ?Sized> Comparator<T> for Reversed {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
