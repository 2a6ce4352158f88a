//! Pluggable key ordering.
//!
//! Every positioning decision made by [`RedBlackTree`](crate::tree::RedBlackTree)
//! goes through a [`Comparator`]. The comparator is fixed when the tree is
//! constructed and must define a strict, consistent total order over every
//! key that is ever inserted.
//!
//! # Provided Comparators
//!
//! | Comparator             | Ordering                                   |
//! |------------------------|--------------------------------------------|
//! | [`OrdComparator`]      | The key type's own [`Ord`] implementation  |
//! | [`ReverseComparator`]  | Any comparator, reversed                   |
//! | [`FnComparator`]       | A closure `Fn(&K, &K) -> Ordering`         |
//!
//! # Examples
//!
//! ```rust
//! use rbmap::comparator::{Comparator, FnComparator, OrdComparator, ReverseComparator};
//! use std::cmp::Ordering;
//!
//! assert_eq!(OrdComparator.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseComparator::new(OrdComparator).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
//! assert_eq!(by_length.compare(&"aaa", &"b"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A three-way total order over keys of type `K`.
///
/// Implementations must be consistent: for the lifetime of a tree, the same
/// pair of keys must always compare the same way, and the relation must be
/// a strict total order (antisymmetric, transitive, total). A tree whose
/// comparator violates this contract keeps its memory safety but may lose
/// entries or report them out of order.
pub trait Comparator<K: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }
}

// =============================================================================
// OrdComparator
// =============================================================================

/// Orders keys by their [`Ord`] implementation.
///
/// This is the default comparator of every tree type in the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> Comparator<K> for OrdComparator {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// ReverseComparator
// =============================================================================

/// Reverses the order produced by another comparator.
///
/// # Examples
///
/// ```rust
/// use rbmap::comparator::{OrdComparator, ReverseComparator};
/// use rbmap::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::with_comparator(ReverseComparator::new(OrdComparator));
/// tree.put(1, "a");
/// tree.put(3, "c");
/// tree.put(2, "b");
///
/// assert_eq!(tree.keys(), vec![&3, &2, &1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseComparator<C> {
    inner: C,
}

impl<C> ReverseComparator<C> {
    /// Wraps `inner`, reversing its order.
    #[inline]
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped comparator.
    #[inline]
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseComparator<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.inner.compare(right, left)
    }
}

// =============================================================================
// FnComparator
// =============================================================================

/// Adapts a closure into a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use rbmap::comparator::FnComparator;
/// use rbmap::tree::RedBlackTree;
///
/// // Case-insensitive string keys
/// let mut tree = RedBlackTree::with_comparator(FnComparator::new(|left: &String, right: &String| {
///     left.to_lowercase().cmp(&right.to_lowercase())
/// }));
/// tree.put("Banana".to_string(), 2);
/// tree.put("apple".to_string(), 1);
/// tree.put("BANANA".to_string(), 3);
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.get(&"banana".to_string()), Some(&3));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps `function` as a comparator.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.function)(left, right)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator")
    }
}
