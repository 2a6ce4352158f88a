//! Ordered map facade over [`RedBlackTree`].
//!
//! [`TreeMap`] exposes the tree through map vocabulary: entries are returned
//! as `(&K, &V)` pairs instead of node views, and `min`/`max` replace the
//! tree's `left`/`right`.
//!
//! # Examples
//!
//! ```rust
//! use rbmap::map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.put("c", 3);
//! map.put("a", 1);
//! map.put("b", 2);
//!
//! assert_eq!(map.min(), Some((&"a", &1)));
//! assert_eq!(map.max(), Some((&"c", &3)));
//! assert_eq!(map.floor(&"bb"), Some((&"b", &2)));
//! assert_eq!(map.to_string(), "{a: 1, b: 2, c: 3}");
//! ```

use crate::comparator::{Comparator, OrdComparator};
use crate::cursor::{Cursor, Iter};
use crate::tree::RedBlackTree;
use std::fmt;
use std::iter::FromIterator;

/// An ordered map backed by a [`RedBlackTree`].
#[derive(Clone, PartialEq, Eq)]
pub struct TreeMap<K, V, C = OrdComparator> {
    tree: RedBlackTree<K, V, C>,
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates an empty map ordered by `K: Ord`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: RedBlackTree::new(),
        }
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RedBlackTree::with_comparator(comparator),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns all keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.tree.keys()
    }

    /// Returns all values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.tree.values()
    }

    /// Returns the entry with the minimum key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.tree.left().map(|node| node.entry())
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.tree.right().map(|node| node.entry())
    }

    /// Returns an iterator over entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Returns a bidirectional cursor positioned before the first entry.
    #[must_use]
    pub fn iterator(&self) -> Cursor<'_, K, V> {
        self.tree.iterator()
    }

    /// Returns the underlying tree.
    #[inline]
    #[must_use]
    pub const fn as_tree(&self) -> &RedBlackTree<K, V, C> {
        &self.tree
    }

    /// Returns the underlying tree mutably.
    #[inline]
    pub const fn as_tree_mut(&mut self) -> &mut RedBlackTree<K, V, C> {
        &mut self.tree
    }

    /// Consumes the map, returning the underlying tree.
    #[inline]
    #[must_use]
    pub fn into_tree(self) -> RedBlackTree<K, V, C> {
        self.tree
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Inserts a key-value pair, replacing the value of an existing key.
    pub fn put(&mut self, key: K, value: V) {
        self.tree.put(key, value);
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// Removes `key`. Removing an absent key does nothing.
    pub fn remove(&mut self, key: &K) {
        self.tree.remove(key);
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    #[must_use]
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.floor(key).map(|node| node.entry())
    }

    /// Returns the entry with the smallest key greater than or equal to `key`.
    #[must_use]
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.ceiling(key).map(|node| node.entry())
    }
}

impl<K, V, C> From<RedBlackTree<K, V, C>> for TreeMap<K, V, C> {
    fn from(tree: RedBlackTree<K, V, C>) -> Self {
        Self { tree }
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
