//! Mutable ordered map based on a Red-Black Tree.
//!
//! This module provides [`RedBlackTree`], an ordered key-value container that
//! keeps itself balanced through recoloring and rotations.
//!
//! # Overview
//!
//! - O(log N) put, get, remove
//! - O(log N) floor, ceiling, min (`left`), max (`right`)
//! - O(N) ordered `keys`/`values` extraction
//! - O(1) `size` and `is_empty`
//! - O(1) amortized cursor steps in both directions
//!
//! # Examples
//!
//! ```rust
//! use rbmap::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.put(5, "e");
//! tree.put(1, "a");
//! tree.put(3, "c");
//!
//! assert_eq!(tree.keys(), vec![&1, &3, &5]);
//! assert_eq!(tree.get(&3), Some(&"c"));
//! assert_eq!(tree.floor(&4).map(|node| *node.key()), Some(3));
//! assert_eq!(tree.ceiling(&4).map(|node| *node.key()), Some(5));
//!
//! tree.remove(&3);
//! assert_eq!(tree.size(), 2);
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in a dense arena and linked by index. Child links are the
//! structural edges; each node also records its parent so that rebalancing and
//! cursors can walk upward without re-descending from the root.
//!
//! The tree maintains the following invariants after every mutation:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaves (absent children) are black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a descendant leaf has the same number of black nodes
//!
//! These invariants ensure the tree height is O(log N).

mod fixup;
mod node;
mod render;
mod validate;

pub use node::{Color, NodeRef};
pub use validate::InvariantViolation;

pub(crate) use node::{Node, NodeId, Side};

use crate::comparator::{Comparator, OrdComparator};
use crate::cursor::{Cursor, Iter};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A mutable ordered map based on a Red-Black Tree.
///
/// Keys are ordered by the comparator `C` chosen at construction. With the
/// default [`OrdComparator`] the key type's [`Ord`] implementation is used.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `put`                | O(log N)   |
/// | `get`                | O(log N)   |
/// | `remove`             | O(log N)   |
/// | `floor`/`ceiling`    | O(log N)   |
/// | `left`/`right`       | O(log N)   |
/// | `keys`/`values`      | O(N)       |
/// | `size`/`is_empty`    | O(1)       |
/// | `clear`              | O(N)       |
///
/// # Examples
///
/// ```rust
/// use rbmap::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.put(1, "x");
/// tree.put(1, "a"); // overwrite
/// tree.put(2, "b");
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.values(), vec![&"a", &"b"]);
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, V, C = OrdComparator> {
    /// Node arena; every element is reachable from `root`
    nodes: Vec<Node<K, V>>,
    /// Root node, `None` when the tree is empty
    root: Option<NodeId>,
    /// Key ordering
    comparator: C,
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Creates a new empty tree ordered by `K: Ord`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, String> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(OrdComparator)
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Creates a new empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::comparator::FnComparator;
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_comparator(FnComparator::new(|left: &i32, right: &i32| {
    ///     right.cmp(left)
    /// }));
    /// tree.put(1, ());
    /// tree.put(2, ());
    /// assert_eq!(tree.keys(), vec![&2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Returns the comparator ordering this tree.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(tree.left().is_none());
    /// ```
    pub fn clear(&mut self) {
        log::trace!("clearing red-black tree with {} entries", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the node holding the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// assert_eq!(tree.left().map(|node| node.entry()), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'_, K, V>> {
        self.first_id().map(|id| self.node_ref(id))
    }

    /// Returns the node holding the maximum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// assert_eq!(tree.right().map(|node| node.entry()), Some((&3, &"c")));
    /// ```
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'_, K, V>> {
        self.last_id().map(|id| self.node_ref(id))
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|id| self.node_ref(id))
    }

    /// Returns all keys in ascending order.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns all values in ascending key order.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns a double-ended iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let reversed: Vec<i32> = tree.iter().rev().map(|(key, _)| *key).collect();
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.first_id(), self.last_id(), self.size())
    }

    /// Returns a bidirectional cursor positioned before the first entry.
    ///
    /// The cursor borrows the tree, so the tree cannot be modified while the
    /// cursor is in use. Obtain a fresh cursor after mutating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let mut cursor = tree.iterator();
    ///
    /// let mut forward = Vec::new();
    /// while cursor.next() {
    ///     forward.push(*cursor.key().unwrap());
    /// }
    /// assert_eq!(forward, vec![1, 2, 3]);
    ///
    /// let mut backward = Vec::new();
    /// while cursor.prev() {
    ///     backward.push(*cursor.key().unwrap());
    /// }
    /// assert_eq!(backward, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn iterator(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.nodes, self.root)
    }

    // -------------------------------------------------------------------------
    // Arena plumbing
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.index()]
    }

    #[inline]
    fn node_ref(&self, id: NodeId) -> NodeRef<'_, K, V> {
        NodeRef::new(&self.nodes, id)
    }

    /// Color of an optional node; absent nodes are black.
    #[inline]
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    fn allocate(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Removes an unlinked node from the arena.
    ///
    /// The arena stays dense: the last node is moved into the freed slot and
    /// every link pointing at it is redirected.
    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let last = NodeId::new(self.nodes.len() - 1);
        let released = self.nodes.swap_remove(id.index());
        if id != last {
            log::trace!("relocating node {} into slot {}", last.index(), id.index());
            self.relocate(last, id);
        }
        released
    }

    /// Redirects the links around a node that moved from `from` to `to`.
    fn relocate(&mut self, from: NodeId, to: NodeId) {
        let (parent, left, right) = {
            let node = self.node(to);
            (node.parent, node.left, node.right)
        };
        match parent {
            None => self.root = Some(to),
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(from) {
                    parent_node.left = Some(to);
                } else {
                    parent_node.right = Some(to);
                }
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.node_mut(child).parent = Some(to);
        }
    }

    /// Puts `replacement` where `old` hangs under its parent (or at the root).
    pub(crate) fn replace_child(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.node(old).parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(old) {
                    parent_node.left = replacement;
                } else {
                    parent_node.right = replacement;
                }
            }
        }
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
    }

    /// Swaps keys and values of two distinct nodes, leaving links untouched.
    fn swap_entries(&mut self, first: NodeId, second: NodeId) {
        let (low, high) = if first.index() < second.index() {
            (first.index(), second.index())
        } else {
            (second.index(), first.index())
        };
        let (head, tail) = self.nodes.split_at_mut(high);
        let (low_node, high_node) = (&mut head[low], &mut tail[0]);
        mem::swap(&mut low_node.key, &mut high_node.key);
        mem::swap(&mut low_node.value, &mut high_node.value);
    }

    // -------------------------------------------------------------------------
    // Traversal helpers
    // -------------------------------------------------------------------------

    fn first_id(&self) -> Option<NodeId> {
        self.root.map(|root| leftmost(&self.nodes, root))
    }

    fn last_id(&self) -> Option<NodeId> {
        self.root.map(|root| rightmost(&self.nodes, root))
    }
}

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Inserts a key-value pair.
    ///
    /// If the tree already contains an equivalent key, only its value is
    /// replaced; the size and the shape of the tree do not change.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.put(1, "x");
    /// assert_eq!(tree.get(&1), Some(&"x"));
    ///
    /// tree.put(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            match self.comparator.compare(&key, &node.key) {
                Ordering::Equal => {
                    self.node_mut(id).value = value;
                    return;
                }
                Ordering::Less => {
                    side = Side::Left;
                    current = node.left;
                }
                Ordering::Greater => {
                    side = Side::Right;
                    current = node.right;
                }
            }
            parent = Some(id);
        }

        let inserted = self.allocate(Node::new_red(key, value, parent));
        match parent {
            None => self.root = Some(inserted),
            Some(parent) => self.node_mut(parent).set_child(side, Some(inserted)),
        }
        self.insert_fixup(inserted);
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.put("hello", 42);
    ///
    /// assert_eq!(tree.get(&"hello"), Some(&42));
    /// assert_eq!(tree.get(&"world"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key).map(|id| &self.node(id).value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.lookup(key).map(|id| &mut self.node_mut(id).value)
    }

    /// Returns the node stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = (1..=6).map(|key| (key, ())).collect();
    ///
    /// // Size of the subtree rooted at the node
    /// assert_eq!(tree.get_node(&2).map(|node| node.size()), Some(6));
    /// assert!(tree.get_node(&8).is_none());
    /// ```
    #[must_use]
    pub fn get_node(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.lookup(key).map(|id| self.node_ref(id))
    }

    /// Returns `true` if the tree contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Removes `key` from the tree.
    ///
    /// Removing a key that is not present does nothing.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, i32> = (1..=3).map(|key| (key, key)).collect();
    /// tree.remove(&2);
    /// tree.remove(&2);
    /// tree.remove(&9);
    ///
    /// assert_eq!(tree.keys(), vec![&1, &3]);
    /// ```
    pub fn remove(&mut self, key: &K) {
        self.take(key);
    }

    /// Removes `key` from the tree and returns its entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.put(1, "a");
    ///
    /// assert_eq!(tree.take(&1), Some((1, "a")));
    /// assert_eq!(tree.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &K) -> Option<(K, V)> {
        let mut target = self.lookup(key)?;

        // With two children, trade places with the in-order successor, which
        // has no left child.
        if let (Some(_), Some(right)) = (self.node(target).left, self.node(target).right) {
            let successor = leftmost(&self.nodes, right);
            self.swap_entries(target, successor);
            target = successor;
        }

        let (child, parent, color) = {
            let node = self.node(target);
            (node.left.or(node.right), node.parent, node.color)
        };
        self.replace_child(target, child);

        if color == Color::Black {
            match child {
                Some(child) if self.node(child).is_red() => {
                    self.node_mut(child).color = Color::Black;
                }
                _ => self.delete_fixup(child, parent),
            }
        }

        let removed = self.release(target);
        Some((removed.key, removed.value))
    }

    /// Returns the node with the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = [1, 3, 5].into_iter().map(|key| (key, ())).collect();
    ///
    /// assert_eq!(tree.floor(&4).map(|node| *node.key()), Some(3));
    /// assert_eq!(tree.floor(&5).map(|node| *node.key()), Some(5));
    /// assert!(tree.floor(&0).is_none());
    /// ```
    #[must_use]
    pub fn floor(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(self.node_ref(id)),
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    candidate = Some(id);
                    current = node.right;
                }
            }
        }
        candidate.map(|id| self.node_ref(id))
    }

    /// Returns the node with the smallest key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = [1, 3, 5].into_iter().map(|key| (key, ())).collect();
    ///
    /// assert_eq!(tree.ceiling(&2).map(|node| *node.key()), Some(3));
    /// assert_eq!(tree.ceiling(&1).map(|node| *node.key()), Some(1));
    /// assert!(tree.ceiling(&6).is_none());
    /// ```
    #[must_use]
    pub fn ceiling(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(self.node_ref(id)),
                Ordering::Greater => current = node.right,
                Ordering::Less => {
                    candidate = Some(id);
                    current = node.left;
                }
            }
        }
        candidate.map(|id| self.node_ref(id))
    }

    fn lookup(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }
}

// =============================================================================
// Structural Navigation
// =============================================================================

/// Follows left links from `id` to the end.
pub(crate) fn leftmost<K, V>(nodes: &[Node<K, V>], mut id: NodeId) -> NodeId {
    while let Some(left) = nodes[id.index()].left {
        id = left;
    }
    id
}

/// Follows right links from `id` to the end.
pub(crate) fn rightmost<K, V>(nodes: &[Node<K, V>], mut id: NodeId) -> NodeId {
    while let Some(right) = nodes[id.index()].right {
        id = right;
    }
    id
}

/// In-order successor: leftmost node of the right subtree, otherwise the
/// first ancestor reached from a left child.
pub(crate) fn successor<K, V>(nodes: &[Node<K, V>], id: NodeId) -> Option<NodeId> {
    if let Some(right) = nodes[id.index()].right {
        return Some(leftmost(nodes, right));
    }
    let mut child = id;
    let mut parent = nodes[id.index()].parent;
    while let Some(ancestor) = parent {
        if nodes[ancestor.index()].left == Some(child) {
            return Some(ancestor);
        }
        child = ancestor;
        parent = nodes[ancestor.index()].parent;
    }
    None
}

/// In-order predecessor, the mirror image of [`successor`].
pub(crate) fn predecessor<K, V>(nodes: &[Node<K, V>], id: NodeId) -> Option<NodeId> {
    if let Some(left) = nodes[id.index()].left {
        return Some(rightmost(nodes, left));
    }
    let mut child = id;
    let mut parent = nodes[id.index()].parent;
    while let Some(ancestor) = parent {
        if nodes[ancestor.index()].right == Some(child) {
            return Some(ancestor);
        }
        child = ancestor;
        parent = nodes[ancestor.index()].parent;
    }
    None
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for RedBlackTree<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for RedBlackTree<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RedBlackTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RedBlackTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RedBlackTree<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RedBlackTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// Plain data: sharing across threads needs external synchronization only
// for writers.
static_assertions::assert_impl_all!(RedBlackTree<i32, String>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
