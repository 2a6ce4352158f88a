//! Ordered traversal of a [`RedBlackTree`](crate::tree::RedBlackTree).
//!
//! Two traversal types are provided:
//!
//! - [`Cursor`]: a resumable, bidirectional cursor with explicit boundary
//!   positions. It can be rewound ([`Cursor::begin`], [`Cursor::end`]),
//!   stepped in either direction ([`Cursor::next`], [`Cursor::prev`]) and
//!   advanced to the next entry matching a predicate ([`Cursor::next_to`]).
//! - [`Iter`]: a standard double-ended [`Iterator`] over `(&K, &V)` pairs.
//!
//! Both step through the tree using child and parent links, so every step
//! costs O(1) amortized and no entries are copied.
//!
//! Both borrow the tree: the tree cannot be mutated while either is alive.
//!
//! # Cursor Positions
//!
//! ```text
//!   Begin ──next──► first ──next──► ... ──next──► last ──next──► End
//!   Begin ◄──prev── first ◄──prev── ... ◄──prev── last ◄──prev── End
//! ```

use crate::tree::{Node, NodeId, leftmost, predecessor, rightmost, successor};
use std::iter::FusedIterator;

/// Where a [`Cursor`] currently stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Position {
    /// Before the first entry.
    Begin,
    /// On a live node.
    At(NodeId),
    /// After the last entry.
    End,
}

// =============================================================================
// Cursor
// =============================================================================

/// A bidirectional cursor over the entries of a
/// [`RedBlackTree`](crate::tree::RedBlackTree) in ascending key order.
///
/// A fresh cursor is positioned before the first entry. [`key`](Self::key)
/// and [`value`](Self::value) return `None` while the cursor is on either
/// boundary.
///
/// # Examples
///
/// ```rust
/// use rbmap::tree::RedBlackTree;
///
/// let tree: RedBlackTree<i32, &str> = [(0, "aa"), (1, "bb"), (2, "cc")].into_iter().collect();
/// let mut cursor = tree.iterator();
///
/// assert!(cursor.next_to(|_, value| value.ends_with('b')));
/// assert_eq!(cursor.key(), Some(&1));
///
/// assert!(cursor.next());
/// assert_eq!(cursor.key(), Some(&2));
/// assert!(!cursor.next());
/// assert_eq!(cursor.key(), None);
/// ```
pub struct Cursor<'a, K, V> {
    nodes: &'a [Node<K, V>],
    root: Option<NodeId>,
    position: Position,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            root: self.root,
            position: self.position,
        }
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) const fn new(nodes: &'a [Node<K, V>], root: Option<NodeId>) -> Self {
        Self {
            nodes,
            root,
            position: Position::Begin,
        }
    }

    #[inline]
    fn node(&self) -> Option<&'a Node<K, V>> {
        match self.position {
            Position::At(id) => Some(&self.nodes[id.index()]),
            Position::Begin | Position::End => None,
        }
    }

    /// Moves to the next entry.
    ///
    /// From before the first entry this moves to the first entry. Returns
    /// `false` and moves past the last entry when there is no next entry;
    /// once past the last entry it stays there.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let target = match self.position {
            Position::Begin => self.root.map(|root| leftmost(self.nodes, root)),
            Position::At(id) => successor(self.nodes, id),
            Position::End => return false,
        };
        self.settle(target, Position::End)
    }

    /// Moves to the previous entry.
    ///
    /// From after the last entry this moves to the last entry. Returns
    /// `false` and moves before the first entry when there is no previous
    /// entry; once before the first entry it stays there.
    pub fn prev(&mut self) -> bool {
        let target = match self.position {
            Position::End => self.root.map(|root| rightmost(self.nodes, root)),
            Position::At(id) => predecessor(self.nodes, id),
            Position::Begin => return false,
        };
        self.settle(target, Position::Begin)
    }

    fn settle(&mut self, target: Option<NodeId>, boundary: Position) -> bool {
        match target {
            Some(id) => {
                self.position = Position::At(id);
                true
            }
            None => {
                self.position = boundary;
                false
            }
        }
    }

    /// Rewinds to before the first entry.
    pub fn begin(&mut self) {
        self.position = Position::Begin;
    }

    /// Fast-forwards to after the last entry.
    pub fn end(&mut self) {
        self.position = Position::End;
    }

    /// Moves to the first entry. Returns `false` if the tree is empty.
    pub fn first(&mut self) -> bool {
        self.begin();
        self.next()
    }

    /// Moves to the last entry. Returns `false` if the tree is empty.
    pub fn last(&mut self) -> bool {
        self.end();
        self.prev()
    }

    /// Steps forward until `predicate` holds for the current entry.
    ///
    /// Every step is a real move: if no entry matches, the cursor ends past
    /// the last entry and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, &str> = [(0, "xx"), (1, "yy")].into_iter().collect();
    /// let mut cursor = tree.iterator();
    ///
    /// assert!(!cursor.next_to(|_, value| value.ends_with('b')));
    /// assert!(!cursor.next());
    /// ```
    pub fn next_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        while self.next() {
            if let Some(node) = self.node()
                && predicate(&node.key, &node.value)
            {
                return true;
            }
        }
        false
    }

    /// Steps backward until `predicate` holds for the current entry.
    ///
    /// Every step is a real move: if no entry matches, the cursor ends before
    /// the first entry and `false` is returned.
    pub fn prev_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        while self.prev() {
            if let Some(node) = self.node()
                && predicate(&node.key, &node.value)
            {
                return true;
            }
        }
        false
    }

    /// Returns the key at the current position, or `None` on a boundary.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.node().map(|node| &node.key)
    }

    /// Returns the value at the current position, or `None` on a boundary.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.node().map(|node| &node.value)
    }

    /// Returns the entry at the current position, or `None` on a boundary.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.node().map(|node| (&node.key, &node.value))
    }

    /// Returns `true` while the cursor is before the first entry.
    #[inline]
    #[must_use]
    pub fn is_at_begin(&self) -> bool {
        self.position == Position::Begin
    }

    /// Returns `true` while the cursor is after the last entry.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position == Position::End
    }
}

// =============================================================================
// Iter
// =============================================================================

/// An iterator over key-value pairs of a
/// [`RedBlackTree`](crate::tree::RedBlackTree) in ascending key order.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) const fn new(
        nodes: &'a [Node<K, V>],
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
        }
    }

    #[inline]
    fn entry(&self, id: NodeId) -> (&'a K, &'a V) {
        let node = &self.nodes[id.index()];
        (&node.key, &node.value)
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self::new(self.nodes, self.front, self.back, self.remaining)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = successor(self.nodes, id);
        Some(self.entry(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = predecessor(self.nodes, id);
        Some(self.entry(id))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
