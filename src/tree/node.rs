//! Node storage for [`RedBlackTree`](super::RedBlackTree).
//!
//! Nodes live in a dense arena owned by the tree and refer to each other by
//! [`NodeId`]. The `left`/`right` links are the structural (owning) edges;
//! `parent` is a back-reference used for upward walks during rebalancing and
//! cursor movement only.

use smallvec::SmallVec;
use std::fmt;

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Its children are always black.
    Red,
    /// A black node. Absent children count as black.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => formatter.write_str("red"),
            Self::Black => formatter.write_str("black"),
        }
    }
}

/// Index of a node inside the tree arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Which child slot of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A stored entry plus its structural links.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a new red leaf under `parent`.
    pub(crate) const fn new_red(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A read-only view of one node of a [`RedBlackTree`](super::RedBlackTree).
///
/// Returned by lookups such as [`floor`](super::RedBlackTree::floor),
/// [`ceiling`](super::RedBlackTree::ceiling) and
/// [`get_node`](super::RedBlackTree::get_node). The view borrows the tree, so
/// the tree cannot be mutated while it is alive.
///
/// # Examples
///
/// ```rust
/// use rbmap::tree::RedBlackTree;
///
/// let tree: RedBlackTree<i32, &str> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
///
/// let root = tree.get_node(&2).unwrap();
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.value(), &"b");
/// assert_eq!(root.size(), 3);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// ```
pub struct NodeRef<'a, K, V> {
    nodes: &'a [Node<K, V>],
    id: NodeId,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    #[inline]
    pub(crate) const fn new(nodes: &'a [Node<K, V>], id: NodeId) -> Self {
        Self { nodes, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<K, V> {
        &self.nodes[self.id.index()]
    }

    #[inline]
    fn relative(&self, link: Option<NodeId>) -> Option<Self> {
        link.map(|id| Self::new(self.nodes, id))
    }

    /// Returns the key stored in this node.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// Returns the value stored in this node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// Returns the key and value stored in this node.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (&node.key, &node.value)
    }

    /// Returns the color of this node.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Returns the structural parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.relative(self.node().parent)
    }

    /// Returns the left child.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.relative(self.node().left)
    }

    /// Returns the right child.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.relative(self.node().right)
    }

    /// Returns the number of nodes in the subtree rooted at this node,
    /// including the node itself.
    ///
    /// # Complexity
    ///
    /// O(size of the subtree)
    #[must_use]
    pub fn size(&self) -> usize {
        let mut pending: SmallVec<[NodeId; 32]> = SmallVec::new();
        pending.push(self.id);
        let mut count = 0;
        while let Some(id) = pending.pop() {
            count += 1;
            let node = &self.nodes[id.index()];
            pending.extend(node.left);
            pending.extend(node.right);
        }
        count
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        formatter
            .debug_struct("NodeRef")
            .field("key", &node.key)
            .field("value", &node.value)
            .field("color", &node.color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn three_nodes() -> Vec<Node<i32, char>> {
        let mut root = Node::new_red(2, 'b', None);
        root.color = Color::Black;
        root.left = Some(NodeId::new(1));
        root.right = Some(NodeId::new(2));
        vec![
            root,
            Node::new_red(1, 'a', Some(NodeId::new(0))),
            Node::new_red(3, 'c', Some(NodeId::new(0))),
        ]
    }

    #[rstest]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[rstest]
    fn test_child_and_set_child() {
        let mut node = Node::new_red(1, (), None);
        node.set_child(Side::Right, Some(NodeId::new(7)));
        assert_eq!(node.child(Side::Right), Some(NodeId::new(7)));
        assert_eq!(node.child(Side::Left), None);
        assert!(node.is_red());
    }

    #[rstest]
    fn test_node_ref_navigation() {
        let nodes = three_nodes();
        let root = NodeRef::new(&nodes, NodeId::new(0));

        assert_eq!(root.entry(), (&2, &'b'));
        assert_eq!(root.color(), Color::Black);
        assert!(root.parent().is_none());

        let left = root.left().unwrap();
        assert_eq!(left.key(), &1);
        assert_eq!(left.color(), Color::Red);
        assert_eq!(left.parent().map(|node| *node.key()), Some(2));
        assert_eq!(root.right().map(|node| *node.value()), Some('c'));
    }

    #[rstest]
    #[case(0, 3)]
    #[case(1, 1)]
    #[case(2, 1)]
    fn test_node_ref_subtree_size(#[case] index: usize, #[case] expected: usize) {
        let nodes = three_nodes();
        assert_eq!(NodeRef::new(&nodes, NodeId::new(index)).size(), expected);
    }

    #[rstest]
    fn test_color_display() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
