//! Rebalancing after insertion and removal.
//!
//! Both repairs walk upward from the modified position. At every step the
//! local shape is classified into one of a small closed set of cases
//! ([`InsertCase`], [`DeleteCase`]) and the matching recoloring/rotation is
//! applied. Each step either terminates or moves at least one level closer to
//! the root, so both loops are bounded by the tree height.

use super::{Color, NodeId, RedBlackTree, Side};

/// Shape around a freshly inserted (or recolored) red node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum InsertCase {
    /// The node is the root or its parent is black.
    Balanced,
    /// Parent and uncle are red: push the blackness down from the grandparent.
    RedUncle {
        parent: NodeId,
        uncle: NodeId,
        grandparent: NodeId,
    },
    /// Uncle is black and the node is the inner grandchild (zig-zag).
    /// `side` is the side of the grandparent the parent hangs on.
    InnerChild { parent: NodeId, side: Side },
    /// Uncle is black and the node is the outer grandchild (zig-zig).
    OuterChild {
        parent: NodeId,
        grandparent: NodeId,
        side: Side,
    },
}

/// Shape around a position that is one black node short.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum DeleteCase {
    /// Sibling is red: rotate it above the parent to get a black sibling.
    RedSibling { sibling: NodeId, side: Side },
    /// Sibling and both nephews are black: move the deficit to the parent.
    BlackNephews { sibling: NodeId },
    /// Far nephew black, near nephew red: rotate the near nephew up.
    NearNephewRed {
        sibling: NodeId,
        near: NodeId,
        side: Side,
    },
    /// Far nephew red: one rotation at the parent restores the black height.
    FarNephewRed {
        sibling: NodeId,
        far: NodeId,
        side: Side,
    },
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Which side of its parent `id` hangs on.
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.node(parent).left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Rotates `pivot` toward `side.opposite()`, lifting its `side` child
    /// into its place.
    pub(crate) fn lift_child(&mut self, pivot: NodeId, side: Side) {
        let Some(child) = self.node(pivot).child(side) else {
            return;
        };
        let inner = self.node(child).child(side.opposite());

        self.node_mut(pivot).set_child(side, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }
        self.replace_child(pivot, Some(child));
        self.node_mut(child).set_child(side.opposite(), Some(pivot));
        self.node_mut(pivot).parent = Some(child);
    }

    // -------------------------------------------------------------------------
    // Insert
    // -------------------------------------------------------------------------

    pub(crate) fn classify_insert(&self, node: NodeId) -> InsertCase {
        let Some(parent) = self.node(node).parent else {
            return InsertCase::Balanced;
        };
        if !self.node(parent).is_red() {
            return InsertCase::Balanced;
        }
        // A red parent is never the root, so the grandparent exists.
        let Some(grandparent) = self.node(parent).parent else {
            return InsertCase::Balanced;
        };

        let side = self.side_of(parent, grandparent);
        let uncle = self.node(grandparent).child(side.opposite());
        if let Some(uncle) = uncle
            && self.node(uncle).is_red()
        {
            return InsertCase::RedUncle {
                parent,
                uncle,
                grandparent,
            };
        }

        if self.side_of(node, parent) == side {
            InsertCase::OuterChild {
                parent,
                grandparent,
                side,
            }
        } else {
            InsertCase::InnerChild { parent, side }
        }
    }

    /// Restores the red-black properties after `node` was linked in red.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            match self.classify_insert(node) {
                InsertCase::Balanced => break,
                InsertCase::RedUncle {
                    parent,
                    uncle,
                    grandparent,
                } => {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    node = grandparent;
                }
                InsertCase::InnerChild { parent, side } => {
                    self.lift_child(parent, side.opposite());
                    node = parent;
                }
                InsertCase::OuterChild {
                    parent,
                    grandparent,
                    side,
                } => {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    self.lift_child(grandparent, side);
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Classifies the position `node` (possibly empty) under `parent`.
    ///
    /// Returns `None` when the sibling is missing, which a valid tree never
    /// produces for a position that is short one black node.
    pub(crate) fn classify_delete(&self, node: Option<NodeId>, parent: NodeId) -> Option<DeleteCase> {
        let side = if self.node(parent).left == node {
            Side::Left
        } else {
            Side::Right
        };
        let sibling = self.node(parent).child(side.opposite())?;

        if self.node(sibling).is_red() {
            return Some(DeleteCase::RedSibling { sibling, side });
        }

        let near = self.node(sibling).child(side);
        let far = self.node(sibling).child(side.opposite());
        if let Some(far) = far
            && self.node(far).is_red()
        {
            return Some(DeleteCase::FarNephewRed { sibling, far, side });
        }
        if let Some(near) = near
            && self.node(near).is_red()
        {
            return Some(DeleteCase::NearNephewRed {
                sibling,
                near,
                side,
            });
        }
        Some(DeleteCase::BlackNephews { sibling })
    }

    /// Restores the black height after a black node was spliced out.
    ///
    /// `node` is the child that took its place (possibly empty) and `parent`
    /// is the spliced node's former parent.
    pub(crate) fn delete_fixup(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && self.color_of(node) == Color::Black {
            let Some(current_parent) = parent else {
                break;
            };
            let Some(case) = self.classify_delete(node, current_parent) else {
                break;
            };

            match case {
                DeleteCase::RedSibling { sibling, side } => {
                    self.node_mut(sibling).color = Color::Black;
                    self.node_mut(current_parent).color = Color::Red;
                    self.lift_child(current_parent, side.opposite());
                }
                DeleteCase::BlackNephews { sibling } => {
                    self.node_mut(sibling).color = Color::Red;
                    node = Some(current_parent);
                    parent = self.node(current_parent).parent;
                }
                DeleteCase::NearNephewRed {
                    sibling,
                    near,
                    side,
                } => {
                    self.node_mut(near).color = Color::Black;
                    self.node_mut(sibling).color = Color::Red;
                    self.lift_child(sibling, side);
                }
                DeleteCase::FarNephewRed { sibling, far, side } => {
                    self.node_mut(sibling).color = self.node(current_parent).color;
                    self.node_mut(current_parent).color = Color::Black;
                    self.node_mut(far).color = Color::Black;
                    self.lift_child(current_parent, side.opposite());
                    node = self.root;
                    parent = None;
                }
            }
        }

        if let Some(node) = node {
            self.node_mut(node).color = Color::Black;
        }
    }
}
