//! Structural self-check for [`RedBlackTree`].

use super::{Color, NodeId, RedBlackTree};
use crate::comparator::Comparator;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// A broken red-black tree property, reported by [`RedBlackTree::validate`].
///
/// # Examples
///
/// ```rust
/// use rbmap::tree::InvariantViolation;
///
/// let violation = InvariantViolation::BlackHeightMismatch { expected: 2, found: 3 };
/// assert_eq!(
///     violation.to_string(),
///     "black height mismatch: expected 2 black nodes on every path, found 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    ConsecutiveRed,
    /// Two root-to-leaf paths contain different numbers of black nodes.
    BlackHeightMismatch {
        /// Black nodes on the first path examined.
        expected: usize,
        /// Black nodes on the offending path.
        found: usize,
    },
    /// A child does not point back at its parent, or the root has a parent.
    BrokenParentLink,
    /// In-order traversal yields keys that are not strictly ascending.
    OutOfOrder,
    /// The recorded size differs from the number of reachable nodes.
    SizeMismatch {
        /// The size the tree reports.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::ConsecutiveRed => write!(formatter, "red node has a red child"),
            Self::BlackHeightMismatch { expected, found } => write!(
                formatter,
                "black height mismatch: expected {expected} black nodes on every path, found {found}"
            ),
            Self::BrokenParentLink => write!(formatter, "parent link does not match child link"),
            Self::OutOfOrder => write!(formatter, "keys are not in strictly ascending order"),
            Self::SizeMismatch {
                recorded,
                reachable,
            } => write!(
                formatter,
                "size mismatch: tree records {recorded} entries but {reachable} are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Checks every red-black property plus ordering, parent links and size.
    ///
    /// The tree maintains these itself; this is meant for tests and debugging
    /// of custom comparators.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, i32> = (0..100).map(|key| (key, key)).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            return if self.is_empty() {
                Ok(())
            } else {
                Err(InvariantViolation::SizeMismatch {
                    recorded: self.size(),
                    reachable: 0,
                })
            };
        };

        if self.node(root).color == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        if self.node(root).parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink);
        }

        let mut black_height = None;
        let mut reachable = 0;
        let mut pending: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        pending.push((root, 1));

        while let Some((id, blacks_above)) = pending.pop() {
            reachable += 1;
            let node = self.node(id);
            for child in [node.left, node.right] {
                match child {
                    Some(child) => {
                        let child_node = self.node(child);
                        if child_node.parent != Some(id) {
                            return Err(InvariantViolation::BrokenParentLink);
                        }
                        if node.is_red() && child_node.is_red() {
                            return Err(InvariantViolation::ConsecutiveRed);
                        }
                        let blacks = blacks_above + usize::from(!child_node.is_red());
                        pending.push((child, blacks));
                    }
                    None => match black_height {
                        None => black_height = Some(blacks_above),
                        Some(expected) if expected != blacks_above => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                expected,
                                found: blacks_above,
                            });
                        }
                        Some(_) => {}
                    },
                }
            }
        }

        if reachable != self.size() {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.size(),
                reachable,
            });
        }

        let keys = self.keys();
        if keys
            .windows(2)
            .any(|pair| self.comparator.compare(pair[0], pair[1]) != Ordering::Less)
        {
            return Err(InvariantViolation::OutOfOrder);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn balanced_tree() -> RedBlackTree<i32, ()> {
        [4, 2, 6, 1, 3, 5, 7].into_iter().map(|key| (key, ())).collect()
    }

    fn id_of(tree: &RedBlackTree<i32, ()>, key: i32) -> NodeId {
        tree.lookup(&key).unwrap()
    }

    #[rstest]
    fn test_empty_tree_is_valid() {
        let tree: RedBlackTree<i32, ()> = RedBlackTree::new();
        assert_eq!(tree.validate(), Ok(()));
    }

    #[rstest]
    fn test_detects_red_root() {
        let mut tree = balanced_tree();
        let root = id_of(&tree, 4);
        tree.node_mut(root).color = Color::Red;
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[rstest]
    fn test_detects_consecutive_red() {
        let mut tree = balanced_tree();
        let two = id_of(&tree, 2);
        tree.node_mut(two).color = Color::Red;
        assert_eq!(tree.validate(), Err(InvariantViolation::ConsecutiveRed));
    }

    #[rstest]
    fn test_detects_black_height_mismatch() {
        let mut tree = balanced_tree();
        let seven = id_of(&tree, 7);
        tree.node_mut(seven).color = Color::Black;
        assert!(matches!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch { .. })
        ));
    }

    #[rstest]
    fn test_detects_broken_parent_link() {
        let mut tree = balanced_tree();
        let one = id_of(&tree, 1);
        let six = id_of(&tree, 6);
        tree.node_mut(one).parent = Some(six);
        assert_eq!(tree.validate(), Err(InvariantViolation::BrokenParentLink));
    }

    #[rstest]
    fn test_detects_out_of_order_keys() {
        let mut tree = balanced_tree();
        let one = id_of(&tree, 1);
        tree.node_mut(one).key = 10;
        assert_eq!(tree.validate(), Err(InvariantViolation::OutOfOrder));
    }

    #[rstest]
    fn test_detects_unreachable_nodes() {
        let mut tree = balanced_tree();
        let two = id_of(&tree, 2);
        tree.node_mut(two).left = None;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::SizeMismatch {
                recorded: 7,
                reachable: 6,
            })
        );
    }

    #[rstest]
    fn test_violation_display() {
        assert_eq!(InvariantViolation::RedRoot.to_string(), "root node is red");
        assert_eq!(
            InvariantViolation::SizeMismatch {
                recorded: 3,
                reachable: 2,
            }
            .to_string(),
            "size mismatch: tree records 3 entries but 2 are reachable"
        );
    }
}
