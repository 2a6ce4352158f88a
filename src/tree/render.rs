//! Human-readable rendering of the tree shape.
//!
//! The output is meant for debugging and is not a stable format. The right
//! subtree is drawn above its parent and the left subtree below it, so the
//! keys read in descending order from top to bottom:
//!
//! ```text
//! RedBlackTree
//! │       ┌── 6
//! │   ┌── 5
//! │   │   └── 4
//! └── 3
//!     │   ┌── 2
//!     └── 1
//! ```

use super::{NodeId, RedBlackTree};
use std::fmt;

impl<K: fmt::Display, V, C> RedBlackTree<K, V, C> {
    fn render_node(
        &self,
        formatter: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        is_tail: bool,
    ) -> fmt::Result {
        let node = self.node(id);
        if let Some(right) = node.right {
            let extension = if is_tail { "│   " } else { "    " };
            self.render_node(formatter, right, &format!("{prefix}{extension}"), false)?;
        }

        let connector = if is_tail { "└── " } else { "┌── " };
        writeln!(formatter, "{prefix}{connector}{}", node.key)?;

        if let Some(left) = node.left {
            let extension = if is_tail { "    " } else { "│   " };
            self.render_node(formatter, left, &format!("{prefix}{extension}"), true)?;
        }
        Ok(())
    }
}

impl<K: fmt::Display, V, C> fmt::Display for RedBlackTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "RedBlackTree")?;
        match self.root {
            Some(root) => self.render_node(formatter, root, "", true),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_empty_tree() {
        let tree: RedBlackTree<i32, ()> = RedBlackTree::new();
        assert_eq!(tree.to_string(), "RedBlackTree\n");
    }

    #[rstest]
    fn test_display_starts_with_container_name() {
        let mut tree = RedBlackTree::new();
        tree.put("a", 1);
        assert!(tree.to_string().starts_with("RedBlackTree"));
    }

    #[rstest]
    fn test_display_draws_shape() {
        let mut tree = RedBlackTree::new();
        for key in 1..=6 {
            tree.put(key, ());
        }
        let expected = "\
RedBlackTree
│           ┌── 6
│       ┌── 5
│   ┌── 4
│   │   └── 3
└── 2
    └── 1
";
        assert_eq!(tree.to_string(), expected);
    }
}
