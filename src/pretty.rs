//! Sideways rendering of a [`Tree`] for eyeballing its shape.
//!
//! The tree is drawn rotated a quarter turn counter-clockwise: each node's right subtree is
//! printed above its line and its left subtree below, so reading the values top to bottom gives
//! them in descending order.
//!
//! ```
//! use bst::Tree;
//!
//! let tree = Tree::build(1..=3);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "│   ┌── 3\n└── 2\n    └── 1\n",
//! );
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `prefix` holds the connectors drawn by the ancestors and
/// `is_left` says which side of its parent `node` hangs off of (the root counts as left).
fn write_node<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        write_node(f, right, &prefix, false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        write_node(f, left, &prefix, true)?;
    }

    Ok(())
}
