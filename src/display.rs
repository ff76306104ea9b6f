use std::fmt;

use crate::tree::{Node, Tree};

/// Renders the tree sideways using box-drawing characters: the right subtree
/// above its parent, the left subtree below, one node per line.
///
/// ```text
/// │   ┌── 3
/// └── 2
///     └── 1
/// ```
///
/// An empty tree renders as nothing at all.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => Ok(()),
            Some(root) => fmt_subtree(root, f, "", true),
        }
    }
}

/// Renders the subtree rooted at this node, same layout as the [`Tree`]
/// rendering.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_subtree(self, f, "", true)
    }
}

fn fmt_subtree<T: fmt::Display>(
    node: &Node<T>,
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        fmt_subtree(right, f, &deeper, false)?;
    }
    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.data()
    )?;
    if let Some(left) = node.left() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        fmt_subtree(left, f, &deeper, true)?;
    }
    Ok(())
}
