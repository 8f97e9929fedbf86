use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;
use std::fmt;

const TAIL: &str = "└── ";
const BRANCH: &str = "┌── ";
const BAR: &str = "│   ";
const BLANK: &str = "    ";

// Right subtrees are drawn above their parent and left subtrees below it. `is_tail` is set for
// nodes drawn below their parent, which is also how the root is drawn.
fn fmt_node(node: &Node, prefix: &str, is_tail: bool, f: &mut fmt::Formatter) -> fmt::Result {
    if let Some(ref right) = node.right {
        let child_prefix = format!("{}{}", prefix, if is_tail { BAR } else { BLANK });
        fmt_node(right, &child_prefix, false, f)?;
    }

    writeln!(f, "{}{}{}", prefix, if is_tail { TAIL } else { BRANCH }, node.key)?;

    if let Some(ref left) = node.left {
        let child_prefix = format!("{}{}", prefix, if is_tail { BLANK } else { BAR });
        fmt_node(left, &child_prefix, true, f)?;
    }

    Ok(())
}

pub fn fmt_tree(tree: &Tree, f: &mut fmt::Formatter) -> fmt::Result {
    match tree {
        Some(node) => fmt_node(node, "", true, f),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_tree;
    use crate::avl_tree::tree::{self, Tree};
    use std::fmt;

    struct Diagram(Tree);

    impl fmt::Display for Diagram {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            fmt_tree(&self.0, f)
        }
    }

    fn render(keys: &[i64]) -> String {
        let mut tree = None;
        for &key in keys {
            tree::insert(&mut tree, key, key);
        }
        Diagram(tree).to_string()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_single() {
        assert_eq!(render(&[1]), "└── 1\n");
    }

    #[test]
    fn test_render_three() {
        let expected = concat!(
            "│   ┌── 3\n",
            "└── 2\n",
            "    └── 1\n",
        );
        assert_eq!(render(&[2, 1, 3]), expected);
    }

    #[test]
    fn test_render_nested() {
        let expected = concat!(
            "│       ┌── 9\n",
            "│   ┌── 8\n",
            "│   │   └── 7\n",
            "└── 5\n",
            "    │   ┌── 4\n",
            "    └── 3\n",
            "        └── 1\n",
        );
        assert_eq!(render(&[5, 3, 8, 1, 4, 7, 9]), expected);
    }
}
