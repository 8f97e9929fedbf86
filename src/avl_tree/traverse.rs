//! Read-only walks over a settled tree.
//!
//! Each walk collects keys into a `Vec` in visiting order and leaves the tree untouched, so a walk
//! can be repeated any number of times. An empty tree yields an empty `Vec`.

use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;
use crate::avl_tree::Key;
use std::collections::VecDeque;

/// Visits a node, then its left subtree, then its right subtree.
pub(crate) fn pre_order(tree: &Tree) -> Vec<Key> {
    fn visit(tree: &Tree, keys: &mut Vec<Key>) {
        if let Some(node) = tree {
            keys.push(node.key);
            visit(&node.left, keys);
            visit(&node.right, keys);
        }
    }

    let mut keys = Vec::new();
    visit(tree, &mut keys);
    keys
}

/// Visits the left subtree, then the node, then the right subtree. The keys come out sorted.
pub(crate) fn in_order(tree: &Tree) -> Vec<Key> {
    fn visit(tree: &Tree, keys: &mut Vec<Key>) {
        if let Some(node) = tree {
            visit(&node.left, keys);
            keys.push(node.key);
            visit(&node.right, keys);
        }
    }

    let mut keys = Vec::new();
    visit(tree, &mut keys);
    keys
}

/// Visits the left subtree, then the right subtree, then the node.
pub(crate) fn post_order(tree: &Tree) -> Vec<Key> {
    fn visit(tree: &Tree, keys: &mut Vec<Key>) {
        if let Some(node) = tree {
            visit(&node.left, keys);
            visit(&node.right, keys);
            keys.push(node.key);
        }
    }

    let mut keys = Vec::new();
    visit(tree, &mut keys);
    keys
}

/// Visits nodes breadth-first from the root, enqueueing each node's left child before its right.
pub(crate) fn level_order(tree: &Tree) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut queue: VecDeque<&Node> = VecDeque::new();
    if let Some(root) = tree {
        queue.push_back(root);
    }

    while let Some(node) = queue.pop_front() {
        keys.push(node.key);
        if let Some(ref left) = node.left {
            queue.push_back(left);
        }
        if let Some(ref right) = node.right {
            queue.push_back(right);
        }
    }

    keys
}

/// Formats a key sequence as tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::{join_keys, AvlMap};
///
/// let mut map = AvlMap::new();
/// map.insert(2, 0);
/// map.insert(1, 0);
/// map.insert(3, 0);
///
/// assert_eq!(join_keys(&map.pre_order()), "2 1 3");
/// assert_eq!(join_keys(&[]), "");
/// ```
pub fn join_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{in_order, join_keys, level_order, post_order, pre_order};
    use crate::avl_tree::tree::{self, Tree};

    fn build(keys: &[i64]) -> Tree {
        let mut tree = None;
        for &key in keys {
            tree::insert(&mut tree, key, key);
        }
        tree
    }

    #[test]
    fn test_empty() {
        let tree: Tree = None;
        assert!(pre_order(&tree).is_empty());
        assert!(in_order(&tree).is_empty());
        assert!(post_order(&tree).is_empty());
        assert!(level_order(&tree).is_empty());
    }

    #[test]
    fn test_orders() {
        let tree = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(pre_order(&tree), vec![5, 3, 1, 4, 8, 7, 9]);
        assert_eq!(in_order(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(post_order(&tree), vec![1, 4, 3, 7, 9, 8, 5]);
        assert_eq!(level_order(&tree), vec![5, 3, 8, 1, 4, 7, 9]);
    }

    #[test]
    fn test_level_order_uneven() {
        let tree = build(&[2, 1, 3, 4]);
        assert_eq!(level_order(&tree), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_restartable() {
        let tree = build(&[1, 2, 3, 4, 5]);
        assert_eq!(level_order(&tree), level_order(&tree));
        assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_join_keys() {
        assert_eq!(join_keys(&[1, -3, 4]), "1 -3 4");
        assert_eq!(join_keys(&[7]), "7");
    }
}
