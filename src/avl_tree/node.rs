use crate::avl_tree::tree;
use crate::avl_tree::{Key, Value};
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node {
    pub key: Key,
    pub value: Value,
    pub height: i32,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(key: Key, value: Value) -> Self {
        Node {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
