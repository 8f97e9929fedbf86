//! An ordered map from `i64` keys to `i64` values backed by an AVL tree, together with the
//! traversal and rendering routines used to inspect its shape.

#[macro_use]
extern crate log;

pub mod avl_tree;
