//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod map;
mod node;
mod render;
mod traverse;
mod tree;

pub use self::map::AvlMap;
pub use self::traverse::join_keys;

/// The key type stored in an `AvlMap`.
pub type Key = i64;

/// The value type stored in an `AvlMap`.
pub type Value = i64;
