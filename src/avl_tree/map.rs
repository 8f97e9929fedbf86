use crate::avl_tree::render;
use crate::avl_tree::traverse;
use crate::avl_tree::tree;
use crate::avl_tree::{Key, Value};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered map from `i64` keys to `i64` values implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// restores the invariant with rotations on the way back up to the root.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.in_order(), vec![0, 3]);
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap {
    tree: tree::Tree,
    len: usize,
}

impl AvlMap {
    /// Constructs a new, empty `AvlMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map = AvlMap::new();
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced in place and the old key-value pair is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Option<(Key, Value)> {
        let ret = tree::insert(&mut self.tree, key, value);
        if ret.is_none() {
            self.len += 1;
        }
        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &Key) -> Option<(Key, Value)> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &Key) -> Option<&Value> {
        tree::get(&self.tree, key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        tree::get_mut(&mut self.tree, key).map(|node| &mut node.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree: `-1` when the map is empty and `0` when it holds a single
    /// key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), -1);
    /// for key in 1..=5 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&Key> {
        tree::min(&self.tree).map(|node| &node.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&Key> {
        tree::max(&self.tree).map(|node| &node.key)
    }

    /// Returns the keys of the map in pre-order: each node before its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 1..=3 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.pre_order(), vec![2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> Vec<Key> {
        traverse::pre_order(&self.tree)
    }

    /// Returns the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(3, 0);
    /// map.insert(1, 0);
    /// map.insert(2, 0);
    /// assert_eq!(map.in_order(), vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Vec<Key> {
        traverse::in_order(&self.tree)
    }

    /// Returns the keys of the map in post-order: each node after its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 1..=3 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.post_order(), vec![1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> Vec<Key> {
        traverse::post_order(&self.tree)
    }

    /// Returns the keys of the map level by level, starting from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 1..=4 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.level_order(), vec![2, 1, 3, 4]);
    /// ```
    pub fn level_order(&self) -> Vec<Key> {
        traverse::level_order(&self.tree)
    }

    /// Renders the tree as a sideways diagram with right subtrees above their parent and left
    /// subtrees below it. This is the same text produced by the `Display` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.render(), "");
    ///
    /// map.insert(2, 0);
    /// map.insert(1, 0);
    /// map.insert(3, 0);
    /// assert_eq!(map.render(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for AvlMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AvlMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render::fmt_tree(&self.tree, f)
    }
}

impl<'a> Index<&'a Key> for AvlMap {
    type Output = Value;

    fn index(&self, key: &'a Key) -> &Self::Output {
        self.get(key).expect("Key does not exist.")
    }
}

impl<'a> IndexMut<&'a Key> for AvlMap {
    fn index_mut(&mut self, key: &'a Key) -> &mut Self::Output {
        self.get_mut(key).expect("Key does not exist.")
    }
}
