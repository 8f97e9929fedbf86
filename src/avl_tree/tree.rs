use crate::avl_tree::node::Node;
use crate::avl_tree::{Key, Value};
use std::cmp::Ordering;
use std::mem;

pub type Tree = Option<Box<Node>>;

pub fn height(tree: &Tree) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at key {}", node.key);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at key {}", node.key);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance(tree: &mut Tree) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a maximum node in the tree
fn remove_max(tree: &mut Tree) -> Box<Node> {
    if let Some(node) = tree.as_mut() {
        if node.right.is_some() {
            let max = remove_max(&mut node.right);
            balance(tree);
            return max;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.left.take();
            node
        },
        None => unreachable!(),
    }
}

pub fn insert(tree: &mut Tree, key: Key, value: Value) -> Option<(Key, Value)> {
    let ret = match tree {
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Greater => insert(&mut node.right, key, value),
            Ordering::Equal => {
                let old_value = mem::replace(&mut node.value, value);
                return Some((node.key, old_value));
            },
        },
        None => {
            debug!("creating node for key {}", key);
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    balance(tree);
    ret
}

pub fn remove(tree: &mut Tree, key: &Key) -> Option<(Key, Value)> {
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let entry = (node.key, node.value);
                match (node.left.take(), node.right.take()) {
                    (None, right) => {
                        debug!("removing node for key {}", node.key);
                        *tree = right;
                    },
                    (left, None) => {
                        debug!("removing node for key {}", node.key);
                        *tree = left;
                    },
                    (mut left, right) => {
                        let predecessor = remove_max(&mut left);
                        debug!(
                            "replacing key {} with predecessor {} and removing its node",
                            node.key, predecessor.key,
                        );
                        node.key = predecessor.key;
                        node.value = predecessor.value;
                        node.left = left;
                        node.right = right;
                        *tree = Some(node);
                    },
                }
                Some(entry)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn get<'a>(tree: &'a Tree, key: &Key) -> Option<&'a Node> {
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn get_mut<'a>(tree: &'a mut Tree, key: &Key) -> Option<&'a mut Node> {
    tree.as_mut().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut **node),
    })
}

pub fn min(tree: &Tree) -> Option<&Node> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &**curr
    })
}

pub fn max(tree: &Tree) -> Option<&Node> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &**curr
    })
}
