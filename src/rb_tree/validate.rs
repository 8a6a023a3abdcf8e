//! Invariant checkers. These recompute everything from scratch and are meant for tests and debugging, not for the mutating operations themselves.
//!
//! None of them recurse: the links are first verified with a walk which only follows a child link after checking that the child names its parent correctly, after which the parent links can be trusted to climb back up. A corrupted arena therefore makes the checkers return `false` (or `None`) instead of looping or overflowing the stack.

use crate::storage::Storage;
use super::{node::Node, RbTree};

impl<K, V, S> RbTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Ord,
{
    /// Returns `true` if the keys are in binary search order.
    ///
    /// Every node is checked against the whole range its ancestors allow, not only against its immediate children, so a key which is in order with its parent but out of order with a more distant ancestor is caught too. A tree which fails [`is_connected`] is not considered binary.
    ///
    /// [`is_connected`]: #method.is_connected " "
    pub fn is_binary(&self) -> bool {
        if !self.is_connected() {
            return false;
        }
        // Strictly increasing in-order keys is the same as every subtree staying within its ancestors' bounds
        let mut keys = self.in_order_indices().map(|index| &self.node(index).key);
        let mut previous = match keys.next() {
            Some(key) => key,
            None => return true,
        };
        keys.all(|key| {
            let ordered = *previous < *key;
            previous = key;
            ordered
        })
    }
}

impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Returns `true` if every node's parent back-reference names the node which has it as a child, and the root has no parent.
    ///
    /// Also fails if a child link points to a slot which does not hold a node, or if a node has the same node as both children.
    pub fn is_connected(&self) -> bool {
        let root = match self.root {
            Some(root) => root,
            None => return true,
        };
        if self.storage.get(root).map_or(true, |root| root.parent.is_some()) {
            return false;
        }
        let mut previous = None;
        let mut current = Some(root);
        while let Some(index) = current {
            let node = self.node(index);
            let (left, right) = (node.left(), node.right());
            let from_above = previous == node.parent;
            if from_above {
                if left.is_some() && left == right {
                    return false;
                }
                let children_agree = [left, right].iter().flatten().all(|&child| {
                    self.storage
                        .get(child)
                        .map_or(false, |child_node| child_node.parent == Some(index))
                });
                if !children_agree {
                    return false;
                }
            }
            current = if from_above {
                left.or(right).or(node.parent)
            } else if left.is_some() && previous == left {
                right.or(node.parent)
            } else {
                node.parent
            };
            previous = Some(index);
        }
        true
    }

    /// Returns `true` if the coloring is valid: the root is black, no red node has a red child, and every path from a node down to a missing child passes through the same number of black nodes.
    ///
    /// An empty tree is a valid red-black tree. A tree which fails [`is_connected`] is not.
    ///
    /// [`is_connected`]: #method.is_connected " "
    pub fn is_red_black_tree(&self) -> bool {
        self.is_connected()
            && !self.is_red(self.root)
            && !self.has_red_red()
            && self.uniform_black_height().is_some()
    }
    /// Returns the number of black nodes on every path from the root down to a missing child, or `None` if the paths disagree or the tree fails [`is_connected`]. Missing children themselves are not counted, so the empty tree has a black height of `0`.
    ///
    /// [`is_connected`]: #method.is_connected " "
    pub fn black_height(&self) -> Option<usize> {
        if !self.is_connected() {
            return None;
        }
        self.uniform_black_height()
    }

    // Everything below trusts the parent links, so is_connected has to pass first.

    /// All root-to-missing-child paths agreeing is the same as every node's two subtrees agreeing, since paths through a node share everything above it. The walk keeps the black count of the path to the current node up to date as it moves.
    fn uniform_black_height(&self) -> Option<usize> {
        let mut index = match self.root {
            Some(root) => root,
            None => return Some(0),
        };
        let mut depth = self.blackness(index);
        let mut expected = None;
        while let Some(left) = self.node(index).left() {
            index = left;
            depth += self.blackness(index);
        }
        loop {
            let node = self.node(index);
            if node.left().is_none() || node.right().is_none() {
                match expected {
                    Some(known) if known != depth => return None,
                    Some(_) => {}
                    None => expected = Some(depth),
                }
            }
            if let Some(right) = node.right() {
                index = right;
                depth += self.blackness(index);
                while let Some(left) = self.node(index).left() {
                    index = left;
                    depth += self.blackness(index);
                }
                continue;
            }
            loop {
                let parent = match self.node(index).parent {
                    Some(parent) => parent,
                    None => return expected,
                };
                depth -= self.blackness(index);
                let from_left = self.node(parent).left() == Some(index);
                index = parent;
                if from_left {
                    break;
                }
            }
        }
    }
    #[inline]
    fn blackness(&self, index: usize) -> usize {
        usize::from(self.node(index).color.is_black())
    }
    fn has_red_red(&self) -> bool {
        self.in_order_indices().any(|index| {
            let node = self.node(index);
            node.color.is_red() && self.is_red(node.parent)
        })
    }

    fn in_order_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.root.map(|root| self.leftmost(root));
        core::iter::from_fn(move || {
            let index = next?;
            next = self.successor(index);
            Some(index)
        })
    }
    fn successor(&self, index: usize) -> Option<usize> {
        if let Some(right) = self.node(index).right() {
            return Some(self.leftmost(right));
        }
        let mut child = index;
        while let Some(parent) = self.node(child).parent {
            if self.node(parent).left() == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }
}
