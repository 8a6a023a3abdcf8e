use core::{borrow::Borrow, mem};
use crate::{storage::Storage, KeyNotFoundError};
use super::{
    base::CORRUPTED_TREE_MSG,
    node::{Node, Color, Side},
    RbTree,
};

/// One step of the double-black fixup, classified from the neighborhood of the node carrying the deficit.
///
/// `side` is the side of `parent` on which the deficient node hangs; the sibling hangs on the other one. The nephew on `side` of the sibling is the *near* one, the other is the *far* one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RemoveCase {
    /// The deficient node is the root, which absorbs the deficit.
    Root,
    /// The sibling is red.
    RedSibling {
        parent: usize,
        sibling: usize,
        side: Side,
    },
    /// Parent, sibling and both nephews are black.
    AllBlack { parent: usize, sibling: usize },
    /// Parent is red, sibling and both nephews are black.
    RedParent { parent: usize, sibling: usize },
    /// Sibling is black, near nephew is red and far nephew is black.
    RedNearNephew {
        sibling: usize,
        near: usize,
        side: Side,
    },
    /// Sibling is black and far nephew is red.
    RedFarNephew {
        parent: usize,
        sibling: usize,
        far: usize,
        side: Side,
    },
}
impl RemoveCase {
    const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::RedSibling { .. } => "red sibling",
            Self::AllBlack { .. } => "all black",
            Self::RedParent { .. } => "red parent",
            Self::RedNearNephew { .. } => "red near nephew",
            Self::RedFarNephew { .. } => "red far nephew",
        }
    }
}

impl<K, V, S> RbTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Ord,
{
    /// Removes the entry with the specified key from the tree, returning its value.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Errors
    /// Fails if the tree does not contain the key, in which case the tree is left unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.find_index(key).ok_or(KeyNotFoundError)?;
        Ok(self.remove_at(index).1)
    }
    /// Removes the entry with the specified key from the tree, returning the stored key along with the value.
    ///
    /// # Errors
    /// Fails if the tree does not contain the key, in which case the tree is left unchanged.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.find_index(key).ok_or(KeyNotFoundError)?;
        Ok(self.remove_at(index))
    }
}

impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Unlinks the node at `index` from the tree, rebalancing it, and returns the entry which was stored there.
    fn remove_at(&mut self, index: usize) -> (K, V) {
        let node = self.node(index);
        let target = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                // The successor has no left child, so at most one child is left to splice
                let successor = self.leftmost(right);
                self.swap_entries(index, successor);
                successor
            }
            _ => index,
        };

        let node = self.node(target);
        let child = node.left().or_else(|| node.right());
        if node.color.is_black() {
            if self.is_red(child) {
                // The red child takes over the black of the removed node
                if let Some(child) = child {
                    self.set_color(child, Color::Black);
                }
            } else {
                // The target has to stay linked while the fixup looks at its relatives
                self.fix_double_black(target);
            }
        }

        // Rotations in the fixup may have moved the target under a new parent
        let parent = self.node(target).parent;
        self.replace_child(parent, target, child);
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        let removed = self.storage.remove(target);
        (removed.key, removed.value)
    }

    /// Exchanges keys and values of two nodes, leaving links and colors alone.
    #[track_caller]
    fn swap_entries(&mut self, first: usize, second: usize) {
        let (first, second) = self
            .storage
            .get_pair_mut(first, second)
            .expect(CORRUPTED_TREE_MSG);
        mem::swap(&mut first.key, &mut second.key);
        mem::swap(&mut first.value, &mut second.value);
    }

    /// Resolves the missing black on every path through `node`, a black node which is about to be spliced out. Every step either stops or moves the deficit up toward the root.
    fn fix_double_black(&mut self, mut node: usize) {
        loop {
            let case = self.classify_remove(node);
            log::trace!("remove fixup at node {}: {}", node, case.name());
            match case {
                RemoveCase::Root => return,
                RemoveCase::RedSibling {
                    parent,
                    sibling,
                    side,
                } => {
                    self.set_color(parent, Color::Red);
                    self.set_color(sibling, Color::Black);
                    self.rotate(parent, side);
                    // The node now has a black sibling; classify again
                }
                RemoveCase::AllBlack { sibling, parent } => {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                }
                RemoveCase::RedParent { parent, sibling } => {
                    self.set_color(sibling, Color::Red);
                    self.set_color(parent, Color::Black);
                    return;
                }
                RemoveCase::RedNearNephew {
                    sibling,
                    near,
                    side,
                } => {
                    self.set_color(sibling, Color::Red);
                    self.set_color(near, Color::Black);
                    self.rotate(sibling, side.opposite());
                    // The old sibling is now a red far nephew
                }
                RemoveCase::RedFarNephew {
                    parent,
                    sibling,
                    far,
                    side,
                } => {
                    let parent_color = self.node(parent).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(parent, side);
                    return;
                }
            }
        }
    }

    fn classify_remove(&self, node: usize) -> RemoveCase {
        let parent = match self.node(node).parent {
            Some(parent) => parent,
            None => return RemoveCase::Root,
        };
        let side = self
            .node(parent)
            .side_of(node)
            .expect(CORRUPTED_TREE_MSG);
        // The node carries a black that its sibling's subtree has too, so the sibling is real
        let sibling = self
            .node(parent)
            .child(side.opposite())
            .expect("black node without a sibling found during remove fixup");
        if self.is_red(Some(sibling)) {
            return RemoveCase::RedSibling {
                parent,
                sibling,
                side,
            };
        }
        let near = self.node(sibling).child(side);
        let far = self.node(sibling).child(side.opposite());
        match (near, far) {
            (_, Some(far)) if self.is_red(Some(far)) => RemoveCase::RedFarNephew {
                parent,
                sibling,
                far,
                side,
            },
            (Some(near), _) if self.is_red(Some(near)) => RemoveCase::RedNearNephew {
                sibling,
                near,
                side,
            },
            _ if self.is_red(Some(parent)) => RemoveCase::RedParent { parent, sibling },
            _ => RemoveCase::AllBlack { parent, sibling },
        }
    }
}
