use core::cmp::Ordering;
use crate::{storage::Storage, DuplicateKeyError};
use super::{
    base::CORRUPTED_TREE_MSG,
    node::{Node, Color, Side},
    RbTree,
};

/// One step of the insert fixup, classified from the neighborhood of the red node being fixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum InsertCase {
    /// The node is the root.
    Root,
    /// The parent is black, so nothing is violated.
    BlackParent,
    /// Parent and uncle are both red.
    RedUncle {
        parent: usize,
        uncle: usize,
        grandparent: usize,
    },
    /// Black uncle, and the node is an inner grandchild: it hangs on `side` of a parent which hangs on the other side of the grandparent.
    Bent { parent: usize, side: Side },
    /// Black uncle, and node and parent hang on the same `side`.
    Straight {
        parent: usize,
        grandparent: usize,
        side: Side,
    },
}
impl InsertCase {
    const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::BlackParent => "black parent",
            Self::RedUncle { .. } => "red uncle",
            Self::Bent { .. } => "bent path",
            Self::Straight { .. } => "straight path",
        }
    }
}

impl<K, V, S> RbTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Ord,
{
    /// Inserts a new entry into the tree.
    ///
    /// # Errors
    /// If the tree already contains an equal key, the key and the value are handed back inside the error and the tree is left unchanged; the existing value is *not* replaced.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError<K, V>> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = self.node(index);
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Err(DuplicateKeyError { key, value }),
            };
            parent = Some(index);
            cursor = node.child(side);
        }

        let new = self.storage.add(Node::new(key, value, parent));
        match parent {
            Some(parent) => self.node_mut(parent).set_child(side, Some(new)),
            None => self.root = Some(new),
        }
        self.fix_after_insert(new);
        Ok(())
    }
}

impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Restores the invariants after `node` was attached as a red leaf. Every step either stops or moves the red-red violation up toward the root.
    fn fix_after_insert(&mut self, mut node: usize) {
        loop {
            let case = self.classify_insert(node);
            log::trace!("insert fixup at node {}: {}", node, case.name());
            match case {
                InsertCase::Root => {
                    self.set_color(node, Color::Black);
                    return;
                }
                InsertCase::BlackParent => return,
                InsertCase::RedUncle {
                    parent,
                    uncle,
                    grandparent,
                } => {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                }
                InsertCase::Bent { parent, side } => {
                    // Lift the node into its parent's place; the old parent is now the
                    // outer grandchild and gets fixed as a straight path.
                    self.rotate(parent, side.opposite());
                    node = parent;
                }
                InsertCase::Straight {
                    parent,
                    grandparent,
                    side,
                } => {
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate(grandparent, side.opposite());
                    return;
                }
            }
        }
    }

    fn classify_insert(&self, node: usize) -> InsertCase {
        let parent = match self.node(node).parent {
            Some(parent) => parent,
            None => return InsertCase::Root,
        };
        if !self.is_red(Some(parent)) {
            return InsertCase::BlackParent;
        }
        // A red parent is never the root, so the grandparent exists
        let grandparent = self
            .node(parent)
            .parent
            .expect("red node without a parent found during insert fixup");
        let parent_side = self
            .node(grandparent)
            .side_of(parent)
            .expect(CORRUPTED_TREE_MSG);
        let uncle = self.node(grandparent).child(parent_side.opposite());
        match uncle {
            Some(uncle) if self.is_red(Some(uncle)) => InsertCase::RedUncle {
                parent,
                uncle,
                grandparent,
            },
            _ => {
                let side = self
                    .node(parent)
                    .side_of(node)
                    .expect(CORRUPTED_TREE_MSG);
                if side == parent_side {
                    InsertCase::Straight {
                        parent,
                        grandparent,
                        side,
                    }
                } else {
                    InsertCase::Bent { parent, side }
                }
            }
        }
    }
}
