use core::fmt::{self, Debug, Formatter};
use crate::storage::{Storage, DefaultStorage};
use super::{
    node::{Node, Color, Side},
    RbTree,
};

/// A reference to a node in a red-black tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the storage, it can be used to walk the tree in any direction, including upwards.
pub struct NodeRef<'a, K, V, S = DefaultStorage<Node<K, V>>>
where S: Storage<Element = Node<K, V>>,
{
    tree: &'a RbTree<K, V, S>,
    index: usize,
}
impl<'a, K, V, S> NodeRef<'a, K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Creates a new `NodeRef` pointing to the specified index in the storage, or `None` if it does not name a node.
    #[inline]
    pub fn new_raw(tree: &'a RbTree<K, V, S>, index: usize) -> Option<Self> {
        if tree.storage.contains_key(index) {
            Some(Self::new_raw_unchecked(tree, index))
        } else {
            None
        }
    }
    /// Skips the presence check; only for indices read from live links.
    #[inline(always)]
    pub(super) fn new_raw_unchecked(tree: &'a RbTree<K, V, S>, index: usize) -> Self {
        Self { tree, index }
    }
    /// Returns the raw storage index of the node.
    #[inline(always)]
    pub fn raw_index(&self) -> usize {
        self.index
    }
    /// Returns the key of the entry stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }
    /// Returns the value of the entry stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }
    /// Returns the color of the node.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.node().color
    }
    /// Returns `true` if the node is red.
    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node()
            .parent
            .map(|index| Self::new_raw_unchecked(self.tree, index))
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().left().is_none() && self.node().right().is_none()
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.child(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    fn child(&self, side: Side) -> Option<Self> {
        self.node().child(side).map(|index| {
            debug_assert!(
                self.tree.storage.contains_key(index),
                "\
debug key check failed: tried to reference index {} which is not present in the storage",
                index,
            );
            Self::new_raw_unchecked(self.tree, index)
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.index)
    }
}
impl<K, V, S> Copy for NodeRef<'_, K, V, S>
where S: Storage<Element = Node<K, V>>,
{}
impl<K, V, S> Clone for NodeRef<'_, K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<K, V, S> Debug for NodeRef<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("color", &self.color())
            .field("left", &self.left_child())
            .field("right", &self.right_child())
            .finish()
    }
}
