use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
};
use crate::storage::{Storage, DefaultStorage};
use super::{
    node::{Node, Color},
    NodeRef,
};

/// A self-balancing ordered map backed by a red-black tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct RbTree<K, V, S = DefaultStorage<Node<K, V>>>
where S: Storage<Element = Node<K, V>>,
{
    pub(super) storage: S,
    pub(super) root: Option<usize>,
}

pub(super) static CORRUPTED_TREE_MSG: &str = "\
tree corruption detected: a node links to an index which does not name a live node";

impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified capacity does not match it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Returns the number of entries in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no entries, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Removes all entries from the tree, releasing every node.
    pub fn clear(&mut self) {
        log::debug!("clearing red-black tree with {} nodes", self.len());
        self.storage.clear();
        self.root = None;
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, K, V, S>> {
        self.root.map(|index| NodeRef::new_raw_unchecked(self, index))
    }
    /// Returns the length of the longest path from the root to a missing child, counted in edges between real nodes: `-1` for an empty tree, `0` for a tree with only the root.
    pub fn depth(&self) -> isize {
        self.subtree_depth(self.root)
    }
    fn subtree_depth(&self, node: Option<usize>) -> isize {
        match node {
            Some(index) => {
                let node = self.node(index);
                1 + self
                    .subtree_depth(node.left())
                    .max(self.subtree_depth(node.right()))
            }
            None => -1,
        }
    }
}
impl<K, V, S> RbTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Ord,
{
    /// Returns a reference to the value stored under the key, or `None` if the tree does not contain it.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed form *must* match the ordering on the key type.
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_index(key).map(|index| &self.node(index).value)
    }
    /// Returns a *mutable* reference to the value stored under the key, or `None` if the tree does not contain it.
    #[inline]
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.find_index(key)?;
        Some(&mut self.node_mut(index).value)
    }
    /// Returns `true` if the tree contains the key, `false` otherwise.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_index(key).is_some()
    }

    pub(super) fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = self.node(index);
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(index),
            };
        }
        None
    }
}

// Navigation helpers shared by the fixup state machines.
impl<K, V, S> RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    #[inline]
    #[track_caller]
    pub(super) fn node(&self, index: usize) -> &Node<K, V> {
        self.storage.get(index).expect(CORRUPTED_TREE_MSG)
    }
    #[inline]
    #[track_caller]
    pub(super) fn node_mut(&mut self, index: usize) -> &mut Node<K, V> {
        self.storage.get_mut(index).expect(CORRUPTED_TREE_MSG)
    }
    /// Missing nodes are black.
    #[inline]
    pub(super) fn color_of(&self, node: Option<usize>) -> Color {
        node.map_or(Color::Black, |index| self.node(index).color)
    }
    #[inline]
    pub(super) fn is_red(&self, node: Option<usize>) -> bool {
        self.color_of(node).is_red()
    }
    #[inline]
    pub(super) fn set_color(&mut self, index: usize, color: Color) {
        self.node_mut(index).color = color;
    }
    /// Puts `new` in the place which `old` occupies under `parent`, or makes it the root if `parent` is `None`. Does not touch the back-reference of `new`.
    #[track_caller]
    pub(super) fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                let side = parent.side_of(old).expect(CORRUPTED_TREE_MSG);
                parent.set_child(side, new);
            }
            None => self.root = new,
        }
    }
    /// Returns the left-most node of the subtree rooted at `index`.
    pub(super) fn leftmost(&self, mut index: usize) -> usize {
        while let Some(left) = self.node(index).left() {
            index = left;
        }
        index
    }
}

impl<K, V, S> Default for RbTree<K, V, S>
where S: Storage<Element = Node<K, V>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K, V, S> Clone for RbTree<K, V, S>
where S: Storage<Element = Node<K, V>> + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            root: self.root,
        }
    }
}
impl<K, V, S> Debug for RbTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTree")
            .field("len", &self.len())
            .field("root", &self.root())
            .finish()
    }
}
