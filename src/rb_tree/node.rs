/// The color of a node in a red-black tree.
///
/// Missing children are treated as [`Black`] everywhere.
///
/// [`Black`]: #variant.Black " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node. Red nodes never have red children.
    Red,
    /// A black node. Every path from a node down to a missing child has the same number of those.
    Black,
}
impl Color {
    /// Returns `true` if the color is red.
    #[inline(always)]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }
    /// Returns `true` if the color is black.
    #[inline(always)]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
impl Side {
    #[inline(always)]
    pub(super) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
    #[inline(always)]
    pub(super) const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
    #[inline(always)]
    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// A node of a red-black tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    /// Indexed by `Side`
    children: [Option<usize>; 2],
    pub(super) parent: Option<usize>,
    pub(super) color: Color,
}
impl<K, V> Node<K, V> {
    /// Creates a freshly inserted node: red, childless.
    #[inline(always)]
    pub(super) const fn new(key: K, value: V, parent: Option<usize>) -> Self {
        Self {
            key,
            value,
            children: [None, None],
            parent,
            color: Color::Red,
        }
    }
    #[inline(always)]
    pub(super) const fn child(&self, side: Side) -> Option<usize> {
        self.children[side.index()]
    }
    #[inline(always)]
    pub(super) fn set_child(&mut self, side: Side, child: Option<usize>) {
        self.children[side.index()] = child;
    }
    #[inline(always)]
    pub(super) const fn left(&self) -> Option<usize> {
        self.child(Side::Left)
    }
    #[inline(always)]
    pub(super) const fn right(&self) -> Option<usize> {
        self.child(Side::Right)
    }
    /// Returns the side on which `child` hangs off this node, or `None` if it is not a child of this node.
    #[inline]
    pub(super) fn side_of(&self, child: usize) -> Option<Side> {
        if self.left() == Some(child) {
            Some(Side::Left)
        } else if self.right() == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
