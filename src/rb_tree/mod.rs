//! Self-balancing ordered maps backed by a red-black tree.
//!
//! The [Wikipedia article] on red-black trees covers the algorithm in more detail.
//!
//! Insertion places a new red node at its binary search position and then walks up the tree repairing red-red violations by recoloring or rotating. Removal of a node with two children is turned into removal of its in-order successor (the left-most node of its right subtree), whose entry is swapped in first; removing a black node without a red child to recolor leaves a "double-black" deficit which is pushed up the tree until a rotation or recolor absorbs it.
//!
//! # Example
//! ```rust
//! use redblack::rb_tree::{RbTree, Color};
//!
//! // The turbofish there is needed to state that we are using the default storage method
//! // instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = RbTree::<_, _>::new();
//! for &key in &[1, 2, 0, 10, 7, -1] {
//!     tree.insert(key, f64::from(key) * 2.0).unwrap();
//! }
//! assert_eq!(tree.find(&7), Some(&14.0));
//! assert_eq!(tree.depth(), 2);
//!
//! // Inserting the same key twice hands the rejected entry back.
//! let error = tree.insert(7, 0.0).unwrap_err();
//! assert_eq!(error.into_inner(), (7, 0.0));
//!
//! // Removal returns the value which was stored under the key.
//! assert_eq!(tree.remove(&1), Ok(2.0));
//! assert!(tree.remove(&1).is_err());
//!
//! // Everything checks out, and the root is always black.
//! assert!(tree.is_binary() && tree.is_connected() && tree.is_red_black_tree());
//! assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree " "

mod base;
mod insert;
mod node;
mod node_ref;
mod remove;
mod rotate;
mod validate;

pub use base::RbTree;
pub use node::{Node, Color};
pub use node_ref::NodeRef;

use crate::storage::{SparseStorage, Slot};

/// A red-black tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `RbTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type SparseVecRbTree<K, V> = RbTree<K, V, crate::storage::SparseVec<Node<K, V>>>;

/// A red-black tree which uses a *sparse* [`ArrayVec`] as backing storage, and thus needs no memory allocator.
///
/// `A` is the array type of the `ArrayVec`, which has to be `[Slot<Node<K, V>>; N]` for some supported capacity `N`. Inserting into a full tree panics.
///
/// [`ArrayVec`]: https://docs.rs/arrayvec/0.5/arrayvec/struct.ArrayVec.html " "
pub type ArrayVecRbTree<K, V, A> = RbTree<K, V, SparseStorage<Node<K, V>, arrayvec::ArrayVec<A>>>;

/// The array type backing an [`ArrayVecRbTree`] with room for `N` nodes.
///
/// [`ArrayVecRbTree`]: type.ArrayVecRbTree.html " "
pub type NodeArray<K, V, const N: usize> = [Slot<Node<K, V>>; N];

#[cfg(all(test, feature = "std"))]
mod tests;
