//! Implements an arena-allocated red-black tree map, along with checkers for the invariants it maintains.
//!
//! # Overview
//! [`RbTree`] is an associative container keyed by any [`Ord`] type which stores one value per key and guarantees *O*(log *n*) insertion, removal and lookup by rebalancing itself after every mutation.
//!
//! Nodes are not allocated one by one. Instead, they live in a backing "arena", typically a [`Vec`], and refer to their children and to their parent by indices into it, a technique commonly referred to as ["arena-allocated trees"][arena tree blog post]. This keeps parent back-references from turning the tree into a graph of shared pointers: children are owned through the indices their parent stores, while the index a child stores for its parent is only ever used for navigation.
//!
//! # Storage
//! The trait used for defining the arena type is `Storage`. The tree always uses it through `SparseStorage`, which wraps a list-like collection (anything implementing `ListStorage`) and makes sure that removing a node never moves the others around:
//! - [`Vec`] (with the `alloc` feature): the default
//! - [`ArrayVec`]: for a fixed-capacity tree which works without a global allocator
//!
//! # Invariants
//! After every completed insertion or removal, the following holds:
//! 1. Keys are in binary search order: every key in a node's left subtree is strictly less than the node's key, and every key in its right subtree is strictly greater.
//! 2. The root, if any, is black.
//! 3. A red node never has a red child. Missing children count as black.
//! 4. Every path from a node down to a missing child passes through the same number of black nodes.
//! 5. Every non-root node is a child of the node it names as its parent.
//!
//! [`RbTree::is_binary`], [`RbTree::is_connected`] and [`RbTree::is_red_black_tree`] check those from scratch and are meant for tests.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types.
//! - `alloc` (**enabled by default**): adds the `ListStorage` implementation for [`Vec`] and makes it the default storage. *This does not require standard library support.*
//! - `random` (**enabled by default**): adds [`UniqueRandom`], a source of integers drawn without replacement which is handy for stress-testing the tree. Pulls in `rand` and requires `std`.
//! - `doc_cfg`: shows feature requirements in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `rand` (*optional*): `^0.9`
//!
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/0.5/arrayvec/struct.ArrayVec.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`RbTree`]: rb_tree/struct.RbTree.html " "
//! [`RbTree::is_binary`]: rb_tree/struct.RbTree.html#method.is_binary " "
//! [`RbTree::is_connected`]: rb_tree/struct.RbTree.html#method.is_connected " "
//! [`RbTree::is_red_black_tree`]: rb_tree/struct.RbTree.html#method.is_red_black_tree " "
//! [`UniqueRandom`]: random/struct.UniqueRandom.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod rb_tree;
pub use rb_tree::RbTree;

#[cfg(feature = "random")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "random")))]
pub mod random;
#[cfg(feature = "random")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "random")))]
pub use random::UniqueRandom;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::rb_tree::{
        RbTree,
        Color as RbTreeColor,
        NodeRef as RbTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::{DuplicateKeyError, KeyNotFoundError};
    #[cfg(feature = "random")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "random")))]
    #[doc(no_inline)]
    pub use crate::random::UniqueRandom;
}

use core::fmt::{self, Formatter, Display};

/// The error type returned by [`RbTree::insert`] when the tree already contains the key.
///
/// The tree is left unchanged.
///
/// [`RbTree::insert`]: rb_tree/struct.RbTree.html#method.insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DuplicateKeyError<K, V> {
    /// The provided key, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
    pub key: K,
    /// The provided value, returned for the same reason as the key.
    pub value: V,
}
impl<K, V> DuplicateKeyError<K, V> {
    /// Extracts the rejected key and value.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}
impl<K, V> Display for DuplicateKeyError<K, V> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the tree already contains the key")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<K: fmt::Debug, V: fmt::Debug> std::error::Error for DuplicateKeyError<K, V> {}

/// The error type returned by [`RbTree::remove`] when the tree does not contain the key.
///
/// The tree is left unchanged.
///
/// [`RbTree::remove`]: rb_tree/struct.RbTree.html#method.remove " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError;
impl Display for KeyNotFoundError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the key was not found in the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for KeyNotFoundError {}
