//! Utilities for treating the backing arena of the tree generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the main trait for the backing storages of trees
//! - [`ListStorage`], a trait used for implementing `Storage` for list-like collections
//! - [`SparseStorage`], a wrapper around `ListStorage`s which keeps the indices of live elements stable across removals
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified; takes different values depending on feature flags
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

/// Trait for containers which can be the backing arena of a tree.
///
/// Elements are named by `usize` indices. The tree links its nodes together by storing those indices, so an implementation must uphold the following:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - the index returned by `add` must keep naming the same element until that element is passed to `remove`, no matter how many other elements are added or removed in between;
/// - if an element is added at an index, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
pub trait Storage: Sized {
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified index, returning that index.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full.
    fn add(&mut self, element: Self::Element) -> usize;
    /// Removes and returns the element identified by `index` within the storage.
    ///
    /// # Panics
    /// Required to panic if the specified index does not name a live element.
    fn remove(&mut self, index: usize) -> Self::Element;
    /// Returns the number of live elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the index does not name a live element.
    fn get(&self, index: usize) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index does not name a live element.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element>;
    /// Returns mutable references to two *different* live elements at once, or `None` if the indices are equal or either of them does not name a live element.
    fn get_pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Option<(&mut Self::Element, &mut Self::Element)>;
    /// Removes all elements from the storage.
    fn clear(&mut self);

    /// Returns `true` if the specified index names a live element, `false` otherwise.
    #[inline]
    fn contains_key(&self, index: usize) -> bool {
        self.get(index).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// For storages which have a fixed capacity, this panics if the requested amount does not fit. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`SparseVec`] is used
/// - Otherwise, a [*sparse*][`SparseStorage`] [`ArrayVec`] *with zero-sized backing storage* is used, which means that trees using it cannot hold any nodes; pick an [`ArrayVecRbTree`] with an explicit capacity instead
///
/// [`SparseVec`]: type.SparseVec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/0.5/arrayvec/struct.ArrayVec.html " "
/// [`SparseStorage`]: struct.SparseStorage.html " "
/// [`ArrayVecRbTree`]: ../rb_tree/type.ArrayVecRbTree.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = SparseVec<T>;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = SparseStorage<T, arrayvec::ArrayVec<[Slot<T>; 0]>>;
