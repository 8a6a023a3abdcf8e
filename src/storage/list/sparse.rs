use core::mem;
use super::ListStorage;
use crate::storage::Storage;

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;

/// A wrapper around a list-like storage type which never moves elements once they are added.
///
/// Sparse storage with element type `E` wraps a list storage which stores `Slot<E>`, each of which holds either an element or a "hole". Removing an element replaces it with a hole instead of shifting the elements after it, so the indices which tree nodes store to refer to each other never get invalidated.
///
/// Holes are threaded into a singly linked free list. `add` fills the most recently punched hole first and only grows the backing storage when there are no holes left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Number of holes, index of the first one
    hole_list: Option<(usize, usize)>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.storage
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage tracks the number of holes it creates and fills.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0)
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }
}

static HOLE_PANIC_MSG: &str = "\
the index does not name a live element of the sparse storage";

impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Element = E;

    #[inline]
    #[track_caller]
    fn add(&mut self, element: Self::Element) -> usize {
        if let Some((holes, first)) = self.hole_list {
            let slot = self.storage.get_mut(first).expect(HOLE_PANIC_MSG);
            let next = slot.hole_link();
            *slot = Slot::new_element(element);
            self.hole_list = match next {
                Some(next) if holes > 1 => Some((holes - 1, next)),
                _ => None,
            };
            first
        } else {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        }
    }
    #[inline]
    #[track_caller]
    fn remove(&mut self, index: usize) -> Self::Element {
        let next = self.hole_list.map(|(_, first)| first);
        let element = self
            .storage
            .get_mut(index)
            .and_then(|slot| slot.punch_hole(next))
            .expect(HOLE_PANIC_MSG);
        self.hole_list = Some((self.num_holes() + 1, index));
        element
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {storage: S::with_capacity(capacity), hole_list: None}
    }
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.storage.get(index).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.storage.get_mut(index).and_then(Slot::element_mut)
    }
    fn get_pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Option<(&mut Self::Element, &mut Self::Element)> {
        if first == second {
            return None;
        }
        let slice = self.storage.as_mut_slice();
        if first.max(second) >= slice.len() {
            return None;
        }
        // Split so that each half holds exactly one of the two slots
        let (low, high) = slice.split_at_mut(first.max(second));
        let (first_slot, second_slot) = if first < second {
            (&mut low[first], &mut high[0])
        } else {
            (&mut high[0], &mut low[second])
        };
        Some((first_slot.element_mut()?, second_slot.element_mut()?))
    }
    #[inline]
    fn clear(&mut self) {
        self.storage.clear();
        self.hole_list = None;
    }

    #[inline(always)]
    fn new() -> Self {
        Self {storage: S::new(), hole_list: None}
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        // Holes get filled before the backing storage grows
        let needed = additional.saturating_sub(self.num_holes());
        self.storage.reserve(needed)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A slot inside a sparse storage.
///
/// This is an opaque structure, only public so that the backing storage of a `SparseStorage` can be named in type signatures, e.g. `ArrayVec<[Slot<T>; 64]>`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T> (SlotInner<T>);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum SlotInner<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self (SlotInner::Element(val))
    }
    #[inline(always)]
    fn element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline(always)]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline(always)]
    fn hole_link(&self) -> Option<usize> {
        match self.0 {
            SlotInner::Hole(x) => x,
            SlotInner::Element(..) => None,
        }
    }
    /// Turns the slot into a hole linking to `next`, returning the element, or `None` without modifying anything if it already was a hole.
    fn punch_hole(&mut self, next: Option<usize>) -> Option<T> {
        match self.0 {
            SlotInner::Element(..) => match mem::replace(&mut self.0, SlotInner::Hole(next)) {
                SlotInner::Element(val) => Some(val),
                SlotInner::Hole(..) => None,
            },
            SlotInner::Hole(..) => None,
        }
    }
}
