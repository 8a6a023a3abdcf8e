use arrayvec::{ArrayVec, Array};
use super::ListStorage;

impl<A> ListStorage for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        assert_eq!(
            capacity,
            A::CAPACITY,
            "specified capacity does not match the underlying array's size",
        );
        Self::new()
    }
    #[inline(always)]
    #[track_caller]
    fn push(&mut self, element: Self::Element) {
        if self.try_push(element).is_err() {
            panic!("ArrayVec storage is full (capacity {})", A::CAPACITY);
        }
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.as_mut_slice().get_mut(index)
    }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [Self::Element] {
        ArrayVec::as_mut_slice(self)
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > A::CAPACITY {
            unimplemented!("ArrayVec does not support allocating memory; use a Vec-backed storage if the tree has to grow")
        }
    }
}
