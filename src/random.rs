//! A source of random integers which can draw without replacement.
//!
//! Feeding a tree keys in random order is the easiest way to exercise every rebalancing case; drawing them without replacement guarantees that no insertion gets rejected as a duplicate, and the recorded history gives the exact insertion order back when something needs to be reproduced.
//!
//! # Example
//! ```rust
//! use redblack::{RbTree, UniqueRandom};
//!
//! let mut keys = UniqueRandom::new(0, 99).unwrap();
//! let mut tree = RbTree::<_, _>::new();
//! while let Ok(key) = keys.draw_unique() {
//!     tree.insert(key, ()).unwrap();
//! }
//! assert_eq!(tree.len(), 100);
//! assert_eq!(keys.history().len(), 100);
//! assert!(tree.is_red_black_tree());
//! ```

use core::fmt::{self, Formatter, Display};
use std::collections::HashMap;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draws random integers from an inclusive range, either freely or without replacement.
#[derive(Clone, Debug)]
pub struct UniqueRandom<R = StdRng> {
    min: i64,
    max: i64,
    /// How many integers `draw_unique` can still return. They occupy the first `remaining` slots of a virtual shuffled copy of the range, where slot `n` holds `min + n` unless `moved` says otherwise.
    remaining: u64,
    /// Slots below `remaining` whose integer was moved there by an earlier draw.
    moved: HashMap<u64, i64>,
    history: Vec<i64>,
    rng: R,
}
impl UniqueRandom<StdRng> {
    /// Creates a source for the inclusive range `min..=max`, seeded from the operating system.
    ///
    /// # Errors
    /// The range is rejected unless `0 <= min < max`.
    pub fn new(min: i64, max: i64) -> Result<Self, InvalidRangeError> {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }
    /// Creates a source for the inclusive range `min..=max` which produces the same sequence for the same seed.
    ///
    /// # Errors
    /// The range is rejected unless `0 <= min < max`.
    pub fn from_seed(min: i64, max: i64, seed: u64) -> Result<Self, InvalidRangeError> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }
}
impl<R: Rng> UniqueRandom<R> {
    /// Creates a source for the inclusive range `min..=max` which draws from the specified generator.
    ///
    /// # Errors
    /// The range is rejected unless `0 <= min < max`.
    pub fn with_rng(min: i64, max: i64, rng: R) -> Result<Self, InvalidRangeError> {
        if min < 0 || min >= max {
            return Err(InvalidRangeError { min, max });
        }
        Ok(Self {
            min,
            max,
            // min >= 0, so the distance fits and adding one cannot overflow
            remaining: max.abs_diff(min) + 1,
            moved: HashMap::new(),
            history: Vec::new(),
            rng,
        })
    }
    /// Returns a random integer from the range. Integers drawn this way may repeat and are not recorded in the history.
    pub fn draw(&mut self) -> i64 {
        self.rng.random_range(self.min..=self.max)
    }
    /// Returns a random integer from the range which no earlier call has returned, and records it in the history.
    ///
    /// # Errors
    /// Fails once every integer in the range has been drawn.
    pub fn draw_unique(&mut self) -> Result<i64, RangeExhaustedError> {
        if self.remaining == 0 {
            return Err(RangeExhaustedError);
        }
        // One step of a Fisher-Yates shuffle over slots which are only materialized once disturbed
        let position = self.rng.random_range(0..self.remaining);
        let last = self.remaining - 1;
        let drawn = self.slot(position);
        let last_value = self.slot(last);
        self.moved.insert(position, last_value);
        self.moved.remove(&last);
        self.remaining = last;
        self.history.push(drawn);
        Ok(drawn)
    }
    fn slot(&self, position: u64) -> i64 {
        // position < max - min + 1, so the sum stays within min..=max
        self.moved
            .get(&position)
            .copied()
            .unwrap_or(self.min + position as i64)
    }
    /// Returns the integers returned by `draw_unique` so far, in the order they were drawn.
    #[inline(always)]
    pub fn history(&self) -> &[i64] {
        &self.history
    }
    /// Returns how many integers `draw_unique` can still return.
    #[inline(always)]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }
    /// Returns the inclusive range the integers are drawn from, as `(min, max)`.
    #[inline(always)]
    pub const fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

/// The error type returned by [`UniqueRandom::draw_unique`] once every integer of the range has been drawn.
///
/// [`UniqueRandom::draw_unique`]: struct.UniqueRandom.html#method.draw_unique " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeExhaustedError;
impl Display for RangeExhaustedError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("every integer in the range has already been drawn")
    }
}
impl std::error::Error for RangeExhaustedError {}

/// The error type returned when creating a [`UniqueRandom`] with a range it does not support.
///
/// [`UniqueRandom`]: struct.UniqueRandom.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidRangeError {
    /// The lower bound which was passed.
    pub min: i64,
    /// The upper bound which was passed.
    pub max: i64,
}
impl Display for InvalidRangeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!(
            "invalid range {}..={}: the bounds must satisfy 0 <= min < max",
            self.min, self.max,
        ))
    }
}
impl std::error::Error for InvalidRangeError {}
