//! Deterministic pseudo-random sequence generation.
//!
//! [`LcgRandom`] backs every piece of game logic that needs a cheap
//! reproducible integer stream: ore placement, decoration jitter, mob
//! spawn rolls. State transitions use explicit 32-bit wrapping arithmetic,
//! never the machine word size, so a stored world seed replays the exact
//! same sequence on every platform.

/// Largest span `range` accepts; wider spans would bias the modulo draw.
const MAX_RANGE_SPAN: i64 = 3276;

/// 32-bit linear congruential generator.
///
/// Two generators created from the same seed produce identical draw
/// sequences, across calls, process restarts, and platforms. A single
/// instance must stay confined to one thread; create one generator per
/// worker instead of sharing.
#[derive(Debug, Clone)]
pub struct LcgRandom {
    state: i32,
}

impl LcgRandom {
    /// Create a generator whose sequence starts from `seed`.
    #[must_use]
    pub const fn from_seed(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Restart the sequence from `seed`, discarding the current state.
    pub const fn set_seed(&mut self, seed: i32) {
        self.state = seed;
    }

    /// Advance the state and return the next draw, in `[0, 32767]`.
    pub const fn next_i32(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (self.state as u32 / 65536 % 32768) as i32
    }

    /// Draw a value in `[min, max]`, both ends inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or if `max - min` exceeds 3276. Both are
    /// caller bugs, not recoverable conditions.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "inverted range: min {min} > max {max}");
        let span = i64::from(max) - i64::from(min);
        assert!(
            span <= MAX_RANGE_SPAN,
            "range span {span} exceeds the supported maximum of {MAX_RANGE_SPAN}"
        );
        min + self.next_i32() % (span as i32 + 1)
    }
}
