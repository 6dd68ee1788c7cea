//! Injectable randomness.
//!
//! Reaction and brief selection are the only non-deterministic choices in the
//! game. They go through [`RandomSource`] so scoring and transitions stay
//! reproducible under test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform picks.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. Returns `0` when `len` is `0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic source seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    inner: StdRng,
    seed: u64,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.random_range(0..len)
    }
}

/// Thread-local OS-seeded source for normal play.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same slot (clamped to the last one). Useful in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Pick one element of `items`, or `None` when empty.
pub fn pick_from<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()))
}
