//! Random index sources for the computer's fallback move.
//!
//! The heuristic only draws randomness when neither player has a
//! two-in-a-row to complete. Tests inject a [`SeededSource`] (or their own
//! [`IndexSource`]) so that branch is reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies uniform indices into a list of candidates.
pub trait IndexSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SeededSource {
    inner: ChaCha8Rng,
}

impl SeededSource {
    /// Create a new source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Non-deterministic source for interactive play.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSource;

impl IndexSource for ThreadSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
