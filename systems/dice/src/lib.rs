#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Six-sided die for driving the Ladders engine.
//!
//! The engine only ever receives die values; this crate is where they come
//! from. A seeded [`Dice`] replays the same sequence on every run.

use ladders_core::{MAX_DIE_VALUE, MIN_DIE_VALUE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform d6 backed by a ChaCha stream.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: ChaCha8Rng,
    last: Option<u8>,
}

impl Dice {
    /// Creates a die whose rolls are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a die seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng, last: None }
    }

    /// Rolls the die.
    pub fn roll(&mut self) -> u8 {
        let value = self.rng.gen_range(MIN_DIE_VALUE..=MAX_DIE_VALUE);
        self.last = Some(value);
        value
    }

    /// Most recent roll, `None` before the first.
    #[must_use]
    pub const fn last(&self) -> Option<u8> {
        self.last
    }
}
