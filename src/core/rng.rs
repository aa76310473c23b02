//! Injected randomness for shuffles, role draws and epidemic placement.
//!
//! ## Key Features
//!
//! - **Injected**: The engine only sees the [`Randomness`] capability
//! - **Deterministic**: Same seed produces identical games
//! - **Serializable**: O(1) state capture and restore via [`GameRngState`]
//!
//! ## Usage
//!
//! ```
//! use outbreak_engine::core::{GameRng, Randomness};
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation
//! let mut replay = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! replay.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Randomness capability consumed by the engine.
///
/// Every random decision the engine makes goes through one of these three
/// operations, so a fixed implementation replays a game exactly.
pub trait Randomness {
    /// Pick `k` distinct elements (capped at the population size).
    fn sample<T: Clone>(&mut self, population: &[T], k: usize) -> Vec<T>;

    /// Uniformly permute a sequence in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Integer in `[low, high)`. Returns `low` when the range is empty.
    fn rand_int(&mut self, low: usize, high: usize) -> usize;
}

/// Seeded deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Randomness for GameRng {
    fn sample<T: Clone>(&mut self, population: &[T], k: usize) -> Vec<T> {
        let mut picked = population.to_vec();
        picked.shuffle(&mut self.inner);
        picked.truncate(k);
        picked
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    fn rand_int(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Randomness that never reorders anything.
///
/// Shuffles are no-ops, samples take the first `k` elements and every cut
/// lands at the start of its range. Handy for scripting exact board
/// situations.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityRng;

impl Randomness for IdentityRng {
    fn sample<T: Clone>(&mut self, population: &[T], k: usize) -> Vec<T> {
        population.iter().take(k).cloned().collect()
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn rand_int(&mut self, low: usize, _high: usize) -> usize {
        low
    }
}
