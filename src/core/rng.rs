//! Deterministic random number generation for move selection.
//!
//! Random moves are only taken when no cell is proven safe. Seeding the RNG
//! makes whole sessions reproducible.
//!
//! ```
//! use sweep_kb::core::ProbeRng;
//!
//! let mut rng1 = ProbeRng::new(7);
//! let mut rng2 = ProbeRng::new(7);
//! let cells = [1, 2, 3, 4, 5];
//!
//! assert_eq!(rng1.choose(&cells), rng2.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct ProbeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ProbeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
