//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! Card colors and card decoration draw from separate context streams, so
//! changing how cards are decorated never changes which colors are dealt.
//!
//! ```
//! use colour_addict::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut colors = rng.for_context("colors");
//! let mut splashes = rng.for_context("splashes");
//!
//! // Streams are independent but reproducible.
//! let mut colors_again = GameRng::new(42).for_context("colors");
//! assert_eq!(colors.gen_range(0..=99), colors_again.gen_range(0..=99));
//! let _ = splashes.gen_range(0..=99);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Generate a random index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
