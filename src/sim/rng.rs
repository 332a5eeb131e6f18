//! Seeded random draws for spawning and target selection

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Game RNG (PCG32, serializable so a state can be cloned mid-run)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max]` (inclusive)
    pub fn int_in(&mut self, min: i64, max: i64) -> i64 {
        self.inner.random_range(min..=max)
    }

    /// Uniform float in `[min, max)`
    pub fn float_in(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.inner.random_range(min..max)
    }

    /// Uniform roll in `[0, 1)`
    pub fn roll(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Pick one element of a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        let idx = self.inner.random_range(0..items.len());
        items[idx]
    }
}
