//! Injectable randomness seam for the prediction core.
//!
//! The estimator, scenario, and forecast code never touch a global RNG
//! directly; they draw through [`NoiseSource`] so production wiring can use
//! real entropy while tests supply a seeded or scripted source.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded-uniform draws consumed by the prediction core.
pub trait NoiseSource: Send + Sync {
    /// Sample the continuous uniform distribution over `[low, high)`.
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// Sample an integer uniformly from `[low, high]`, both ends inclusive.
    fn uniform_int(&self, low: i64, high: i64) -> i64;
}

/// Production source backed by the calling thread's generator.
///
/// Stateless, so concurrent requests need no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..high)
    }

    fn uniform_int(&self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible source over a seeded [`StdRng`].
///
/// The generator sits behind a mutex; draws serialize, which is acceptable
/// for the test and demo runs this exists for.
#[derive(Debug)]
pub struct SeededNoise {
    rng: Mutex<StdRng>,
}

impl SeededNoise {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl NoiseSource for SeededNoise {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        self.with_rng(|rng| rng.gen_range(low..high))
    }

    fn uniform_int(&self, low: i64, high: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}

/// Degenerate source that returns a constant factor for every continuous
/// draw and the lower bound for every integer draw.
///
/// `FixedNoise::new(1.0)` turns the estimator's noise term off, which is how
/// the formula's deterministic behavior is asserted in tests and in the
/// health self-check.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise {
    factor: f64,
}

impl FixedNoise {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl NoiseSource for FixedNoise {
    fn uniform(&self, _low: f64, _high: f64) -> f64 {
        self.factor
    }

    fn uniform_int(&self, low: i64, _high: i64) -> i64 {
        low
    }
}

/// Source that replays a pre-recorded sequence of draws.
///
/// Continuous and integer draws consume from separate scripts. When a script
/// runs out, continuous draws fall back to the midpoint of the requested
/// range and integer draws to the lower bound.
#[derive(Debug, Default)]
pub struct ScriptedNoise {
    draws: Mutex<VecDeque<f64>>,
    int_draws: Mutex<VecDeque<i64>>,
}

impl ScriptedNoise {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
            int_draws: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_int_draws(mut self, draws: impl IntoIterator<Item = i64>) -> Self {
        self.int_draws = Mutex::new(draws.into_iter().collect());
        self
    }
}

impl NoiseSource for ScriptedNoise {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        let mut draws = self.draws.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draws.pop_front().unwrap_or_else(|| (low + high) / 2.0)
    }

    fn uniform_int(&self, low: i64, _high: i64) -> i64 {
        let mut draws = self
            .int_draws
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        draws.pop_front().unwrap_or(low)
    }
}
