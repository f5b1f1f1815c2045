//! Injectable randomness for demo-mode critiques and fallback scores.
//!
//! `AppState` carries an `Arc<dyn RandomSource>`; production uses `ThreadRandom`,
//! tests pin values with their own implementations.

use rand::Rng;

pub trait RandomSource: Send + Sync {
    /// Uniform integer in `low..=high`.
    fn between(&self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;
}

/// Backed by the thread-local `rand` generator.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }

    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
