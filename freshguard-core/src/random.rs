//! Randomness Sources for Reading Synthesis
//!
//! All non-determinism in the engine flows through [`RandomSource`]. The
//! synthesizer and the history reseeder never touch a global RNG directly, so
//! tests can swap in a fixed or scripted sequence and assert exact values.
//!
//! ## Implementations
//!
//! - `ThreadRandom`: process thread RNG, used in production
//! - `SeededRandom`: reproducible pseudo-random stream for property tests
//! - `FixedRandom`: always returns the same draw (0.5 zeroes the noise term)
//! - `SequenceRandom`: replays a scripted list of draws, cycling
//!
//! ```rust
//! use freshguard_core::random::{FixedRandom, RandomSource};
//!
//! let mut rng = FixedRandom::new(0.5);
//! assert_eq!(rng.next_unit(), 0.5);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource: Send {
    /// Next draw, uniform in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// True with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }
}

/// Thread-local RNG from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded, reproducible RNG
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Stream seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same draw every time
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    /// Clamped into `[0, 1)`
    pub fn new(value: f64) -> Self {
        Self {
            value: clamp_unit(value),
        }
    }

    /// Draw that makes the centered noise term exactly zero
    pub fn centered() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}

/// Replays a scripted list of draws, wrapping at the end
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// An empty script behaves like `FixedRandom::centered()`
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(clamp_unit).collect(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Largest f64 strictly below 1.0
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.5;
    }
    value.clamp(0.0, BELOW_ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles() {
        let mut rng = SequenceRandom::new([0.1, 0.2, 0.3]);
        let draws: Vec<f64> = (0..5).map(|_| rng.next_unit()).collect();
        assert_eq!(draws, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn draws_are_clamped_below_one() {
        let mut rng = FixedRandom::new(1.0);
        assert!(rng.next_unit() < 1.0);

        let mut rng = SequenceRandom::new([-3.0, f64::NAN]);
        assert_eq!(rng.next_unit(), 0.0);
        assert_eq!(rng.next_unit(), 0.5);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..16 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn uniform_and_chance() {
        let mut rng = FixedRandom::new(0.25);
        assert_eq!(rng.uniform(10.0, 30.0), 15.0);
        assert!(rng.chance(0.7));
        assert!(!rng.chance(0.25));
    }

    #[test]
    fn thread_random_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
