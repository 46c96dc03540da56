//! Injectable source of secret targets.
//!
//! In play this wraps a real RNG. Tests and scripted sessions inject a
//! seeded or fixed implementation.

use super::types::MaxRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a target uniformly in `[1, max]`.
pub trait TargetSource {
    /// Returns a number in `[1, range.get()]`.
    fn pick(&mut self, range: MaxRange) -> u32;
}

impl<T: TargetSource + ?Sized> TargetSource for &mut T {
    fn pick(&mut self, range: MaxRange) -> u32 {
        (**self).pick(range)
    }
}

impl<T: TargetSource + ?Sized> TargetSource for Box<T> {
    fn pick(&mut self, range: MaxRange) -> u32 {
        (**self).pick(range)
    }
}

/// Thread-local OS-seeded RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl TargetSource for ThreadRngSource {
    fn pick(&mut self, range: MaxRange) -> u32 {
        rand::thread_rng().gen_range(1..=range.get())
    }
}

/// Deterministic RNG for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Creates a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for SeededSource {
    fn pick(&mut self, range: MaxRange) -> u32 {
        self.rng.gen_range(1..=range.get())
    }
}

/// Always returns the same target, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub u32);

impl TargetSource for FixedTarget {
    fn pick(&mut self, range: MaxRange) -> u32 {
        self.0.clamp(1, range.get())
    }
}
