//! Pluggable randomness for tie-breaks and drift jitter.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The two random decisions the physics passes make, behind a trait so
/// tests can substitute a deterministic sequence.
pub trait RandomSource {
    /// Uniform pick between two outcomes.
    fn coin_flip(&mut self) -> bool;

    /// Uniform real in `[lo, hi)`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;
}

/// Default source: a seeded [`SmallRng`]. Statistical quality is all the
/// simulation needs, and an explicit seed keeps the wasm build free of
/// entropy syscalls while making runs reproducible.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        self.0.gen_range(lo..hi)
    }
}

/// Deterministic source for tests: replays the scripted values in order
/// and falls back to `false` / `0.0` once a script runs out. Zero jitter
/// keeps kinetic grains in their column, which makes trajectories exact.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    flips: VecDeque<bool>,
    reals: VecDeque<f32>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(flips: &[bool], reals: &[f32]) -> Self {
        Self {
            flips: flips.iter().copied().collect(),
            reals: reals.iter().copied().collect(),
        }
    }

    /// Empty script: every flip is `false`, every jitter is `0.0`.
    #[must_use]
    pub fn still() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn uniform(&mut self, _lo: f32, _hi: f32) -> f32 {
        self.reals.pop_front().unwrap_or(0.0)
    }
}
