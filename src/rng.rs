//! Tie-break randomness.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).
//! The engine only sees the [`JitterSource`] trait so tests can swap in a
//! seeded or silent source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the jitter added to each candidate score.
pub const JITTER_MAX: f64 = 1e-4;

/// Supplies the small positive value used to break score ties.
pub trait JitterSource {
    /// A value in `[0, JITTER_MAX)`.
    fn jitter(&mut self) -> f64;
}

/// Production jitter backed by `SmallRng`.
pub struct TieBreakRng {
    inner: SmallRng,
}

impl TieBreakRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for TieBreakRng {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for TieBreakRng {
    #[inline(always)]
    fn jitter(&mut self) -> f64 {
        self.inner.random::<f64>() * JITTER_MAX
    }
}

/// Always zero; exact ties then keep row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    #[inline(always)]
    fn jitter(&mut self) -> f64 {
        0.0
    }
}
