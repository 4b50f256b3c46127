//! Jitter sources for write-phase keyframe positions.
//!
//! Jitter is injected rather than ambient: the compiler takes any [`Jitter`],
//! so tests can pass [`NoJitter`], a closure, or a seeded [`UniformJitter`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Perturbs a keyframe position (in percent).
pub trait Jitter {
    fn perturb(&mut self, position: f64) -> f64;
}

impl<F> Jitter for F
where
    F: FnMut(f64) -> f64,
{
    #[inline]
    fn perturb(&mut self, position: f64) -> f64 {
        self(position)
    }
}

/// Identity jitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    #[inline]
    fn perturb(&mut self, position: f64) -> f64 {
        position
    }
}

/// Uniform sample from `[position - variance, position + variance]`.
#[derive(Clone, Debug)]
pub struct UniformJitter<R = StdRng> {
    rng: R,
    variance: f64,
}

impl UniformJitter<StdRng> {
    /// Deterministic source; the same seed yields the same sequence.
    pub fn seeded(seed: u64, variance: f64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), variance)
    }

    pub fn from_entropy(variance: f64) -> Self {
        Self::new(StdRng::from_entropy(), variance)
    }
}

impl<R: Rng> UniformJitter<R> {
    /// Negative variances are treated as their magnitude.
    pub fn new(rng: R, variance: f64) -> Self {
        Self {
            rng,
            variance: variance.abs(),
        }
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }
}

impl<R: Rng> Jitter for UniformJitter<R> {
    fn perturb(&mut self, position: f64) -> f64 {
        let spread = self.variance;
        if spread > 0.0 && spread.is_finite() && position.is_finite() {
            self.rng.gen_range((position - spread)..=(position + spread))
        } else {
            position
        }
    }
}
