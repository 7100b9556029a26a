//! Call-scoped random sources.
//!
//! Every search owns two generators derived from one seed: a choice stream
//! (candidate sampling and Metropolis draws) and a noise stream (Gaussian
//! perturbation). Nothing here is process-global, so concurrent searches
//! never interfere and a fixed seed always replays the same trajectory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::SelectError;

/// Offset applied to the seed of the noise stream so it does not replay
/// the choice stream's bits.
const NOISE_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Noise scale must be finite and non-negative. `Normal::new` accepts a
/// negative standard deviation, so the sign is checked here.
pub(crate) fn check_noise_scale(scale: f64) -> Result<(), SelectError> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(())
    } else {
        Err(SelectError::invalid(
            "noise_scale",
            scale,
            "must be finite and non-negative",
        ))
    }
}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Zero-mean Gaussian noise with a fixed standard deviation.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    normal: Normal<f64>,
    rng: StdRng,
}

impl NoiseSource {
    /// Creates a noise source. `scale` must be finite and non-negative.
    pub fn new(scale: f64, seed: u64) -> Result<Self, SelectError> {
        check_noise_scale(scale)?;
        let normal = Normal::new(0.0, scale)
            .map_err(|_| SelectError::invalid("noise_scale", scale, "rejected by Normal"))?;
        Ok(Self {
            normal,
            rng: create_rng(seed.wrapping_add(NOISE_STREAM_OFFSET)),
        })
    }

    /// Draws one noise sample.
    pub fn sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }

    /// Returns `base` plus one fresh noise sample.
    pub fn perturb(&mut self, base: f64) -> f64 {
        base + self.sample()
    }
}

/// The pair of generators owned by a single search call.
#[derive(Debug, Clone)]
pub struct SearchRngs {
    /// Candidate choice and acceptance draws.
    pub choice: StdRng,
    /// Gaussian perturbation of scores.
    pub noise: NoiseSource,
}

impl SearchRngs {
    /// Seeds both streams for one search. `noise_scale` follows
    /// [`NoiseSource::new`].
    pub fn new(seed: u64, noise_scale: f64) -> Result<Self, SelectError> {
        Ok(Self {
            choice: create_rng(seed),
            noise: NoiseSource::new(noise_scale, seed)?,
        })
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        self.choice.random_range(0..len)
    }
}
