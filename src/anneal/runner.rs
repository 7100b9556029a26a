//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Empty candidate set: return [`SearchResult::empty`] without iterating.
//! 2. Pick an initial candidate uniformly; its value is base score plus noise.
//! 3. While `T > T_min`: draw a candidate uniformly (with replacement),
//!    perturb its score, accept by the Metropolis criterion, cool.
//! 4. Return the final current state and the iteration count.
//!
//! Scores are maximized: a positive delta is an improvement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace};

use super::config::{AnnealConfig, DEFAULT_SEED};
use super::types::{ScoreMap, SearchResult};
use crate::error::SelectError;
use crate::random::SearchRngs;

/// Probability of accepting a transition with the given score delta.
///
/// Improvements (`delta > 0`) are always accepted. Otherwise the
/// probability is `exp(delta / T)`, which is exactly 1.0 for `delta == 0`.
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else {
        (delta / temperature).exp()
    }
}

/// Metropolis acceptance test.
///
/// A uniform draw is consumed only when `delta <= 0`. A zero delta goes
/// through the draw and is accepted because the draw lies in `[0, 1)`.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta > 0.0 || rng.random::<f64>() < metropolis_probability(delta, temperature)
}

/// Runs a search with the default schedule and the given noise and seed.
///
/// # Examples
///
/// ```
/// use u_select::anneal::{anneal, ScoreMap};
///
/// let scores: ScoreMap = [("A", 1.0), ("B", 0.2)].into_iter().collect();
/// let result = anneal(&scores, 0.15, 42).unwrap();
/// assert_eq!(result.iterations, 58);
/// assert!(scores.contains(result.candidate.as_deref().unwrap()));
/// ```
pub fn anneal(scores: &ScoreMap, noise_scale: f64, seed: u64) -> Result<SearchResult, SelectError> {
    let config = AnnealConfig::default()
        .with_noise_scale(noise_scale)
        .with_seed(seed);
    Annealer::run(scores, &config)
}

/// Runs [`anneal`] with noise 0.15 and the default seed.
pub fn anneal_default(scores: &ScoreMap) -> Result<SearchResult, SelectError> {
    anneal(scores, 0.15, DEFAULT_SEED)
}

/// Executes annealing searches.
pub struct Annealer;

impl Annealer {
    /// Runs one search.
    pub fn run(scores: &ScoreMap, config: &AnnealConfig) -> Result<SearchResult, SelectError> {
        Self::run_with_cancel(scores, config, None)
    }

    /// Runs one search with an optional cancellation token.
    ///
    /// The token is checked once per iteration. A cancelled search still
    /// returns the current state, with `cancelled` set.
    pub fn run_with_cancel(
        scores: &ScoreMap,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SelectError> {
        if scores.is_empty() {
            debug!("empty candidate set, skipping search");
            return Ok(SearchResult::empty());
        }
        config.validate()?;
        scores.validate()?;

        let (ids, base) = scores.to_columns();
        let mut rngs = SearchRngs::new(config.seed, config.noise_scale)?;

        let mut current = rngs.pick(ids.len());
        let mut current_value = rngs.noise.perturb(base[current]);

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        debug!(
            candidates = ids.len(),
            seed = config.seed,
            noise_scale = config.noise_scale,
            initial = ids[current],
            "starting annealing search"
        );

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let next = rngs.pick(ids.len());
            let next_value = rngs.noise.perturb(base[next]);
            let delta = next_value - current_value;

            if delta > 0.0 {
                improving_moves += 1;
            }
            let accept = metropolis_accept(delta, temperature, &mut rngs.choice);
            if accept {
                current = next;
                current_value = next_value;
                accepted_moves += 1;
            }
            trace!(
                iteration = iterations,
                temperature,
                candidate = ids[next],
                delta,
                accept,
                "transition"
            );

            temperature = config.cooling.checked_cool(temperature)?;
            iterations += 1;
        }

        debug!(
            winner = ids[current],
            value = current_value,
            iterations,
            accepted_moves,
            cancelled,
            "annealing search finished"
        );

        Ok(SearchResult {
            candidate: Some(ids[current].to_owned()),
            value: current_value,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cancelled,
        })
    }

    /// Runs one independent search per candidate set.
    ///
    /// Every search builds its own generators from `config.seed`, so the
    /// results equal those of calling [`Annealer::run`] on each set in turn.
    /// With the `parallel` feature the sets are searched on the rayon pool.
    pub fn run_many(
        sets: &[ScoreMap],
        config: &AnnealConfig,
    ) -> Result<Vec<SearchResult>, SelectError> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            sets.par_iter().map(|s| Self::run(s, config)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            sets.iter().map(|s| Self::run(s, config)).collect()
        }
    }
}
