//! Annealing search over a finite set of scored candidates.
//!
//! A Metropolis-criterion random walk: each iteration samples a candidate
//! uniformly, perturbs its base score with Gaussian noise, and accepts it
//! with probability `min(1, exp(delta / T))` while the temperature cools
//! geometrically. The search returns the final state of the walk, not
//! the best value it encountered.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::{AnnealConfig, CoolingSchedule, DEFAULT_SEED};
pub use runner::{
    anneal, anneal_default, metropolis_accept, metropolis_probability, Annealer,
};
pub use types::{ScoreMap, SearchResult};
