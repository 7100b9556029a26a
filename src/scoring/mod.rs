//! Candidate scoring.
//!
//! Turns descriptive candidate attributes into the base scores consumed
//! by [`anneal`](crate::anneal). Providers are pluggable through the
//! [`ScoreProvider`] trait; [`ResonanceScorer`] is the stock weighted-sum
//! implementation with an injected [`CategoryTable`].

mod config;
mod pipeline;
mod resonance;
mod types;

pub use config::{CategoryTable, ScoringWeights, REFERENCE_FREQUENCY};
pub use pipeline::score_candidates;
pub use resonance::{ResonanceScorer, DEFAULT_FAVORED_TAGS};
pub use types::{CandidateProfile, FnScorer, ScoreProvider};
