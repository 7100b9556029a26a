//! Stochastic candidate selection by simulated annealing.
//!
//! Picks a near-optimal entry from a finite set of scored candidates
//! without exhaustive comparison:
//!
//! - **Scoring**: a pluggable [`ScoreProvider`](scoring::ScoreProvider)
//!   maps each candidate's attributes to a base score.
//! - **Annealing**: a Metropolis-criterion walk over the resulting
//!   [`ScoreMap`](anneal::ScoreMap) with Gaussian score noise and a
//!   geometric cooling schedule.
//!
//! Every search owns its random generators, so a fixed seed replays the
//! same trajectory and concurrent searches never interfere.
//!
//! # Examples
//!
//! ```
//! use u_select::anneal::{Annealer, AnnealConfig};
//! use u_select::scoring::{score_candidates, CandidateProfile, ResonanceScorer};
//!
//! let profiles = vec![
//!     CandidateProfile::new("cafe", "The Mills", 4.7, 0.8).with_tags(["cozy"]),
//!     CandidateProfile::new("noodles", "Old School", 4.2, 0.95).with_category("LUCKY"),
//! ];
//! let scores = score_candidates(&ResonanceScorer::default(), &profiles).unwrap();
//! let result = Annealer::run(&scores, &AnnealConfig::default()).unwrap();
//! assert_eq!(result.iterations, 58);
//! ```

pub mod anneal;
pub mod error;
pub mod random;
pub mod scoring;

pub use error::SelectError;
