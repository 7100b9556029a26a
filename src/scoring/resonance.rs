//! Weighted-sum resonance scorer.

use std::collections::BTreeSet;

use super::config::{CategoryTable, ScoringWeights};
use super::types::{CandidateProfile, ScoreProvider};
use crate::error::SelectError;

/// Tags that earn the per-tag bonus by default.
pub const DEFAULT_FAVORED_TAGS: [&str; 4] = ["cozy", "quiet", "zen", "artistic"];

/// Scores a candidate as a weighted sum of rating, favored tags and
/// budget fit, scaled by its category multiplier.
///
/// # Examples
///
/// ```
/// use u_select::scoring::{CandidateProfile, ResonanceScorer, ScoreProvider};
///
/// let scorer = ResonanceScorer::default();
/// let profile = CandidateProfile::new("mills", "The Mills", 4.7, 0.8)
///     .with_tags(["cozy", "artistic"])
///     .with_category("CALM");
/// let score = scorer.score(&profile).unwrap();
/// assert!((score - 0.706).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ResonanceScorer {
    weights: ScoringWeights,
    favored_tags: BTreeSet<String>,
    categories: CategoryTable,
}

impl Default for ResonanceScorer {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            favored_tags: DEFAULT_FAVORED_TAGS.iter().map(|t| t.to_string()).collect(),
            categories: CategoryTable::standard(),
        }
    }
}

impl ResonanceScorer {
    /// Builds a scorer after validating weights and multipliers.
    pub fn new<I, S>(
        weights: ScoringWeights,
        favored_tags: I,
        categories: CategoryTable,
    ) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        weights.validate()?;
        categories.validate()?;
        Ok(Self {
            weights,
            favored_tags: favored_tags
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            categories,
        })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Number of favored tags in `tags`; repeated tags count each time.
    fn matched_tags(&self, tags: &[String]) -> usize {
        tags.iter()
            .filter(|t| self.favored_tags.contains(&t.to_lowercase()))
            .count()
    }
}

impl ScoreProvider for ResonanceScorer {
    type Error = SelectError;

    fn name(&self) -> &str {
        "Resonance"
    }

    fn score(&self, profile: &CandidateProfile) -> Result<f64, SelectError> {
        for (field, value) in [("rating", profile.rating), ("budget_fit", profile.budget_fit)] {
            if !value.is_finite() {
                return Err(SelectError::InvalidProfile {
                    candidate: profile.id.clone(),
                    field,
                    value,
                });
            }
        }

        let w = &self.weights;
        let quality = profile.rating / w.rating_scale * w.rating;
        let tag_bonus = self.matched_tags(&profile.tags) as f64 * w.tag_bonus;
        let composite = quality + tag_bonus * w.tags + profile.budget_fit * w.budget;
        Ok(composite * self.categories.multiplier(&profile.category))
    }
}
