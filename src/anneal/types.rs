//! Candidate sets and search results.

use std::collections::BTreeMap;

use crate::error::SelectError;

/// Mapping from candidate identifier to base score.
///
/// Keys are unique. Candidates are kept in key order so that index-based
/// sampling is independent of insertion order and of any hasher state,
/// which is what makes a seeded search replay identically across runs.
///
/// # Examples
///
/// ```
/// use u_select::anneal::ScoreMap;
///
/// let scores: ScoreMap = [("B", 0.4), ("A", 1.2)].into_iter().collect();
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores.get("A"), Some(1.2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScoreMap {
    entries: BTreeMap<String, f64>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a candidate, returning the previous score.
    pub fn insert(&mut self, id: impl Into<String>, score: f64) -> Option<f64> {
        self.entries.insert(id.into(), score)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates candidates in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Rejects NaN or infinite scores.
    pub fn validate(&self) -> Result<(), SelectError> {
        match self.entries.iter().find(|(_, s)| !s.is_finite()) {
            Some((id, &score)) => Err(SelectError::NonFiniteScore {
                candidate: id.clone(),
                score,
            }),
            None => Ok(()),
        }
    }

    /// Splits into parallel id/score vectors for indexed sampling.
    pub(crate) fn to_columns(&self) -> (Vec<&str>, Vec<f64>) {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v)).unzip()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, f64)> for ScoreMap {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

/// Outcome of one annealing search.
///
/// `candidate` and `value` describe the final state of the random walk,
/// which is not necessarily the best value observed during the search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Selected candidate, or `None` for an empty candidate set.
    pub candidate: Option<String>,

    /// Perturbed value of the selected candidate at its last evaluation.
    pub value: f64,

    /// Number of loop iterations executed.
    pub iterations: usize,

    /// Number of accepted transitions (including improvements).
    pub accepted_moves: usize,

    /// Number of transitions with strictly positive delta.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether the search was cancelled externally.
    pub cancelled: bool,
}

impl SearchResult {
    /// The "no candidate" result: `(None, 0.0, 0)`.
    pub fn empty() -> Self {
        Self {
            candidate: None,
            value: 0.0,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            final_temperature: 0.0,
            cancelled: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidate.is_none()
    }

    /// The `(candidate, value, iterations)` triple.
    pub fn summary(&self) -> (Option<&str>, f64, usize) {
        (self.candidate.as_deref(), self.value, self.iterations)
    }
}
