//! Core trait for score providers.

/// Descriptive attributes of one candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateProfile {
    /// Key under which the candidate appears in the score map.
    pub id: String,
    /// Identity passed to the scorer.
    pub name: String,
    /// Quality rating, conventionally 0 to 5.
    pub rating: f64,
    /// How well the candidate fits the budget, conventionally 0 to 1.
    pub budget_fit: f64,
    /// Descriptive tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Category selecting a multiplier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
}

impl CandidateProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64, budget_fit: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            budget_fit,
            tags: Vec::new(),
            category: String::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Maps a candidate profile to a base score.
///
/// Implementations must be deterministic and free of side effects. Output
/// is intended to lie roughly in `[0, 2]`; the search does not clamp it.
/// Higher scores are better.
///
/// # Examples
///
/// ```
/// use u_select::scoring::{CandidateProfile, ScoreProvider};
///
/// struct RatingOnly;
///
/// impl ScoreProvider for RatingOnly {
///     type Error = std::convert::Infallible;
///
///     fn name(&self) -> &str { "RatingOnly" }
///
///     fn score(&self, profile: &CandidateProfile) -> Result<f64, Self::Error> {
///         Ok(profile.rating / 5.0)
///     }
/// }
/// ```
pub trait ScoreProvider: Send + Sync {
    /// Failure raised by the provider; propagated to callers unchanged.
    type Error;

    /// Returns the name of this provider.
    fn name(&self) -> &str;

    /// Computes the base score of a candidate.
    fn score(&self, profile: &CandidateProfile) -> Result<f64, Self::Error>;
}

/// Adapts a closure into a [`ScoreProvider`].
pub struct FnScorer<F> {
    name: String,
    f: F,
}

impl<F> FnScorer<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, E> ScoreProvider for FnScorer<F>
where
    F: Fn(&CandidateProfile) -> Result<f64, E> + Send + Sync,
{
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, profile: &CandidateProfile) -> Result<f64, E> {
        (self.f)(profile)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_profile_without_tags_or_category() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{"id":"mills","name":"The Mills","rating":4.7,"budget_fit":0.8}"#,
        )
        .unwrap();
        assert_eq!(profile, CandidateProfile::new("mills", "The Mills", 4.7, 0.8));
        assert!(profile.tags.is_empty());
        assert!(profile.category.is_empty());
    }

    #[test]
    fn test_profile_list() {
        let profiles: Vec<CandidateProfile> = serde_json::from_str(
            r#"[
                {"id":"a","name":"A","rating":4.0,"budget_fit":0.5,"tags":["cozy"],"category":"CALM"},
                {"id":"b","name":"B","rating":3.0,"budget_fit":1.0}
            ]"#,
        )
        .unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].tags, vec!["cozy".to_string()]);
        assert_eq!(profiles[0].category, "CALM");
    }
}
