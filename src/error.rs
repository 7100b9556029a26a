//! Error type shared by the search and scoring layers.

use std::fmt;

/// Errors raised before a search or scoring pass begins.
///
/// An empty candidate set is deliberately absent here: it yields
/// [`SearchResult::empty`](crate::anneal::SearchResult::empty) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    /// A configuration value is outside its valid range.
    InvalidParameter {
        /// Parameter name as it appears in the config.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },

    /// A base score is NaN or infinite.
    NonFiniteScore {
        /// Identifier of the offending candidate.
        candidate: String,
        /// The rejected score.
        score: f64,
    },

    /// A candidate profile carries a non-finite numeric attribute.
    InvalidProfile {
        /// Identity of the offending profile.
        candidate: String,
        /// Attribute name (`rating` or `budget_fit`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl SelectError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SelectError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid parameter {name} = {value}: {reason}"),
            SelectError::NonFiniteScore { candidate, score } => {
                write!(f, "candidate {candidate:?} has non-finite score {score}")
            }
            SelectError::InvalidProfile {
                candidate,
                field,
                value,
            } => write!(f, "candidate {candidate:?} has non-finite {field} {value}"),
        }
    }
}

impl std::error::Error for SelectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_parameter() {
        let err = SelectError::invalid("noise_scale", -0.5, "must be non-negative");
        assert_eq!(
            err.to_string(),
            "invalid parameter noise_scale = -0.5: must be non-negative"
        );
    }

    #[test]
    fn test_display_non_finite_score() {
        let err = SelectError::NonFiniteScore {
            candidate: "A".into(),
            score: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "candidate \"A\" has non-finite score inf");
    }
}
