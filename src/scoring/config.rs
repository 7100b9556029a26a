//! Scoring weights and the category multiplier table.

use std::collections::BTreeMap;

use crate::error::SelectError;

/// Reference frequency the standard category table is normalized by.
pub const REFERENCE_FREQUENCY: f64 = 432.0;

/// Weights of the composite resonance score.
///
/// `score = (rating / rating_scale * rating
///          + matched_tags * tag_bonus * tags
///          + budget_fit * budget) * category_multiplier`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Weight of the normalized rating.
    pub rating: f64,
    /// Weight of the accumulated tag bonus.
    pub tags: f64,
    /// Weight of the budget-fit factor.
    pub budget: f64,
    /// Bonus contributed by each favored tag.
    pub tag_bonus: f64,
    /// Rating that normalizes to 1.0.
    pub rating_scale: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: 0.4,
            tags: 0.3,
            budget: 0.3,
            tag_bonus: 0.15,
            rating_scale: 5.0,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), SelectError> {
        for (name, value) in [
            ("rating", self.rating),
            ("tags", self.tags),
            ("budget", self.budget),
            ("tag_bonus", self.tag_bonus),
        ] {
            if !value.is_finite() {
                return Err(SelectError::invalid(name, value, "weight must be finite"));
            }
        }
        if !self.rating_scale.is_finite() || self.rating_scale <= 0.0 {
            return Err(SelectError::invalid(
                "rating_scale",
                self.rating_scale,
                "must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Injected mapping from category name to a positive score multiplier.
///
/// Lookups are case-insensitive. Unknown categories use
/// `default_multiplier` (1.0 unless overridden).
///
/// # Examples
///
/// ```
/// use u_select::scoring::CategoryTable;
///
/// let table = CategoryTable::new()
///     .with_category("calm", 1.0)
///     .with_category("focus", 1.7);
/// assert_eq!(table.multiplier("FOCUS"), 1.7);
/// assert_eq!(table.multiplier("unknown"), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryTable {
    multipliers: BTreeMap<String, f64>,
    default_multiplier: f64,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTable {
    /// An empty table; every category maps to 1.0.
    pub fn new() -> Self {
        Self {
            multipliers: BTreeMap::new(),
            default_multiplier: 1.0,
        }
    }

    /// The reference table, each frequency divided by 432 Hz.
    pub fn standard() -> Self {
        [
            ("HAPPY", 440.0),
            ("CALM", 432.0),
            ("FOCUS", 741.0),
            ("LUCKY", 528.0),
            ("HUNGRY", 852.0),
            ("ROMANTIC", 639.0),
        ]
        .into_iter()
        .fold(Self::new(), |table, (name, hz)| {
            table.with_category(name, hz / REFERENCE_FREQUENCY)
        })
    }

    pub fn with_category(mut self, name: &str, multiplier: f64) -> Self {
        self.multipliers.insert(name.to_uppercase(), multiplier);
        self
    }

    pub fn with_default_multiplier(mut self, multiplier: f64) -> Self {
        self.default_multiplier = multiplier;
        self
    }

    /// Multiplier for `category`, falling back to the default.
    pub fn multiplier(&self, category: &str) -> f64 {
        self.multipliers
            .get(&category.to_uppercase())
            .copied()
            .unwrap_or(self.default_multiplier)
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// All multipliers, including the default, must be finite and positive.
    pub fn validate(&self) -> Result<(), SelectError> {
        let positive = |m: f64| m.is_finite() && m > 0.0;
        if !positive(self.default_multiplier) {
            return Err(SelectError::invalid(
                "default_multiplier",
                self.default_multiplier,
                "must be finite and positive",
            ));
        }
        if let Some(&m) = self.multipliers.values().find(|&&m| !positive(m)) {
            return Err(SelectError::invalid(
                "category_multiplier",
                m,
                "must be finite and positive",
            ));
        }
        Ok(())
    }
}
