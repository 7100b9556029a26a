//! Annealing configuration and cooling schedules.

use crate::error::SelectError;
use crate::random::check_noise_scale;

/// Default seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 96_315_013;

/// Cooling schedule for temperature reduction.
///
/// Cooling is applied once per iteration, unconditionally, so the number
/// of iterations depends only on the schedule and never on acceptance.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter, strictly positive.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Applies one cooling step.
    pub fn cool(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }

    /// Applies one cooling step, failing if the temperature does not drop.
    ///
    /// With Lundy-Mees a tiny `beta * T` rounds `1 + beta * T` to 1, which
    /// would keep the loop above the floor forever.
    pub fn checked_cool(&self, temperature: f64) -> Result<f64, SelectError> {
        let next = self.cool(temperature);
        if next < temperature {
            Ok(next)
        } else {
            Err(SelectError::invalid(
                "cooling",
                temperature,
                "cooling step does not lower the temperature",
            ))
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.88 }
    }
}

/// Configuration for an annealing search over a [`ScoreMap`](super::ScoreMap).
///
/// # Examples
///
/// ```
/// use u_select::anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.0)
///     .with_min_temperature(0.01)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 })
///     .with_noise_scale(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Temperature floor. The search stops once T drops to or below it.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Standard deviation of the Gaussian noise added on every evaluation.
    /// Zero compares base scores only.
    pub noise_scale: f64,

    /// Seed for both the choice and the noise stream.
    pub seed: u64,

    /// Hard iteration ceiling. 0 = no limit.
    pub max_iterations: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.5,
            min_temperature: 0.001,
            cooling: CoolingSchedule::default(),
            noise_scale: 0.15,
            seed: DEFAULT_SEED,
            max_iterations: 0,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_noise_scale(mut self, scale: f64) -> Self {
        self.noise_scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SelectError> {
        let t0 = self.initial_temperature;
        let t_min = self.min_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(SelectError::invalid(
                "initial_temperature",
                t0,
                "must be finite and positive",
            ));
        }
        if !t_min.is_finite() || t_min <= 0.0 {
            return Err(SelectError::invalid(
                "min_temperature",
                t_min,
                "must be finite and positive",
            ));
        }
        if t_min >= t0 {
            return Err(SelectError::invalid(
                "min_temperature",
                t_min,
                "must be less than initial_temperature",
            ));
        }
        check_noise_scale(self.noise_scale)?;
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(SelectError::invalid(
                        "alpha",
                        alpha,
                        "geometric alpha must be in (0, 1)",
                    ));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !beta.is_finite() || beta <= 0.0 {
                    return Err(SelectError::invalid(
                        "beta",
                        beta,
                        "lundy-mees beta must be finite and positive",
                    ));
                }
            }
        }
        // The step shrinks as T falls, so a stall shows up at the floor first.
        self.cooling
            .checked_cool(self.min_temperature)
            .map_err(|_| {
                SelectError::invalid(
                    "cooling",
                    self.min_temperature,
                    "cooling stalls at min_temperature",
                )
            })?;
        Ok(())
    }

    /// Number of loop iterations the schedule implies, ignoring
    /// `max_iterations` and cancellation.
    ///
    /// Computed by replaying the cooling steps rather than with
    /// `ceil(ln(T_min / T0) / ln(alpha))`, so floating-point rounding
    /// matches the search loop exactly. 58 for the defaults.
    pub fn iteration_budget(&self) -> Result<usize, SelectError> {
        self.validate()?;
        let mut temperature = self.initial_temperature;
        let mut steps = 0usize;
        while temperature > self.min_temperature {
            temperature = self.cooling.checked_cool(temperature)?;
            steps += 1;
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1.5).abs() < 1e-12);
        assert!((config.min_temperature - 0.001).abs() < 1e-15);
        assert!((config.noise_scale - 0.15).abs() < 1e-12);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.88 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::default().with_noise_scale(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_noise() {
        let err = AnnealConfig::default()
            .with_noise_scale(-0.01)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SelectError::InvalidParameter {
                name: "noise_scale",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_bad_alpha() {
        for alpha in [0.0, 1.0, 1.5, f64::NAN] {
            let config = AnnealConfig::default().with_cooling(CoolingSchedule::Geometric { alpha });
            assert!(config.validate().is_err(), "alpha {alpha} accepted");
        }
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = AnnealConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_iteration_budget() {
        assert_eq!(AnnealConfig::default().iteration_budget().unwrap(), 58);
    }

    #[test]
    fn test_iteration_budget_matches_closed_form() {
        for (t0, t_min, alpha, expected) in [
            (1.0, 0.5, 0.9, 7),
            (2.0, 0.01, 0.5, 8),
            (1.5, 0.001, 0.95, 143),
        ] {
            let config = AnnealConfig::default()
                .with_initial_temperature(t0)
                .with_min_temperature(t_min)
                .with_cooling(CoolingSchedule::Geometric { alpha });
            let closed = ((t_min / t0).ln() / alpha.ln()).ceil() as usize;
            assert_eq!(config.iteration_budget().unwrap(), expected);
            assert_eq!(closed, expected);
        }
    }

    #[test]
    fn test_lundy_mees_cools_monotonically() {
        let schedule = CoolingSchedule::LundyMees { beta: 0.5 };
        let mut t = 1.5;
        for _ in 0..100 {
            let next = schedule.cool(t);
            assert!(next < t && next > 0.0);
            t = next;
        }
    }

    #[test]
    fn test_tiny_beta_rejected() {
        let config = AnnealConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: 1e-17 });
        assert!(matches!(
            config.validate(),
            Err(SelectError::InvalidParameter { name: "cooling", .. })
        ));
        assert!(config.iteration_budget().is_err());
    }

    #[test]
    fn test_alpha_just_below_one_still_cools() {
        let alpha = 1.0 - f64::EPSILON / 2.0;
        let schedule = CoolingSchedule::Geometric { alpha };
        for t in [1.5, 1.0, 0.001, 1e-300] {
            assert!(schedule.checked_cool(t).unwrap() < t);
        }
    }

    #[test]
    fn test_lundy_mees_stall_detected() {
        let schedule = CoolingSchedule::LundyMees { beta: 1e-17 };
        assert!(schedule.checked_cool(1.5).is_err());
    }

    #[test]
    fn test_checked_cool_lowers() {
        let schedule = CoolingSchedule::default();
        assert!((schedule.checked_cool(1.5).unwrap() - 1.32).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_config() {
        let config: AnnealConfig =
            serde_json::from_str(r#"{"cooling":{"kind":"lundy_mees","beta":5.0},"seed":3}"#)
                .unwrap();
        assert_eq!(config.cooling, CoolingSchedule::LundyMees { beta: 5.0 });
        assert_eq!(config.seed, 3);
        let defaults = AnnealConfig::default();
        assert_eq!(config.initial_temperature, defaults.initial_temperature);
        assert_eq!(config.min_temperature, defaults.min_temperature);
        assert_eq!(config.noise_scale, defaults.noise_scale);
        assert_eq!(config.max_iterations, 0);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_json_config_is_default() {
        let config: AnnealConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnnealConfig::default());
        let geometric: CoolingSchedule =
            serde_json::from_str(r#"{"kind":"geometric","alpha":0.9}"#).unwrap();
        assert_eq!(geometric, CoolingSchedule::Geometric { alpha: 0.9 });
    }
}
