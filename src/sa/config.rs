//! SA configuration and cooling schedules.

use crate::error::{TspError, TspResult};

/// Cooling schedule for temperature reduction, applied once per iteration.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 * (1 - (k + 1) / max_iterations)`.
    ///
    /// Reaches zero on the last iteration.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.995 }
    }
}

impl CoolingSchedule {
    /// Temperature after iteration `step` (0-based) has finished.
    pub(crate) fn cool(
        &self,
        temperature: f64,
        initial: f64,
        step: usize,
        max_iterations: usize,
    ) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::Linear => {
                if max_iterations == 0 {
                    0.0
                } else {
                    let remaining = 1.0 - (step + 1) as f64 / max_iterations as f64;
                    (initial * remaining).max(0.0)
                }
            }
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_tsp_local::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_max_iterations(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of iterations, one candidate each.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(TspError::InvalidParameter(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(TspError::InvalidParameter(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !beta.is_finite() || beta <= 0.0 {
                    return Err(TspError::InvalidParameter(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.995 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::default().with_initial_temperature(-1.0).validate().is_err());
        assert!(SaConfig::default().with_initial_temperature(0.0).validate().is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_geometric_cooling() {
        let schedule = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((schedule.cool(8.0, 8.0, 0, 10) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_cooling_reaches_zero() {
        let schedule = CoolingSchedule::Linear;
        assert!((schedule.cool(100.0, 100.0, 0, 4) - 75.0).abs() < 1e-12);
        assert!((schedule.cool(25.0, 100.0, 3, 4)).abs() < 1e-12);
        assert_eq!(schedule.cool(100.0, 100.0, 0, 0), 0.0);
    }

    #[test]
    fn test_lundy_mees_cooling() {
        let schedule = CoolingSchedule::LundyMees { beta: 0.1 };
        assert!((schedule.cool(10.0, 10.0, 0, 1) - 5.0).abs() < 1e-12);
    }
}
