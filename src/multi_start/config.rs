//! Multi-start configuration.

use crate::error::{TspError, TspResult};
use crate::hill_climbing::{HillClimbingConfig, Improvement};

/// Configuration parameters for multi-start hill climbing.
///
/// Every restart runs the wrapped [`HillClimbingConfig`] in full. When a
/// seed is set, restart `r` is seeded with `seed + r`, so the first
/// restart reproduces a plain hill-climbing run with the same seed.
///
/// # Examples
///
/// ```
/// use u_tsp_local::hill_climbing::Improvement;
/// use u_tsp_local::multi_start::MultiStartConfig;
///
/// let config = MultiStartConfig::default()
///     .with_num_restarts(5)
///     .with_max_iterations(200)
///     .with_improvement(Improvement::First)
///     .with_seed(7);
/// assert_eq!(config.num_restarts, 5);
/// assert_eq!(config.hill_climbing.max_iterations, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartConfig {
    /// Number of independent hill-climbing runs.
    pub num_restarts: usize,
    /// Settings shared by every restart.
    pub hill_climbing: HillClimbingConfig,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            num_restarts: 10,
            hill_climbing: HillClimbingConfig::default(),
        }
    }
}

impl MultiStartConfig {
    /// Sets the number of restarts.
    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    /// Replaces the per-restart hill-climbing settings.
    pub fn with_hill_climbing(mut self, config: HillClimbingConfig) -> Self {
        self.hill_climbing = config;
        self
    }

    /// Sets the iterations of each restart.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.hill_climbing.max_iterations = n;
        self
    }

    /// Sets the neighbors sampled per iteration.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.hill_climbing.batch_size = n;
        self
    }

    /// Sets the acceptance policy of each restart.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.hill_climbing.improvement = improvement;
        self
    }

    /// Sets the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.hill_climbing.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.num_restarts == 0 {
            return Err(TspError::InvalidParameter("num_restarts must be positive".into()));
        }
        self.hill_climbing.validate()
    }
}
