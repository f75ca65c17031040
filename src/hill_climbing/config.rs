//! Hill climbing configuration.

use crate::error::{TspError, TspResult};

/// Which candidate of a batch a hill-climbing iteration adopts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// Evaluate the whole batch and move to its cheapest improving tour.
    #[default]
    Best,
    /// Move to the first improving tour and skip the rest of the batch.
    First,
}

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_tsp_local::hill_climbing::{HillClimbingConfig, Improvement};
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(500)
///     .with_improvement(Improvement::First)
///     .with_batch_size(30);
/// assert_eq!(config.max_iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Number of iterations. The run never stops early.
    pub max_iterations: usize,
    /// Neighbors sampled per iteration.
    pub batch_size: usize,
    /// Acceptance policy within a batch.
    pub improvement: Improvement,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            batch_size: 20,
            improvement: Improvement::Best,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets how many neighbors are sampled per iteration.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Sets the acceptance policy.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.batch_size == 0 {
            return Err(TspError::InvalidParameter("batch_size must be positive".into()));
        }
        Ok(())
    }
}
