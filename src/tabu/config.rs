//! Tabu Search configuration.

use crate::error::{TspError, TspResult};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp_local::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_size(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations.
    pub max_iterations: usize,
    /// How many recently adopted tours stay tabu. Zero disables the list.
    pub tabu_size: usize,
    /// Neighbors sampled per iteration.
    pub batch_size: usize,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_size: 10,
            batch_size: 20,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets how many neighbors are sampled per iteration.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
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
