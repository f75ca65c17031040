//! Outcome of a single search run.

use crate::tour::Tour;

/// Best tour found by a search run, together with effort counters.
///
/// The counters mean the same thing for every strategy so runs can be
/// compared side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The best tour seen during the run.
    pub best_tour: Tour,

    /// Cyclic cost of `best_tour`.
    pub best_cost: f64,

    /// Number of candidate tours whose cost was evaluated.
    pub tested: usize,

    /// Number of times the working tour was replaced by a candidate.
    pub explored: usize,

    /// Cost of the working tour at the start and after every iteration.
    pub cost_history: Vec<f64>,
}
