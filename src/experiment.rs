//! Benchmark trials over one problem instance.
//!
//! A [`Trial`] pairs a [`Strategy`] with a [`Neighborhood`]. Running a set
//! of trials produces one [`TrialRecord`] per trial, tagged with the
//! instance name and trial label, ready for whatever reporting sink the
//! caller uses. With the `parallel` feature the trials of a set run on the
//! rayon thread pool; each trial stays single-threaded.

use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::hill_climbing::{HillClimbingConfig, Improvement};
use crate::multi_start::MultiStartConfig;
use crate::neighborhood::{Neighborhood, NeighborhoodOperator};
use crate::sa::SaConfig;
use crate::strategy::Strategy;
use crate::tabu::TabuConfig;
use crate::tour::Tour;

/// One strategy/operator combination to benchmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trial {
    /// Configured search strategy.
    pub strategy: Strategy,
    /// Operator the strategy draws neighbors from.
    pub neighborhood: Neighborhood,
}

impl Trial {
    /// Pairs `strategy` with `neighborhood`.
    pub fn new(strategy: Strategy, neighborhood: Neighborhood) -> Self {
        Self {
            strategy,
            neighborhood,
        }
    }

    /// Label such as `"Tabu Search (Two-Opt)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.strategy.name(), self.neighborhood.name())
    }
}

/// Outcome of one trial on one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    /// Name of the problem instance.
    pub instance: String,
    /// Trial label, see [`Trial::label`].
    pub algorithm: String,
    /// Cost of the best tour found.
    pub cost: f64,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
    /// Candidates evaluated.
    pub tested: usize,
    /// Moves accepted.
    pub explored: usize,
    /// Best tour found.
    pub tour: Tour,
}

/// The ten-trial grid: hill climbing (best and first improvement),
/// multi-start with 10 restarts, SA starting at T = 1000 and tabu search
/// with 10 entries, each with swap and two-opt.
pub fn standard_suite(max_iterations: usize) -> Vec<Trial> {
    let strategies = [
        Strategy::HillClimbing(
            HillClimbingConfig::default()
                .with_max_iterations(max_iterations)
                .with_improvement(Improvement::Best),
        ),
        Strategy::HillClimbing(
            HillClimbingConfig::default()
                .with_max_iterations(max_iterations)
                .with_improvement(Improvement::First),
        ),
        Strategy::MultiStart(
            MultiStartConfig::default()
                .with_num_restarts(10)
                .with_max_iterations(max_iterations),
        ),
        Strategy::SimulatedAnnealing(
            SaConfig::default()
                .with_max_iterations(max_iterations)
                .with_initial_temperature(1000.0),
        ),
        Strategy::Tabu(
            TabuConfig::default()
                .with_max_iterations(max_iterations)
                .with_tabu_size(10),
        ),
    ];

    strategies
        .into_iter()
        .flat_map(|strategy| {
            [Neighborhood::Swap, Neighborhood::TwoOpt]
                .map(|neighborhood| Trial::new(strategy.clone(), neighborhood))
        })
        .collect()
}

/// Runs one trial and times it.
pub fn run_trial(instance: &str, matrix: &DistanceMatrix, trial: &Trial) -> TspResult<TrialRecord> {
    let start = Instant::now();
    let result = trial.strategy.search(matrix, &trial.neighborhood)?;
    let elapsed = start.elapsed();

    let record = TrialRecord {
        instance: instance.to_string(),
        algorithm: trial.label(),
        cost: result.best_cost,
        elapsed,
        tested: result.tested,
        explored: result.explored,
        tour: result.best_tour,
    };
    tracing::info!(
        instance,
        algorithm = %record.algorithm,
        cost = record.cost,
        runtime = ?record.elapsed,
        tested = record.tested,
        explored = record.explored,
        "trial finished"
    );
    Ok(record)
}

/// Runs every trial on `matrix`, returning records in trial order.
///
/// All configurations are validated before any trial starts.
pub fn run_trials(
    instance: &str,
    matrix: &DistanceMatrix,
    trials: &[Trial],
) -> TspResult<Vec<TrialRecord>> {
    for trial in trials {
        trial.strategy.validate()?;
    }
    tracing::info!(instance, n = matrix.size(), trials = trials.len(), "benchmarking");

    #[cfg(feature = "parallel")]
    let records = trials
        .par_iter()
        .map(|trial| run_trial(instance, matrix, trial))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let records = trials
        .iter()
        .map(|trial| run_trial(instance, matrix, trial))
        .collect();

    records
}
