//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a random tour
//! 2. At each of `max_iterations` iterations:
//!    a. Sample up to `batch_size` neighbors
//!    b. Move to the cheapest (best-improvement) or the first
//!    (first-improvement) neighbor strictly cheaper than the current tour
//!    c. Otherwise stay
//! 3. Return the final tour, which is also the best one seen

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::{HillClimbingConfig, Improvement};
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::neighborhood::NeighborhoodOperator;
use crate::result::SearchResult;
use crate::tour::{random_tour, Tour};

/// Executes hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing with an RNG seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_local::distance::DistanceMatrix;
    /// use u_tsp_local::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
    /// use u_tsp_local::neighborhood::Neighborhood;
    ///
    /// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    ///     .unwrap();
    /// let config = HillClimbingConfig::default().with_max_iterations(100).with_seed(42);
    /// let result = HillClimbingRunner::run(&dm, &Neighborhood::TwoOpt, &config).unwrap();
    /// assert!((result.best_cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run<O: NeighborhoodOperator>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &HillClimbingConfig,
    ) -> TspResult<SearchResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, operator, config, &mut rng)
    }

    /// Runs hill climbing drawing all randomness from `rng`.
    #[tracing::instrument(
        level = "debug",
        name = "Hill Climbing",
        skip_all,
        fields(n = matrix.size(), operator = operator.name(), improvement = ?config.improvement)
    )]
    pub fn run_with_rng<O: NeighborhoodOperator, R: Rng>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> TspResult<SearchResult> {
        config.validate()?;

        let mut current = random_tour(matrix.size(), rng);
        let mut current_cost = matrix.tour_cost(&current);
        let mut tested = 0usize;
        let mut explored = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(current_cost);

        for _ in 0..config.max_iterations {
            let step = match config.improvement {
                Improvement::Best => best_improving(
                    matrix,
                    operator,
                    &current,
                    current_cost,
                    config.batch_size,
                    &mut tested,
                    rng,
                ),
                Improvement::First => first_improving(
                    matrix,
                    operator,
                    &current,
                    current_cost,
                    config.batch_size,
                    &mut tested,
                    rng,
                ),
            };

            if let Some((tour, cost)) = step {
                current = tour;
                current_cost = cost;
                explored += 1;
                tracing::trace!(cost = current_cost, "hill climbing moved");
            }

            cost_history.push(current_cost);
        }

        tracing::debug!(best_cost = current_cost, tested, explored, "hill climbing finished");

        Ok(SearchResult {
            best_tour: current,
            best_cost: current_cost,
            tested,
            explored,
            cost_history,
        })
    }
}

/// Cheapest neighbor of the batch that is strictly cheaper than
/// `current_cost`, if any.
fn best_improving<O: NeighborhoodOperator, R: Rng>(
    matrix: &DistanceMatrix,
    operator: &O,
    current: &[usize],
    current_cost: f64,
    batch_size: usize,
    tested: &mut usize,
    rng: &mut R,
) -> Option<(Tour, f64)> {
    let mut best: Option<(Tour, f64)> = None;
    for _ in 0..batch_size {
        let candidate = operator.neighbor(current, rng);
        let cost = matrix.tour_cost(&candidate);
        *tested += 1;

        let threshold = best.as_ref().map_or(current_cost, |(_, c)| *c);
        if cost < threshold {
            best = Some((candidate, cost));
        }
    }
    best
}

/// First neighbor strictly cheaper than `current_cost`; stops sampling as
/// soon as one is found.
fn first_improving<O: NeighborhoodOperator, R: Rng>(
    matrix: &DistanceMatrix,
    operator: &O,
    current: &[usize],
    current_cost: f64,
    batch_size: usize,
    tested: &mut usize,
    rng: &mut R,
) -> Option<(Tour, f64)> {
    for _ in 0..batch_size {
        let candidate = operator.neighbor(current, rng);
        let cost = matrix.tour_cost(&candidate);
        *tested += 1;

        if cost < current_cost {
            return Some((candidate, cost));
        }
    }
    None
}
