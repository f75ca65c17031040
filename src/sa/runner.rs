//! SA execution loop.

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::SaConfig;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::neighborhood::NeighborhoodOperator;
use crate::result::SearchResult;
use crate::tour::random_tour;

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from `config.seed`.
    pub fn run<O: NeighborhoodOperator>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &SaConfig,
    ) -> TspResult<SearchResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, operator, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    #[tracing::instrument(
        level = "debug",
        name = "Simulated Annealing",
        skip_all,
        fields(n = matrix.size(), operator = operator.name(), t0 = config.initial_temperature)
    )]
    pub fn run_with_rng<O: NeighborhoodOperator, R: Rng>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &SaConfig,
        rng: &mut R,
    ) -> TspResult<SearchResult> {
        config.validate()?;

        let mut current = random_tour(matrix.size(), rng);
        let mut current_cost = matrix.tour_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut tested = 0usize;
        let mut explored = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(current_cost);

        for step in 0..config.max_iterations {
            let candidate = operator.neighbor(&current, rng);
            let candidate_cost = matrix.tour_cost(&candidate);
            tested += 1;
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                explored += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::trace!(step, cost = best_cost, temperature, "sa new best");
                }
            }

            cost_history.push(current_cost);
            temperature = config.cooling.cool(
                temperature,
                config.initial_temperature,
                step,
                config.max_iterations,
            );
        }

        tracing::debug!(
            best_cost,
            tested,
            explored,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SearchResult {
            best_tour: best,
            best_cost,
            tested,
            explored,
            cost_history,
        })
    }
}
