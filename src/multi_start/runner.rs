//! Multi-start execution loop.

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::MultiStartConfig;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::hill_climbing::HillClimbingRunner;
use crate::neighborhood::NeighborhoodOperator;
use crate::result::SearchResult;

/// Executes multi-start hill climbing.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs every restart with its own RNG derived from the configured seed.
    ///
    /// Restart `r` uses `seed + r`; without a seed each restart draws its
    /// own entropy.
    #[tracing::instrument(
        level = "debug",
        name = "Multi-Start HC",
        skip_all,
        fields(n = matrix.size(), operator = operator.name(), restarts = config.num_restarts)
    )]
    pub fn run<O: NeighborhoodOperator>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &MultiStartConfig,
    ) -> TspResult<SearchResult> {
        config.validate()?;

        let base = config.hill_climbing.seed;
        let mut merged: Option<SearchResult> = None;
        for restart in 0..config.num_restarts {
            let mut restart_config = config.hill_climbing.clone();
            restart_config.seed = base.map(|seed| seed.wrapping_add(restart as u64));
            let result = HillClimbingRunner::run(matrix, operator, &restart_config)?;
            merged = Some(merge(merged, result, restart));
        }

        finish(merged)
    }

    /// Runs every restart with a fresh RNG seeded from `rng`.
    #[tracing::instrument(
        level = "debug",
        name = "Multi-Start HC",
        skip_all,
        fields(n = matrix.size(), operator = operator.name(), restarts = config.num_restarts)
    )]
    pub fn run_with_rng<O: NeighborhoodOperator, R: Rng>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &MultiStartConfig,
        rng: &mut R,
    ) -> TspResult<SearchResult> {
        config.validate()?;

        let mut merged: Option<SearchResult> = None;
        for restart in 0..config.num_restarts {
            let mut restart_rng = create_rng(rng.random());
            let result = HillClimbingRunner::run_with_rng(
                matrix,
                operator,
                &config.hill_climbing,
                &mut restart_rng,
            )?;
            merged = Some(merge(merged, result, restart));
        }

        finish(merged)
    }
}

/// Folds one restart into the running aggregate: counters and histories
/// accumulate, the cheaper tour wins (earlier restart on ties).
fn merge(acc: Option<SearchResult>, result: SearchResult, restart: usize) -> SearchResult {
    let Some(mut acc) = acc else {
        return result;
    };

    acc.tested += result.tested;
    acc.explored += result.explored;
    acc.cost_history.extend_from_slice(&result.cost_history);

    if result.best_cost < acc.best_cost {
        tracing::trace!(restart, cost = result.best_cost, "multi-start new best");
        acc.best_tour = result.best_tour;
        acc.best_cost = result.best_cost;
    }
    acc
}

fn finish(merged: Option<SearchResult>) -> TspResult<SearchResult> {
    // validate() guarantees at least one restart ran.
    let result = merged
        .ok_or_else(|| TspError::InvalidParameter("num_restarts must be positive".into()))?;
    tracing::debug!(
        best_cost = result.best_cost,
        tested = result.tested,
        explored = result.explored,
        "multi-start finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hill_climbing::{HillClimbingConfig, Improvement};
    use crate::neighborhood::Neighborhood;

    fn grid() -> DistanceMatrix {
        let points: Vec<(f64, f64)> = (0..16)
            .map(|k| ((k % 4) as f64 * 3.0, (k / 4) as f64 * 2.0 + (k % 3) as f64 * 0.5))
            .collect();
        DistanceMatrix::from_coordinates(&points).expect("valid")
    }

    #[test]
    fn test_single_restart_matches_hill_climbing() {
        let dm = grid();
        let hc = HillClimbingConfig::default()
            .with_max_iterations(150)
            .with_seed(99);
        let ms = MultiStartConfig::default()
            .with_num_restarts(1)
            .with_hill_climbing(hc.clone());

        let single = HillClimbingRunner::run(&dm, &Neighborhood::TwoOpt, &hc).expect("valid");
        let multi = MultiStartRunner::run(&dm, &Neighborhood::TwoOpt, &ms).expect("valid");
        assert_eq!(single, multi);
    }

    #[test]
    fn test_counters_sum_over_restarts() {
        let dm = grid();
        let config = MultiStartConfig::default()
            .with_num_restarts(4)
            .with_max_iterations(50)
            .with_batch_size(10)
            .with_seed(3);

        let result = MultiStartRunner::run(&dm, &Neighborhood::Swap, &config).expect("valid");
        assert_eq!(result.tested, 4 * 50 * 10);
        assert_eq!(result.cost_history.len(), 4 * 51);

        let explored: usize = (0..4u64)
            .map(|restart| {
                let hc = config.hill_climbing.clone().with_seed(3 + restart);
                HillClimbingRunner::run(&dm, &Neighborhood::Swap, &hc)
                    .expect("valid")
                    .explored
            })
            .sum();
        assert_eq!(result.explored, explored);
        assert!(result.explored <= result.tested);
    }

    #[test]
    fn test_best_over_all_restarts() {
        let dm = grid();
        let config = MultiStartConfig::default()
            .with_num_restarts(5)
            .with_max_iterations(80)
            .with_improvement(Improvement::First)
            .with_seed(11);

        let result = MultiStartRunner::run(&dm, &Neighborhood::TwoOpt, &config).expect("valid");

        for restart in 0..5u64 {
            let hc = config.hill_climbing.clone().with_seed(11 + restart);
            let single = HillClimbingRunner::run(&dm, &Neighborhood::TwoOpt, &hc).expect("valid");
            assert!(result.best_cost <= single.best_cost);
        }
        assert!((dm.cost(&result.best_tour).expect("valid") - result.best_cost).abs() < 1e-9);
    }

    #[test]
    fn test_run_with_rng_reproducible() {
        let dm = grid();
        let config = MultiStartConfig::default()
            .with_num_restarts(3)
            .with_max_iterations(40);

        let a = MultiStartRunner::run_with_rng(&dm, &Neighborhood::Swap, &config, &mut create_rng(5))
            .expect("valid");
        let b = MultiStartRunner::run_with_rng(&dm, &Neighborhood::Swap, &config, &mut create_rng(5))
            .expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_restarts_rejected() {
        let dm = grid();
        let config = MultiStartConfig::default().with_num_restarts(0);
        assert!(MultiStartRunner::run(&dm, &Neighborhood::Swap, &config).is_err());
    }
}
