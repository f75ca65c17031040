//! Uniform entry point over every search strategy.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::hill_climbing::{HillClimbingConfig, HillClimbingRunner, Improvement};
use crate::multi_start::{MultiStartConfig, MultiStartRunner};
use crate::neighborhood::NeighborhoodOperator;
use crate::result::SearchResult;
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};

/// A configured search strategy.
///
/// # Examples
///
/// ```
/// use u_tsp_local::distance::DistanceMatrix;
/// use u_tsp_local::neighborhood::Neighborhood;
/// use u_tsp_local::sa::SaConfig;
/// use u_tsp_local::Strategy;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// let strategy = Strategy::SimulatedAnnealing(SaConfig::default().with_seed(3));
/// let result = strategy.search(&dm, &Neighborhood::Swap).unwrap();
/// assert_eq!(strategy.name(), "Simulated Annealing");
/// assert!((result.best_cost - 14.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Single hill-climbing run.
    HillClimbing(HillClimbingConfig),
    /// Repeated independent hill-climbing runs.
    MultiStart(MultiStartConfig),
    /// Simulated annealing.
    SimulatedAnnealing(SaConfig),
    /// Tabu search.
    Tabu(TabuConfig),
}

impl Strategy {
    /// Display name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(c) => match c.improvement {
                Improvement::Best => "HC Best",
                Improvement::First => "HC First",
            },
            Strategy::MultiStart(_) => "Multi-Start HC",
            Strategy::SimulatedAnnealing(_) => "Simulated Annealing",
            Strategy::Tabu(_) => "Tabu Search",
        }
    }

    /// Returns the same strategy with its random seed set.
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Strategy::HillClimbing(c) => Strategy::HillClimbing(c.with_seed(seed)),
            Strategy::MultiStart(c) => Strategy::MultiStart(c.with_seed(seed)),
            Strategy::SimulatedAnnealing(c) => Strategy::SimulatedAnnealing(c.with_seed(seed)),
            Strategy::Tabu(c) => Strategy::Tabu(c.with_seed(seed)),
        }
    }

    /// Validates the wrapped configuration.
    pub fn validate(&self) -> TspResult<()> {
        match self {
            Strategy::HillClimbing(c) => c.validate(),
            Strategy::MultiStart(c) => c.validate(),
            Strategy::SimulatedAnnealing(c) => c.validate(),
            Strategy::Tabu(c) => c.validate(),
        }
    }

    /// Runs the strategy with the RNG seeded from its configuration.
    pub fn search<O: NeighborhoodOperator>(
        &self,
        matrix: &DistanceMatrix,
        operator: &O,
    ) -> TspResult<SearchResult> {
        match self {
            Strategy::HillClimbing(c) => HillClimbingRunner::run(matrix, operator, c),
            Strategy::MultiStart(c) => MultiStartRunner::run(matrix, operator, c),
            Strategy::SimulatedAnnealing(c) => SaRunner::run(matrix, operator, c),
            Strategy::Tabu(c) => TabuRunner::run(matrix, operator, c),
        }
    }

    /// Runs the strategy drawing randomness from `rng`; configured seeds
    /// are ignored.
    pub fn search_with_rng<O: NeighborhoodOperator, R: Rng>(
        &self,
        matrix: &DistanceMatrix,
        operator: &O,
        rng: &mut R,
    ) -> TspResult<SearchResult> {
        match self {
            Strategy::HillClimbing(c) => HillClimbingRunner::run_with_rng(matrix, operator, c, rng),
            Strategy::MultiStart(c) => MultiStartRunner::run_with_rng(matrix, operator, c, rng),
            Strategy::SimulatedAnnealing(c) => SaRunner::run_with_rng(matrix, operator, c, rng),
            Strategy::Tabu(c) => TabuRunner::run_with_rng(matrix, operator, c, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::Neighborhood;
    use u_numflow::random::create_rng;

    fn four_nodes() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 4.0, 5.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![3.0, 5.0, 6.0, 0.0],
        ])
        .expect("valid")
    }

    fn all_strategies(max_iterations: usize) -> Vec<Strategy> {
        vec![
            Strategy::HillClimbing(HillClimbingConfig::default().with_max_iterations(max_iterations)),
            Strategy::HillClimbing(
                HillClimbingConfig::default()
                    .with_max_iterations(max_iterations)
                    .with_improvement(Improvement::First),
            ),
            Strategy::MultiStart(
                MultiStartConfig::default()
                    .with_num_restarts(3)
                    .with_max_iterations(max_iterations),
            ),
            Strategy::SimulatedAnnealing(SaConfig::default().with_max_iterations(max_iterations)),
            Strategy::Tabu(TabuConfig::default().with_max_iterations(max_iterations)),
        ]
    }

    #[test]
    fn test_zero_iterations_return_initial_tour() {
        let dm = four_nodes();
        for strategy in all_strategies(0) {
            for op in [Neighborhood::Swap, Neighborhood::TwoOpt] {
                let result = strategy
                    .clone()
                    .with_seed(17)
                    .search(&dm, &op)
                    .expect("valid");
                assert_eq!(result.tested, 0, "{}", strategy.name());
                assert_eq!(result.explored, 0, "{}", strategy.name());
                let true_cost = dm.cost(&result.best_tour).expect("valid");
                assert!((true_cost - result.best_cost).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_counters_ordered() {
        let dm = DistanceMatrix::from_coordinates(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (7.0, 3.0),
            (2.0, 8.0),
            (5.0, 5.0),
            (9.0, 9.0),
        ])
        .expect("valid");
        for strategy in all_strategies(60) {
            let result = strategy
                .search_with_rng(&dm, &Neighborhood::TwoOpt, &mut create_rng(4))
                .expect("valid");
            assert!(result.tested >= result.explored, "{}", strategy.name());
            assert!(result.tested > 0, "{}", strategy.name());
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = all_strategies(1).iter().map(Strategy::name).collect();
        assert_eq!(
            names,
            vec![
                "HC Best",
                "HC First",
                "Multi-Start HC",
                "Simulated Annealing",
                "Tabu Search"
            ]
        );
    }

    #[test]
    fn test_validate_dispatches() {
        let bad = Strategy::Tabu(TabuConfig::default().with_batch_size(0));
        assert!(bad.validate().is_err());
        assert!(bad.search(&four_nodes(), &Neighborhood::Swap).is_err());
    }
}
