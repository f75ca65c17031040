//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour
//! 2. At each iteration:
//!    a. Sample a batch of neighbors
//!    b. Select the cheapest neighbor that is not tabu, even if it is worse
//!    than the current tour
//!    c. Move to it and append it to the tabu list
//!    d. Update the global best if improved
//! 3. Terminate after `max_iterations`
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::TabuConfig;
use super::list::TabuList;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::neighborhood::NeighborhoodOperator;
use crate::result::SearchResult;
use crate::tour::{random_tour, Tour};

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search with an RNG seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_local::distance::DistanceMatrix;
    /// use u_tsp_local::neighborhood::Neighborhood;
    /// use u_tsp_local::tabu::{TabuConfig, TabuRunner};
    ///
    /// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    ///     .unwrap();
    /// let config = TabuConfig::default().with_max_iterations(50).with_seed(1);
    /// let result = TabuRunner::run(&dm, &Neighborhood::Swap, &config).unwrap();
    /// assert!(result.tested >= result.explored);
    /// ```
    pub fn run<O: NeighborhoodOperator>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &TabuConfig,
    ) -> TspResult<SearchResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, operator, config, &mut rng)
    }

    /// Runs Tabu Search drawing all randomness from `rng`.
    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip_all,
        fields(n = matrix.size(), operator = operator.name(), tabu_size = config.tabu_size)
    )]
    pub fn run_with_rng<O: NeighborhoodOperator, R: Rng>(
        matrix: &DistanceMatrix,
        operator: &O,
        config: &TabuConfig,
        rng: &mut R,
    ) -> TspResult<SearchResult> {
        config.validate()?;

        let mut current = random_tour(matrix.size(), rng);
        let mut current_cost = matrix.tour_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut tabu = TabuList::new(config.tabu_size);
        let mut tested = 0usize;
        let mut explored = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(current_cost);

        for iteration in 0..config.max_iterations {
            let candidates = (0..config.batch_size).map(|_| {
                let tour = operator.neighbor(&current, rng);
                let cost = matrix.tour_cost(&tour);
                (tour, cost)
            });
            let (selected, evaluated) = best_admissible(candidates, &tabu);
            tested += evaluated;

            match selected {
                Some((tour, cost)) => {
                    current = tour;
                    current_cost = cost;
                    explored += 1;
                    tabu.push(current.clone());

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        tracing::trace!(iteration, cost = best_cost, "tabu new best");
                    }
                }
                None => {
                    tracing::trace!(iteration, "tabu: every candidate is tabu");
                }
            }

            cost_history.push(current_cost);
        }

        tracing::debug!(best_cost, tested, explored, "tabu search finished");

        Ok(SearchResult {
            best_tour: best,
            best_cost,
            tested,
            explored,
            cost_history,
        })
    }
}

/// Cheapest candidate that is not listed in `tabu`, and the number of
/// candidates evaluated.
///
/// A candidate must be strictly cheaper than the best admissible one seen
/// so far, so ties keep the earliest.
pub(crate) fn best_admissible<I>(candidates: I, tabu: &TabuList) -> (Option<(Tour, f64)>, usize)
where
    I: IntoIterator<Item = (Tour, f64)>,
{
    let mut selected: Option<(Tour, f64)> = None;
    let mut evaluated = 0usize;

    for (tour, cost) in candidates {
        evaluated += 1;
        let threshold = selected.as_ref().map_or(f64::INFINITY, |(_, c)| *c);
        if cost < threshold && !tabu.contains(&tour) {
            selected = Some((tour, cost));
        }
    }
    (selected, evaluated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::Neighborhood;
    use crate::tour::is_permutation;

    fn random_points(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        DistanceMatrix::from_coordinates(&points).expect("valid")
    }

    #[test]
    fn test_best_admissible_skips_tabu() {
        let mut tabu = TabuList::new(5);
        tabu.push(vec![0, 2, 1, 3]);

        let candidates = vec![
            (vec![0, 1, 3, 2], 12.0),
            (vec![0, 2, 1, 3], 3.0),
            (vec![1, 0, 2, 3], 9.0),
        ];
        let (selected, evaluated) = best_admissible(candidates, &tabu);
        assert_eq!(evaluated, 3);
        assert_eq!(selected, Some((vec![1, 0, 2, 3], 9.0)));
    }

    #[test]
    fn test_best_admissible_accepts_worsening() {
        let tabu = TabuList::new(5);
        let candidates = vec![(vec![1, 0], 50.0), (vec![0, 1], 40.0)];
        let (selected, _) = best_admissible(candidates, &tabu);
        assert_eq!(selected, Some((vec![0, 1], 40.0)));
    }

    #[test]
    fn test_best_admissible_all_tabu() {
        let mut tabu = TabuList::new(5);
        tabu.push(vec![1, 0]);
        let (selected, evaluated) = best_admissible(vec![(vec![1, 0], 1.0); 4], &tabu);
        assert!(selected.is_none());
        assert_eq!(evaluated, 4);
    }

    #[test]
    fn test_tabu_finds_good_tour() {
        let dm = random_points(20, 1);
        let config = TabuConfig::default()
            .with_max_iterations(1500)
            .with_tabu_size(10)
            .with_seed(42);

        let result = TabuRunner::run(&dm, &Neighborhood::TwoOpt, &config).expect("valid");

        assert!(is_permutation(&result.best_tour));
        assert!(result.best_cost < result.cost_history[0] * 0.7);
        assert!((dm.cost(&result.best_tour).expect("valid") - result.best_cost).abs() < 1e-9);
        assert_eq!(result.tested, 1500 * 20);
    }

    #[test]
    fn test_best_is_minimum_of_trajectory() {
        let dm = random_points(12, 2);
        let config = TabuConfig::default().with_max_iterations(400).with_seed(3);
        let result = TabuRunner::run(&dm, &Neighborhood::Swap, &config).expect("valid");

        let min = result
            .cost_history
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert!((min - result.best_cost).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tabu_size_moves_every_iteration() {
        let dm = random_points(10, 4);
        let config = TabuConfig::default()
            .with_max_iterations(200)
            .with_tabu_size(0)
            .with_seed(5);

        let result = TabuRunner::run(&dm, &Neighborhood::Swap, &config).expect("valid");
        assert_eq!(result.explored, 200);
        assert_eq!(result.tested, 200 * 20);
    }

    #[test]
    fn test_tiny_instance_can_stall() {
        // Three locations: swap only ever produces the three other orders
        // of the same two cycles, which quickly all become tabu.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .expect("valid");
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_tabu_size(6)
            .with_seed(8);

        let result = TabuRunner::run(&dm, &Neighborhood::Swap, &config).expect("valid");
        assert_eq!(result.tested, 100 * 20);
        assert!(result.explored < 100);
    }

    #[test]
    fn test_zero_iterations() {
        let dm = random_points(6, 9);
        let config = TabuConfig::default().with_max_iterations(0).with_seed(1);
        let result = TabuRunner::run(&dm, &Neighborhood::TwoOpt, &config).expect("valid");
        assert_eq!((result.tested, result.explored), (0, 0));
        assert_eq!(result.cost_history, vec![result.best_cost]);
    }
}
