//! Core trait for neighborhood operators.

use rand::Rng;

use super::operators::{swap, two_opt};
use crate::tour::Tour;

/// Produces one randomized neighbor of a tour.
///
/// Implementations must return a permutation of the input and must not
/// keep state between calls, so one operator can serve many concurrent
/// runs.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp_local::neighborhood::NeighborhoodOperator;
///
/// /// Exchanges two adjacent locations.
/// struct AdjacentSwap;
///
/// impl NeighborhoodOperator for AdjacentSwap {
///     fn neighbor<R: Rng>(&self, tour: &[usize], rng: &mut R) -> Vec<usize> {
///         let mut new = tour.to_vec();
///         if new.len() >= 2 {
///             let i = rng.random_range(0..new.len() - 1);
///             new.swap(i, i + 1);
///         }
///         new
///     }
///
///     fn name(&self) -> &str {
///         "Adjacent Swap"
///     }
/// }
/// ```
pub trait NeighborhoodOperator: Send + Sync {
    /// Returns a new tour near `tour`; the input is left untouched.
    fn neighbor<R: Rng>(&self, tour: &[usize], rng: &mut R) -> Tour;

    /// Human-readable operator name, used in logs and trial labels.
    fn name(&self) -> &str;
}

/// The built-in neighborhood operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Exchange the contents of two random positions.
    Swap,
    /// Reverse the segment between two random positions.
    TwoOpt,
}

impl NeighborhoodOperator for Neighborhood {
    fn neighbor<R: Rng>(&self, tour: &[usize], rng: &mut R) -> Tour {
        match self {
            Neighborhood::Swap => swap(tour, rng),
            Neighborhood::TwoOpt => two_opt(tour, rng),
        }
    }

    fn name(&self) -> &str {
        match self {
            Neighborhood::Swap => "Swap",
            Neighborhood::TwoOpt => "Two-Opt",
        }
    }
}
