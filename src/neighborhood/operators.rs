//! Swap and 2-opt moves.

use rand::seq::index::sample;
use rand::Rng;

use crate::tour::Tour;

/// Picks two distinct positions of a tour of length `len` uniformly at
/// random, without replacement. Requires `len >= 2`.
fn distinct_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let picked = sample(rng, len, 2);
    (picked.index(0), picked.index(1))
}

/// Exchanges the locations at two distinct random positions.
///
/// Tours shorter than two locations are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp_local::neighborhood::swap;
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = vec![0, 1, 2, 3, 4];
/// let next = swap(&tour, &mut rng);
/// assert_ne!(next, tour);
/// assert_eq!(next.iter().zip(&tour).filter(|(a, b)| a != b).count(), 2);
/// ```
pub fn swap<R: Rng>(tour: &[usize], rng: &mut R) -> Tour {
    let mut new = tour.to_vec();
    if new.len() < 2 {
        return new;
    }
    let (i, j) = distinct_pair(new.len(), rng);
    new.swap(i, j);
    new
}

/// Reverses the segment `[i, j)` between two distinct random positions
/// `i < j`.
///
/// This is a single random 2-opt move, not the exhaustive 2-opt
/// neighborhood. When `j == i + 1` the segment holds one location and the
/// tour comes back unchanged.
pub fn two_opt<R: Rng>(tour: &[usize], rng: &mut R) -> Tour {
    let mut new = tour.to_vec();
    if new.len() < 2 {
        return new;
    }
    let (a, b) = distinct_pair(new.len(), rng);
    let (i, j) = if a < b { (a, b) } else { (b, a) };
    new[i..j].reverse();
    new
}
