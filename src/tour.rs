//! Tour representation.
//!
//! A tour is a permutation of `0..n` read as a cycle: the last location
//! connects back to the first.

use rand::Rng;

/// Visiting order over all locations.
pub type Tour = Vec<usize>;

/// Creates a uniformly random tour over `n` locations.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    u_numflow::random::shuffle(&mut tour, rng);
    tour
}

/// Returns `true` if `tour` contains every index of `0..tour.len()` once.
pub fn is_permutation(tour: &[usize]) -> bool {
    let mut seen = vec![false; tour.len()];
    for &loc in tour {
        match seen.get_mut(loc) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = create_rng(42);
        for n in [2, 3, 10, 57] {
            let tour = random_tour(n, &mut rng);
            assert_eq!(tour.len(), n);
            assert!(is_permutation(&tour));
        }
    }

    #[test]
    fn test_random_tour_deterministic_with_seed() {
        let a = random_tour(20, &mut create_rng(7));
        let b = random_tour(20, &mut create_rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1]));
        assert!(is_permutation(&[]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }
}
