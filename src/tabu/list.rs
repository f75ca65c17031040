//! Bounded recency memory of adopted tours.

use std::collections::VecDeque;

use crate::tour::Tour;

/// FIFO of recently adopted tours with a fixed capacity.
///
/// Membership is element-wise equality, so a rotation or reversal of a
/// listed tour is not considered tabu.
///
/// # Examples
///
/// ```
/// use u_tsp_local::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push(vec![0, 1, 2]);
/// tabu.push(vec![0, 2, 1]);
/// tabu.push(vec![1, 0, 2]);
/// assert!(!tabu.contains(&[0, 1, 2]));
/// assert!(tabu.contains(&[1, 0, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    tours: VecDeque<Tour>,
    capacity: usize,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` tours.
    pub fn new(capacity: usize) -> Self {
        Self {
            tours: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Returns `true` if an identical tour is currently listed.
    pub fn contains(&self, tour: &[usize]) -> bool {
        self.tours.iter().any(|listed| listed.as_slice() == tour)
    }

    /// Appends `tour`, evicting the oldest entry when over capacity.
    pub fn push(&mut self, tour: Tour) {
        self.tours.push_back(tour);
        while self.tours.len() > self.capacity {
            self.tours.pop_front();
        }
    }

    /// Number of listed tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if no tour is listed.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Maximum number of listed tours.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_eviction() {
        let mut tabu = TabuList::new(3);
        for k in 0..5 {
            tabu.push(vec![k, 9]);
        }
        assert_eq!(tabu.len(), 3);
        assert!(!tabu.contains(&[0, 9]));
        assert!(!tabu.contains(&[1, 9]));
        assert!(tabu.contains(&[2, 9]));
        assert!(tabu.contains(&[4, 9]));
    }

    #[test]
    fn test_exact_match_only() {
        let mut tabu = TabuList::new(4);
        tabu.push(vec![0, 1, 2, 3]);
        assert!(tabu.contains(&[0, 1, 2, 3]));
        // Same cycle, different sequence.
        assert!(!tabu.contains(&[1, 2, 3, 0]));
        assert!(!tabu.contains(&[3, 2, 1, 0]));
    }

    #[test]
    fn test_zero_capacity_never_holds() {
        let mut tabu = TabuList::new(0);
        tabu.push(vec![0, 1]);
        assert!(tabu.is_empty());
        assert!(!tabu.contains(&[0, 1]));
        assert_eq!(tabu.capacity(), 0);
    }
}
