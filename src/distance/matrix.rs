//! Dense distance matrix.

use crate::error::{TspError, TspResult};

/// A dense n×n distance matrix stored in row-major order.
///
/// Construction validates the data once; afterwards the matrix is
/// immutable and can be shared freely between concurrent runs.
///
/// # Examples
///
/// ```
/// use u_tsp_local::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 4.0],
///     vec![2.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert!((dm.cost(&[0, 1, 2]).unwrap() - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidMatrix`] if `data.len() != size * size`, if
    /// `size < 2`, or if any entry is negative or not finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if size < 2 {
            return Err(TspError::InvalidMatrix(format!(
                "need at least 2 locations, got {size}"
            )));
        }
        if size.checked_mul(size) != Some(data.len()) {
            return Err(TspError::InvalidMatrix(format!(
                "expected {size}x{size} entries, got {}",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidMatrix(format!(
                "entry ({}, {}) = {} is not a non-negative finite distance",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidMatrix`] if the rows do not form a square grid,
    /// plus every condition checked by [`DistanceMatrix::from_data`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TspError::InvalidMatrix(format!(
                "row {i} has {} columns, expected {size}",
                row.len()
            )));
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Computes a Euclidean distance matrix from planar coordinates.
    pub fn from_coordinates(points: &[(f64, f64)]) -> TspResult<Self> {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Total cyclic cost of `tour`, including the closing edge from the
    /// last location back to the first.
    ///
    /// This is the validating entry point and allocates a scratch buffer
    /// for the permutation check. Searches use [`DistanceMatrix::tour_cost`].
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidTour`] if the tour is not a permutation of
    /// `0..size()`.
    pub fn cost(&self, tour: &[usize]) -> TspResult<f64> {
        self.validate_tour(tour)?;
        Ok(self.tour_cost(tour))
    }

    /// Checks that `tour` is a permutation of `0..size()`.
    pub fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        if tour.len() != self.size {
            return Err(TspError::InvalidTour(format!(
                "expected {} locations, got {}",
                self.size,
                tour.len()
            )));
        }
        let mut seen = vec![false; self.size];
        for &loc in tour {
            if loc >= self.size {
                return Err(TspError::InvalidTour(format!(
                    "location {loc} out of range 0..{}",
                    self.size
                )));
            }
            if seen[loc] {
                return Err(TspError::InvalidTour(format!("location {loc} visited twice")));
            }
            seen[loc] = true;
        }
        Ok(())
    }

    /// Cyclic cost without validation or allocation. Used on the search hot
    /// path where tours are produced by the operators and are permutations
    /// already.
    ///
    /// # Panics
    ///
    /// Panics if a location is out of range. Repeated or missing locations
    /// are not detected.
    #[inline]
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }
}
