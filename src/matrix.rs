//! Dense distance matrix.

use crate::error::{Result, TspError};

/// A validated n×n distance matrix stored in row-major order.
///
/// Construction checks that the table is square, that every entry is a
/// finite non-negative number, and that the diagonal is zero. Symmetry is
/// conventional but not required.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 12.0, 23.0],
///     vec![12.0, 0.0, 25.0],
///     vec![23.0, 25.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from a table of rows.
    ///
    /// Returns [`TspError::MalformedMatrix`] if any row length differs from
    /// the number of rows, or if an entry is invalid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size.checked_mul(size).unwrap_or(0));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TspError::MalformedMatrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from flat row-major data.
    ///
    /// Returns [`TspError::MalformedMatrix`] if `data.len() != size * size`
    /// or if an entry is invalid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        let Some(expected) = size.checked_mul(size) else {
            return Err(TspError::MalformedMatrix(format!(
                "a {size}x{size} matrix does not fit in memory"
            )));
        };
        if data.len() != expected {
            return Err(TspError::MalformedMatrix(format!(
                "expected {expected} entries for a {size}x{size} matrix, got {}",
                data.len()
            )));
        }
        let dm = Self { data, size };
        dm.check_entries()?;
        Ok(dm)
    }

    fn check_entries(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                let d = self.get(from, to);
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::MalformedMatrix(format!(
                        "distance[{from}][{to}] = {d} is not a finite non-negative number"
                    )));
                }
            }
            if self.get(from, from) != 0.0 {
                return Err(TspError::MalformedMatrix(format!(
                    "distance[{from}][{from}] = {} must be zero",
                    self.get(from, from)
                )));
            }
        }
        Ok(())
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "city index out of range: ({from}, {to}) for {} cities",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
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

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.size.max(1))
    }
}
