//! Tours and tour evaluation.

use crate::matrix::DistanceMatrix;

/// An ordered visit sequence of city indices, interpreted as a closed cycle.
pub type Tour = Vec<usize>;

/// Computes the cyclic length of `tour` under `matrix`.
///
/// Sums the distance between every consecutive pair and the closing edge
/// from the last city back to the first. An empty tour has length zero.
///
/// # Panics
///
/// Panics if the tour contains a city index outside the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::{evaluate, DistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 12.0, 23.0],
///     vec![12.0, 0.0, 25.0],
///     vec![23.0, 25.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(evaluate(&[0, 1, 2], &dm), 60.0);
/// ```
pub fn evaluate(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let open: f64 = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    open + matrix.get(last, first)
}

/// Returns `true` if `tour` visits every city of `0..n` exactly once.
pub fn is_valid_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
