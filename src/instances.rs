//! Built-in problem instances.

use crate::matrix::DistanceMatrix;

const TEN_CITIES: [[f64; 10]; 10] = [
    [0.0, 12.0, 23.0, 34.0, 45.0, 56.0, 67.0, 78.0, 89.0, 90.0],
    [12.0, 0.0, 25.0, 36.0, 47.0, 58.0, 69.0, 80.0, 91.0, 92.0],
    [23.0, 25.0, 0.0, 15.0, 26.0, 37.0, 48.0, 59.0, 70.0, 81.0],
    [34.0, 36.0, 15.0, 0.0, 17.0, 28.0, 39.0, 50.0, 61.0, 72.0],
    [45.0, 47.0, 26.0, 17.0, 0.0, 11.0, 22.0, 33.0, 44.0, 55.0],
    [56.0, 58.0, 37.0, 28.0, 11.0, 0.0, 13.0, 24.0, 35.0, 46.0],
    [67.0, 69.0, 48.0, 39.0, 22.0, 13.0, 0.0, 11.0, 22.0, 33.0],
    [78.0, 80.0, 59.0, 50.0, 33.0, 24.0, 11.0, 0.0, 13.0, 24.0],
    [89.0, 91.0, 70.0, 61.0, 44.0, 35.0, 22.0, 13.0, 0.0, 15.0],
    [90.0, 92.0, 81.0, 72.0, 55.0, 46.0, 33.0, 24.0, 15.0, 0.0],
];

/// A symmetric 10-city sample instance.
///
/// Cities lie roughly along a line, so the tour `0, 1, 2, ..., 9` is a
/// strong baseline.
pub fn sample_ten_cities() -> DistanceMatrix {
    let data = TEN_CITIES.iter().flatten().copied().collect();
    DistanceMatrix::from_data(TEN_CITIES.len(), data).expect("built-in instance is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::evaluate;

    #[test]
    fn test_sample_is_valid_and_symmetric() {
        let dm = sample_ten_cities();
        assert_eq!(dm.size(), 10);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_sample_identity_tour() {
        let dm = sample_ten_cities();
        let tour: Vec<usize> = (0..10).collect();
        // 12 + 25 + 15 + 17 + 11 + 13 + 11 + 13 + 15 + 90
        assert_eq!(evaluate(&tour, &dm), 222.0);
    }
}
