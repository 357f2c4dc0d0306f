//! Permutation operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order,
//!   produces a single child from an ordered parent pair
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::distinct_pair;
use crate::tour::Tour;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing one child.
///
/// # Algorithm
///
/// 1. Sample two distinct cut points `a < b` from `0..n`
/// 2. Copy `parent_a[a..=b]` to the same positions of the child
/// 3. Starting at position `(b + 1) % n` and wrapping, fill the empty
///    positions with the cities of `parent_b` in `parent_b`'s order,
///    skipping cities already copied in step 2
///
/// The child is always a permutation of the parents' city set.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths. Parents with fewer than
/// two cities are returned unchanged as a clone of `parent_a`.
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Tour {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    if n < 2 {
        return parent_a.to_vec();
    }

    let (a, b) = distinct_pair(n, rng);
    ox_build_child(parent_a, parent_b, a, b)
}

/// Build one OX child: copy `template[start..=end]`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for &city in donor {
        if !in_segment[city] {
            child[pos] = city;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the cities at two distinct random positions.
///
/// Tours with fewer than two cities are left untouched.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
