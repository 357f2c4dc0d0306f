//! Random number helpers.
//!
//! Every randomized operation in the crate takes an explicit `R: Rng`
//! so runs can be seeded and replayed. [`create_rng`] is the single place
//! where a concrete generator is chosen.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Samples two distinct indices from `0..n` without replacement and
/// returns them ordered, so that `a < b`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
