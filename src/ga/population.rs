//! Population of candidate tours.
//!
//! The population is soft-bounded: it starts at N individuals, may grow to
//! N+1 when a crossover child is inserted, and is truncated back to N at
//! the end of every generation.
//!
//! Selection is elitist: the two lowest-fitness individuals are the
//! parents, with no stochastic component. Survival is truncation: the N
//! fittest individuals are kept.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::operators::swap_mutation;
use super::types::Individual;
use crate::matrix::DistanceMatrix;
use crate::random::random_permutation;
use crate::tour::{evaluate, Tour};
use rand::Rng;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of individuals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` independent uniformly random tours over `0..n`.
    ///
    /// Duplicate tours are permitted. Fitness is left unevaluated; call
    /// [`evaluate`](Self::evaluate) before selecting.
    pub fn initialize<R: Rng>(n: usize, size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::unevaluated(random_permutation(n, rng)))
            .collect();
        Self { individuals }
    }

    /// Builds a population from already evaluated individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals in their current order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Cached fitness values, aligned with [`individuals`](Self::individuals).
    pub fn fitness_values(&self) -> Vec<f64> {
        self.individuals.iter().map(|ind| ind.fitness).collect()
    }

    /// Appends an individual, growing the population by one.
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Recomputes the fitness of every individual.
    ///
    /// With the `parallel` feature and `parallel == true`, tours are
    /// evaluated on the rayon thread pool. Evaluation consumes no
    /// randomness, so the outcome is identical either way.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix, parallel: bool) {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                self.individuals
                    .par_iter_mut()
                    .for_each(|ind| ind.evaluate(matrix));
                return;
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for ind in &mut self.individuals {
            ind.evaluate(matrix);
        }
    }

    /// Returns the two lowest-fitness individuals as `(best, second)`.
    ///
    /// Ties resolve to the earlier position, matching a stable sort on
    /// fitness. Nothing is removed from the population.
    ///
    /// # Panics
    /// Panics if the population has fewer than two individuals.
    pub fn select(&self) -> (&Individual, &Individual) {
        assert!(
            self.individuals.len() >= 2,
            "selection needs at least two individuals, got {}",
            self.individuals.len()
        );

        let mut best = 0;
        let mut second = 1;
        if by_fitness(&self.individuals[second], &self.individuals[best]) == Ordering::Less {
            std::mem::swap(&mut best, &mut second);
        }
        for idx in 2..self.individuals.len() {
            let ind = &self.individuals[idx];
            if by_fitness(ind, &self.individuals[best]) == Ordering::Less {
                second = best;
                best = idx;
            } else if by_fitness(ind, &self.individuals[second]) == Ordering::Less {
                second = idx;
            }
        }

        (&self.individuals[best], &self.individuals[second])
    }

    /// Applies swap mutation to each individual independently with
    /// probability `mutation_prob`.
    ///
    /// One uniform draw is consumed per individual. Fitness is not
    /// recomputed; call [`evaluate`](Self::evaluate) afterwards. Returns the
    /// number of mutated individuals.
    pub fn mutate<R: Rng>(&mut self, mutation_prob: f64, rng: &mut R) -> usize {
        let mut mutated = 0;
        for ind in &mut self.individuals {
            if rng.random::<f64>() < mutation_prob {
                swap_mutation(&mut ind.tour, rng);
                mutated += 1;
            }
        }
        mutated
    }

    /// Sorts ascending by fitness (stable on ties) and keeps the first
    /// `target_size` individuals.
    ///
    /// A population already at or below `target_size` is only sorted.
    pub fn truncate(&mut self, target_size: usize) {
        self.individuals.sort_by(by_fitness);
        self.individuals.truncate(target_size);
    }

    /// The individual with the lowest fitness, first on ties.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .reduce(|best, ind| if by_fitness(ind, best) == Ordering::Less { ind } else { best })
    }
}

/// Evaluates every tour, returning fitness values in the same order.
pub fn fitness_all(tours: &[Tour], matrix: &DistanceMatrix) -> Vec<f64> {
    tours.iter().map(|tour| evaluate(tour, matrix)).collect()
}

fn by_fitness(a: &Individual, b: &Individual) -> Ordering {
    a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_valid_permutation;
    use proptest::prelude::*;

    fn ind(tag: usize, fitness: f64) -> Individual {
        Individual {
            tour: vec![tag],
            fitness,
        }
    }

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0, 1.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![1.0, 2.0, 1.0, 0.0],
        ])
        .expect("valid")
    }

    // ---- initialize ----

    #[test]
    fn test_initialize_produces_permutations() {
        let mut rng = create_rng(42);
        let pop = Population::initialize(8, 30, &mut rng);
        assert_eq!(pop.len(), 30);
        for ind in pop.individuals() {
            assert!(is_valid_permutation(&ind.tour, 8));
            assert_eq!(ind.fitness, f64::INFINITY);
        }
    }

    #[test]
    fn test_initialize_is_seeded() {
        let a = Population::initialize(10, 5, &mut create_rng(9));
        let b = Population::initialize(10, 5, &mut create_rng(9));
        assert_eq!(a, b);
    }

    // ---- evaluate / fitness_all ----

    #[test]
    fn test_evaluate_and_fitness_all_agree() {
        let dm = square();
        let mut pop = Population::initialize(4, 10, &mut create_rng(1));
        pop.evaluate(&dm, false);

        let tours: Vec<Tour> = pop.individuals().iter().map(|i| i.tour.clone()).collect();
        assert_eq!(pop.fitness_values(), fitness_all(&tours, &dm));
    }

    #[test]
    fn test_evaluate_parallel_flag_same_result() {
        let dm = square();
        let mut seq = Population::initialize(4, 20, &mut create_rng(5));
        let mut par = seq.clone();
        seq.evaluate(&dm, false);
        par.evaluate(&dm, true);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_fitness_all_known_values() {
        let dm = square();
        let values = fitness_all(&[vec![0, 1, 2, 3], vec![0, 2, 1, 3]], &dm);
        assert_eq!(values, vec![4.0, 6.0]);
    }

    // ---- select ----

    #[test]
    fn test_select_returns_two_lowest() {
        let pop = Population::from_individuals(vec![
            ind(0, 5.0),
            ind(1, 3.0),
            ind(2, 9.0),
            ind(3, 1.0),
            ind(4, 4.0),
        ]);
        let (best, second) = pop.select();
        assert_eq!(best.tour, vec![3]);
        assert_eq!(second.tour, vec![1]);
        assert_eq!(pop.len(), 5);
    }

    #[test]
    fn test_select_ties_prefer_earlier() {
        let pop = Population::from_individuals(vec![
            ind(0, 2.0),
            ind(1, 1.0),
            ind(2, 1.0),
            ind(3, 1.0),
        ]);
        let (best, second) = pop.select();
        assert_eq!(best.tour, vec![1]);
        assert_eq!(second.tour, vec![2]);
    }

    #[test]
    fn test_select_two_individuals() {
        let pop = Population::from_individuals(vec![ind(0, 7.0), ind(1, 3.0)]);
        let (best, second) = pop.select();
        assert_eq!(best.tour, vec![1]);
        assert_eq!(second.tour, vec![0]);
    }

    #[test]
    #[should_panic(expected = "at least two individuals")]
    fn test_select_single_panics() {
        Population::from_individuals(vec![ind(0, 1.0)]).select();
    }

    // ---- mutate ----

    #[test]
    fn test_mutate_probability_bounds() {
        let mut rng = create_rng(42);
        let original = Population::from_individuals(
            (0..20).map(|_| Individual::unevaluated((0..6).collect())).collect(),
        );

        let mut pop = original.clone();
        assert_eq!(pop.mutate(0.0, &mut rng), 0);
        assert_eq!(pop, original);

        let mut pop = original.clone();
        assert_eq!(pop.mutate(1.0, &mut rng), 20);
        for (m, o) in pop.individuals().iter().zip(original.individuals()) {
            assert_ne!(m.tour, o.tour);
            assert!(is_valid_permutation(&m.tour, 6));
        }
    }

    // ---- truncate ----

    #[test]
    fn test_truncate_keeps_fittest_sorted() {
        let mut pop = Population::from_individuals(vec![
            ind(0, 5.0),
            ind(1, 3.0),
            ind(2, 9.0),
            ind(3, 1.0),
        ]);
        pop.truncate(3);
        assert_eq!(pop.fitness_values(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_truncate_stable_on_ties() {
        let mut pop = Population::from_individuals(vec![
            ind(0, 2.0),
            ind(1, 1.0),
            ind(2, 2.0),
            ind(3, 1.0),
        ]);
        pop.truncate(3);
        let tags: Vec<usize> = pop.individuals().iter().map(|i| i.tour[0]).collect();
        assert_eq!(tags, vec![1, 3, 0]);
    }

    #[test]
    fn test_truncate_smaller_population_untouched_in_size() {
        let mut pop = Population::from_individuals(vec![ind(0, 2.0), ind(1, 1.0)]);
        pop.truncate(5);
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.fitness_values(), vec![1.0, 2.0]);
    }

    // ---- best ----

    #[test]
    fn test_best() {
        assert!(Population::default().best().is_none());
        let pop = Population::from_individuals(vec![ind(0, 4.0), ind(1, 2.0), ind(2, 2.0)]);
        assert_eq!(pop.best().map(|i| i.tour[0]), Some(1));
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_truncate_keeps_n_smallest(
            values in prop::collection::vec(0u32..50, 2..40),
            keep in 1usize..40,
        ) {
            let mut pop = Population::from_individuals(
                values.iter().enumerate().map(|(i, &v)| ind(i, v as f64)).collect(),
            );
            pop.truncate(keep);

            let kept = pop.fitness_values();
            prop_assert_eq!(kept.len(), keep.min(values.len()));
            prop_assert!(kept.windows(2).all(|w| w[0] <= w[1]));

            let mut expected: Vec<f64> = values.iter().map(|&v| v as f64).collect();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            expected.truncate(keep);
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn prop_select_matches_stable_sort(
            values in prop::collection::vec(0u32..20, 2..40),
        ) {
            let pop = Population::from_individuals(
                values.iter().enumerate().map(|(i, &v)| ind(i, v as f64)).collect(),
            );
            let (best, second) = pop.select();

            let mut order: Vec<usize> = (0..values.len()).collect();
            order.sort_by_key(|&i| values[i]);
            prop_assert_eq!(best.tour[0], order[0]);
            prop_assert_eq!(second.tour[0], order[1]);
        }
    }
}
