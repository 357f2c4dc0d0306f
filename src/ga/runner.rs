//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the complete process:
//! initialization → evaluation → elite selection → crossover → mutation →
//! re-evaluation → truncation → repeat for a fixed number of generations.

use super::config::EvolutionConfig;
use super::operators::order_crossover;
use super::population::Population;
use super::types::{GenerationObserver, Individual};
use crate::error::{Result, TspError};
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::Tour;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of an evolutionary run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// The best tour found during the entire run.
    ///
    /// Mutation touches every individual, including the fittest, so this
    /// tour may have been mutated away and need not be a member of the
    /// final population.
    pub best_tour: Tour,

    /// Cyclic length of `best_tour`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Number of generations that produced a crossover child.
    pub crossovers: usize,

    /// Total number of individuals mutated over the run.
    pub mutations: usize,

    /// Best fitness after initialization and after each generation.
    ///
    /// Holds `generations + 1` entries and never increases.
    pub fitness_history: Vec<f64>,
}

/// Executes the elitist generational loop.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{EvolutionConfig, EvolutionEngine};
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = EvolutionEngine::run(&dm, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// ```
pub struct EvolutionEngine;

impl EvolutionEngine {
    /// Runs the search without a progress observer.
    pub fn run(matrix: &DistanceMatrix, config: &EvolutionConfig) -> Result<EvolutionResult> {
        Self::run_with_observer(matrix, config, &mut |_: usize, _: f64| {})
    }

    /// Runs the search, notifying `observer` after every generation.
    ///
    /// The generator is seeded from `config.seed`, or from the thread-local
    /// generator when no seed is set.
    pub fn run_with_observer<O: GenerationObserver>(
        matrix: &DistanceMatrix,
        config: &EvolutionConfig,
        observer: &mut O,
    ) -> Result<EvolutionResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, config, &mut rng, observer)
    }

    /// Runs the search with an explicit random source.
    ///
    /// `config.seed` is ignored; all randomness is drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidParameter`] if the configuration is invalid
    /// - [`TspError::DegenerateMatrix`] if the matrix has fewer than two
    ///   cities
    pub fn run_with_rng<R: Rng, O: GenerationObserver>(
        matrix: &DistanceMatrix,
        config: &EvolutionConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<EvolutionResult> {
        config.validate()?;
        let n = matrix.size();
        if n < 2 {
            return Err(TspError::DegenerateMatrix(n));
        }

        info!(
            cities = n,
            population = config.population_size,
            generations = config.max_generations,
            crossover_prob = config.crossover_prob,
            mutation_prob = config.mutation_prob,
            "starting evolution"
        );

        // 1. Initialize and evaluate
        let mut population = Population::initialize(n, config.population_size, rng);
        population.evaluate(matrix, config.parallel);

        // The incumbent survives even if the population's own best is later
        // mutated away.
        let mut best = find_best(&population)?.clone();
        let mut fitness_history = Vec::with_capacity(history_capacity(config.max_generations));
        fitness_history.push(best.fitness);

        let mut crossovers = 0usize;
        let mut mutations = 0usize;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Elites come from the previous generation's fitness
            if rng.random::<f64>() < config.crossover_prob {
                let child = {
                    let (parent_a, parent_b) = population.select();
                    order_crossover(&parent_a.tour, &parent_b.tour, rng)
                };
                population.push(Individual::unevaluated(child));
                crossovers += 1;
            }

            mutations += population.mutate(config.mutation_prob, rng);
            population.evaluate(matrix, config.parallel);
            population.truncate(config.population_size);

            let gen_best = find_best(&population)?;
            if gen_best.fitness < best.fitness {
                debug!(
                    generation = gen + 1,
                    previous = best.fitness,
                    best = gen_best.fitness,
                    "improved best tour"
                );
                best = gen_best.clone();
            }
            trace!(
                generation = gen + 1,
                population_best = gen_best.fitness,
                "generation complete"
            );

            fitness_history.push(best.fitness);
            observer.on_generation(gen + 1, best.fitness);
        }

        info!(
            best = best.fitness,
            crossovers, mutations, "evolution finished"
        );

        Ok(EvolutionResult {
            best_fitness: best.fitness,
            best_tour: best.tour,
            generations: config.max_generations,
            crossovers,
            mutations,
            fitness_history,
        })
    }
}

/// Upper bound on the fitness history reserved before the loop starts.
const MAX_HISTORY_RESERVE: usize = 1 << 16;

/// Initial capacity for a history of `max_generations + 1` entries.
fn history_capacity(max_generations: usize) -> usize {
    max_generations.saturating_add(1).min(MAX_HISTORY_RESERVE)
}

/// Find the individual with the best (lowest) fitness.
fn find_best(population: &Population) -> Result<&Individual> {
    population
        .best()
        .ok_or_else(|| TspError::InvalidParameter("population must not be empty".into()))
}

// ============================================================================
// Tests
// ============================================================================
