//! Core types shared by the population and the engine.
//!
//! An [`Individual`] pairs a tour with its cached fitness, and a
//! [`GenerationObserver`] receives progress notifications from the engine.

use crate::matrix::DistanceMatrix;
use crate::tour::{evaluate, Tour};

/// A candidate tour with its cached fitness.
///
/// Fitness is the cyclic tour length: lower is better. A freshly created
/// or mutated individual carries a stale value until
/// [`evaluate`](Individual::evaluate) is called.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The visit order.
    pub tour: Tour,

    /// Cached cyclic length of `tour`.
    pub fitness: f64,
}

impl Individual {
    /// Wraps a tour that has not been evaluated yet.
    ///
    /// The fitness starts at `f64::INFINITY`, the worst possible value.
    pub fn unevaluated(tour: Tour) -> Self {
        Self {
            tour,
            fitness: f64::INFINITY,
        }
    }

    /// Recomputes and stores the fitness of this individual.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix) {
        self.fitness = evaluate(&self.tour, matrix);
    }
}

/// Receives the best fitness at the end of every generation.
///
/// Useful for progress display, logging, or early inspection of
/// convergence. Any `FnMut(usize, f64)` closure implements this trait.
///
/// ```
/// use u_tsp::ga::GenerationObserver;
///
/// let mut seen = Vec::new();
/// let mut observer = |generation: usize, best: f64| seen.push((generation, best));
/// observer.on_generation(1, 42.0);
/// assert_eq!(seen, vec![(1, 42.0)]);
/// ```
pub trait GenerationObserver {
    /// Called once per generation, after truncation.
    ///
    /// `generation` is 1-based; `best_fitness` is the best fitness found
    /// so far in the run.
    fn on_generation(&mut self, generation: usize, best_fitness: f64);
}

impl<F: FnMut(usize, f64)> GenerationObserver for F {
    fn on_generation(&mut self, generation: usize, best_fitness: f64) {
        self(generation, best_fitness)
    }
}
