//! Evolutionary heuristic for the symmetric Traveling Salesman Problem.
//!
//! Searches for a short closed tour over a fixed set of cities with an
//! elitist genetic algorithm:
//!
//! - **Evaluation**: cyclic tour length under a [`DistanceMatrix`]
//! - **Selection**: the two fittest tours are the parents
//! - **Crossover**: order crossover (OX), at most one child per generation
//! - **Mutation**: per-tour swap of two distinct cities
//! - **Replacement**: truncation back to the target population size
//!
//! The search is a heuristic, not an exact solver. All randomness flows
//! through an explicit `rand::Rng`, so seeded runs are reproducible.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::{EvolutionConfig, EvolutionEngine};
//! use u_tsp::instances::sample_ten_cities;
//!
//! let dm = sample_ten_cities();
//! let config = EvolutionConfig::default()
//!     .with_population_size(100)
//!     .with_max_generations(300)
//!     .with_seed(42);
//! let result = EvolutionEngine::run(&dm, &config).unwrap();
//! assert_eq!(result.best_tour.len(), 10);
//! ```

pub mod error;
pub mod ga;
pub mod instances;
pub mod matrix;
pub mod random;
pub mod tour;

pub use error::{Result, TspError};
pub use matrix::DistanceMatrix;
pub use tour::{evaluate, is_valid_permutation, Tour};
