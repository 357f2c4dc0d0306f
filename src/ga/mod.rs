//! Elitist genetic algorithm for the TSP.
//!
//! Tours are permutations of city indices. Each generation the two fittest
//! tours breed at most one child through order crossover, every tour may
//! receive a swap mutation, and the population is truncated back to its
//! target size keeping the fittest.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`EvolutionEngine`]: Executes the generational loop
//! - [`EvolutionResult`]: Best tour found with run statistics
//! - [`Population`]: Soft-bounded collection of evaluated tours
//! - [`GenerationObserver`]: Per-generation progress callback
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod population;
mod runner;
mod types;

pub use config::EvolutionConfig;
pub use population::{fitness_all, Population};
pub use runner::{EvolutionEngine, EvolutionResult};
pub use types::{GenerationObserver, Individual};
