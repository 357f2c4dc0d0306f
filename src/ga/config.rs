//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the evolutionary
//! loop.

use crate::error::{Result, TspError};

/// Configuration for the evolutionary TSP search.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(1000)
///     .with_crossover_prob(0.5)
///     .with_mutation_prob(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Number of individuals kept after every generation (N).
    ///
    /// Must be at least 2 so that two parents can be selected.
    pub population_size: usize,

    /// Number of generations to run. The loop is bounded, not
    /// convergence-driven.
    pub max_generations: usize,

    /// Probability (0.0–1.0) that a generation produces one crossover child.
    ///
    /// A single draw per generation gates a single child bred from the two
    /// fittest individuals.
    pub crossover_prob: f64,

    /// Per-individual probability (0.0–1.0) of a swap mutation.
    pub mutation_prob: f64,

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            crossover_prob: 0.5,
            mutation_prob: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-generation crossover probability.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob;
        self
    }

    /// Sets the per-individual mutation probability.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::InvalidParameter`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::InvalidParameter(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(TspError::InvalidParameter(
                "max_generations must be at least 1".into(),
            ));
        }
        check_probability("crossover_prob", self.crossover_prob)?;
        check_probability("mutation_prob", self.mutation_prob)?;
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TspError::InvalidParameter(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 1000);
        assert!((config.crossover_prob - 0.5).abs() < 1e-10);
        assert!((config.mutation_prob - 0.1).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(200)
            .with_max_generations(50)
            .with_crossover_prob(0.8)
            .with_mutation_prob(0.05)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 50);
        assert!((config.crossover_prob - 0.8).abs() < 1e-10);
        assert!((config.mutation_prob - 0.05).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let err = EvolutionConfig::default()
                .with_population_size(n)
                .validate()
                .unwrap_err();
            assert!(matches!(err, TspError::InvalidParameter(_)));
        }
        assert!(EvolutionConfig::default()
            .with_population_size(2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolutionConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_probability_bounds() {
        for prob in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            assert!(EvolutionConfig::default()
                .with_crossover_prob(prob)
                .validate()
                .is_err());
            assert!(EvolutionConfig::default()
                .with_mutation_prob(prob)
                .validate()
                .is_err());
        }
        for prob in [0.0, 1.0] {
            assert!(EvolutionConfig::default()
                .with_crossover_prob(prob)
                .with_mutation_prob(prob)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_validate_message_names_parameter() {
        let err = EvolutionConfig::default()
            .with_mutation_prob(2.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter: mutation_prob must be within [0, 1], got 2"
        );
    }
}
