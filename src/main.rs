use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_tsp::ga::{EvolutionConfig, EvolutionEngine};
use u_tsp::instances::sample_ten_cities;
use u_tsp::DistanceMatrix;

/// Approximate a shortest closed tour with an elitist genetic algorithm.
#[derive(Parser)]
#[command(name = "u-tsp", version)]
struct Args {
    /// JSON file holding the distance matrix as an array of rows
    /// (uses the built-in 10-city sample when omitted)
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// population size
    #[arg(long, default_value_t = 1000)]
    population_size: usize,

    /// per-generation crossover probability
    #[arg(long, default_value_t = 0.5)]
    crossover_prob: f64,

    /// per-individual mutation probability
    #[arg(long, default_value_t = 0.1)]
    mutation_prob: f64,

    /// number of generations
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// log progress every this many generations (0 disables)
    #[arg(long, default_value_t = 100)]
    progress_every: usize,

    /// print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let matrix = match &args.matrix {
        Some(path) => load_matrix(path)?,
        None => sample_ten_cities(),
    };

    let mut config = EvolutionConfig::default()
        .with_population_size(args.population_size)
        .with_crossover_prob(args.crossover_prob)
        .with_mutation_prob(args.mutation_prob)
        .with_max_generations(args.generations);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let progress_every = args.progress_every;
    let mut progress = |generation: usize, best: f64| {
        if progress_every > 0 && generation % progress_every == 0 {
            info!(generation, best, "evolution progress");
        }
    };
    let result = EvolutionEngine::run_with_observer(&matrix, &config, &mut progress)
        .context("evolution run rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{:?}", result.best_tour);
        println!("{}", result.best_fitness);
    }
    Ok(())
}

fn load_matrix(path: &Path) -> Result<DistanceMatrix> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of rows", path.display()))?;
    DistanceMatrix::from_rows(rows).with_context(|| format!("invalid matrix in {}", path.display()))
}
