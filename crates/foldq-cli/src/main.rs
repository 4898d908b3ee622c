//! foldq Command-Line Interface
//!
//! Encodes a simplified protein conformation as a quantum circuit,
//! simulates it, and builds and analyzes residue polarity operators.
//!
//! ```text
//! foldq simulate --qubits 4 --shots 2048
//! foldq circuit --qubits 5 --linear
//! foldq simulate --qubits 3 --complex --seed 7
//! foldq operator --size 6 --coupling 0.5
//! foldq interactive
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use foldq_core::AnalyzerConfig;

mod commands;

use commands::{circuit, interactive, operator, simulate, version};

/// foldq - quantum encoding and analysis of protein conformations
#[derive(Parser)]
#[command(name = "foldq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.foldq/config.yaml if present)
    #[arg(short, long, global = true, env = "FOLDQ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a conformation circuit, simulate it and print the distribution
    Simulate {
        /// Number of residues / qubits (2-10)
        #[arg(short, long)]
        qubits: Option<u32>,

        /// Couple only neighbouring residues
        #[arg(long, conflicts_with = "complex")]
        linear: bool,

        /// Couple every pair of residues
        #[arg(long)]
        complex: bool,

        /// Number of shots
        #[arg(short, long)]
        shots: Option<u32>,

        /// Sampling seed for reproducible counts
        #[arg(long)]
        seed: Option<u64>,

        /// Print the run record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a conformation circuit and print its layers
    Circuit {
        /// Number of residues / qubits (2-10)
        #[arg(short, long)]
        qubits: Option<u32>,

        /// Couple only neighbouring residues
        #[arg(long, conflicts_with = "complex")]
        linear: bool,

        /// Couple every pair of residues
        #[arg(long)]
        complex: bool,
    },

    /// Build the polarity operator of an example tensor and analyze it
    Operator {
        /// Tensor dimension
        #[arg(long)]
        size: Option<usize>,

        /// Coupling scalar applied to every coefficient
        #[arg(long, allow_negative_numbers = true)]
        coupling: Option<f64>,

        /// Seed of the example tensor
        #[arg(long)]
        seed: Option<u64>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Menu-driven session
    Interactive,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AnalyzerConfig::load(cli.config.as_deref());

    // Setup logging
    let filter = match cli.verbose {
        0 => config
            .as_ref()
            .map_or_else(|_| "warn".to_string(), |c| c.logging.level.clone()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    tracing::debug!(config_file = ?cli.config, "foldq starting");

    let result = match config {
        Err(e) => Err(e.into()),
        Ok(config) => match cli.command {
            Commands::Simulate {
                qubits,
                linear,
                complex,
                shots,
                seed,
                json,
            } => simulate::execute(&config, qubits, linear, complex, shots, seed, json).await,

            Commands::Circuit {
                qubits,
                linear,
                complex,
            } => circuit::execute(&config, qubits, linear, complex),

            Commands::Operator {
                size,
                coupling,
                seed,
                json,
            } => operator::execute(&config, size, coupling, seed, json),

            Commands::Interactive => interactive::execute(&config).await,

            Commands::Version => {
                version::execute();
                Ok(())
            }
        },
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
