//! Plumbline CLI - Reserve Drain Scenario Projections
//!
//! This is the operational entry point for the plumbline projection stack.
//!
//! # Commands
//!
//! - `plumbline project` - Run the scenario catalogue and render the
//!   comparison report
//! - `plumbline conditions` - Resolve and print starting conditions from a
//!   snapshot
//!
//! # Architecture
//!
//! As the service layer of the A-P-S stack, this crate wires the FRED
//! adapter and the projection kernel into a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod export;

pub use error::{CliError, Result};

/// Plumbline reserve-projection CLI
#[derive(Parser)]
#[command(name = "plumbline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "plumbline.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the scenario catalogue and render the comparison report
    Project {
        /// Path to the combined snapshot CSV
        #[arg(short, long)]
        data: Option<String>,

        /// Override starting reserves, in billions
        #[arg(long)]
        reserves: Option<f64>,

        /// Override the starting RRP buffer, in billions
        #[arg(long)]
        rrp: Option<f64>,

        /// Override the starting Treasury cash balance, in billions
        #[arg(long)]
        tga: Option<f64>,

        /// Projection horizon in months
        #[arg(short = 'm', long)]
        horizon: Option<usize>,

        /// Write the summary table to a CSV file
        #[arg(long)]
        summary_csv: Option<String>,

        /// Write full trajectories to a JSON file
        #[arg(long)]
        trajectories: Option<String>,
    },

    /// Resolve and print starting conditions from a snapshot
    Conditions {
        /// Path to the combined snapshot CSV
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Project {
            data,
            reserves,
            rrp,
            tga,
            horizon,
            summary_csv,
            trajectories,
        } => commands::project::run(
            &cli.config,
            data.as_deref(),
            reserves,
            rrp,
            tga,
            horizon,
            summary_csv.as_deref(),
            trajectories.as_deref(),
        ),
        Commands::Conditions { data } => commands::conditions::run(&cli.config, data.as_deref()),
    }
}
