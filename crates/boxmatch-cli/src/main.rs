mod commands;
mod prompt;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boxmatch",
    about = "Extraction box size calculators for cryo-EM datasets"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a box size range for a particle diameter
    Range(commands::range::RangeArgs),
    /// Match box and pixel sizes between two datasets for merging
    Reconcile(commands::reconcile::ReconcileArgs),
    /// Print or save a reconciler config template
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Range(args) => commands::range::run(args),
        Commands::Reconcile(args) => commands::reconcile::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
