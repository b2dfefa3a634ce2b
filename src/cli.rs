use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hypnos stochastic sleep-cycle generator.
#[derive(Parser)]
#[command(name = "hypnos", version, about = "Stochastic sleep-cycle generator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a night of sleep and render the hypnogram and abstract art.
    Generate(GenerateArgs),
    /// Simulate a night of sleep and print the stage sequence.
    Trace(TraceArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hypnos.toml")]
    pub config: PathBuf,

    /// Override hypnogram SVG output path from config.
    #[arg(long)]
    pub hypnogram_output: Option<PathBuf>,

    /// Override abstract-art SVG output path from config.
    #[arg(long)]
    pub art_output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `trace` subcommand.
#[derive(clap::Args)]
pub struct TraceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hypnos.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
