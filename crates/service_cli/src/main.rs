//! Randstream CLI - command line stream generation
//!
//! This is the operational entry point for the randstream generator stack.
//!
//! # Commands
//!
//! - `randstream generate` - Draw values from an engine through a distribution
//! - `randstream stream --config <file>` - Emit a filtered stream described in TOML
//! - `randstream engines` - List the available engines and their default streams
//!
//! # Architecture
//!
//! The service layer sits on top of the three library crates: `stream_core`
//! supplies engines and unit scaling, `stream_distr` the distribution
//! transforms and `stream_filters` the sequence filters and driver. This
//! binary only parses arguments, wires those layers together and formats
//! output.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod source;

pub use error::{CliError, Result};

/// Randstream deterministic generator CLI
#[derive(Parser)]
#[command(name = "randstream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw values from an engine through a distribution
    Generate(commands::generate::GenerateArgs),

    /// Emit a filtered stream described by a TOML file
    Stream {
        /// Path to the stream configuration file
        #[arg(short, long)]
        config: String,

        /// Override the configured value count
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output format (lines, json)
        #[arg(short, long, default_value = "lines")]
        format: String,
    },

    /// List the available engines and their default streams
    Engines,
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
        Commands::Generate(args) => commands::generate::run(&args),
        Commands::Stream {
            config,
            count,
            format,
        } => commands::stream::run(&config, count, &format),
        Commands::Engines => commands::engines::run(),
    }
}
