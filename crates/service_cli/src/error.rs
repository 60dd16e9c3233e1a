//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced to the command line user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A path argument pointed at nothing.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument value outside what the command supports.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine seeding rejected the supplied seed.
    #[error("seed error: {0}")]
    Seed(#[from] stream_core::SeedError),

    /// Distribution parameters failed validation.
    #[error("distribution error: {0}")]
    Distribution(#[from] stream_distr::DistributionError),

    /// Filter parameters failed validation.
    #[error("filter error: {0}")]
    Filter(#[from] stream_filters::FilterError),

    /// A stream configuration file did not parse.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON output could not be produced.
    #[error("serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
