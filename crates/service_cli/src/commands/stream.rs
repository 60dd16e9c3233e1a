//! Stream command implementation
//!
//! Runs a filtered generator described by a TOML stream file and prints the
//! accepted values.

use tracing::info;

use stream_core::{from_fn, Generate};
use stream_distr::{Bernoulli, IrwinHall, Normal, NormalSource, Uniform, Weibull};
use stream_filters::{FilteredGenerator, ScalarFilter};

use crate::config::{DistributionConfig, StreamConfig};
use crate::source::UnitSource;
use crate::{CliError, Result};

/// Run the stream command
pub fn run(config_path: &str, count: Option<usize>, format: &str) -> Result<()> {
    if !std::path::Path::new(config_path).exists() {
        return Err(CliError::FileNotFound(config_path.to_string()));
    }

    let config = StreamConfig::from_path(config_path)?;
    let filters = config.build_filters()?;
    let count = count.unwrap_or(config.count);

    info!("Streaming {} values", count);
    info!("  Engine: {}", config.source.engine);
    info!("  Filters: {}", filters.len());

    let unit = UnitSource::from_name(&config.source.engine, config.source.seed)?;

    match config.distribution {
        DistributionConfig::Unit => emit_filtered(unit, filters, count, format),
        DistributionConfig::Uniform {
            min,
            max,
            inclusive,
        } => {
            let dist = if inclusive {
                Uniform::new_inclusive(min, max)?
            } else {
                Uniform::new(min, max)?
            };
            let mut unit = unit;
            emit_filtered(from_fn(move || dist.sample(&mut unit)), filters, count, format)
        }
        DistributionConfig::Bernoulli { probability } => {
            let dist = Bernoulli::new(probability)?;
            let mut unit = unit;
            emit_filtered(
                from_fn(move || if dist.sample(&mut unit) { 1.0 } else { 0.0 }),
                filters,
                count,
                format,
            )
        }
        DistributionConfig::IrwinHall { iids } => {
            let dist = IrwinHall::new(iids)?;
            let mut unit = unit;
            emit_filtered(from_fn(move || dist.sample(&mut unit)), filters, count, format)
        }
        DistributionConfig::Weibull { shape, scale } => {
            let dist = Weibull::new(shape, scale)?;
            let mut unit = unit;
            emit_filtered(from_fn(move || dist.sample(&mut unit)), filters, count, format)
        }
        DistributionConfig::Normal { mean, std_dev } => {
            let params = Normal::new(mean, std_dev)?;
            emit_filtered(NormalSource::new(params, unit), filters, count, format)
        }
    }
}

fn emit_filtered<S: Generate<Output = f64>>(
    source: S,
    filters: Vec<ScalarFilter>,
    count: usize,
    format: &str,
) -> Result<()> {
    let mut generator = FilteredGenerator::with_filters(source, filters);
    match format {
        "lines" => {
            for _ in 0..count {
                println!("{}", generator.generate());
            }
        }
        "json" => {
            let values: Vec<f64> = (0..count).map(|_| generator.generate()).collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: lines, json",
                other
            )));
        }
    }
    Ok(())
}
