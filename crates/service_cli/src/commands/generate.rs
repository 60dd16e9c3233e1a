//! Generate command implementation
//!
//! Draws values from a named engine through one of the distribution
//! transforms and prints them to stdout.

use clap::Args;
use tracing::info;

use stream_core::Generate;
use stream_distr::{Bernoulli, IrwinHall, Normal, NormalSource, Uniform, Weibull};

use crate::source::UnitSource;
use crate::{CliError, Result};

/// Arguments for `randstream generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Engine name (xorshift32, xorshift64, xorshift128, lcg32, lcg64)
    #[arg(short, long, default_value = "xorshift128")]
    pub engine: String,

    /// Engine seed; the engine's default state is used when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Distribution (unit, uniform, bernoulli, irwin-hall, weibull, normal)
    #[arg(short, long, default_value = "unit")]
    pub distribution: String,

    /// Uniform lower bound
    #[arg(long, default_value = "0.0")]
    pub min: f64,

    /// Uniform upper bound
    #[arg(long, default_value = "1.0")]
    pub max: f64,

    /// Include the uniform upper bound
    #[arg(long)]
    pub inclusive: bool,

    /// Bernoulli success probability
    #[arg(long, default_value = "0.5")]
    pub probability: f64,

    /// Irwin-Hall summand count
    #[arg(long, default_value = "12")]
    pub iids: u32,

    /// Weibull shape parameter
    #[arg(long, default_value = "1.0")]
    pub shape: f64,

    /// Weibull scale parameter
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Normal mean
    #[arg(long, default_value = "0.0")]
    pub mean: f64,

    /// Normal standard deviation
    #[arg(long, default_value = "1.0")]
    pub std_dev: f64,

    /// Output format (lines, json)
    #[arg(short, long, default_value = "lines")]
    pub format: String,
}

/// Run the generate command
pub fn run(args: &GenerateArgs) -> Result<()> {
    info!("Drawing {} values", args.count);
    info!("  Engine: {}", args.engine);
    info!("  Distribution: {}", args.distribution);

    let unit = UnitSource::from_name(&args.engine, args.seed)?;
    let values = draw(unit, args)?;
    emit(&values, &args.format)
}

fn draw<G: Generate<Output = f64>>(
    mut unit: G,
    args: &GenerateArgs,
) -> Result<Vec<serde_json::Value>> {
    let count = args.count;
    let values: Vec<serde_json::Value> = match args.distribution.as_str() {
        "unit" => (0..count).map(|_| unit.generate().into()).collect(),
        "uniform" => {
            let dist = if args.inclusive {
                Uniform::new_inclusive(args.min, args.max)?
            } else {
                Uniform::new(args.min, args.max)?
            };
            (0..count).map(|_| dist.sample(&mut unit).into()).collect()
        }
        "bernoulli" => {
            let dist = Bernoulli::new(args.probability)?;
            (0..count).map(|_| dist.sample(&mut unit).into()).collect()
        }
        "irwin-hall" => {
            let dist = IrwinHall::new(args.iids)?;
            (0..count).map(|_| dist.sample(&mut unit).into()).collect()
        }
        "weibull" => {
            let dist = Weibull::new(args.shape, args.scale)?;
            (0..count).map(|_| dist.sample(&mut unit).into()).collect()
        }
        "normal" => {
            let params = Normal::new(args.mean, args.std_dev)?;
            let mut source = NormalSource::new(params, unit);
            (0..count).map(|_| source.generate().into()).collect()
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown distribution: {}. Supported: unit, uniform, bernoulli, irwin-hall, weibull, normal",
                other
            )));
        }
    };
    Ok(values)
}

fn emit(values: &[serde_json::Value], format: &str) -> Result<()> {
    match format {
        "lines" => {
            for value in values {
                println!("{value}");
            }
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(values)?);
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

#[cfg(test)]
mod tests {
    use super::*;
    use stream_core::{Unit, XorShift128};

    fn args(distribution: &str) -> GenerateArgs {
        GenerateArgs {
            engine: "xorshift128".to_string(),
            seed: Some(42),
            count: 25,
            distribution: distribution.to_string(),
            min: -1.0,
            max: 1.0,
            inclusive: false,
            probability: 0.5,
            iids: 12,
            shape: 1.5,
            scale: 2.0,
            mean: 0.0,
            std_dev: 1.0,
            format: "lines".to_string(),
        }
    }

    fn unit_source() -> Unit<XorShift128> {
        Unit::new(XorShift128::with_seed(42))
    }

    #[test]
    fn draw_respects_the_requested_count() {
        let values = draw(unit_source(), &args("unit")).unwrap();
        assert_eq!(values.len(), 25);
    }

    #[test]
    fn bernoulli_draws_are_json_booleans() {
        let values = draw(unit_source(), &args("bernoulli")).unwrap();
        assert!(values.iter().all(|v| v.is_boolean()));
    }

    #[test]
    fn real_valued_distributions_emit_json_numbers() {
        for kind in ["unit", "uniform", "irwin-hall", "weibull", "normal"] {
            let values = draw(unit_source(), &args(kind)).unwrap();
            assert!(values.iter().all(|v| v.is_f64()), "{kind} emitted non-numbers");
        }
    }

    #[test]
    fn unknown_distribution_is_reported() {
        let err = draw(unit_source(), &args("zipf")).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn invalid_parameters_surface_as_distribution_errors() {
        let mut bad = args("bernoulli");
        bad.probability = 1.5;
        let err = draw(unit_source(), &bad).unwrap_err();
        assert!(matches!(err, CliError::Distribution(_)));
    }

    #[test]
    fn unknown_format_is_reported() {
        let err = emit(&[], "xml").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
