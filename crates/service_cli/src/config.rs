//! TOML stream configuration.
//!
//! A stream file describes one filtered generator end to end: the engine and
//! its seed, the distribution shaping the values and the filter set the
//! output must satisfy. Parsing is pure serde; every section is then built
//! into its validated library type, so a file that parses can still be
//! rejected by the constructors it feeds.
//!
//! ```toml
//! count = 100
//!
//! [source]
//! engine = "xorshift128"
//! seed = 42
//!
//! [distribution]
//! kind = "normal"
//! mean = 0.0
//! std_dev = 1.0
//!
//! [[filters]]
//! kind = "ascendant"
//! length = 3
//!
//! [[filters]]
//! kind = "close-to-reference"
//! length = 2
//! reference = 0.0
//! range = 0.25
//! ```

use serde::Deserialize;

use stream_filters::{
    AscendantRun, CloseToReferenceRun, DescendantRun, ExtremeRun, FilterError,
    FrequentValueFilter, GreaterRun, InRangeRun, LessRun, LittleDifferenceRun, NotInRangeRun,
    OppositePatternFilter, PairFilter, RepeatingPatternFilter, SamePatternFilter, SameValueRun,
    ScalarFilter,
};

use crate::Result;

fn default_count() -> usize {
    10
}

/// A full stream description parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamConfig {
    /// Number of values to emit; overridable from the command line.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Engine section.
    pub source: SourceConfig,
    /// Distribution section.
    pub distribution: DistributionConfig,
    /// Filter list, possibly empty.
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl StreamConfig {
    /// Reads and parses a stream file.
    pub fn from_path(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Builds the configured filter set.
    pub fn build_filters(&self) -> std::result::Result<Vec<ScalarFilter>, FilterError> {
        self.filters.iter().map(FilterConfig::build).collect()
    }
}

/// Engine name and optional seed.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// One of the names in [`crate::source::ENGINE_NAMES`].
    pub engine: String,
    /// Engine seed; the engine's default state when omitted.
    pub seed: Option<u64>,
}

/// Distribution section of a stream file.
///
/// `kind = "unit"` passes the engine's unit-interval output through
/// unchanged. Bernoulli streams emit 1.0 for success and 0.0 for failure so
/// that the scalar filters apply to them as well.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DistributionConfig {
    /// Raw unit-interval values.
    Unit,
    /// Uniform over a range; half-open unless `inclusive` is set.
    Uniform {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Include the upper bound.
        #[serde(default)]
        inclusive: bool,
    },
    /// Bernoulli trials emitted as 1.0 / 0.0.
    Bernoulli {
        /// Success probability in `[0, 1]`.
        probability: f64,
    },
    /// Sum of unit uniforms.
    IrwinHall {
        /// Number of summed draws.
        iids: u32,
    },
    /// Weibull via inverse transform.
    Weibull {
        /// Shape parameter.
        shape: f64,
        /// Scale parameter.
        scale: f64,
    },
    /// Gaussian via the polar method.
    Normal {
        /// Distribution mean.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
    },
}

/// One `[[filters]]` entry of a stream file.
///
/// Field names mirror the constructor parameters of the filter each kind
/// builds; [`build`](Self::build) runs those constructors, so invalid
/// parameters surface as [`FilterError`]s naming the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterConfig {
    /// Forbid strictly ascending runs.
    Ascendant {
        /// Forbidden run length.
        length: usize,
    },
    /// Forbid strictly descending runs.
    Descendant {
        /// Forbidden run length.
        length: usize,
    },
    /// Forbid repeated-value runs.
    SameValue {
        /// Trailing equal entries that trigger rejection.
        length: usize,
    },
    /// Forbid runs above a threshold.
    Greater {
        /// Trailing entries inspected.
        length: usize,
        /// Threshold.
        reference: f64,
    },
    /// Forbid runs below a threshold.
    Less {
        /// Trailing entries inspected.
        length: usize,
        /// Threshold.
        reference: f64,
    },
    /// Forbid runs inside an interval.
    InRange {
        /// Trailing entries inspected.
        length: usize,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Forbid runs outside an interval.
    NotInRange {
        /// Trailing entries inspected.
        length: usize,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Forbid clusters near a reference point.
    CloseToReference {
        /// Trailing entries inspected.
        length: usize,
        /// Cluster centre.
        reference: f64,
        /// Inclusive distance counting as close.
        range: f64,
    },
    /// Forbid runs hugging either expected extreme.
    Extreme {
        /// Trailing entries inspected.
        length: usize,
        /// Low pivot.
        expected_min: f64,
        /// High pivot.
        expected_max: f64,
        /// Inclusive distance counting as hugging.
        range: f64,
    },
    /// Forbid chains of small consecutive steps.
    LittleDifference {
        /// Trailing entries inspected.
        length: usize,
        /// Step size below which movement is too small.
        difference: f64,
    },
    /// Forbid echoing the entry a fixed distance back.
    Pair {
        /// Lookback distance.
        distance: usize,
    },
    /// Forbid overrepresented values in a window.
    FrequentValue {
        /// Entries counted.
        window: usize,
        /// Occurrences tolerated.
        allowed_repeats: usize,
    },
    /// Forbid continuing a blockwise repetition.
    SamePattern {
        /// Block length.
        length: usize,
    },
    /// Forbid continuing a blockwise alternation.
    OppositePattern {
        /// Block length.
        length: usize,
    },
    /// Forbid repeating a recent motif.
    RepeatingPattern {
        /// Entries scanned.
        window: usize,
        /// Motif length.
        length: usize,
    },
}

impl FilterConfig {
    /// Runs the matching filter constructor.
    pub fn build(&self) -> std::result::Result<ScalarFilter, FilterError> {
        Ok(match *self {
            Self::Ascendant { length } => AscendantRun::new(length)?.into(),
            Self::Descendant { length } => DescendantRun::new(length)?.into(),
            Self::SameValue { length } => SameValueRun::new(length)?.into(),
            Self::Greater { length, reference } => GreaterRun::new(length, reference)?.into(),
            Self::Less { length, reference } => LessRun::new(length, reference)?.into(),
            Self::InRange { length, min, max } => InRangeRun::new(length, min, max)?.into(),
            Self::NotInRange { length, min, max } => NotInRangeRun::new(length, min, max)?.into(),
            Self::CloseToReference {
                length,
                reference,
                range,
            } => CloseToReferenceRun::new(length, reference, range)?.into(),
            Self::Extreme {
                length,
                expected_min,
                expected_max,
                range,
            } => ExtremeRun::new(length, expected_min, expected_max, range)?.into(),
            Self::LittleDifference { length, difference } => {
                LittleDifferenceRun::new(length, difference)?.into()
            }
            Self::Pair { distance } => PairFilter::new(distance).into(),
            Self::FrequentValue {
                window,
                allowed_repeats,
            } => FrequentValueFilter::new(window, allowed_repeats)?.into(),
            Self::SamePattern { length } => SamePatternFilter::new(length)?.into(),
            Self::OppositePattern { length } => OppositePatternFilter::new(length)?.into(),
            Self::RepeatingPattern { window, length } => {
                RepeatingPatternFilter::new(window, length)?.into()
            }
        })
    }
}
