//! Engines command implementation
//!
//! Prints the engine inventory with default seeds and the first values of
//! each default-seeded unit stream, as a quick reproducibility reference.

use stream_core::{Generate, Lcg32, Lcg64, Unit, XorShift128, XorShift32, XorShift64};

use crate::Result;

fn preview<G: Generate<Output = f64>>(mut source: G) -> String {
    format!(
        "{:.6} {:.6} {:.6}",
        source.generate(),
        source.generate(),
        source.generate()
    )
}

/// Run the engines command
pub fn run() -> Result<()> {
    println!("Available engines:\n");
    println!(
        "{:<12} {:>5}  {:>22}  first unit draws (default seed)",
        "name", "bits", "default seed"
    );

    println!(
        "{:<12} {:>5}  {:>22}  {}",
        "xorshift32",
        32,
        XorShift32::DEFAULT_SEED,
        preview(Unit::new(XorShift32::new()))
    );
    println!(
        "{:<12} {:>5}  {:>22}  {}",
        "xorshift64",
        64,
        XorShift64::DEFAULT_SEED,
        preview(Unit::new(XorShift64::new()))
    );
    println!(
        "{:<12} {:>5}  {:>22}  {}",
        "xorshift128",
        128,
        XorShift128::DEFAULT_SEED,
        preview(Unit::new(XorShift128::new()))
    );
    println!(
        "{:<12} {:>5}  {:>22}  {}",
        "lcg32",
        32,
        Lcg32::DEFAULT_SEED,
        preview(Unit::new(Lcg32::new()))
    );
    println!(
        "{:<12} {:>5}  {:>22}  {}",
        "lcg64",
        64,
        Lcg64::DEFAULT_SEED,
        preview(Unit::new(Lcg64::new()))
    );

    Ok(())
}
