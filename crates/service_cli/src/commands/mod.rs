//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod engines;
pub mod generate;
pub mod stream;
