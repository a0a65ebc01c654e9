//! Command-line interface for hallu-forge.
//!
//! Provides the `generate` pipeline command and a CSV re-export command.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
