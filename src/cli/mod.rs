//! Command-line interface for the QMusic helpers.

mod commands;

pub use commands::{Cli, run_command};
