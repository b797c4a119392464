//! QMusic helper CLI.
//!
//! Exposes the library's cover art, tag, duration, URL, config directory and
//! privilege helpers as subcommands.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("qmusic=info".parse()?))
        .init();

    cli::run_command(&args)
}
