//! deeplinks CLI entry point.
//!
//! Parses arguments, installs the log subscriber, runs the subcommand, and
//! turns any failure into a user-friendly colored error before exiting
//! non-zero. Logging goes to stderr so the rendered fragment on stdout
//! stays clean for embedding.

use anyhow::Result;
use clap::Parser;
use deeplinks::cli::Cli;
use deeplinks::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
