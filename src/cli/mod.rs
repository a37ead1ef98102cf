//! Command-line interface for deeplinks.
//!
//! The CLI stands in for the host dashboard page: it wires the settings
//! file, the registry directory, and the renderer together and emits the
//! widget fragment on stdout. Each subcommand lives in its own module with
//! its own argument struct and execution logic.
//!
//! # Available Commands
//!
//! - `render` - resolve the tenant and print the HTML fragment (or nothing)
//! - `resolve` - diagnostic: print the resolved link set as JSON or a table
//!
//! # Usage
//!
//! ```bash
//! # Render the widget fragment for the configured tenant
//! deeplinks render --settings settings.toml --registry ./registry \
//!     --base-domain https://my.ionos.com
//!
//! # Inspect what a tenant resolves to
//! deeplinks resolve --settings settings.toml --registry ./registry
//! deeplinks resolve --settings settings.toml --registry ./registry --format table
//! ```

pub mod render;
pub mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Tenant deep-link resolution and rendering for hosted dashboard widgets.
#[derive(Debug, Parser)]
#[command(name = "deeplinks", version, about)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the deep-links widget fragment for the configured tenant
    Render(render::RenderCommand),
    /// Resolve the configured tenant and print its link set
    Resolve(resolve::ResolveCommand),
}

impl Cli {
    /// Log filter directive derived from the verbosity flags.
    ///
    /// `RUST_LOG` takes precedence when set; this is only the fallback
    /// handed to the `EnvFilter` default.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            "off"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Execute the parsed subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error for host misconfiguration (bad registry directory,
    /// unreadable settings file). Tenant-level absence is never an error.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Render(cmd) => cmd.execute(),
            Commands::Resolve(cmd) => cmd.execute(),
        }
    }
}
