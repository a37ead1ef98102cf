//! Resolve the configured tenant and print its link set.
//!
//! Diagnostic counterpart to `render`: instead of HTML it prints the
//! normalized link set, either as JSON (the default, machine-readable) or
//! as a simple table. Useful for checking what a definition file actually
//! parses to, given the two accepted authoring shapes.

use crate::cli::render::read_brand;
use crate::registry::Registry;
use crate::tenant::TenantKey;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format for the resolved link set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object with tenant, domain, and entries
    Json,
    /// Aligned plain-text table
    Table,
}

/// Arguments for the `resolve` subcommand.
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Path to the settings file holding the brand identifier.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Directory of per-tenant definition files (<tenant>.toml).
    #[arg(long, value_name = "DIR")]
    registry: PathBuf,

    /// Resolve this tenant instead of reading the settings file.
    #[arg(long, value_name = "TENANT", conflicts_with = "settings")]
    tenant: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

impl ResolveCommand {
    /// Execute the lookup and print the result.
    ///
    /// An unresolved or unknown tenant prints nothing and exits
    /// successfully, mirroring the render contract.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing registry directory or a malformed
    /// settings file.
    pub fn execute(self) -> Result<()> {
        let raw = match &self.tenant {
            Some(tenant) => Some(tenant.clone()),
            None => read_brand(self.settings.as_deref())?,
        };
        let Some(key) = TenantKey::resolve(raw.as_deref()) else {
            tracing::debug!("no tenant configured");
            return Ok(());
        };

        let registry = Registry::from_dir(&self.registry)?;
        let Some(link_set) = registry.get(&key) else {
            tracing::debug!(%key, "unknown tenant, no link set");
            return Ok(());
        };

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "tenant": key,
                    "domain": link_set.domain,
                    "links": link_set.entries(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                let width = link_set
                    .entries()
                    .iter()
                    .map(|e| e.url.len())
                    .max()
                    .unwrap_or(0);
                println!("Tenant: {key}");
                if let Some(domain) = &link_set.domain {
                    println!("Domain: {domain}");
                }
                for entry in link_set.entries() {
                    println!("{:width$}  {}", entry.url, entry.anchor);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: ResolveCommand,
    }

    #[test]
    fn test_format_defaults_to_json() {
        let cli = TestCli::parse_from(["resolve", "--registry", "r"]);
        assert_eq!(cli.cmd.format, OutputFormat::Json);
    }

    #[test]
    fn test_tenant_conflicts_with_settings() {
        let result = TestCli::try_parse_from([
            "resolve",
            "--registry",
            "r",
            "--tenant",
            "ionos",
            "--settings",
            "s.toml",
        ]);
        assert!(result.is_err());
    }
}
