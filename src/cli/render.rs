//! Render the deep-links widget fragment for the configured tenant.
//!
//! This is the end-to-end pipeline in one command: read the brand setting,
//! resolve it to a tenant key, load the link set from the registry, render
//! the HTML fragment to stdout. Any expected absence along the way - no
//! settings file, no brand key, unknown tenant - prints nothing and exits
//! successfully, because an empty widget is the correct output for all of
//! those states.

use crate::config::{Settings, parse_config};
use crate::core::DeepLinksError;
use crate::registry::Registry;
use crate::render::{Strings, render};
use crate::tenant::TenantKey;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `render` subcommand.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Path to the settings file holding the brand identifier.
    ///
    /// When omitted or pointing at a missing file, no tenant is configured
    /// and the command prints nothing.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Directory of per-tenant definition files (<tenant>.toml).
    #[arg(long, value_name = "DIR")]
    registry: PathBuf,

    /// Base domain joined with each link path.
    ///
    /// A `domain` key in the tenant's definition file overrides this.
    #[arg(long, value_name = "URL", default_value = "")]
    base_domain: String,

    /// Optional TOML file with localized heading/intro strings.
    #[arg(long, value_name = "FILE")]
    strings: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render pipeline and print the fragment to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry directory is missing, an explicitly
    /// given settings file is unreadable or malformed, or the strings file
    /// cannot be parsed.
    pub fn execute(self) -> Result<()> {
        let brand = read_brand(self.settings.as_deref())?;
        let key = TenantKey::resolve(brand.as_deref());
        tracing::debug!(brand = brand.as_deref(), key = ?key, "resolved tenant");

        let registry = Registry::from_dir(&self.registry)?;
        let link_set = registry.load(key.as_ref());

        let strings = match &self.strings {
            Some(path) => parse_config::<Strings>(path)?,
            None => Strings::default(),
        };

        let html = render(link_set, &self.base_domain, &strings);
        if !html.is_empty() {
            print!("{html}");
        }
        Ok(())
    }
}

/// Read the raw brand setting, treating an absent file as "not configured".
///
/// A parse failure on a file that does exist is still surfaced: that is
/// host misconfiguration, not tenant absence.
pub(super) fn read_brand(
    settings: Option<&std::path::Path>,
) -> Result<Option<String>, DeepLinksError> {
    let Some(path) = settings else {
        return Ok(None);
    };
    match Settings::load(path) {
        Ok(settings) => Ok(settings.brand().map(str::to_string)),
        Err(DeepLinksError::SettingsNotFound { path }) => {
            tracing::debug!(path, "settings file absent, no tenant configured");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_brand_no_settings_path() {
        assert_eq!(read_brand(None).unwrap(), None);
    }

    #[test]
    fn test_read_brand_missing_file_is_not_configured() {
        let temp = tempdir().unwrap();
        let brand = read_brand(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(brand, None);
    }

    #[test]
    fn test_read_brand_present() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "group_brand = \"IONOS\"\n").unwrap();
        assert_eq!(read_brand(Some(&path)).unwrap().as_deref(), Some("IONOS"));
    }

    #[test]
    fn test_read_brand_malformed_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "group_brand = [1, 2]\n").unwrap();
        assert!(read_brand(Some(&path)).is_err());
    }
}
