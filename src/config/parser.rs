//! Generic configuration parsing utilities.
//!
//! Minimal TOML parsing helper usable with any `DeserializeOwned` type,
//! reporting errors with file path context. Used for the localizable string
//! table and test fixtures; the settings store has its own typed loader in
//! [`crate::config::Settings`].

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML file into any type implementing [`serde::de::DeserializeOwned`].
///
/// Error messages carry the file path for both the read and parse phases:
///
/// ```text
/// Failed to parse config file: /path/to/config.toml
/// Caused by:
///     invalid TOML value, expected string
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains invalid TOML, or
/// the TOML structure does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
