//! Settings store access.
//!
//! The host dashboard keeps its configuration in a key/value option store;
//! this module is the crate's stand-in for it: a flat TOML table of string
//! values. The only key the pipeline cares about is the brand identifier
//! ([`crate::constants::BRAND_SETTING_KEY`]), but the store is generic so
//! hosts can keep unrelated settings in the same file.
//!
//! Absence is a first-class state throughout: a missing brand key (or one
//! with an empty value) is not an error, it means "no tenant configured"
//! and the widget renders nothing.
//!
//! ```toml
//! # settings.toml
//! group_brand = "IONOS"
//! some_other_setting = "unrelated"
//! ```

mod parser;

pub use parser::parse_config;

use crate::constants::BRAND_SETTING_KEY;
use crate::core::DeepLinksError;
use std::collections::BTreeMap;
use std::path::Path;

/// Flat string key/value settings table.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`DeepLinksError::SettingsNotFound`] if the file does not exist
    /// - [`DeepLinksError::SettingsParseError`] if it is not a flat TOML
    ///   table of string values
    pub fn load(path: &Path) -> Result<Self, DeepLinksError> {
        if !path.exists() {
            return Err(DeepLinksError::SettingsNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let values: BTreeMap<String, String> =
            toml::from_str(&content).map_err(|e| DeepLinksError::SettingsParseError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { values })
    }

    /// Build a settings table from key/value pairs. Primarily for tests and
    /// hosts that already hold their options in memory.
    pub fn from_iter<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Look up a setting by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The raw brand/tenant identifier, if any.
    ///
    /// This is the value [`crate::tenant::TenantKey::resolve`] consumes;
    /// it is returned unnormalized.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.get(BRAND_SETTING_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "group_brand = \"ionos\"\nunrelated = \"x\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.brand(), Some("ionos"));
        assert_eq!(settings.get("unrelated"), Some("x"));
        assert_eq!(settings.get("missing"), None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let result = Settings::load(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(DeepLinksError::SettingsNotFound { .. })));
    }

    #[test]
    fn test_load_non_string_values_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "group_brand = 42\n").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(DeepLinksError::SettingsParseError { .. })));
    }

    #[test]
    fn test_brand_absent_is_none() {
        let settings = Settings::from_iter([("other", "value")]);
        assert_eq!(settings.brand(), None);
    }
}
