//! Error handling for deeplinks.
//!
//! This module provides the error types used across the crate and the
//! user-friendly error reporting used by the CLI:
//! - [`DeepLinksError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] into an
//!   [`ErrorContext`] with contextual suggestions
//!
//! # Error Categories
//!
//! - **Registry**: [`DeepLinksError::RegistryDirNotFound`],
//!   [`DeepLinksError::DefinitionParseError`]
//! - **Settings**: [`DeepLinksError::SettingsNotFound`],
//!   [`DeepLinksError::SettingsParseError`]
//! - **Conversions**: [`std::io::Error`] → [`DeepLinksError::IoError`],
//!   [`toml::de::Error`] → [`DeepLinksError::TomlError`]
//!
//! Note the deliberately narrow scope: per-tenant conditions (unknown
//! tenant, skipped entries, a single corrupt definition file) are handled
//! inside the registry as expected states and never become errors.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for deeplinks operations.
///
/// Each variant represents a specific host-side failure mode with enough
/// context (paths, reasons) for an actionable message.
#[derive(Error, Debug)]
pub enum DeepLinksError {
    /// The configured registry directory does not exist or is not a directory.
    #[error("Registry directory not found: {path}")]
    RegistryDirNotFound {
        /// The path that was configured as the registry directory
        path: String,
    },

    /// A tenant definition file exists but could not be parsed.
    ///
    /// The registry recovers from this by treating the tenant as having no
    /// link set; the variant exists for diagnostics (`deeplinks resolve`)
    /// where surfacing the reason is useful.
    #[error("Invalid definition for tenant '{tenant}': {reason}")]
    DefinitionParseError {
        /// Normalized tenant key the definition belongs to
        tenant: String,
        /// Why parsing failed
        reason: String,
    },

    /// An explicitly requested settings file does not exist.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was given for the settings file
        path: String,
    },

    /// The settings file exists but is not valid TOML key/value data.
    #[error("Failed to parse settings file {path}: {reason}")]
    SettingsParseError {
        /// Path to the settings file
        path: String,
        /// Why parsing failed
        reason: String,
    },

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML deserialization error wrapper.
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error for cases not covered by specific variants.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// User-friendly error wrapper with optional suggestion and details.
///
/// Suggestions are actionable steps displayed in green; details explain why
/// the error occurred and are displayed in yellow. This is the shape every
/// CLI failure is converted into before being shown to the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DeepLinksError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DeepLinksError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with contextual suggestions.
///
/// Downcasts to known error types first so the message can carry a targeted
/// suggestion; everything else falls through to a generic context.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(dl_error) = error.downcast_ref::<DeepLinksError>() {
        return create_error_context(dl_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DeepLinksError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership or run with sufficient permissions")
                .with_details("deeplinks could not read a settings or definition file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DeepLinksError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DeepLinksError::Other {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax: quotes, brackets, and table headers")
        .with_details("TOML parsing errors are usually caused by syntax issues");
    }

    ErrorContext::new(DeepLinksError::Other {
        message: error.to_string(),
    })
}

fn create_error_context(error: &DeepLinksError) -> ErrorContext {
    match error {
        DeepLinksError::RegistryDirNotFound { path } => {
            ErrorContext::new(DeepLinksError::RegistryDirNotFound { path: path.clone() })
                .with_suggestion(
                    "Point --registry at a directory containing one <tenant>.toml file per tenant",
                )
        }
        DeepLinksError::SettingsNotFound { path } => {
            ErrorContext::new(DeepLinksError::SettingsNotFound { path: path.clone() })
                .with_suggestion("Check the --settings path, or omit it to render nothing")
                .with_details(
                    "An absent settings file is only an error when a path was given explicitly",
                )
        }
        DeepLinksError::SettingsParseError { path, reason } => {
            ErrorContext::new(DeepLinksError::SettingsParseError {
                path: path.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("The settings file must be a flat TOML table of string values")
        }
        DeepLinksError::DefinitionParseError { tenant, reason } => {
            ErrorContext::new(DeepLinksError::DefinitionParseError {
                tenant: tenant.clone(),
                reason: reason.clone(),
            })
            .with_details(
                "Definitions accept [[links]] records with url/anchor fields, \
                 or a [links] table mapping URL to label",
            )
        }
        DeepLinksError::IoError(e) => ErrorContext::new(DeepLinksError::Other {
            message: format!("IO error: {e}"),
        }),
        DeepLinksError::TomlError(e) => ErrorContext::new(DeepLinksError::Other {
            message: format!("TOML parsing error: {e}"),
        })
        .with_suggestion("Check the TOML syntax: quotes, brackets, and table headers"),
        DeepLinksError::Other { message } => ErrorContext::new(DeepLinksError::Other {
            message: message.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_display_format() {
        let ctx = ErrorContext::new(DeepLinksError::RegistryDirNotFound {
            path: "/missing".to_string(),
        })
        .with_suggestion("create it")
        .with_details("the directory was configured but absent");

        let formatted = format!("{ctx}");
        assert!(formatted.contains("Registry directory not found: /missing"));
        assert!(formatted.contains("Suggestion: create it"));
        assert!(formatted.contains("Details: the directory was configured but absent"));
    }

    #[test]
    fn test_user_friendly_error_downcasts_known_variant() {
        let err = anyhow::Error::new(DeepLinksError::SettingsNotFound {
            path: "settings.toml".to_string(),
        });
        let ctx = user_friendly_error(err);
        assert!(ctx.suggestion.is_some());
        assert!(matches!(ctx.error, DeepLinksError::SettingsNotFound { .. }));
    }

    #[test]
    fn test_user_friendly_error_generic_fallback() {
        let ctx = user_friendly_error(anyhow::anyhow!("something odd"));
        assert!(matches!(ctx.error, DeepLinksError::Other { .. }));
        assert_eq!(ctx.error.to_string(), "something odd");
    }
}
