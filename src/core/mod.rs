//! Core types and error handling for deeplinks.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`DeepLinksError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for CLI users
//!
//! Errors here only ever describe host-side misconfiguration (a registry
//! directory that does not exist, an unreadable settings file that was
//! explicitly requested). Tenant-facing conditions - absent identifier,
//! unknown tenant, malformed definition entries - are expected states, not
//! errors, and never reach this module: the render path only ever sees
//! `Option<&LinkSet>`.

pub mod error;

pub use error::{DeepLinksError, ErrorContext, user_friendly_error};
