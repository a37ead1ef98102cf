//! Global constants used throughout the deeplinks codebase.
//!
//! Settings keys, file extensions, and default user-facing strings are
//! defined centrally so the CLI, registry, and renderer stay in agreement.

/// Settings key holding the raw tenant/brand identifier.
///
/// This mirrors the option name used by the host dashboard's settings
/// store. Absent or empty is a valid, non-error state and short-circuits
/// the whole pipeline to an empty render.
pub const BRAND_SETTING_KEY: &str = "group_brand";

/// File extension for registry definition files (`<tenant>.toml`).
pub const DEFINITION_EXTENSION: &str = "toml";

/// Default heading shown above the link list.
///
/// The end-to-end acceptance contract keys off this literal: a known
/// tenant's rendered fragment contains it, an unknown tenant's does not.
pub const DEFAULT_HEADING: &str = "Deep-Links";

/// Default introductory sentence shown below the heading.
pub const DEFAULT_INTRO: &str = "Use these links to get to your control panel.";
