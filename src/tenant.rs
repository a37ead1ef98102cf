//! Tenant identifier normalization.
//!
//! The raw brand setting coming out of the host's key/value store can be
//! absent, empty, or cased arbitrarily. [`TenantKey::resolve`] folds all of
//! that into either a usable lookup key or `None` - identifiers differing
//! only in letter case resolve to the same tenant.
//!
//! Resolution is deliberately permissive: no character allow-list is
//! enforced here. Whether a key actually names a known tenant is the
//! registry's existence check, not the resolver's.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized tenant lookup key: non-empty, trimmed, lower-cased.
///
/// The only way to obtain one is [`TenantKey::resolve`], so any `TenantKey`
/// in circulation already satisfies the normalization invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantKey(String);

impl TenantKey {
    /// Resolve a raw setting value into a normalized tenant key.
    ///
    /// Returns `None` for an absent, empty, or whitespace-only value;
    /// otherwise trims and lower-cases. Pure and deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeplinks::tenant::TenantKey;
    ///
    /// assert_eq!(TenantKey::resolve(None), None);
    /// assert_eq!(TenantKey::resolve(Some("")), None);
    ///
    /// let key = TenantKey::resolve(Some("IONOS")).unwrap();
    /// assert_eq!(key.as_str(), "ionos");
    /// ```
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self(raw.to_lowercase()))
    }

    /// The normalized key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
