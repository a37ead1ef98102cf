//! Link-set definitions, dual-shape parsing, and tenant lookup.
//!
//! A [`Registry`] is a read-only mapping from normalized [`TenantKey`]s to
//! [`LinkSet`]s, built once and injected into whatever renders the widget.
//! This replaces the original design's ad hoc probing of per-tenant config
//! files at render time with an explicit collaborator that can be faked in
//! tests ([`Registry::from_entries`]).
//!
//! # Definition Files
//!
//! [`Registry::from_dir`] loads every `<tenant>.toml` file from a flat
//! directory; the lower-cased file stem is the tenant key. Two historical
//! authoring shapes exist for the link list and both are accepted:
//!
//! ```toml
//! # Record shape: one [[links]] table per entry
//! domain = "https://my.ionos.com"
//!
//! [[links]]
//! url = "/cp"
//! anchor = "Control Panel"
//! ```
//!
//! ```toml
//! # Map shape: URL path -> anchor label, document order preserved
//! [links]
//! "/cp" = "Control Panel"
//! "/billing" = "Billing"
//! ```
//!
//! The shape is detected at load time (`#[serde(untagged)]`) and normalized
//! into the single [`LinkSet`] type, so consumers never see the variance.
//! Entry order always follows the authored document order.
//!
//! # Failure Policy
//!
//! Absence is silent and partial damage stays partial:
//! - an unknown tenant key simply yields `None`;
//! - a record entry missing its `url` or `anchor` is skipped with a warning,
//!   the rest of the set survives;
//! - a definition file that cannot be read or parsed is logged and treated
//!   as "no link set for that tenant".
//!
//! Only a missing registry directory is an error, since that is host
//! misconfiguration rather than tenant data.

use crate::constants::DEFINITION_EXTENSION;
use crate::core::DeepLinksError;
use crate::tenant::TenantKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One deep link: a URL path below the tenant's control-panel domain and a
/// human-readable label. The label is plain text, never markup; escaping
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Relative path or suffix combined with a base domain at render time
    pub url: String,
    /// Display label for the link
    pub anchor: String,
}

/// The ordered collection of deep links belonging to one tenant.
///
/// Order is significant: insertion order is display order, preserved exactly
/// from the authored definition. A set with zero entries is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSet {
    /// Optional per-tenant control-panel domain, overriding the host-wide
    /// base domain at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    entries: Vec<LinkEntry>,
}

impl LinkSet {
    /// Build a link set from entries, in order.
    #[must_use]
    pub fn new(entries: Vec<LinkEntry>) -> Self {
        Self {
            domain: None,
            entries,
        }
    }

    /// The entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries. Still renders heading and intro.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw shape of a tenant definition file.
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    /// Optional per-tenant control-panel domain.
    #[serde(default)]
    domain: Option<String>,
    /// The link list, in either authoring shape.
    links: LinksDef,
}

/// The two historical authoring shapes for the link list.
///
/// Serde's `untagged` attribute picks the variant from the TOML structure:
/// an array of tables is the record shape, a plain table is the map shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinksDef {
    /// `[[links]]` records with explicit `url` and `anchor` fields.
    Records(Vec<RecordEntry>),
    /// `[links]` table mapping URL path to anchor label. `IndexMap` keeps
    /// document order, so iteration order equals authoring order.
    Map(IndexMap<String, String>),
}

/// A record-shape entry before validation.
///
/// Fields are optional so that one malformed record degrades to a skipped
/// entry instead of failing the whole definition file.
#[derive(Debug, Deserialize)]
struct RecordEntry {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    anchor: Option<String>,
}

/// Parse a single tenant definition out of TOML source.
///
/// Both authoring shapes normalize into the same [`LinkSet`]; malformed
/// record entries are skipped individually with a warning.
///
/// # Errors
///
/// [`DeepLinksError::DefinitionParseError`] when the document is not valid
/// TOML or matches neither shape.
pub fn parse_definition(tenant: &str, content: &str) -> Result<LinkSet, DeepLinksError> {
    let definition: DefinitionFile =
        toml::from_str(content).map_err(|e| DeepLinksError::DefinitionParseError {
            tenant: tenant.to_string(),
            reason: e.to_string(),
        })?;

    let entries = match definition.links {
        LinksDef::Records(records) => records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match (record.url, record.anchor) {
                (Some(url), Some(anchor)) if !url.is_empty() && !anchor.is_empty() => {
                    Some(LinkEntry { url, anchor })
                }
                _ => {
                    tracing::warn!(tenant, index, "skipping link entry with missing url or anchor");
                    None
                }
            })
            .collect(),
        LinksDef::Map(map) => map
            .into_iter()
            .filter_map(|(url, anchor)| {
                if url.is_empty() || anchor.is_empty() {
                    tracing::warn!(tenant, "skipping link entry with empty url or anchor");
                    return None;
                }
                Some(LinkEntry { url, anchor })
            })
            .collect(),
    };

    Ok(LinkSet {
        domain: definition.domain,
        entries,
    })
}

/// Read-only mapping from normalized tenant keys to link sets.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: BTreeMap<TenantKey, LinkSet>,
}

impl Registry {
    /// Load all tenant definitions from a flat directory.
    ///
    /// Every `*.toml` file becomes one tenant, keyed by its lower-cased
    /// file stem. A file that cannot be read or parsed is logged at warn
    /// level and skipped - that tenant then has no link set, which is the
    /// same observable state as the file not existing.
    ///
    /// # Errors
    ///
    /// [`DeepLinksError::RegistryDirNotFound`] if `dir` does not exist or
    /// is not a directory.
    pub fn from_dir(dir: &Path) -> Result<Self, DeepLinksError> {
        if !dir.is_dir() {
            return Err(DeepLinksError::RegistryDirNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut definitions = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DEFINITION_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(key) = TenantKey::resolve(Some(stem)) else {
                continue;
            };

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(
                        tenant = %key,
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable definition file"
                    );
                    continue;
                }
            };

            match parse_definition(key.as_str(), &content) {
                Ok(link_set) => {
                    tracing::debug!(tenant = %key, entries = link_set.len(), "loaded definition");
                    definitions.insert(key, link_set);
                }
                Err(e) => {
                    tracing::warn!(
                        tenant = %key,
                        path = %path.display(),
                        error = %e,
                        "skipping malformed definition file"
                    );
                }
            }
        }

        Ok(Self { definitions })
    }

    /// Build a registry from in-memory definitions. For tests and hosts
    /// that embed their registry rather than loading it from disk.
    pub fn from_entries(entries: impl IntoIterator<Item = (TenantKey, LinkSet)>) -> Self {
        Self {
            definitions: entries.into_iter().collect(),
        }
    }

    /// Exact lookup against a normalized key.
    #[must_use]
    pub fn get(&self, key: &TenantKey) -> Option<&LinkSet> {
        self.definitions.get(key)
    }

    /// The loader contract: `None` key short-circuits without a lookup, an
    /// unknown tenant is a silent `None`. Neither is an error.
    #[must_use]
    pub fn load(&self, key: Option<&TenantKey>) -> Option<&LinkSet> {
        self.get(key?)
    }

    /// Number of known tenants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry has no tenants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn key(raw: &str) -> TenantKey {
        TenantKey::resolve(Some(raw)).unwrap()
    }

    #[test]
    fn test_parse_record_shape() {
        let toml = r#"
            [[links]]
            url = "/cp"
            anchor = "Control Panel"

            [[links]]
            url = "/billing"
            anchor = "Billing"
        "#;
        let set = parse_definition("ionos", toml).unwrap();
        assert_eq!(
            set.entries(),
            &[
                LinkEntry {
                    url: "/cp".to_string(),
                    anchor: "Control Panel".to_string()
                },
                LinkEntry {
                    url: "/billing".to_string(),
                    anchor: "Billing".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_map_shape() {
        let toml = r#"
            [links]
            "/cp" = "Control Panel"
            "/billing" = "Billing"
        "#;
        let set = parse_definition("ionos", toml).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].url, "/cp");
        assert_eq!(set.entries()[0].anchor, "Control Panel");
        assert_eq!(set.entries()[1].url, "/billing");
    }

    #[test]
    fn test_shapes_normalize_identically() {
        let records = r#"
            [[links]]
            url = "/cp"
            anchor = "Control Panel"

            [[links]]
            url = "/billing"
            anchor = "Billing"
        "#;
        let map = r#"
            [links]
            "/cp" = "Control Panel"
            "/billing" = "Billing"
        "#;
        assert_eq!(
            parse_definition("a", records).unwrap(),
            parse_definition("a", map).unwrap()
        );
    }

    #[test]
    fn test_map_shape_preserves_document_order() {
        // Keys deliberately out of lexicographic order
        let toml = r#"
            [links]
            "/zeta" = "Zeta"
            "/alpha" = "Alpha"
            "/mid" = "Mid"
        "#;
        let set = parse_definition("t", toml).unwrap();
        let urls: Vec<_> = set.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["/zeta", "/alpha", "/mid"]);
    }

    #[test]
    fn test_malformed_record_entry_skipped() {
        let toml = r#"
            [[links]]
            url = "/cp"
            anchor = "Control Panel"

            [[links]]
            url = "/no-anchor"

            [[links]]
            anchor = "No URL"

            [[links]]
            url = "/ok"
            anchor = "OK"
        "#;
        let set = parse_definition("t", toml).unwrap();
        let urls: Vec<_> = set.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["/cp", "/ok"]);
    }

    #[test]
    fn test_map_shape_empty_values_skipped() {
        let toml = r#"
            [links]
            "/cp" = "Control Panel"
            "/blank" = ""
            "" = "No URL"
            "/billing" = "Billing"
        "#;
        let set = parse_definition("t", toml).unwrap();
        let urls: Vec<_> = set.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["/cp", "/billing"]);
    }

    #[test]
    fn test_empty_links_is_valid() {
        let set = parse_definition("t", "links = []").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_links_key_is_error() {
        let result = parse_definition("t", "domain = \"https://example.com\"");
        assert!(matches!(result, Err(DeepLinksError::DefinitionParseError { .. })));
    }

    #[test]
    fn test_definition_domain_override() {
        let toml = r#"
            domain = "https://my.ionos.com"

            [[links]]
            url = "/cp"
            anchor = "Control Panel"
        "#;
        let set = parse_definition("ionos", toml).unwrap();
        assert_eq!(set.domain.as_deref(), Some("https://my.ionos.com"));
    }

    #[test]
    fn test_from_dir_loads_definitions() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("ionos.toml"),
            "[[links]]\nurl = \"/cp\"\nanchor = \"Control Panel\"\n",
        )
        .unwrap();
        std::fs::write(temp.path().join("notes.txt"), "not a definition").unwrap();

        let registry = Registry::from_dir(temp.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key("ionos")).unwrap().len(), 1);
    }

    #[test]
    fn test_from_dir_uppercase_file_stem_normalized() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("IONOS.toml"),
            "[[links]]\nurl = \"/cp\"\nanchor = \"Control Panel\"\n",
        )
        .unwrap();

        let registry = Registry::from_dir(temp.path()).unwrap();
        assert!(registry.get(&key("ionos")).is_some());
    }

    #[test]
    fn test_from_dir_skips_malformed_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("broken.toml"), "links = {{{{").unwrap();
        std::fs::write(
            temp.path().join("ionos.toml"),
            "[links]\n\"/cp\" = \"Control Panel\"\n",
        )
        .unwrap();

        let registry = Registry::from_dir(temp.path()).unwrap();
        // broken tenant behaves exactly like an absent one
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&key("broken")).is_none());
        assert!(registry.get(&key("ionos")).is_some());
    }

    #[test]
    fn test_from_dir_missing_directory_is_error() {
        let temp = tempdir().unwrap();
        let result = Registry::from_dir(&temp.path().join("nope"));
        assert!(matches!(result, Err(DeepLinksError::RegistryDirNotFound { .. })));
    }

    #[test]
    fn test_load_none_key_short_circuits() {
        let registry = Registry::from_entries([(
            key("ionos"),
            LinkSet::new(vec![LinkEntry {
                url: "/cp".to_string(),
                anchor: "Control Panel".to_string(),
            }]),
        )]);

        assert!(registry.load(None).is_none());
        assert!(registry.load(Some(&key("unknown"))).is_none());
        assert!(registry.load(Some(&key("ionos"))).is_some());
    }

    #[test]
    fn test_order_preserved_end_to_end() {
        let toml = r#"
            [[links]]
            url = "/a"
            anchor = "A"
            [[links]]
            url = "/b"
            anchor = "B"
            [[links]]
            url = "/c"
            anchor = "C"
        "#;
        let set = parse_definition("t", toml).unwrap();
        let anchors: Vec<_> = set.entries().iter().map(|e| e.anchor.as_str()).collect();
        assert_eq!(anchors, ["A", "B", "C"]);
    }
}
