//! HTML fragment rendering for the dashboard widget.
//!
//! The renderer is the dumb end of the pipeline: it receives
//! `Option<&LinkSet>` and a base domain and produces either an empty string
//! or a heading, an introductory sentence, and an ordered list of links
//! opening in a new browsing context. All decision logic (which tenant,
//! which links) happened upstream; no error can originate here.
//!
//! Every dynamic value is escaped before embedding: labels and the heading
//! and intro strings through [`tera::escape_html`], URLs through
//! [`escape_url`]. A link set that matched a tenant but has zero entries
//! still renders heading, intro, and an empty list - "tenant matched"
//! and "tenant unknown" stay observably distinct states.

use crate::registry::LinkSet;
use serde::Deserialize;

/// Localizable user-facing strings for the widget.
///
/// `Default` is the built-in English text; hosts supply translations by
/// deserializing a strings file (see `deeplinks render --strings`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Strings {
    /// Heading above the link list
    pub heading: String,
    /// Introductory sentence below the heading
    pub intro: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            heading: crate::constants::DEFAULT_HEADING.to_string(),
            intro: crate::constants::DEFAULT_INTRO.to_string(),
        }
    }
}

/// Render the deep-links widget fragment.
///
/// - `None` produces an empty string: no heading, no container.
/// - `Some` produces `<h3>`, `<p>`, and a `<ul>` with one `<li><a>` per
///   entry, in link-set order. Each href is the base domain joined with
///   the entry path; a per-tenant `domain` in the definition overrides
///   `base_domain`.
///
/// # Examples
///
/// ```
/// use deeplinks::registry::{LinkEntry, LinkSet};
/// use deeplinks::render::{Strings, render};
///
/// let set = LinkSet::new(vec![LinkEntry {
///     url: "/cp".to_string(),
///     anchor: "Control Panel".to_string(),
/// }]);
/// let html = render(Some(&set), "https://my.example.com", &Strings::default());
/// assert!(html.contains("Deep-Links"));
/// assert!(html.contains("https://my.example.com/cp"));
///
/// assert_eq!(render(None, "https://my.example.com", &Strings::default()), "");
/// ```
#[must_use]
pub fn render(link_set: Option<&LinkSet>, base_domain: &str, strings: &Strings) -> String {
    let Some(link_set) = link_set else {
        return String::new();
    };

    let domain = link_set.domain.as_deref().unwrap_or(base_domain);

    let mut html = String::new();
    html.push_str(&format!("<h3>{}</h3>\n", tera::escape_html(&strings.heading)));
    html.push_str(&format!("<p>{}</p>\n", tera::escape_html(&strings.intro)));
    html.push_str("<ul class=\"deep-links\">\n");
    for entry in link_set.entries() {
        html.push_str(&format!(
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>\n",
            escape_url(&join_url(domain, &entry.url)),
            tera::escape_html(&entry.anchor),
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Join a base domain and an entry path without doubling or dropping the
/// separating slash.
fn join_url(domain: &str, path: &str) -> String {
    match (domain.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", domain.trim_end_matches('/'), path),
        (false, false) => format!("{domain}/{path}"),
        _ => format!("{domain}{path}"),
    }
}

/// Escape a URL for embedding in an HTML attribute.
///
/// Drops ASCII control characters (never valid in a URL, and a vector for
/// attribute breakouts), percent-encodes spaces, and escapes the attribute
/// delimiters. Unlike the text escaping this leaves `/` alone, so hrefs
/// stay readable.
#[must_use]
pub fn escape_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_ascii_control() {
            continue;
        }
        match c {
            ' ' => escaped.push_str("%20"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
