//! deeplinks - Tenant deep-link resolution and rendering
//!
//! Resolves a tenant/brand identifier read from a key/value settings store to
//! a per-tenant set of "deep link" shortcuts (control-panel URLs) and renders
//! them as an HTML fragment for embedding in a hosted dashboard widget.
//!
//! # Architecture Overview
//!
//! The pipeline is three small, strictly sequential steps:
//!
//! 1. **Resolve** - [`tenant::TenantKey::resolve`] normalizes the raw brand
//!    setting (trim + lower-case) into a lookup key, or `None` when the
//!    setting is absent or empty.
//! 2. **Load** - [`registry::Registry`] maps normalized tenant keys to
//!    ordered [`registry::LinkSet`]s. An unknown tenant is a silent `None`,
//!    not an error.
//! 3. **Render** - [`render::render`] turns `Option<&LinkSet>` into an HTML
//!    fragment: heading, intro sentence, and an ordered list of escaped
//!    links - or an empty fragment when there is nothing to show.
//!
//! Everything is synchronous and stateless across render cycles: the
//! registry is read-only after construction and each render re-resolves from
//! the settings value it is handed.
//!
//! # Definition Formats
//!
//! Registry definitions are TOML files, one per tenant, named after the
//! normalized tenant key. Two historical authoring shapes are accepted and
//! normalized at load time (downstream code only ever sees [`registry::LinkSet`]):
//!
//! ```toml
//! # Record shape: explicit url/anchor pairs
//! [[links]]
//! url = "/cp"
//! anchor = "Control Panel"
//! ```
//!
//! ```toml
//! # Map shape: URL path -> anchor label, in document order
//! [links]
//! "/cp" = "Control Panel"
//! "/billing" = "Billing"
//! ```
//!
//! # Core Modules
//!
//! - [`tenant`] - tenant identifier normalization
//! - [`registry`] - link-set definitions, dual-shape parsing, lookup
//! - [`render`] - HTML fragment rendering and escaping
//! - [`config`] - flat key/value settings file (stand-in for the host option store)
//! - [`core`] - error types and user-facing error context
//! - [`cli`] - `render` and `resolve` subcommands

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod registry;
pub mod render;
pub mod tenant;
