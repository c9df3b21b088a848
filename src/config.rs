//! Site configuration module.
//!
//! Holds the typed site descriptor handed to the documentation generator:
//! site metadata plus the ordered top-nav and sidebar link lists. The
//! descriptor literal ships inside the binary (`src/site.toml`); a project
//! may override any part of it with a `config.toml` of its own.
//!
//! ## Descriptor Layout
//!
//! ```toml
//! title = "Lightning Web Component"   # required, non-empty
//! description = "..."                 # required, non-empty
//! base_path = "/"                     # "/" or "/prefix/"
//! repository_link = "owner/repo"      # source repository for edit links
//! # lang = "en-US"                    # optional
//!
//! [[theme.nav]]                       # rendered left to right
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]                   # rendered top to bottom
//! text = "Getting started"
//! link = "/initial/"
//! ```
//!
//! ## Overrides
//!
//! A `config.toml` next to the docs is merged over the embedded literal.
//! Tables merge key by key; arrays replace wholesale, so overriding
//! `theme.sidebar` replaces the entire list and its order:
//!
//! ```toml
//! base_path = "/lwc/"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Missing required fields
//! are never filled in with defaults.

use crate::types::{NavItem, SidebarItem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The descriptor literal compiled into the binary.
const EMBEDDED: &str = include_str!("site.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The literal failed to parse or does not have the descriptor's shape
    /// (missing field, wrong type, unknown key).
    #[error("Malformed config: {0}")]
    Malformed(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site descriptor read once at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name of the site.
    pub title: String,
    /// Site meta-description.
    pub description: String,
    /// URL path prefix the site is served under. Starts and ends with `/`.
    pub base_path: String,
    /// `owner/repo` of the associated source repository.
    pub repository_link: String,
    /// Language tag (e.g. `en-US`). `None` leaves it to the generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Navigation structure.
    pub theme: ThemeConfig,
}

/// Navigation structure: top bar and sidebar, both in rendered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Top navigation bar entries, left to right.
    #[serde(default)]
    pub nav: Vec<NavItem>,
    /// Sidebar entries, top to bottom.
    #[serde(default)]
    pub sidebar: Vec<SidebarItem>,
}

impl SiteConfig {
    /// Check the descriptor's structural contract.
    ///
    /// Reports the first violation, naming the offending field. Only
    /// emptiness is an error here; whitespace-only text and off-site
    /// `//` links load and are left to [`crate::lint`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.description.is_empty() {
            return Err(ConfigError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !is_valid_base_path(&self.base_path) {
            return Err(ConfigError::Validation(format!(
                "base_path must be \"/\" or start and end with \"/\", got {:?}",
                self.base_path
            )));
        }
        validate_items("theme.nav", &self.theme.nav)?;
        validate_items("theme.sidebar", &self.theme.sidebar)?;
        Ok(())
    }

    /// All links in rendered order: nav first, then sidebar.
    pub fn links(&self) -> impl Iterator<Item = &NavItem> {
        self.theme.nav.iter().chain(self.theme.sidebar.iter())
    }
}

/// `/` alone, or a path that starts and ends with `/`.
pub fn is_valid_base_path(base: &str) -> bool {
    base == "/" || (base.len() >= 2 && base.starts_with('/') && base.ends_with('/'))
}

fn validate_items(section: &str, items: &[NavItem]) -> Result<(), ConfigError> {
    for (i, item) in items.iter().enumerate() {
        if item.text.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{section}[{i}].text must not be empty"
            )));
        }
        if !item.link.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{section}[{i}].link must start with \"/\", got {:?}",
                item.link
            )));
        }
    }
    Ok(())
}

// =============================================================================
// Loading, merging, and validation
// =============================================================================

/// Load the embedded site descriptor.
///
/// Fails only if the literal is malformed or breaks the structural contract;
/// each call builds a fresh, equal value.
pub fn load() -> Result<SiteConfig, ConfigError> {
    parse(EMBEDDED)
}

/// Parse and validate a descriptor literal.
pub fn parse(source: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Returns the embedded descriptor as a raw `toml::Value::Table`.
///
/// Base layer for merging a project `config.toml` on top.
pub fn embedded_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::from_str(EMBEDDED)?)
}

/// Lay a project override over the descriptor.
///
/// Nested tables (`theme`) combine per key, so an override touching only
/// `theme.nav` keeps the embedded sidebar. Everything else, `nav` and
/// `sidebar` arrays included, is taken from the override as a whole: entry
/// order is the rendered order, and splicing two lists would invent one
/// that neither file declares.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(changes)) => {
            for (key, value) in changes {
                let value = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, value);
            }
            toml::Value::Table(table)
        }
        (_, replacement) => replacement,
    }
}

/// Read the project override `config.toml` in `dir`, if there is one.
///
/// A missing file means "no override". A file that is present but not
/// TOML is malformed, even before its keys are checked.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(dir.join("config.toml")) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
}

/// Turn the merged tables into a checked descriptor.
///
/// Shape errors surface as [`ConfigError::Malformed`] and contract
/// violations as [`ConfigError::Validation`], as with [`parse`].
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(changes) => merge_toml(base, changes),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// The descriptor as a project in `dir` sees it: embedded literal plus
/// that project's `config.toml`.
///
/// Without a `config.toml` this is equivalent to [`load`].
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(embedded_value()?, load_raw_config(dir)?)
}

/// Returns the embedded descriptor literal, comments included.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    EMBEDDED
}
