//! # docsite
//!
//! Typed site descriptor for a static documentation generator: site metadata
//! plus the ordered top-nav and sidebar link lists the generator renders.
//!
//! The descriptor is data, not behavior. It is loaded once at build time,
//! checked, and handed over; routing, markdown rendering, and theming all
//! belong to the generator.
//!
//! ```text
//! src/site.toml ─┐
//!                ├─ merge → SiteConfig → validate → export → generator config
//! config.toml  ──┘
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig` / `ThemeConfig`, `load()`, overrides, validation |
//! | [`types`] | `NavItem` (and its `SidebarItem` alias) |
//! | [`lint`] | Non-fatal checks: duplicate links, missing pages, orphans |
//! | [`export`] | Renders the descriptor in the generator's config shape |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Embedded Literal
//!
//! The descriptor literal is compiled in with `include_str!`, so `load()`
//! takes no inputs and every call yields an equal, independently owned
//! value. There is no global and nothing to mutate after loading.
//!
//! ## Order Is Data
//!
//! Nav and sidebar are `Vec`s, never sets or maps: declaration order is the
//! rendered order, and it survives parsing, merging, and export unchanged.
//!
//! ## Strict Shape, Lenient Conventions
//!
//! Missing fields, unknown keys, empty labels, and links that do not start
//! with `/` fail the load. Duplicate links and links that break the
//! trailing-slash convention still load; `docsite check` reports them.

pub mod config;
pub mod export;
pub mod lint;
pub mod output;
pub mod types;

pub use config::{ConfigError, SiteConfig, ThemeConfig, load};
pub use types::{NavItem, SidebarItem};

#[cfg(test)]
pub(crate) mod test_helpers;
