//! Shared test utilities for the docsite test suite.
//!
//! Provides descriptor builders, fixture writers for `config.toml` and docs
//! trees, and ordering assertions over navigation lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = parse(&minimal_descriptor(&[("A", "/a/"), ("B", "/b/")])).unwrap();
//! assert_links(&config.theme.sidebar, &["/a/", "/b/"]);
//!
//! let docs = docs_tree(&["a", "b/nested"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::NavItem;

// =========================================================================
// Descriptor builders
// =========================================================================

/// A valid descriptor literal with the given sidebar entries and no nav.
pub fn minimal_descriptor(sidebar: &[(&str, &str)]) -> String {
    let mut out = String::from(
        r#"title = "Docs"
description = "Docs site"
base_path = "/"
repository_link = "owner/repo"

[theme]
"#,
    );
    for (text, link) in sidebar {
        out.push_str(&format!(
            "\n[[theme.sidebar]]\ntext = {text:?}\nlink = {link:?}\n"
        ));
    }
    out
}

/// Write `config.toml` into `dir`.
pub fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("config.toml"), content).unwrap();
}

// =========================================================================
// Docs tree fixtures
// =========================================================================

/// Create a temp docs root with an `index.md` in each listed directory.
///
/// An empty string stands for the root itself.
pub fn docs_tree(dirs: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in dirs {
        let path = tmp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("index.md"), format!("# {dir}\n")).unwrap();
    }
    tmp
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert that `items` carries exactly `expected` links, in order.
pub fn assert_links(items: &[NavItem], expected: &[&str]) {
    let actual: Vec<&str> = items.iter().map(|i| i.link.as_str()).collect();
    assert_eq!(actual, expected, "link order mismatch");
}
