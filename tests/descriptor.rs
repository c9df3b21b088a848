//! Public API checks for the site descriptor.
//!
//! Exercises `load()`, overrides from a project `config.toml`, and the
//! generator export the way a build script would use them.

use docsite::config::{self, ConfigError};
use docsite::export::{self, ExportFormat};
use docsite::{NavItem, lint, load};
use std::fs;
use tempfile::TempDir;

#[test]
fn embedded_sidebar_runs_from_initial_to_jslib() {
    let site = load().unwrap();
    assert_eq!(site.title, "Lightning Web Component");
    assert_eq!(
        site.theme.sidebar.first(),
        Some(&NavItem::new("初始化", "/initial/"))
    );
    assert_eq!(
        site.theme.sidebar.last(),
        Some(&NavItem::new("第三方js库", "/jslib/"))
    );
}

#[test]
fn loads_are_equal() {
    let a = load().unwrap();
    let b = load().unwrap();
    assert_eq!(a, b);
}

#[test]
fn base_path_is_rooted_directory() {
    let base = load().unwrap().base_path;
    assert!(base == "/" || (base.starts_with('/') && base.ends_with('/')));
}

#[test]
fn every_entry_is_labelled_and_rooted() {
    let site = load().unwrap();
    for item in site.theme.nav.iter().chain(&site.theme.sidebar) {
        assert!(!item.text.is_empty());
        assert!(item.link.starts_with('/'));
    }
}

#[test]
fn embedded_descriptor_has_no_warnings() {
    assert!(lint::lint(&load().unwrap()).is_empty());
}

#[test]
fn nav_item_without_link_fails_to_load() {
    let result = config::parse(
        r#"
title = "Docs"
description = "Docs site"
base_path = "/"
repository_link = "owner/repo"

[[theme.nav]]
text = "Home"
"#,
    );
    assert!(matches!(result, Err(ConfigError::Malformed(_))));
}

#[test]
fn override_reorders_sidebar_and_exports_it() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
base_path = "/lwc/"

[[theme.sidebar]]
text = "CSS"
link = "/css/"

[[theme.sidebar]]
text = "初始化"
link = "/initial/"
"#,
    )
    .unwrap();

    let site = config::load_config(tmp.path()).unwrap();
    let links: Vec<&str> = site.theme.sidebar.iter().map(|i| i.link.as_str()).collect();
    assert_eq!(links, ["/css/", "/initial/"]);

    let out = export::render(&site, ExportFormat::Js).unwrap();
    assert!(out.contains("\"base\": \"/lwc/\""));
    let css = out.find("\"/css/\"").unwrap();
    let initial = out.find("\"/initial/\"").unwrap();
    assert!(css < initial);
}

#[test]
fn docs_tree_check_finds_missing_pages() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path();
    fs::write(docs.join("index.md"), "# Home\n").unwrap();
    fs::create_dir_all(docs.join("initial")).unwrap();
    fs::write(docs.join("initial/index.md"), "# 初始化\n").unwrap();

    let site = load().unwrap();
    let warnings = lint::lint_docs(&site, docs).unwrap();
    // Everything except "/" and "/initial/" lacks a page
    let missing = warnings
        .iter()
        .filter(|w| matches!(w, lint::Warning::MissingTarget { .. }))
        .count();
    assert_eq!(missing, site.theme.nav.len() + site.theme.sidebar.len() - 2);
}
