//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every navigation entry leads with its positional index and label, followed
//! by `→` and the link it opens. Index order is rendered order, so the output
//! reads as the site's navigation exactly as a visitor will see it.
//!
//! # Output Format
//!
//! ## Show
//!
//! ```text
//! Site
//!     Title: Lightning Web Component
//!     Description: 我的vitepress博客.
//!     Base: /
//!     Repository: vuejs/vitepress
//!
//! Nav
//! 001 首页 → /
//! 002 关于 → /about/
//!
//! Sidebar
//! 001 初始化 → /initial/
//! 002 HTML模板 → /html/
//! ```
//!
//! ## Check
//!
//! ```text
//! Warnings
//!     theme.sidebar[0] and theme.sidebar[2] both link to /a/
//!     /drafts/ is not linked from nav or sidebar
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::lint::Warning;
use crate::types::NavItem;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a navigation entry line.
///
/// ```text
/// 003 模块 → /module/
/// ```
fn entry_line(index: usize, item: &NavItem) -> String {
    format!("{} {} \u{2192} {}", format_index(index), item.text, item.link)
}

fn section(lines: &mut Vec<String>, title: &str, items: &[NavItem]) {
    lines.push(title.to_string());
    if items.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, item) in items.iter().enumerate() {
        lines.push(entry_line(i + 1, item));
    }
}

// ============================================================================
// Show
// ============================================================================

/// Format the descriptor summary: metadata block, then nav and sidebar.
pub fn format_config(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Site".to_string()];
    lines.push(format!("{}Title: {}", indent(1), config.title));
    lines.push(format!("{}Description: {}", indent(1), config.description));
    lines.push(format!("{}Base: {}", indent(1), config.base_path));
    lines.push(format!("{}Repository: {}", indent(1), config.repository_link));
    if let Some(lang) = &config.lang {
        lines.push(format!("{}Lang: {}", indent(1), lang));
    }

    lines.push(String::new());
    section(&mut lines, "Nav", &config.theme.nav);
    lines.push(String::new());
    section(&mut lines, "Sidebar", &config.theme.sidebar);
    lines
}

pub fn print_config(config: &SiteConfig) {
    for line in format_config(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format lint warnings under a `Warnings` header.
///
/// Empty input yields no lines.
pub fn format_warnings(warnings: &[Warning]) -> Vec<String> {
    if warnings.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Warnings".to_string()];
    lines.extend(warnings.iter().map(|w| format!("{}{}", indent(1), w)));
    lines
}

pub fn print_warnings(warnings: &[Warning]) {
    for line in format_warnings(warnings) {
        println!("{}", line);
    }
}
