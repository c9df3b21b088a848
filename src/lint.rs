//! Non-fatal descriptor checks.
//!
//! Loading only enforces the structural contract (see
//! [`SiteConfig::validate`]). Everything here is advisory: the descriptor
//! still loads and the generator still accepts it, but the operator likely
//! wants to know.
//!
//! ## Descriptor lints
//!
//! - The same link listed twice in the sidebar (or twice in the nav)
//! - Links without a trailing `/`, which break the directory-index convention
//! - Links carrying a file extension (`/guide.html`)
//! - Protocol-relative links (`//cdn.example.com/`), which leave the site
//! - Labels, title, or description made only of whitespace
//! - `repository_link` not in `owner/repo` form
//!
//! ## Docs tree lints
//!
//! Given the docs root the generator builds from:
//!
//! ```text
//! docs/
//! ├── index.md          ← "/"
//! ├── css/index.md      ← "/css/"
//! ├── event/README.md   ← "/event/"
//! └── drafts/index.md   ← orphan unless some entry links "/drafts/"
//! ```
//!
//! - Links whose index document does not exist (missing target)
//! - Directories holding an index document that no entry links to (orphan)
//!
//! Dot-directories (`.vitepress`, `.git`) and `node_modules` are skipped.
//! Protocol-relative links are not looked up. A docs root that is not a
//! directory yields a single [`Warning::DocsRootMissing`].

use crate::config::SiteConfig;
use crate::types::NavItem;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File names the generator treats as a directory's index document.
pub const INDEX_FILES: &[&str] = &["index.md", "README.md"];

/// Which navigation list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Nav,
    Sidebar,
}

impl Section {
    fn key(self) -> &'static str {
        match self {
            Section::Nav => "theme.nav",
            Section::Sidebar => "theme.sidebar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Two entries in the same list point at the same link.
    DuplicateLink {
        section: Section,
        link: String,
        first: usize,
        second: usize,
    },
    /// Link does not end in `/`.
    NotDirectoryLink {
        section: Section,
        index: usize,
        link: String,
    },
    /// Link names a file (`/guide.html`) instead of a directory.
    FileExtension {
        section: Section,
        index: usize,
        link: String,
    },
    /// Link starts with `//` and points off-site.
    ProtocolRelative {
        section: Section,
        index: usize,
        link: String,
    },
    /// Field holds only whitespace (`title`, `theme.nav[2].text`).
    BlankText { field: String },
    /// `repository_link` is not `owner/repo`.
    RepositoryLinkShape(String),
    /// No index document exists for the link under the docs root.
    MissingTarget {
        section: Section,
        index: usize,
        link: String,
        expected: PathBuf,
    },
    /// Docs directory with an index document that nothing links to.
    Orphan { link: String },
    /// The docs root given for link checks is not a directory.
    DocsRootMissing(PathBuf),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateLink {
                section,
                link,
                first,
                second,
            } => write!(
                f,
                "{}[{}] and {}[{}] both link to {}",
                section.key(),
                first,
                section.key(),
                second,
                link
            ),
            Warning::NotDirectoryLink {
                section,
                index,
                link,
            } => write!(
                f,
                "{}[{}].link {} does not end in \"/\"",
                section.key(),
                index,
                link
            ),
            Warning::FileExtension {
                section,
                index,
                link,
            } => write!(
                f,
                "{}[{}].link {} points at a file, not a directory",
                section.key(),
                index,
                link
            ),
            Warning::ProtocolRelative {
                section,
                index,
                link,
            } => write!(
                f,
                "{}[{}].link {} is protocol-relative, not a site path",
                section.key(),
                index,
                link
            ),
            Warning::BlankText { field } => write!(f, "{} is only whitespace", field),
            Warning::RepositoryLinkShape(repo) => {
                write!(f, "repository_link {:?} is not in owner/repo form", repo)
            }
            Warning::MissingTarget {
                section,
                index,
                link,
                expected,
            } => write!(
                f,
                "{}[{}].link {} has no page (expected {})",
                section.key(),
                index,
                link,
                expected.display()
            ),
            Warning::Orphan { link } => write!(f, "{} is not linked from nav or sidebar", link),
            Warning::DocsRootMissing(root) => {
                write!(f, "docs root {} is not a directory", root.display())
            }
        }
    }
}

/// Run the descriptor lints. Order of warnings follows declaration order.
pub fn lint(config: &SiteConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for (field, value) in [
        ("title", &config.title),
        ("description", &config.description),
    ] {
        if is_blank(value) {
            warnings.push(Warning::BlankText {
                field: field.to_string(),
            });
        }
    }
    for (section, items) in sections(config) {
        warnings.extend(duplicate_links(section, items));
        for (index, item) in items.iter().enumerate() {
            if is_blank(&item.text) {
                warnings.push(Warning::BlankText {
                    field: format!("{}[{}].text", section.key(), index),
                });
            }
            if is_protocol_relative(&item.link) {
                warnings.push(Warning::ProtocolRelative {
                    section,
                    index,
                    link: item.link.clone(),
                });
            } else if has_file_extension(&item.link) {
                warnings.push(Warning::FileExtension {
                    section,
                    index,
                    link: item.link.clone(),
                });
            } else if !item.is_directory_link() {
                warnings.push(Warning::NotDirectoryLink {
                    section,
                    index,
                    link: item.link.clone(),
                });
            }
        }
    }
    if !is_owner_repo(&config.repository_link) {
        warnings.push(Warning::RepositoryLinkShape(
            config.repository_link.clone(),
        ));
    }
    warnings
}

/// Check every link against a docs root and report orphaned directories.
pub fn lint_docs(config: &SiteConfig, docs_root: &Path) -> std::io::Result<Vec<Warning>> {
    if !docs_root.is_dir() {
        return Ok(vec![Warning::DocsRootMissing(docs_root.to_path_buf())]);
    }
    let mut warnings = Vec::new();

    for (section, items) in sections(config) {
        for (index, item) in items.iter().enumerate() {
            if is_protocol_relative(&item.link) {
                continue;
            }
            let candidates = target_candidates(docs_root, item);
            if !candidates.iter().any(|p| p.is_file()) {
                let expected = candidates
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| docs_root.to_path_buf());
                warnings.push(Warning::MissingTarget {
                    section,
                    index,
                    link: item.link.clone(),
                    expected,
                });
            }
        }
    }

    let linked: HashSet<&str> = config.links().map(|i| i.link.as_str()).collect();
    for link in index_directories(docs_root)? {
        if !linked.contains(link.as_str()) {
            warnings.push(Warning::Orphan { link });
        }
    }

    Ok(warnings)
}

fn sections(config: &SiteConfig) -> [(Section, &[NavItem]); 2] {
    [
        (Section::Nav, config.theme.nav.as_slice()),
        (Section::Sidebar, config.theme.sidebar.as_slice()),
    ]
}

fn duplicate_links(section: Section, items: &[NavItem]) -> Vec<Warning> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut warnings = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match seen.get(item.link.as_str()) {
            Some(&first) => warnings.push(Warning::DuplicateLink {
                section,
                link: item.link.clone(),
                first,
                second: index,
            }),
            None => {
                seen.insert(&item.link, index);
            }
        }
    }
    warnings
}

fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.trim().is_empty()
}

fn is_protocol_relative(link: &str) -> bool {
    link.starts_with("//")
}

fn has_file_extension(link: &str) -> bool {
    link.rsplit('/')
        .next()
        .is_some_and(|last| last.rfind('.').is_some_and(|dot| dot > 0))
}

fn is_owner_repo(repo: &str) -> bool {
    match repo.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty()
                && !name.is_empty()
                && !name.contains('/')
                && !repo.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Files that would satisfy a link, most likely first.
///
/// `/css/` → `css/index.md`, `css/README.md`; `/guide.html`, `/guide.md`
/// and `/guide` → `guide.md`.
fn target_candidates(docs_root: &Path, item: &NavItem) -> Vec<PathBuf> {
    let dir = item
        .segments()
        .iter()
        .fold(docs_root.to_path_buf(), |acc, seg| acc.join(seg));
    if item.is_directory_link() {
        INDEX_FILES.iter().map(|f| dir.join(f)).collect()
    } else {
        let page = item.link.trim_start_matches('/');
        let page = page
            .strip_suffix(".html")
            .or_else(|| page.strip_suffix(".md"))
            .unwrap_or(page);
        vec![docs_root.join(format!("{page}.md"))]
    }
}

/// Site links (`/`, `/css/`) of every directory under `docs_root` holding
/// an index document, in file-name order.
fn index_directories(docs_root: &Path) -> std::io::Result<Vec<String>> {
    let mut links = Vec::new();
    let walker = WalkDir::new(docs_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e.file_name().to_str()));
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if !INDEX_FILES.iter().any(|f| entry.path().join(f).is_file()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(docs_root)
            .unwrap_or(entry.path());
        links.push(dir_link(rel));
    }
    Ok(links)
}

fn is_skipped_dir(name: Option<&str>) -> bool {
    match name {
        Some(name) => name.starts_with('.') || name == "node_modules",
        None => true,
    }
}

fn dir_link(rel: &Path) -> String {
    let mut link = String::from("/");
    for component in rel.components() {
        link.push_str(&component.as_os_str().to_string_lossy());
        link.push('/');
    }
    link
}
