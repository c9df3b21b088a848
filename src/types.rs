//! Navigation entry types shared by the descriptor, lints, and export.

use serde::{Deserialize, Serialize};

/// A single navigation entry: a label and the site-relative path it opens.
///
/// Links start with `/` and, by convention, end in `/` so the generator
/// resolves them to the index document of that directory. Both fields are
/// required; a literal that omits either fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// Sidebar entries share the nav entry shape.
pub type SidebarItem = NavItem;

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether the link follows the directory-index convention (`/css/`).
    pub fn is_directory_link(&self) -> bool {
        self.link.ends_with('/')
    }

    /// Path segments of the link, without empty leading/trailing parts.
    ///
    /// `/guide/intro/` → `["guide", "intro"]`, `/` → `[]`.
    pub fn segments(&self) -> Vec<&str> {
        self.link.split('/').filter(|s| !s.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_link_detection() {
        assert!(NavItem::new("CSS", "/css/").is_directory_link());
        assert!(NavItem::new("Home", "/").is_directory_link());
        assert!(!NavItem::new("Guide", "/guide.html").is_directory_link());
    }

    #[test]
    fn segments_strip_slashes() {
        assert_eq!(
            NavItem::new("x", "/guide/intro/").segments(),
            vec!["guide", "intro"]
        );
        assert!(NavItem::new("Home", "/").segments().is_empty());
    }

    #[test]
    fn missing_link_is_an_error() {
        let result: Result<NavItem, _> = toml::from_str(r#"text = "Home""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("link"));
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<NavItem, _> = toml::from_str(
            r#"
text = "Home"
link = "/"
icon = "house"
"#,
        );
        assert!(result.is_err());
    }
}
