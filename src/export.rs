//! Handoff to the documentation generator.
//!
//! The generator reads its own config shape, not ours. Export maps the
//! descriptor onto it field by field:
//!
//! | Descriptor        | Generator                |
//! |-------------------|--------------------------|
//! | `title`           | `title`                  |
//! | `description`     | `description`            |
//! | `base_path`       | `base`                   |
//! | `repository_link` | `repo`                   |
//! | `lang`            | `lang` (omitted if unset)|
//! | `theme.nav`       | `themeConfig.nav`        |
//! | `theme.sidebar`   | `themeConfig.sidebar`    |
//!
//! Two output formats: plain JSON, or a JS module (`module.exports = {...};`)
//! that can be dropped in as the generator's config file. Nav and sidebar
//! order is carried through unchanged.

use crate::config::SiteConfig;
use crate::types::{NavItem, SidebarItem};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// CommonJS module exporting the config object
    Js,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorConfig<'a> {
    title: &'a str,
    description: &'a str,
    base: &'a str,
    repo: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<&'a str>,
    theme_config: GeneratorTheme<'a>,
}

#[derive(Serialize)]
struct GeneratorTheme<'a> {
    nav: &'a [NavItem],
    sidebar: &'a [SidebarItem],
}

impl<'a> From<&'a SiteConfig> for GeneratorConfig<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.title,
            description: &config.description,
            base: &config.base_path,
            repo: &config.repository_link,
            lang: config.lang.as_deref(),
            theme_config: GeneratorTheme {
                nav: &config.theme.nav,
                sidebar: &config.theme.sidebar,
            },
        }
    }
}

/// The descriptor in the generator's config shape.
pub fn to_generator_value(config: &SiteConfig) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(GeneratorConfig::from(config))
}

/// Render the descriptor in the given format, newline-terminated.
pub fn render(config: &SiteConfig, format: ExportFormat) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(&GeneratorConfig::from(config))?;
    Ok(match format {
        ExportFormat::Json => format!("{json}\n"),
        ExportFormat::Js => format!("module.exports = {json};\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load, parse};
    use crate::test_helpers::*;

    #[test]
    fn generator_keys() {
        let value = to_generator_value(&load().unwrap()).unwrap();
        assert_eq!(value["title"], "Lightning Web Component");
        assert_eq!(value["description"], "我的vitepress博客.");
        assert_eq!(value["base"], "/");
        assert_eq!(value["repo"], "vuejs/vitepress");
        assert!(value.get("lang").is_none());
        assert!(value.get("base_path").is_none());
    }

    #[test]
    fn lang_exported_when_set() {
        let mut config = load().unwrap();
        config.lang = Some("en-US".into());
        assert_eq!(to_generator_value(&config).unwrap()["lang"], "en-US");
    }

    #[test]
    fn theme_config_preserves_order() {
        let value = to_generator_value(&load().unwrap()).unwrap();
        let sidebar = value["themeConfig"]["sidebar"].as_array().unwrap();
        assert_eq!(sidebar.len(), 11);
        assert_eq!(sidebar[0]["text"], "初始化");
        assert_eq!(sidebar[0]["link"], "/initial/");
        assert_eq!(sidebar[10]["link"], "/jslib/");

        let nav = value["themeConfig"]["nav"].as_array().unwrap();
        assert_eq!(nav[0]["link"], "/");
        assert_eq!(nav[1]["link"], "/about/");
    }

    #[test]
    fn swapped_entries_swap_in_export() {
        let config = parse(&minimal_descriptor(&[("B", "/b/"), ("A", "/a/")])).unwrap();
        let value = to_generator_value(&config).unwrap();
        let sidebar = value["themeConfig"]["sidebar"].as_array().unwrap();
        assert_eq!(sidebar[0]["link"], "/b/");
        assert_eq!(sidebar[1]["link"], "/a/");
    }

    #[test]
    fn render_json_round_trips_through_parser() {
        let config = load().unwrap();
        let out = render(&config, ExportFormat::Json).unwrap();
        assert!(out.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, to_generator_value(&config).unwrap());
    }

    #[test]
    fn render_json_keeps_field_order() {
        let out = render(&load().unwrap(), ExportFormat::Json).unwrap();
        let title = out.find("\"title\"").unwrap();
        let base = out.find("\"base\"").unwrap();
        let theme = out.find("\"themeConfig\"").unwrap();
        assert!(title < base && base < theme);
    }

    #[test]
    fn render_js_module() {
        let out = render(&load().unwrap(), ExportFormat::Js).unwrap();
        assert!(out.starts_with("module.exports = {"));
        assert!(out.ends_with("};\n"));
        // Labels are written as-is, not \u-escaped
        assert!(out.contains("\"第三方js库\""));
    }
}
