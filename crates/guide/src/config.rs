//! Site configuration.
//!
//! The configuration is compiled into the binary from `site.json` and
//! describes the banner, the mount point, how paths are carried in the
//! address bar, and the navigation menu.
//!
//! # Example
//!
//! ```
//! use guide::config::SiteConfig;
//!
//! let config = SiteConfig::embedded().unwrap();
//! assert_eq!(config.mount_id, "root");
//! ```

use std::collections::HashSet;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::routes::{PageId, ROOT_PATH};

const EMBEDDED_CONFIG: &str = include_str!("../site.json");

/// Where the current path lives in the host address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryMode {
    /// `index.html#/javascript-syntax-guide`; works from any static host.
    #[default]
    Hash,
    /// `/javascript-syntax-guide` via the History API; needs a host that
    /// serves `index.html` for every path.
    Path,
}

/// What to show for a path no menu entry is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedPolicy {
    /// Show the page bound to `/`.
    #[default]
    Fallback,
    /// Show a not-found placeholder.
    NotFound,
}

/// One menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub path: String,
    pub page: PageId,
}

/// A titled group of menu links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub heading: String,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Banner text
    #[serde(default = "default_title")]
    pub title: String,

    /// Id of the host element the app mounts into
    #[serde(default = "default_mount_id")]
    pub mount_id: String,

    #[serde(default)]
    pub history: HistoryMode,

    #[serde(default)]
    pub unmatched: UnmatchedPolicy,

    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    /// Menu sections in display order
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

fn default_title() -> String {
    "Web Guide & Tips".to_string()
}

fn default_mount_id() -> String {
    "root".to_string()
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

impl SiteConfig {
    /// Parse the configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// All links across sections, in menu order.
    pub fn links(&self) -> impl Iterator<Item = &LinkConfig> {
        self.sections.iter().flat_map(|section| section.links.iter())
    }

    /// Check that the menu describes a usable route set.
    pub fn validate(&self) -> Result<()> {
        if self.mount_id.trim().is_empty() {
            return Err(GuideError::InvalidConfig("mountId is empty".into()));
        }

        let mut seen = HashSet::new();
        for link in self.links() {
            if link.label.trim().is_empty() {
                return Err(GuideError::InvalidConfig(format!(
                    "link to {} has an empty label",
                    link.path
                )));
            }
            if !link.path.starts_with('/') {
                return Err(GuideError::InvalidConfig(format!(
                    "path {:?} must start with '/'",
                    link.path
                )));
            }
            if !seen.insert(link.path.as_str()) {
                return Err(GuideError::InvalidConfig(format!(
                    "path {} is bound more than once",
                    link.path
                )));
            }
        }

        if !seen.contains(ROOT_PATH) {
            return Err(GuideError::InvalidConfig(format!(
                "no link is bound to {ROOT_PATH}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.title, "Web Guide & Tips");
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.history, HistoryMode::Hash);
        assert_eq!(config.unmatched, UnmatchedPolicy::Fallback);
        assert_eq!(config.log_level, LevelFilter::Info);

        let headings: Vec<_> = config.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["JAVASCRIPT", "CSS"]);

        let links: Vec<_> = config
            .links()
            .map(|l| (l.label.as_str(), l.path.as_str(), l.page))
            .collect();
        assert_eq!(
            links,
            [
                ("React Architecture", "/", PageId::ReactArchitecture),
                (
                    "Javascript Syntax Guide",
                    "/javascript-syntax-guide",
                    PageId::JavascriptSyntaxGuide
                ),
            ]
        );
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Home", "path": "/", "page": "react-architecture" }
                ] }
            ]
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.title, "Web Guide & Tips");
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.history, HistoryMode::Hash);
        assert_eq!(config.unmatched, UnmatchedPolicy::Fallback);
    }

    #[test]
    fn test_deserialize_modes() {
        let json = r#"{
            "history": "path",
            "unmatched": "not-found",
            "logLevel": "debug",
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Home", "path": "/", "page": "javascript-syntax-guide" }
                ] }
            ]
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.history, HistoryMode::Path);
        assert_eq!(config.unmatched, UnmatchedPolicy::NotFound);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_section_without_links() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Home", "path": "/", "page": "react-architecture" }
                ] },
                { "heading": "CSS" }
            ]
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert!(config.sections[1].links.is_empty());
    }

    #[test]
    fn test_rejects_missing_root() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Syntax", "path": "/syntax", "page": "javascript-syntax-guide" }
                ] }
            ]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, GuideError::InvalidConfig(_)));
        assert!(err.to_string().contains("no link is bound to /"));
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let json = r#"{
            "sections": [
                { "heading": "A", "links": [
                    { "label": "Home", "path": "/", "page": "react-architecture" }
                ] },
                { "heading": "B", "links": [
                    { "label": "Again", "path": "/", "page": "javascript-syntax-guide" }
                ] }
            ]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("bound more than once"));
    }

    #[test]
    fn test_rejects_relative_path() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Home", "path": "/", "page": "react-architecture" },
                    { "label": "Syntax", "path": "syntax", "page": "javascript-syntax-guide" }
                ] }
            ]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_rejects_empty_label() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "  ", "path": "/", "page": "react-architecture" }
                ] }
            ]
        }"#;
        assert!(SiteConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_unknown_page() {
        let json = r#"{
            "sections": [
                { "heading": "DOCS", "links": [
                    { "label": "Home", "path": "/", "page": "css-guide" }
                ] }
            ]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, GuideError::Config(_)));
    }
}
