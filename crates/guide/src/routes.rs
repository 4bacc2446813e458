//! Route table: which page each menu path shows.
//!
//! Selection is a pure function of the path string. The table is built once
//! from [`SiteConfig`] and never changes afterwards.

use serde::{Deserialize, Serialize};

use crate::config::{SiteConfig, UnmatchedPolicy};
use crate::error::{GuideError, Result};

/// The default path. Unmatched paths fall back to the page bound here.
pub const ROOT_PATH: &str = "/";

/// The content pages the guide can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    ReactArchitecture,
    JavascriptSyntaxGuide,
}

impl PageId {
    pub const ALL: [PageId; 2] = [PageId::ReactArchitecture, PageId::JavascriptSyntaxGuide];
}

/// A navigable destination: menu label, path, and the page it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub label: String,
    pub path: String,
    pub page: PageId,
}

/// A menu heading and the entries listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub heading: String,
    pub entries: Vec<RouteEntry>,
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page(PageId),
    /// Only produced under [`UnmatchedPolicy::NotFound`]. Carries the
    /// normalized path.
    NotFound(String),
}

impl Resolution {
    pub fn page(&self) -> Option<PageId> {
        match self {
            Resolution::Page(page) => Some(*page),
            Resolution::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    sections: Vec<NavSection>,
    default: RouteEntry,
    unmatched: UnmatchedPolicy,
}

impl RouteTable {
    /// Validate the config and build the table from its menu.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        config.validate()?;
        let sections: Vec<NavSection> = config
            .sections
            .iter()
            .map(|section| NavSection {
                heading: section.heading.clone(),
                entries: section
                    .links
                    .iter()
                    .map(|link| RouteEntry {
                        label: link.label.clone(),
                        path: link.path.clone(),
                        page: link.page,
                    })
                    .collect(),
            })
            .collect();

        let default = sections
            .iter()
            .flat_map(|section| section.entries.iter())
            .find(|entry| entry.path == ROOT_PATH)
            .cloned()
            .ok_or_else(|| GuideError::InvalidConfig(format!("no link is bound to {ROOT_PATH}")))?;

        Ok(Self {
            sections,
            default,
            unmatched: config.unmatched,
        })
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Every entry in menu order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }

    /// The entry bound to `/`.
    pub fn default_entry(&self) -> &RouteEntry {
        &self.default
    }

    /// Exact lookup of an already-normalized path.
    pub fn entry(&self, path: &str) -> Option<&RouteEntry> {
        self.entries().find(|entry| entry.path == path)
    }

    /// Select the page for `path`.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize_path(path);
        match self.entry(&path) {
            Some(entry) => Resolution::Page(entry.page),
            None => match self.unmatched {
                UnmatchedPolicy::Fallback => Resolution::Page(self.default_entry().page),
                UnmatchedPolicy::NotFound => Resolution::NotFound(path),
            },
        }
    }
}

/// Reduce a raw host path to the form menu paths are written in.
///
/// Accepts hash fragments (`#/a`), strips query and fragment suffixes and
/// trailing slashes, and maps the empty path to `/`. Matching stays exact:
/// no case folding, no prefix matching.
pub fn normalize_path(raw: &str) -> String {
    let path = raw.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        ROOT_PATH.to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
