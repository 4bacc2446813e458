//! Current Path ownership.
//!
//! [`Router`] is the only writer of the current path. Views receive it
//! through Leptos context and read the active page from it; the host
//! [`Location`] is updated as a side effect of navigation.

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::Result;
use crate::location::Location;
use crate::routes::{normalize_path, Resolution, RouteEntry, RouteTable};

#[derive(Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    location: Arc<dyn Location>,
    path: RwSignal<String>,
}

impl Router {
    /// Build a router seeded from the host's current path.
    pub fn new(table: RouteTable, location: Arc<dyn Location>) -> Self {
        let path = normalize_path(&location.current());
        log::debug!("router starting at {path}");
        Self {
            table: Arc::new(table),
            location,
            path: RwSignal::new(path),
        }
    }

    /// Follow host-originated path changes for the rest of the session.
    pub fn listen(&self) -> Result<()> {
        let router = self.clone();
        self.location
            .subscribe(Arc::new(move |raw: String| {
                router.sync(&raw);
            }))
    }

    /// Move to `path`. Returns false when already there, in which case
    /// nothing is written and the host history is untouched.
    pub fn navigate(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if !self.update(&path) {
            return false;
        }
        if let Err(err) = self.location.push(&path) {
            log::warn!("navigated to {path} but host history was not updated: {err}");
        }
        true
    }

    /// Adopt a path the host changed on its own (back button, hash edit).
    pub fn sync(&self, raw: &str) -> bool {
        self.update(&normalize_path(raw))
    }

    fn update(&self, path: &str) -> bool {
        if self.path.with_untracked(|current| current == path) {
            return false;
        }
        log::debug!("navigate {} -> {path}", self.path.get_untracked());
        self.path.set(path.to_string());
        true
    }

    /// Normalized current path (tracked).
    pub fn current_path(&self) -> String {
        self.path.get()
    }

    /// Page selected by the current path (tracked).
    pub fn active(&self) -> Resolution {
        self.path.with(|path| self.table.resolve(path))
    }

    /// Whether `entry` is the one the current path names (tracked).
    pub fn is_current(&self, entry: &RouteEntry) -> bool {
        self.path.with(|path| *path == entry.path)
    }

    pub fn href(&self, path: &str) -> String {
        self.location.href(path)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
