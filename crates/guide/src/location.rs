//! Host address adapters.
//!
//! The router never touches `window.location` directly; it talks to a
//! [`Location`], so the same navigation logic runs against the browser and
//! against an in-memory history in tests.

use std::sync::Arc;

use parking_lot::Mutex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::HistoryMode;
use crate::error::{GuideError, Result};
use crate::routes::ROOT_PATH;

/// Called with the raw host path whenever the host changes it.
pub type LocationListener = Arc<dyn Fn(String) + Send + Sync>;

pub trait Location: Send + Sync {
    /// Raw path as the host currently reports it.
    fn current(&self) -> String;

    /// Record a navigation in the host history.
    fn push(&self, path: &str) -> Result<()>;

    /// Register for host-originated path changes (back button, address bar).
    fn subscribe(&self, listener: LocationListener) -> Result<()>;

    /// Link target for `path`.
    fn href(&self, path: &str) -> String;
}

/// `window.location` backed by either the hash or the History API.
#[derive(Debug, Clone, Copy)]
pub struct BrowserLocation {
    mode: HistoryMode,
}

impl BrowserLocation {
    pub fn new(mode: HistoryMode) -> Self {
        Self { mode }
    }

    fn read(mode: HistoryMode) -> Result<String> {
        let location = window()?.location();
        let raw = match mode {
            HistoryMode::Hash => location.hash()?,
            HistoryMode::Path => location.pathname()?,
        };
        Ok(raw)
    }
}

impl Location for BrowserLocation {
    fn current(&self) -> String {
        match Self::read(self.mode) {
            Ok(path) => path,
            Err(err) => {
                log::warn!("could not read host location, using {ROOT_PATH}: {err}");
                ROOT_PATH.to_string()
            }
        }
    }

    fn push(&self, path: &str) -> Result<()> {
        let window = window()?;
        match self.mode {
            HistoryMode::Hash => window.location().set_hash(path)?,
            HistoryMode::Path => {
                window
                    .history()?
                    .push_state_with_url(&JsValue::NULL, "", Some(path))?
            }
        }
        Ok(())
    }

    fn subscribe(&self, listener: LocationListener) -> Result<()> {
        let mode = self.mode;
        let event = match mode {
            HistoryMode::Hash => "hashchange",
            HistoryMode::Path => "popstate",
        };

        let closure = Closure::<dyn FnMut()>::new(move || match Self::read(mode) {
            Ok(path) => listener(path),
            Err(err) => log::warn!("ignoring {event}: {err}"),
        });
        window()?.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        // Lives for the whole session.
        closure.forget();
        Ok(())
    }

    fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Hash => format!("#{path}"),
            HistoryMode::Path => path.to_string(),
        }
    }
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(GuideError::NoWindow)
}

/// In-process history stack.
#[derive(Default)]
pub struct MemoryLocation {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    stack: Vec<String>,
    pushes: usize,
    listeners: Vec<LocationListener>,
}

impl MemoryLocation {
    /// Start with `initial` as the only history entry. An empty string
    /// models a host with no path set.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(MemoryState {
                stack: vec![initial.into()],
                ..Default::default()
            }),
        }
    }

    /// Host-side change, as if the user edited the address bar.
    pub fn set(&self, path: impl Into<String>) {
        let path = path.into();
        let listeners = {
            let mut state = self.inner.lock();
            state.stack.push(path.clone());
            state.listeners.clone()
        };
        for listener in listeners {
            listener(path.clone());
        }
    }

    /// Host-side back navigation. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let (path, listeners) = {
            let mut state = self.inner.lock();
            if state.stack.len() < 2 {
                return false;
            }
            state.stack.pop();
            (state.stack.last().cloned().unwrap_or_default(), state.listeners.clone())
        };
        for listener in listeners {
            listener(path.clone());
        }
        true
    }

    /// Number of navigations recorded through [`Location::push`].
    pub fn push_count(&self) -> usize {
        self.inner.lock().pushes
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.lock().stack.clone()
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> String {
        self.inner.lock().stack.last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) -> Result<()> {
        let mut state = self.inner.lock();
        state.stack.push(path.to_string());
        state.pushes += 1;
        Ok(())
    }

    fn subscribe(&self, listener: LocationListener) -> Result<()> {
        self.inner.lock().listeners.push(listener);
        Ok(())
    }

    fn href(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_memory_location_push() {
        let location = MemoryLocation::new("");
        assert_eq!(location.current(), "");
        location.push("/a").unwrap();
        assert_eq!(location.current(), "/a");
        assert_eq!(location.push_count(), 1);
        assert_eq!(location.history(), ["", "/a"]);
    }

    #[test]
    fn test_memory_location_notifies_host_changes_only() {
        let location = MemoryLocation::new("/");
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        location
            .subscribe(Arc::new(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        location.push("/a").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        location.set("/b");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(location.back());
        assert_eq!(location.current(), "/a");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_memory_location_back_at_start() {
        let location = MemoryLocation::new("/");
        assert!(!location.back());
        assert_eq!(location.current(), "/");
    }

    #[test]
    fn test_browser_href() {
        let hash = BrowserLocation::new(HistoryMode::Hash);
        assert_eq!(hash.href("/javascript-syntax-guide"), "#/javascript-syntax-guide");
        let path = BrowserLocation::new(HistoryMode::Path);
        assert_eq!(path.href("/javascript-syntax-guide"), "/javascript-syntax-guide");
    }
}
