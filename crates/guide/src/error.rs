//! Error types for the guide.

use thiserror::Error;

/// Errors raised while starting the guide.
///
/// Everything past startup is total: route selection and page rendering
/// cannot fail, so these only surface from [`crate::mount`] and config loading.
#[derive(Error, Debug)]
pub enum GuideError {
    /// `site.json` is not valid JSON or does not match the config schema.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// The config parsed but describes an unusable route set.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Not running inside a browser window.
    #[error("no global window")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// The host document lacks the container the app mounts into.
    #[error("mount point #{id} not found in host document")]
    MissingMountPoint {
        /// Element id that was looked up.
        id: String,
    },

    /// A browser API threw.
    #[error("host error: {0}")]
    Host(String),
}

impl From<wasm_bindgen::JsValue> for GuideError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        GuideError::Host(message)
    }
}

/// Result type for guide operations.
pub type Result<T> = std::result::Result<T, GuideError>;
