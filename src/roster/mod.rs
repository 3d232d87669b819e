/// Roster loading module
///
/// This module handles:
/// - Building the people API request (loader.rs)
/// - Fetching and validating the roster batch (loader.rs)
/// - Fetching portrait images for loaded people (portrait.rs)

pub mod loader;
pub mod portrait;

pub use loader::{load_roster, RosterRequest};
pub use portrait::fetch_portrait;

use thiserror::Error;

/// Why a roster (or portrait) request produced nothing.
///
/// Carries strings rather than source errors so it can travel inside
/// application messages, which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}
