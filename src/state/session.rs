//! Viewer session state and its resolution from the address.

use super::DisplayMode;
use crate::catalog::SourceCatalog;
use crate::config::{KEY_PARAM, MODE_PARAM};
use crate::navigation::Location;
use log::debug;

/// The viewer's current choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Always a key of the catalog the session was resolved against.
    pub key: String,
    pub mode: DisplayMode,
}

impl SessionState {
    /// Resolves the initial session from the address.
    pub fn resolve(
        location: &Location,
        catalog: &SourceCatalog,
        default_key: &str,
        default_mode: DisplayMode,
    ) -> Self {
        Self {
            key: resolve_initial_key(location, catalog, default_key),
            mode: resolve_initial_mode(location, default_mode),
        }
    }
}

/// Picks the address's source key if the catalog knows it, else the default.
///
/// A default that is itself missing from the catalog falls back to the first
/// catalog entry.
pub fn resolve_initial_key(
    location: &Location,
    catalog: &SourceCatalog,
    default_key: &str,
) -> String {
    if let Some(key) = location.get_param(KEY_PARAM) {
        if catalog.contains(&key) {
            return key;
        }
        debug!("Ignoring unknown source key {:?}", key);
    }

    if catalog.contains(default_key) {
        return default_key.to_string();
    }

    catalog
        .key_at(0)
        .unwrap_or(default_key)
        .to_string()
}

/// Picks the address's display mode if recognized, else the default.
pub fn resolve_initial_mode(location: &Location, default_mode: DisplayMode) -> DisplayMode {
    location
        .get_param(MODE_PARAM)
        .and_then(|token| token.parse().ok())
        .unwrap_or(default_mode)
}
