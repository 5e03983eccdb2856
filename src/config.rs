//! Application configuration constants.

use crate::state::DisplayMode;
use std::time::Duration;

/// Source key used when the address names no known source.
pub const DEFAULT_KEY: &str = "LHC1";

/// Display mode used when the address carries no recognized mode.
pub const DEFAULT_MODE: DisplayMode = DisplayMode::Fit;

/// Idle period after which the control bar hides itself.
pub const CONTROLS_VISIBLE: Duration = Duration::from_millis(3000);

/// Query parameter holding the selected source key.
pub const KEY_PARAM: &str = "usr";

/// Query parameter holding the display mode.
pub const MODE_PARAM: &str = "mode";

/// Base address used when only a query string is supplied.
pub const LOCATION_BASE: &str = "vistar://viewer/";

/// Per-source documentation lives at `<DOC_URL_BASE><KEY>.pdf`.
pub const DOC_URL_BASE: &str = "https://op-webtools.web.cern.ch/vistar/Doc/";

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

pub const USER_AGENT: &str = concat!("vistar-viewer/", env!("CARGO_PKG_VERSION"));
