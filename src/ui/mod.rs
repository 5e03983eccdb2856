//! UI module for the Slint presentation layer.
//!
//! Threading model:
//! - UI thread: every `Viewer` handler and timer callback, all `ViewState` writes
//! - `rayon::spawn`: HTTP fetch and image decode
//! - `slint::invoke_from_event_loop`: hands decoded pixels back to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;
pub mod view;

pub use handlers::setup_handlers;
pub use state_helpers::*;
pub use view::SlintView;

/// The viewer as wired to the real window and Slint timers.
pub type AppViewer = crate::viewer::Viewer<SlintView, crate::timer::SlintOneShot>;
