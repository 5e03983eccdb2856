//! State management for the viewer.

pub mod display_mode;
pub mod session;

pub use display_mode::DisplayMode;
pub use session::SessionState;
