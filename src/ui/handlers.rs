//! Event handlers for UI callbacks.
//!
//! Every Logic callback runs on the UI thread and forwards straight to the
//! viewer, which owns all session state.

use crate::ui::AppViewer;
use log::{debug, warn};
use slint::ComponentHandle;
use std::rc::Rc;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, viewer: &Rc<AppViewer>) {
    // Source selector
    ui.global::<crate::Logic>().on_source_selected({
        let viewer = viewer.clone();
        move |index| match usize::try_from(index) {
            Ok(index) => {
                viewer.on_source_index(index);
            }
            Err(_) => debug!("Ignoring empty selection"),
        }
    });

    // Fit / cover toggle
    ui.global::<crate::Logic>().on_toggle_mode({
        let viewer = viewer.clone();
        move || viewer.on_mode_toggle()
    });

    // Documentation link
    ui.global::<crate::Logic>().on_open_details({
        let viewer = viewer.clone();
        move || {
            let url = viewer.details_url();
            if let Err(e) = webbrowser::open(&url) {
                warn!("Failed to open {}: {}", url, e);
            }
            viewer.on_activity();
        }
    });
}
