//! `ViewSink` backed by the Slint window.

use crate::error::Result;
use crate::image_loader;
use crate::state::DisplayMode;
use crate::viewer::ViewSink;
use slint::ComponentHandle;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

pub struct SlintView {
    ui: slint::Weak<crate::AppWindow>,
    client: reqwest::blocking::Client,
    generation: Arc<AtomicU64>,
}

impl SlintView {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Result<Self> {
        Ok(Self {
            ui,
            client: image_loader::http_client()?,
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    fn with_state(&self, update: impl FnOnce(crate::ViewState<'_>)) {
        if let Some(ui) = self.ui.upgrade() {
            update(ui.global::<crate::ViewState>());
        }
    }
}

impl ViewSink for SlintView {
    fn set_sources(&self, names: Vec<String>, selected: usize) {
        if let Some(ui) = self.ui.upgrade() {
            crate::ui::set_source_list(&ui, names, selected);
        }
    }

    fn set_image_source(&self, url: &str) {
        crate::ui::image_display::load_and_display_image(
            self.ui.clone(),
            self.client.clone(),
            url.to_string(),
            self.generation.clone(),
        );
    }

    fn set_status_text(&self, text: &str) {
        self.with_state(|state| state.set_status_text(text.into()));
    }

    fn set_mode_label(&self, label: &str) {
        self.with_state(|state| state.set_mode_label(label.into()));
    }

    fn set_display_mode(&self, mode: DisplayMode) {
        self.with_state(|state| state.set_cover_mode(mode == DisplayMode::Cover));
    }

    fn set_details_link(&self, url: &str) {
        self.with_state(|state| state.set_details_link(url.into()));
    }

    fn set_controls_visible(&self, visible: bool) {
        self.with_state(|state| state.set_controls_visible(visible));
    }

    fn set_address(&self, address: &str) {
        self.with_state(|state| state.set_address(address.into()));
    }
}
