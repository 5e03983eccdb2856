//! Refresh loop, user actions and control-bar visibility.
//!
//! `Viewer` owns every piece of mutable state: the session, the address and
//! the two timers. It runs on the UI thread only; handlers never overlap, so
//! interior mutability through `RefCell` is enough.

use crate::catalog::SourceCatalog;
use crate::config::{
    CONTROLS_VISIBLE, DEFAULT_KEY, DEFAULT_MODE, DOC_URL_BASE, KEY_PARAM, MODE_PARAM,
};
use crate::navigation::Location;
use crate::state::{DisplayMode, SessionState};
use crate::timer::OneShotTimer;
use log::{debug, error, info};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Presentation collaborator driven by the viewer.
pub trait ViewSink {
    /// Fills the selection list with display names, `selected` pre-selected.
    fn set_sources(&self, names: Vec<String>, selected: usize);
    /// Starts loading a new image, superseding any load in flight.
    fn set_image_source(&self, url: &str);
    fn set_status_text(&self, text: &str);
    fn set_mode_label(&self, label: &str);
    fn set_display_mode(&self, mode: DisplayMode);
    fn set_details_link(&self, url: &str);
    fn set_controls_visible(&self, visible: bool);
    fn set_address(&self, address: &str);
}

pub struct Viewer<V, T> {
    catalog: Rc<SourceCatalog>,
    session: RefCell<SessionState>,
    location: RefCell<Location>,
    view: V,
    refresh_timer: T,
    hide_timer: T,
    controls_idle: Duration,
}

impl<V, T> Viewer<V, T>
where
    V: ViewSink + 'static,
    T: OneShotTimer + 'static,
{
    /// Creates a viewer whose session is resolved from `location`.
    pub fn new(
        catalog: Rc<SourceCatalog>,
        location: Location,
        view: V,
        refresh_timer: T,
        hide_timer: T,
    ) -> Rc<Self> {
        let session = SessionState::resolve(&location, &catalog, DEFAULT_KEY, DEFAULT_MODE);
        info!("Starting with source {} in {} mode", session.key, session.mode);

        Rc::new(Self {
            catalog,
            session: RefCell::new(session),
            location: RefCell::new(location),
            view,
            refresh_timer,
            hide_timer,
            controls_idle: CONTROLS_VISIBLE,
        })
    }

    /// Populates the selection list, starts the refresh loop and shows the controls.
    pub fn start(self: &Rc<Self>) {
        let key = self.session.borrow().key.clone();

        let names = self
            .catalog
            .iter()
            .map(|(_, entry)| entry.name.clone())
            .collect();
        let selected = self.catalog.index_of(&key).unwrap_or(0);
        self.view.set_sources(names, selected);
        self.view.set_address(self.location.borrow().as_str());

        self.update_ui();
        self.run_cycle(&key);
        self.show_controls(true);
    }

    /// Loads the current image for `key` and schedules the next cycle.
    pub fn run_cycle(self: &Rc<Self>, key: &str) {
        self.refresh_timer.cancel();

        let Some(entry) = self.catalog.get(key) else {
            error!("Refresh loop stopped: unknown source key {:?}", key);
            return;
        };

        let url = cache_busted(&entry.img, chrono::Utc::now().timestamp_millis());
        debug!("Refreshing {} from {}", key, url);
        self.view.set_image_source(&url);
        self.update_ui();

        let weak = Rc::downgrade(self);
        let next_key = key.to_string();
        self.refresh_timer.arm(
            entry.refresh_interval(),
            Box::new(move || {
                if let Some(viewer) = weak.upgrade() {
                    viewer.run_cycle(&next_key);
                }
            }),
        );
    }

    /// Switches to another source. Unknown keys are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn on_source_change(self: &Rc<Self>, key: &str) -> bool {
        if !self.catalog.contains(key) {
            debug!("Ignoring selection of unknown source {:?}", key);
            return false;
        }

        info!("Source selected: {}", key);
        self.session.borrow_mut().key = key.to_string();
        self.persist_param(KEY_PARAM, key);

        self.run_cycle(key);
        self.update_ui();
        self.show_controls(true);
        true
    }

    /// Switches to the source at a position of the selection list.
    pub fn on_source_index(self: &Rc<Self>, index: usize) -> bool {
        match self.catalog.key_at(index) {
            Some(key) => {
                let key = key.to_string();
                self.on_source_change(&key)
            }
            None => {
                debug!("Ignoring out of range selection index {}", index);
                false
            }
        }
    }

    /// Flips between fit and cover. The refresh loop is left alone.
    pub fn on_mode_toggle(self: &Rc<Self>) {
        let mode = {
            let mut session = self.session.borrow_mut();
            session.mode = session.mode.toggled();
            session.mode
        };

        info!("Display mode: {}", mode);
        self.persist_param(MODE_PARAM, mode.as_str());

        self.update_ui();
        self.show_controls(true);
    }

    /// Raw pointer, key or touch activity.
    pub fn on_activity(self: &Rc<Self>) {
        self.show_controls(true);
    }

    /// Shows or hides the control bar. Showing re-arms the auto-hide timer.
    pub fn show_controls(self: &Rc<Self>, visible: bool) {
        self.view.set_controls_visible(visible);
        self.hide_timer.cancel();

        if visible {
            let weak = Rc::downgrade(self);
            self.hide_timer.arm(
                self.controls_idle,
                Box::new(move || {
                    if let Some(viewer) = weak.upgrade() {
                        viewer.show_controls(false);
                    }
                }),
            );
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    /// Whether a next refresh cycle is scheduled.
    pub fn is_refreshing(&self) -> bool {
        self.refresh_timer.is_armed()
    }

    pub fn address(&self) -> String {
        self.location.borrow().to_string()
    }

    /// Documentation page for the current source.
    pub fn details_url(&self) -> String {
        details_url(&self.session.borrow().key)
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn persist_param(&self, name: &str, value: &str) {
        let mut location = self.location.borrow_mut();
        location.set_param(name, value);
        self.view.set_address(location.as_str());
    }

    fn update_ui(&self) {
        let session = self.session.borrow();
        let Some(entry) = self.catalog.get(&session.key) else {
            return;
        };

        self.view.set_details_link(&details_url(&session.key));
        self.view.set_status_text(&format!(
            "Refresh: {} ms • Mode: {}",
            entry.refreshrate, session.mode
        ));
        self.view
            .set_mode_label(&format!("Scale: {}", session.mode.label()));
        self.view.set_display_mode(session.mode);
    }
}

/// Appends a timestamp so every cycle bypasses HTTP caches.
pub fn cache_busted(endpoint: &str, timestamp_ms: i64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", endpoint, separator, timestamp_ms)
}

pub fn details_url(key: &str) -> String {
    format!("{}{}.pdf", DOC_URL_BASE, key)
}
