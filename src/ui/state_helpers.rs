//! Helper functions to set multiple ViewState properties in a grouped manner.

use log::warn;
use slint::ComponentHandle;

/// Shows a freshly decoded image and clears any previous failure.
///
/// Groups: dynamic-image, image-loaded, image-failed, error-message
pub fn set_loaded_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_dynamic_image(image);
    view_state.set_image_loaded(true);
    view_state.set_image_failed(false);
    view_state.set_error_message("".into());
}

/// Switches to the broken-image placeholder with a prefixed message.
///
/// Groups: image-failed, error-message
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    warn!("{}", error_message);
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_failed(true);
    view_state.set_error_message(error_message.into());
}

/// Fills the source selector.
///
/// Groups: source-names, selected-index
pub fn set_source_list(ui: &crate::AppWindow, names: Vec<String>, selected: usize) {
    let names: Vec<slint::SharedString> = names.into_iter().map(Into::into).collect();
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_source_names(slint::ModelRc::new(slint::VecModel::from(names)));
    view_state.set_selected_index(selected as i32);
}
