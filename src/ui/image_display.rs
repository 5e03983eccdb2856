//! Image fetching and display logic.
//!
//! Uses `rayon::spawn` for the blocking HTTP request and decode,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::image_loader;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fetches `url` in the background and shows it once decoded.
///
/// Every call bumps `generation`; a result that arrives after a newer request
/// was issued is discarded, so only the latest request is ever displayed.
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    client: reqwest::blocking::Client,
    url: String,
    generation: Arc<AtomicU64>,
) {
    let request_generation = generation.fetch_add(1, Ordering::SeqCst) + 1;

    rayon::spawn(move || {
        let result = image_loader::fetch_image(&client, &url);

        let _ = slint::invoke_from_event_loop(move || {
            if generation.load(Ordering::SeqCst) != request_generation {
                debug!("Dropping superseded image {}", url);
                return;
            }

            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(decoded) => {
                        debug!("Loaded {} ({}x{})", url, decoded.width, decoded.height);
                        let image = image_loader::create_slint_image(decoded);
                        crate::ui::set_loaded_image(&ui, image);
                    }
                    Err(error) => crate::ui::set_error_with_prefix(
                        &ui,
                        "Failed to load image",
                        error.to_string(),
                    ),
                }
            }
        });
    });
}
