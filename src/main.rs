// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod catalog;
mod config;
mod error;
mod image_loader;
mod navigation;
mod startup;
mod state;
mod timer;
mod ui;
mod viewer;

use slint::ComponentHandle;
use startup::{Command, StartupOptions};
use std::rc::Rc;
use timer::SlintOneShot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if cfg!(debug_assertions) { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = StartupOptions::from_args(std::env::args().skip(1))?;
    if options.command == Command::Help {
        println!("{}", startup::USAGE);
        return Ok(());
    }

    let catalog = options.load_catalog()?;
    if options.command == Command::List {
        println!("{}", startup::format_catalog(&catalog));
        return Ok(());
    }

    let app = AppWindow::new()?;
    let view = ui::SlintView::new(app.as_weak())?;
    let viewer = viewer::Viewer::new(
        Rc::new(catalog),
        options.location,
        view,
        SlintOneShot::new(),
        SlintOneShot::new(),
    );

    // Setup all UI event handlers
    ui::setup_handlers(&app, &viewer);
    startup::hook_input_activity(&app, &viewer);

    viewer.start();
    if !viewer.is_refreshing() {
        log::error!("Refresh loop did not start for {}", viewer.address());
    }
    log::info!("Viewing {}", viewer.address());
    app.run()?;

    Ok(())
}
