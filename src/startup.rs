use crate::catalog::SourceCatalog;
use crate::error::{AppError, Result};
use crate::navigation::Location;
use crate::ui::AppViewer;
use std::path::PathBuf;
use std::rc::Rc;

pub const USAGE: &str = "\
Usage: vistar-viewer [ADDRESS] [--catalog PATH] [--list]

  ADDRESS         Viewer address or query, e.g. '?usr=LHC1&mode=cover'
  --catalog PATH  Load sources from a JSON file instead of the built-in list
  --list          Print the available sources and exit
  -h, --help      Show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    List,
    Help,
}

#[derive(Debug)]
pub struct StartupOptions {
    pub command: Command,
    pub location: Location,
    pub catalog_path: Option<PathBuf>,
}

impl StartupOptions {
    /// Parses the command line, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut command = Command::Run;
        let mut location = None;
        let mut catalog_path = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => command = Command::Help,
                "--list" => {
                    if command == Command::Run {
                        command = Command::List;
                    }
                }
                "--catalog" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--catalog needs a path".to_string()))?;
                    catalog_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option {}\n\n{}", flag, USAGE)));
                }
                address => {
                    if location.is_some() {
                        return Err(AppError::Usage(format!(
                            "unexpected argument {}\n\n{}",
                            address, USAGE
                        )));
                    }
                    location = Some(Location::parse(address).unwrap_or_else(|e| {
                        log::warn!("{}; starting from the default address", e);
                        Location::default()
                    }));
                }
            }
        }

        Ok(Self {
            command,
            location: location.unwrap_or_default(),
            catalog_path,
        })
    }

    pub fn load_catalog(&self) -> Result<SourceCatalog> {
        match &self.catalog_path {
            Some(path) => {
                log::info!("Loading catalog from {}", path.display());
                SourceCatalog::from_path(path)
            }
            None => SourceCatalog::builtin(),
        }
    }
}

/// One `KEY  NAME  (N ms, alt M ms[, logbook L])` line per source, in catalog order.
pub fn format_catalog(catalog: &SourceCatalog) -> String {
    let width = catalog.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    catalog
        .iter()
        .map(|(key, entry)| {
            format!(
                "{:width$}  {}  ({} ms, alt {} ms{})",
                key,
                entry.name,
                entry.refreshrate,
                entry.ext_refreshrate,
                entry
                    .lgbk
                    .map(|lgbk| format!(", logbook {}", lgbk))
                    .unwrap_or_default(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Forwards raw pointer, button, key and touch activity to the viewer.
pub fn hook_input_activity(app: &crate::AppWindow, viewer: &Rc<AppViewer>) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::winit::event::{ElementState, TouchPhase, WindowEvent};
    use i_slint_backend_winit::EventResult;
    use slint::ComponentHandle;

    let viewer = viewer.clone();
    app.window().on_winit_window_event(move |_window, event| {
        let is_activity = match event {
            WindowEvent::CursorMoved { .. } => true,
            WindowEvent::MouseInput { state, .. } => *state == ElementState::Pressed,
            WindowEvent::KeyboardInput { event, .. } => event.state == ElementState::Pressed,
            WindowEvent::Touch(touch) => touch.phase == TouchPhase::Started,
            _ => false,
        };

        if is_activity {
            viewer.on_activity();
        }

        EventResult::Propagate
    });
}
