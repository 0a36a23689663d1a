//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod coordinate_table;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, UI, Optionen).
pub mod state;
pub mod status_text;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use coordinate_table::{coordinate_rows, CoordinateRow};
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CenterTarget, ProjectsDialogState, SessionState, UiState};
pub use status_text::status_text;
