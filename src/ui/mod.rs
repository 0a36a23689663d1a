//! UI-Layer mit egui: Menü, Toolbar, Steuerungs-Panel, Canvas, Dialoge.
//!
//! Alle Funktionen lesen den `AppState` und geben `AppIntent`s zurück;
//! Zustandsänderungen laufen ausschließlich über den Controller.

mod canvas;
mod controls;
pub mod dialogs;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::render_canvas;
pub use controls::render_controls_panel;
pub use dialogs::{handle_file_dialogs, show_coordinate_table, show_projects_dialog};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
