//! Datei-Dialoge und Fenster (Projekte, Koordinaten-Tabelle).

mod coordinate_table;
mod file_dialogs;
mod projects_dialog;

pub use coordinate_table::show_coordinate_table;
pub use file_dialogs::handle_file_dialogs;
pub use projects_dialog::show_projects_dialog;
