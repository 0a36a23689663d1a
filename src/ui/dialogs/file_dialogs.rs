use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, current_dir: &std::path::Path) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Exportverzeichnis-Dialog
    if ui_state.show_export_dir_dialog {
        ui_state.show_export_dir_dialog = false;

        let mut dialog = rfd::FileDialog::new().set_title("Choose Export Folder");
        if current_dir.is_dir() {
            dialog = dialog.set_directory(current_dir);
        }

        if let Some(path) = dialog.pick_folder() {
            events.push(AppIntent::ExportDirSelected { path });
        }
    }

    events
}
