//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::AppOptions;
use std::path::PathBuf;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet die Koordinaten-Tabelle.
pub fn open_coordinate_table(state: &mut AppState) {
    state.ui.show_coordinate_table = true;
}

/// Schließt die Koordinaten-Tabelle.
pub fn close_coordinate_table(state: &mut AppState) {
    state.ui.show_coordinate_table = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: AppOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = AppOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = AppOptions::default();
    let path = AppOptions::config_path();
    state.options.save_to_file(&path)
}

/// Fordert den Verzeichnis-Dialog für Exporte an.
pub fn request_export_dir_dialog(state: &mut AppState) {
    state.ui.show_export_dir_dialog = true;
}

/// Setzt das Exportverzeichnis und persistiert die Optionen.
pub fn set_export_dir(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    log::info!("Exportverzeichnis: {}", path.display());
    let mut options = state.options.clone();
    options.export_dir = path;
    apply_options(state, options)
}
