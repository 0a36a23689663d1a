//! Handler für Projektliste, Speichern, Laden und Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::AppOptions;
use anyhow::Context;
use transform_lab_engine::ProjectStore;

/// Speichert die aktuelle Sitzung als Projekt.
pub fn save(state: &mut AppState, store: &mut dyn ProjectStore) -> anyhow::Result<()> {
    let now = chrono::Local::now();
    use_cases::projects::save_current(state, store, now)
}

/// Exportiert das zuletzt gespeicherte Projekt als PNG (falls aktiviert).
pub fn export_saved(state: &mut AppState) -> anyhow::Result<()> {
    let Some(id) = state.ui.last_saved_project else {
        return Ok(());
    };
    if !state.options.export_on_save {
        log::info!("PNG-Export deaktiviert, Projekt #{} nur gespeichert", id);
        return Ok(());
    }
    let dir = state.options.resolve_export_dir(&AppOptions::app_dir());
    let path = use_cases::export::export_session_png(state, id, &dir)
        .with_context(|| format!("PNG-Export für Projekt #{id} fehlgeschlagen"))?;
    state.ui.last_export_path = Some(path);
    Ok(())
}

/// Öffnet die Projektliste mit frisch geladenen Projekten.
pub fn open_dialog(state: &mut AppState, store: &dyn ProjectStore) {
    use_cases::projects::refresh_list(state, store);
    state.ui.projects_dialog.visible = true;
}

/// Schließt die Projektliste.
pub fn close_dialog(state: &mut AppState) {
    state.ui.projects_dialog.visible = false;
}

/// Lädt ein Projekt in die Sitzung.
pub fn load(state: &mut AppState, store: &dyn ProjectStore, id: u64) {
    use_cases::projects::load(state, store, id);
}

/// Löscht ein Projekt.
pub fn delete(state: &mut AppState, store: &mut dyn ProjectStore, id: u64) -> anyhow::Result<()> {
    use_cases::projects::delete(state, store, id)
}
