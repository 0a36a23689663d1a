//! Use-Cases für gespeicherte Projekte.
//!
//! Alle Zugriffe laufen über den injizierten `ProjectStore`; die Sitzung
//! selbst kennt keinen Speicher.

use crate::app::AppState;
use anyhow::Context;
use chrono::{DateTime, Local};
use std::sync::Arc;
use transform_lab_engine::{format_date, Project, ProjectStore};

/// Statusmeldung beim Versuch, eine leere Form zu speichern.
pub const MSG_EMPTY_SHAPE: &str = "Cannot save an empty shape!";
/// Statusmeldung nach erfolgreichem Speichern.
pub const MSG_SAVED: &str = "Project saved!";
/// Statusmeldung nach dem Laden des leeren Projekts.
pub const MSG_EMPTY_LOADED: &str = "Empty project loaded!";

/// Legt das leere Projekt im Speicher an, falls es fehlt.
pub fn ensure_empty_project(store: &mut dyn ProjectStore) {
    let mut projects = store.load_all();
    if projects.ensure_empty_project(format_date(Local::now())) {
        if let Err(e) = store.save_all(&projects) {
            log::warn!("Leeres Projekt konnte nicht angelegt werden: {}", e);
        }
    }
}

/// Speichert die aktuelle Sitzung mit Zeitstempel `now` als neues Projekt.
///
/// Eine leere Form wird nicht gespeichert, nur die Statusmeldung gesetzt.
pub fn save_current(
    state: &mut AppState,
    store: &mut dyn ProjectStore,
    now: DateTime<Local>,
) -> anyhow::Result<()> {
    state.ui.last_saved_project = None;

    let session = &state.session;
    if session.shape.is_empty() {
        log::warn!("Leere Form wird nicht gespeichert");
        state.ui.status_message = Some(MSG_EMPTY_SHAPE.to_string());
        return Ok(());
    }

    let date = format_date(now);
    let mut projects = store.load_all();
    projects.ensure_empty_project(date.clone());

    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let id = projects.next_free_id(millis);
    projects.insert(Project::snapshot(
        id,
        date,
        &session.shape,
        session.mode,
        &session.settings,
        session.canvas,
    ));
    store
        .save_all(&projects)
        .with_context(|| format!("Projekt #{id} konnte nicht gespeichert werden"))?;

    log::info!(
        "Projekt #{} gespeichert ({}, {} Punkte)",
        id,
        session.mode.title(),
        session.shape.len()
    );
    state.ui.last_saved_project = Some(id);
    state.ui.status_message = Some(MSG_SAVED.to_string());
    if state.ui.projects_dialog.visible {
        state.ui.projects_dialog.projects = projects;
    }
    Ok(())
}

/// Lädt die Projektliste neu aus dem Speicher.
pub fn refresh_list(state: &mut AppState, store: &dyn ProjectStore) {
    state.ui.projects_dialog.projects = store.load_all();
}

/// Stellt ein gespeichertes Projekt vollständig wieder her.
///
/// Canvas und Parameter werden auf die Regler-Bereiche begrenzt.
/// Bricht laufende Zentrumswahlen ab und schließt die Projektliste.
pub fn load(state: &mut AppState, store: &dyn ProjectStore, id: u64) {
    let projects = store.load_all();
    let Some(project) = projects.get(id) else {
        log::warn!("Projekt #{} nicht gefunden", id);
        return;
    };

    let session = &mut state.session;
    session.shape = Arc::new(project.shape());
    session.mode = project.mode;
    // Fremde oder ältere Datensätze können außerhalb der Regler-Bereiche liegen
    session.canvas = project.canvas_settings.clamped();
    session.settings = project.settings().clamped(session.canvas.range);
    session.center_pick = None;

    state.ui.projects_dialog.visible = false;
    state.ui.status_message = Some(if project.is_empty_project() {
        MSG_EMPTY_LOADED.to_string()
    } else {
        format!("Project #{id} loaded!")
    });
    log::info!("Projekt #{} geladen", id);
}

/// Löscht ein Projekt; das leere Projekt bleibt erhalten.
pub fn delete(state: &mut AppState, store: &mut dyn ProjectStore, id: u64) -> anyhow::Result<()> {
    let mut projects = store.load_all();
    if projects.remove(id).is_none() {
        log::warn!("Projekt #{} kann nicht gelöscht werden", id);
        state.ui.projects_dialog.projects = projects;
        return Ok(());
    }
    store
        .save_all(&projects)
        .with_context(|| format!("Projekt #{id} konnte nicht gelöscht werden"))?;
    log::info!("Projekt #{} gelöscht", id);
    state.ui.projects_dialog.projects = projects;
    Ok(())
}
