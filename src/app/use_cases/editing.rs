//! Use-Cases des Form-Editors.
//!
//! Jede Änderung ersetzt `session.shape` durch einen neuen Wert.

use crate::app::state::CenterTarget;
use crate::app::AppState;
use std::sync::Arc;
use transform_lab_engine::{point_label, Point, Shape};

/// Hängt einen Punkt an, solange die Form offen ist.
pub fn add_point(state: &mut AppState, point: Point) {
    let shape = &state.session.shape;
    if shape.closed {
        log::debug!("Form ist geschlossen, Punkt {} ignoriert", point);
        return;
    }
    let label = point_label(shape.len());
    state.session.shape = Arc::new(shape.with_point(point));
    log::info!("Punkt {} gesetzt: {}", label, point);
}

/// Entfernt den Punkt mit Index `index` aus der offenen Form.
pub fn delete_point(state: &mut AppState, index: usize) {
    let shape = &state.session.shape;
    if shape.closed || index >= shape.len() {
        log::warn!(
            "Punkt {} kann nicht gelöscht werden ({} Punkte, geschlossen: {})",
            index,
            shape.len(),
            shape.closed
        );
        return;
    }
    state.session.shape = Arc::new(shape.without_point(index));
    log::info!("Punkt {} gelöscht", point_label(index));
}

/// Schließt die Form (ab drei Punkten).
pub fn close_shape(state: &mut AppState) {
    let shape = &state.session.shape;
    if !shape.can_close() {
        log::warn!("Form mit {} Punkten kann nicht geschlossen werden", shape.len());
        return;
    }
    state.session.shape = Arc::new(shape.closed_copy());
    log::info!("Form mit {} Punkten geschlossen", state.session.shape.len());
}

/// Setzt Dreh- oder Streckzentrum und beendet die Zentrumswahl.
pub fn set_center(state: &mut AppState, target: CenterTarget, center: Point) {
    let settings = &mut state.session.settings;
    match target {
        CenterTarget::Rotation => settings.rotation.center = Some(center),
        CenterTarget::Enlargement => settings.enlargement.center = Some(center),
    }
    state.session.center_pick = None;
    log::info!("{:?}-Zentrum gesetzt: {}", target, center);
}

/// Schaltet die Zentrumswahl für `target` an oder aus.
pub fn toggle_center_pick(state: &mut AppState, target: CenterTarget) {
    let session = &mut state.session;
    session.center_pick = if session.is_picking(target) {
        None
    } else {
        Some(target)
    };
}

/// Entfernt alle Punkte, öffnet die Form und setzt den aktiven Modus zurück.
pub fn clear_canvas(state: &mut AppState) {
    state.session.shape = Arc::new(Shape::default());
    super::transform::reset_active_mode(state);
    log::info!("Canvas geleert");
}
