//! Handler für Modus, Parameter und Canvas-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use transform_lab_engine::{CanvasSettings, TransformMode, TransformSpec};

/// Wechselt den Transformationsmodus.
pub fn set_mode(state: &mut AppState, mode: TransformMode) {
    use_cases::transform::set_mode(state, mode);
}

/// Übernimmt einen Parameter-Satz.
pub fn set_params(state: &mut AppState, spec: TransformSpec) {
    use_cases::transform::set_params(state, spec);
}

/// Setzt den aktiven Modus zurück.
pub fn reset_active_mode(state: &mut AppState) {
    use_cases::transform::reset_active_mode(state);
}

/// Übernimmt Gitterbereich und Zoom.
pub fn set_canvas_settings(state: &mut AppState, canvas: CanvasSettings) {
    use_cases::transform::set_canvas_settings(state, canvas);
}
