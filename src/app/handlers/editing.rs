//! Handler für den Form-Editor (Punkte, Schließen, Zentrumswahl).

use crate::app::state::CenterTarget;
use crate::app::use_cases;
use crate::app::AppState;
use transform_lab_engine::Point;

/// Hängt einen Punkt an die offene Form an.
pub fn add_point(state: &mut AppState, point: Point) {
    use_cases::editing::add_point(state, point);
}

/// Entfernt einen Punkt der offenen Form.
pub fn delete_point(state: &mut AppState, index: usize) {
    use_cases::editing::delete_point(state, index);
}

/// Schließt die Form.
pub fn close_shape(state: &mut AppState) {
    use_cases::editing::close_shape(state);
}

/// Setzt das Zentrum und beendet die Zentrumswahl.
pub fn set_center(state: &mut AppState, target: CenterTarget, center: Point) {
    use_cases::editing::set_center(state, target, center);
}

/// Schaltet die Zentrumswahl um.
pub fn toggle_center_pick(state: &mut AppState, target: CenterTarget) {
    use_cases::editing::toggle_center_pick(state, target);
}

/// Leert das Canvas.
pub fn clear_canvas(state: &mut AppState) {
    use_cases::editing::clear_canvas(state);
}
