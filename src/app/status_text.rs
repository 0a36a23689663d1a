//! Hinweistext der Statuszeile.
//!
//! Eine vorübergehende Meldung (`ui.status_message`) hat Vorrang; sonst wird
//! der Text aus der Sitzung abgeleitet.

use super::state::CenterTarget;
use super::AppState;
use transform_lab_engine::{ReflectionAxis, TransformMode};

/// Liefert den anzuzeigenden Statustext.
pub fn status_text(state: &AppState) -> String {
    if let Some(message) = &state.ui.status_message {
        return message.clone();
    }

    let session = &state.session;
    let shape = &session.shape;
    if shape.is_empty() {
        return "Click anywhere on the grid to plot your first point.".to_string();
    }
    if !shape.closed {
        return format!(
            "Plotting point {}... Click near the first point to close the shape.",
            shape.len() + 1
        );
    }

    let reflection = &session.settings.reflection;
    match session.mode {
        TransformMode::Rotation if session.is_picking(CenterTarget::Rotation) => {
            "Click anywhere on the canvas to set the center of rotation.".to_string()
        }
        TransformMode::Enlargement if session.is_picking(CenterTarget::Enlargement) => {
            "Click anywhere on the canvas to set the center of enlargement.".to_string()
        }
        TransformMode::Reflection if reflection.axis == ReflectionAxis::Custom => format!(
            "Adjust 'm' and 'c' sliders to reflect across y={:.0}x+{:.0}.",
            reflection.m, reflection.c
        ),
        _ => "Shape closed! Use the controls above to transform it.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use transform_lab_engine::{Point, Shape};

    fn closed_triangle_state() -> AppState {
        let mut state = AppState::new();
        state.session.shape = Arc::new(Shape::new(
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)],
            true,
        ));
        state
    }

    #[test]
    fn empty_session_asks_for_first_point() {
        let state = AppState::new();
        assert_eq!(
            status_text(&state),
            "Click anywhere on the grid to plot your first point."
        );
    }

    #[test]
    fn open_shape_shows_next_point_number() {
        let mut state = AppState::new();
        state.session.shape = Arc::new(Shape::new(vec![Point::ORIGIN, Point::new(1.0, 0.0)], false));
        assert_eq!(
            status_text(&state),
            "Plotting point 3... Click near the first point to close the shape."
        );
    }

    #[test]
    fn rotation_pick_hint_needs_matching_mode() {
        let mut state = closed_triangle_state();
        state.session.mode = TransformMode::Rotation;
        state.session.center_pick = Some(CenterTarget::Rotation);
        assert_eq!(
            status_text(&state),
            "Click anywhere on the canvas to set the center of rotation."
        );
    }

    #[test]
    fn custom_reflection_names_the_line() {
        let mut state = closed_triangle_state();
        state.session.mode = TransformMode::Reflection;
        state.session.settings.reflection.axis = ReflectionAxis::Custom;
        state.session.settings.reflection.m = -2.0;
        state.session.settings.reflection.c = 3.0;
        assert_eq!(
            status_text(&state),
            "Adjust 'm' and 'c' sliders to reflect across y=-2x+3."
        );
    }

    #[test]
    fn transient_message_wins() {
        let mut state = closed_triangle_state();
        state.ui.status_message = Some("Project saved!".to_string());
        assert_eq!(status_text(&state), "Project saved!");
    }

    #[test]
    fn closed_shape_without_special_state() {
        let state = closed_triangle_state();
        assert_eq!(
            status_text(&state),
            "Shape closed! Use the controls above to transform it."
        );
    }
}
