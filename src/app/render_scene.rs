//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::CenterTarget;
use crate::app::AppState;
use crate::shared::{CenterMarker, RenderScene};
use transform_lab_engine::{ReflectionAxis, TransformSpec};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die transformierte Form erscheint nur, wenn die aktive Transformation
/// wirksam ist und Punkte vorhanden sind.
pub fn build(state: &AppState) -> RenderScene {
    let session = &state.session;
    let options = &state.options;
    let spec = session.active_spec();
    let effective = spec.is_effective();

    let transformed = (effective && !session.shape.is_empty())
        .then(|| session.shape.transformed(&spec));

    let reflection_line = match spec {
        TransformSpec::Reflection(r) if r.axis == ReflectionAxis::Custom => Some(r),
        _ => None,
    };

    let center_marker = if effective {
        CenterTarget::for_mode(session.mode).and_then(|target| {
            let color = match target {
                CenterTarget::Rotation => options.rotation_center_color,
                CenterTarget::Enlargement => options.enlargement_center_color,
            };
            session
                .center(target)
                .map(|point| CenterMarker { point, color })
        })
    } else {
        None
    };

    RenderScene {
        canvas: session.canvas,
        original: session.shape.clone(),
        transformed,
        reflection_line,
        center_marker,
        options: options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use std::sync::Arc;
    use transform_lab_engine::{Point, ReflectionAxis, Shape, TransformMode};

    fn state_with_square() -> AppState {
        let mut state = AppState::new();
        state.session.shape = Arc::new(Shape::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ],
            true,
        ));
        state
    }

    #[test]
    fn identity_translation_shows_only_original() {
        let state = state_with_square();
        let scene = build(&state);
        assert!(!scene.has_transformed());
        assert!(scene.reflection_line.is_none());
        assert_eq!(scene.original.len(), 4);
    }

    #[test]
    fn reflection_is_always_shown() {
        let mut state = state_with_square();
        state.session.mode = TransformMode::Reflection;
        let scene = build(&state);
        let transformed = scene.transformed.expect("Spiegelung ist immer wirksam");
        assert_eq!(transformed.points[2], Point::new(2.0, -2.0));
        assert!(transformed.closed);
        assert!(scene.reflection_line.is_none(), "nur für y = mx + c");
    }

    #[test]
    fn custom_reflection_adds_line() {
        let mut state = state_with_square();
        state.session.mode = TransformMode::Reflection;
        state.session.settings.reflection.axis = ReflectionAxis::Custom;
        let scene = build(&state);
        assert!(scene.reflection_line.is_some());
    }

    #[test]
    fn center_marker_needs_effective_rotation_and_center() {
        let mut state = state_with_square();
        state.session.mode = TransformMode::Rotation;
        state.session.settings.rotation.center = Some(Point::new(1.0, 1.0));
        assert!(build(&state).center_marker.is_none(), "Winkel 0 zeigt kein Zentrum");

        state.session.settings.rotation.angle = 90.0;
        let marker = build(&state).center_marker.expect("Zentrum sichtbar");
        assert_eq!(marker.point, Point::new(1.0, 1.0));
        assert_eq!(marker.color, state.options.rotation_center_color);
    }

    #[test]
    fn empty_shape_has_no_transformed_shape() {
        let mut state = AppState::new();
        state.session.mode = TransformMode::Reflection;
        assert!(build(&state).transformed.is_none());
    }
}
