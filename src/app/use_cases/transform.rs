//! Use-Cases für Modus, Parameter und Canvas-Einstellungen.

use crate::app::state::CenterTarget;
use crate::app::AppState;
use transform_lab_engine::{CanvasSettings, TransformMode, TransformSpec};

/// Wechselt den Modus, setzt dessen Parameter zurück und bricht Zentrumswahlen ab.
pub fn set_mode(state: &mut AppState, mode: TransformMode) {
    let session = &mut state.session;
    session.mode = mode;
    session.settings.reset(mode);
    session.center_pick = None;
    log::info!("Modus: {}", mode.title());
}

/// Übernimmt einen (bereits geklemmten) Parameter-Satz.
pub fn set_params(state: &mut AppState, spec: TransformSpec) {
    state.session.settings.set_spec(spec);
}

/// Setzt die Parameter des aktiven Modus zurück und bricht dessen Zentrumswahl ab.
pub fn reset_active_mode(state: &mut AppState) {
    let session = &mut state.session;
    session.settings.reset(session.mode);
    if session.center_pick.map(CenterTarget::mode) == Some(session.mode) {
        session.center_pick = None;
    }
}

/// Übernimmt neue Canvas-Einstellungen.
///
/// Parameter werden an die Schieberegler-Grenzen des neuen Bereichs angepasst.
pub fn set_canvas_settings(state: &mut AppState, canvas: CanvasSettings) {
    let session = &mut state.session;
    session.canvas = canvas;
    session.settings = session.settings.clamped(canvas.range);
}

#[cfg(test)]
mod tests {
    use super::*;
    use transform_lab_engine::{ReflectionAxis, Translation};

    #[test]
    fn set_mode_resets_new_mode_and_cancels_pick() {
        let mut state = AppState::new();
        state.session.settings.reflection.axis = ReflectionAxis::Custom;
        state.session.settings.translation.dx = 3.0;
        state.session.center_pick = Some(CenterTarget::Rotation);

        set_mode(&mut state, TransformMode::Reflection);

        assert_eq!(state.session.mode, TransformMode::Reflection);
        assert_eq!(state.session.settings.reflection.axis, ReflectionAxis::X);
        assert_eq!(state.session.settings.translation.dx, 3.0);
        assert_eq!(state.session.center_pick, None);
    }

    #[test]
    fn reset_only_touches_active_mode() {
        let mut state = AppState::new();
        set_params(
            &mut state,
            TransformSpec::Translation(Translation { dx: 2.0, dy: 1.0 }),
        );
        state.session.settings.enlargement.scale = 3.0;

        reset_active_mode(&mut state);

        assert_eq!(state.session.settings.translation, Translation::default());
        assert_eq!(state.session.settings.enlargement.scale, 3.0);
    }

    #[test]
    fn smaller_range_clamps_reflection_line() {
        let mut state = AppState::new();
        state.session.settings.reflection.c = 18.0;

        set_canvas_settings(&mut state, CanvasSettings::new(10, 600));

        assert_eq!(state.session.settings.reflection.c, 10.0);
    }
}
