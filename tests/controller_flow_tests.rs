use glam::DVec2;
use transform_lab::{
    AppCommand, AppController, AppIntent, AppState, CenterTarget, Point, TransformMode,
    TransformSpec,
};
use transform_lab_engine::{Rotation, Translation};

/// Klickt auf einen Gitterpunkt (in Pixel umgerechnet).
fn click(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    let pos_px: DVec2 = state.session.canvas.to_px(Point::new(x, y));
    controller
        .handle_intent(state, AppIntent::CanvasClicked { pos_px })
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");
}

fn draw_closed_triangle(controller: &mut AppController, state: &mut AppState) {
    click(controller, state, 0.0, 0.0);
    click(controller, state, 4.0, 0.0);
    click(controller, state, 0.0, 3.0);
    click(controller, state, 0.0, 0.0);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_clicks_build_and_close_triangle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_closed_triangle(&mut controller, &mut state);

    assert_eq!(state.point_count(), 3);
    assert!(state.session.shape.closed);
    assert_eq!(
        state.session.shape.points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0)
        ]
    );

    // Weitere Klicks auf freie Stellen ändern die geschlossene Form nicht
    click(&mut controller, &mut state, 7.0, 7.0);
    assert_eq!(state.point_count(), 3);
}

#[test]
fn test_click_on_existing_point_deletes_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 5.0);

    click(&mut controller, &mut state, 2.0, 5.0);

    assert_eq!(state.session.shape.points, vec![Point::new(1.0, 1.0)]);
}

#[test]
fn test_translation_moves_coordinate_rows() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_closed_triangle(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TransformParamsChanged {
                spec: TransformSpec::Translation(Translation { dx: 2.0, dy: -1.0 }),
            },
        )
        .expect("Parameteränderung sollte durchlaufen");

    let rows = transform_lab::app::coordinate_rows(&state.session);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].label, "B");
    assert_eq!(rows[1].transformed, Point::new(6.0, -1.0));
    assert!(rows.iter().all(|r| r.changed()));

    let scene = controller.build_render_scene(&state);
    assert!(scene.has_transformed());
}

#[test]
fn test_rotation_center_pick_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_closed_triangle(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModeSelected {
                mode: TransformMode::Rotation,
            },
        )
        .expect("Moduswechsel sollte durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CenterPickToggled {
                target: CenterTarget::Rotation,
            },
        )
        .expect("Zentrumswahl sollte durchlaufen");
    assert!(state.session.is_picking(CenterTarget::Rotation));

    click(&mut controller, &mut state, 2.0, 2.0);

    assert!(!state.session.is_picking(CenterTarget::Rotation));
    assert_eq!(state.session.settings.rotation.center, Some(Point::new(2.0, 2.0)));
    // Der Klick hat keinen Punkt verändert
    assert_eq!(state.point_count(), 3);

    let spec = TransformSpec::Rotation(Rotation {
        angle: 90.0,
        ..state.session.settings.rotation
    });
    controller
        .handle_intent(&mut state, AppIntent::TransformParamsChanged { spec })
        .expect("Parameteränderung sollte durchlaufen");

    let scene = controller.build_render_scene(&state);
    let marker = scene.center_marker.expect("Zentrum sollte markiert sein");
    assert_eq!(marker.point, Point::new(2.0, 2.0));
}

#[test]
fn test_reset_values_restores_defaults_for_active_mode_only() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.session.settings.rotation.angle = 45.0;
    state.session.settings.translation.dx = 5.0;

    controller
        .handle_intent(&mut state, AppIntent::ResetValuesRequested)
        .expect("Reset sollte durchlaufen");

    assert_eq!(state.session.settings.translation.dx, 0.0);
    assert_eq!(state.session.settings.rotation.angle, 45.0);
}

#[test]
fn test_clear_canvas_removes_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_closed_triangle(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::ClearCanvasRequested)
        .expect("ClearCanvas sollte durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert!(!state.session.shape.closed);
}

#[test]
fn test_coordinate_table_toggle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CoordinateTableRequested)
        .expect("Tabelle öffnen sollte durchlaufen");
    assert!(state.ui.show_coordinate_table);

    controller
        .handle_intent(&mut state, AppIntent::CoordinateTableClosed)
        .expect("Tabelle schließen sollte durchlaufen");
    assert!(!state.ui.show_coordinate_table);
}
