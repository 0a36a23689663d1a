use glam::DVec2;
use transform_lab::{
    AppController, AppIntent, AppState, CanvasSettings, Point, Project, ProjectCollection, Shape,
    TransformMode, TransformSettings, TransformSpec,
};
use transform_lab_engine::{Enlargement, MemoryStore, ProjectStore, EMPTY_PROJECT_ID};

fn controller_with_store() -> (AppController, MemoryStore) {
    let store = MemoryStore::new();
    let controller = AppController::with_store(Box::new(store.clone()));
    (controller, store)
}

fn state_without_export() -> AppState {
    let mut state = AppState::new();
    state.options.export_on_save = false;
    state
}

fn draw_square(controller: &mut AppController, state: &mut AppState) {
    for (x, y) in [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0), (1.0, 1.0)] {
        let pos_px: DVec2 = state.session.canvas.to_px(Point::new(x, y));
        controller
            .handle_intent(state, AppIntent::CanvasClicked { pos_px })
            .expect("CanvasClicked sollte durchlaufen");
    }
}

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_store_starts_with_empty_project() {
    let (_controller, store) = controller_with_store();

    let projects = store.load_all();
    assert_eq!(projects.len(), 1);
    assert!(projects.get(EMPTY_PROJECT_ID).is_some());
}

#[test]
fn test_saving_empty_shape_only_sets_status() {
    let (mut controller, store) = controller_with_store();
    let mut state = state_without_export();

    handle(&mut controller, &mut state, AppIntent::SaveProjectRequested);

    assert_eq!(store.load_all().len(), 1);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Cannot save an empty shape!")
    );
}

#[test]
fn test_save_then_load_restores_session() {
    let (mut controller, store) = controller_with_store();
    let mut state = state_without_export();
    draw_square(&mut controller, &mut state);
    handle(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: TransformMode::Enlargement,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::TransformParamsChanged {
            spec: TransformSpec::Enlargement(Enlargement {
                scale: 2.0,
                center: Some(Point::new(1.0, 1.0)),
            }),
        },
    );

    handle(&mut controller, &mut state, AppIntent::SaveProjectRequested);
    let id = state
        .ui
        .last_saved_project
        .expect("Projekt sollte gespeichert sein");
    assert_eq!(state.ui.status_message.as_deref(), Some("Project saved!"));
    assert_eq!(store.load_all().len(), 2);

    handle(&mut controller, &mut state, AppIntent::ClearCanvasRequested);
    handle(&mut controller, &mut state, AppIntent::LoadProjectRequested { id });

    assert_eq!(state.session.mode, TransformMode::Enlargement);
    assert_eq!(state.point_count(), 4);
    assert!(state.session.shape.closed);
    assert_eq!(state.session.settings.enlargement.scale, 2.0);
    assert_eq!(
        state.ui.status_message,
        Some(format!("Project #{id} loaded!"))
    );
}

#[test]
fn test_projects_dialog_lists_newest_first_and_delete_keeps_empty_project() {
    let (mut controller, _store) = controller_with_store();
    let mut state = state_without_export();
    draw_square(&mut controller, &mut state);
    handle(&mut controller, &mut state, AppIntent::SaveProjectRequested);
    let id = state.ui.last_saved_project.expect("Projekt gespeichert");

    handle(&mut controller, &mut state, AppIntent::ProjectsDialogRequested);
    assert!(state.ui.projects_dialog.visible);
    let listed: Vec<u64> = state
        .ui
        .projects_dialog
        .projects
        .sorted_newest_first()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, vec![id, EMPTY_PROJECT_ID]);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteProjectRequested { id: EMPTY_PROJECT_ID },
    );
    handle(&mut controller, &mut state, AppIntent::DeleteProjectRequested { id });

    assert_eq!(state.ui.projects_dialog.projects.len(), 1);
    assert!(state
        .ui
        .projects_dialog
        .projects
        .get(EMPTY_PROJECT_ID)
        .is_some());
}

#[test]
fn test_loading_empty_project_resets_session() {
    let (mut controller, _store) = controller_with_store();
    let mut state = state_without_export();
    draw_square(&mut controller, &mut state);

    handle(
        &mut controller,
        &mut state,
        AppIntent::LoadProjectRequested { id: EMPTY_PROJECT_ID },
    );

    assert_eq!(state.point_count(), 0);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Empty project loaded!")
    );
}

#[test]
fn test_save_exports_png_into_export_dir() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, _store) = controller_with_store();
    let mut state = AppState::new();
    state.options.export_dir = dir.path().to_path_buf();
    draw_square(&mut controller, &mut state);

    handle(&mut controller, &mut state, AppIntent::SaveProjectRequested);

    let id = state.ui.last_saved_project.expect("Projekt gespeichert");
    let path = state
        .ui
        .last_export_path
        .clone()
        .expect("PNG sollte exportiert sein");
    assert_eq!(path, dir.path().join(format!("translation-shape-{id}.png")));
    assert!(path.is_file());
}

#[test]
fn test_loading_out_of_range_record_is_clamped() {
    let shape = Shape::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0)], false);
    let mut settings = TransformSettings::default();
    settings.translation.dx = 1.0e6;
    settings.rotation.angle = 720.0;
    let mut projects = ProjectCollection::new();
    projects.insert(Project::snapshot(
        7,
        "01/01/2024".to_string(),
        &shape,
        TransformMode::Translation,
        &settings,
        CanvasSettings::new(200_000, 610),
    ));
    let store = MemoryStore::with_projects(projects);
    let mut controller = AppController::with_store(Box::new(store));
    let mut state = state_without_export();

    handle(
        &mut controller,
        &mut state,
        AppIntent::LoadProjectRequested { id: 7 },
    );

    assert_eq!(state.session.canvas, CanvasSettings::new(50, 600));
    assert_eq!(state.session.settings.translation.dx, 90.0);
    assert_eq!(state.session.settings.rotation.angle, 360.0);
    assert_eq!(state.session.shape.points.len(), 2);
}
