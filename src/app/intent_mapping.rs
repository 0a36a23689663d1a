//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::CenterTarget;
use super::{AppCommand, AppIntent, AppState};
use transform_lab_engine::{resolve_click, ClickAction};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos_px } => {
            let session = &state.session;

            // Laufende Zentrumswahl hat Vorrang vor dem Form-Editor
            if let Some(target) = session.center_pick {
                if target.mode() == session.mode {
                    return vec![AppCommand::SetCenter {
                        target,
                        center: session.canvas.snap(pos_px),
                    }];
                }
            }

            let tolerances = state.options.tolerances();
            match resolve_click(&session.shape, pos_px, &session.canvas, &tolerances) {
                ClickAction::CloseShape => vec![AppCommand::CloseShape],
                ClickAction::DeletePoint(index) => vec![AppCommand::DeletePoint { index }],
                ClickAction::Place(point) if !session.shape.closed => {
                    vec![AppCommand::AddPoint { point }]
                }
                ClickAction::Place(_) => vec![],
            }
        }
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::TransformParamsChanged { spec } => {
            // Schieberegler-Grenzen hängen vom Gitterbereich ab
            let mut settings = state.session.settings;
            settings.set_spec(spec);
            let clamped = settings.clamped(state.session.canvas.range);
            vec![AppCommand::SetTransformParams {
                spec: clamped.spec_for(spec.mode()),
            }]
        }
        AppIntent::CenterPickToggled { target } => {
            if CenterTarget::for_mode(state.session.mode) == Some(target) {
                vec![AppCommand::ToggleCenterPick { target }]
            } else {
                vec![]
            }
        }
        AppIntent::ResetValuesRequested => vec![AppCommand::ResetActiveMode],
        AppIntent::ClearCanvasRequested => vec![AppCommand::ClearCanvas],
        AppIntent::CanvasSettingsChanged { canvas } => vec![AppCommand::SetCanvasSettings {
            canvas: canvas.clamped(),
        }],
        AppIntent::SaveProjectRequested => {
            vec![AppCommand::SaveProject, AppCommand::ExportSavedProject]
        }
        AppIntent::ProjectsDialogRequested => vec![AppCommand::OpenProjectsDialog],
        AppIntent::ProjectsDialogClosed => vec![AppCommand::CloseProjectsDialog],
        AppIntent::LoadProjectRequested { id } => vec![AppCommand::LoadProject { id }],
        AppIntent::DeleteProjectRequested { id } => vec![AppCommand::DeleteProject { id }],
        AppIntent::CoordinateTableRequested => vec![AppCommand::OpenCoordinateTable],
        AppIntent::CoordinateTableClosed => vec![AppCommand::CloseCoordinateTable],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExportDirSelectionRequested => vec![AppCommand::RequestExportDirDialog],
        AppIntent::ExportDirSelected { path } => vec![AppCommand::SetExportDir { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
