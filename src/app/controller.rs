//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;
use transform_lab_engine::{MemoryStore, ProjectStore};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält den Projektspeicher; alle Projekt-Commands laufen über ihn.
pub struct AppController {
    store: Box<dyn ProjectStore>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller mit flüchtigem Projektspeicher.
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Erstellt einen Controller mit dem gegebenen Projektspeicher.
    ///
    /// Legt dabei das leere Projekt an, falls es noch fehlt.
    pub fn with_store(mut store: Box<dyn ProjectStore>) -> Self {
        super::use_cases::projects::ensure_empty_project(store.as_mut());
        Self { store }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        if command.clears_status_message() {
            state.ui.status_message = None;
        }
        use super::handlers;

        match command {
            // === Form-Editor ===
            AppCommand::AddPoint { point } => handlers::editing::add_point(state, point),
            AppCommand::DeletePoint { index } => handlers::editing::delete_point(state, index),
            AppCommand::CloseShape => handlers::editing::close_shape(state),
            AppCommand::SetCenter { target, center } => {
                handlers::editing::set_center(state, target, center)
            }
            AppCommand::ToggleCenterPick { target } => {
                handlers::editing::toggle_center_pick(state, target)
            }
            AppCommand::ClearCanvas => handlers::editing::clear_canvas(state),

            // === Transformation & Canvas ===
            AppCommand::SetMode { mode } => handlers::transform::set_mode(state, mode),
            AppCommand::SetTransformParams { spec } => handlers::transform::set_params(state, spec),
            AppCommand::ResetActiveMode => handlers::transform::reset_active_mode(state),
            AppCommand::SetCanvasSettings { canvas } => {
                handlers::transform::set_canvas_settings(state, canvas)
            }

            // === Projekte & Export ===
            AppCommand::SaveProject => handlers::projects::save(state, self.store.as_mut())?,
            AppCommand::ExportSavedProject => handlers::projects::export_saved(state)?,
            AppCommand::OpenProjectsDialog => {
                handlers::projects::open_dialog(state, self.store.as_ref())
            }
            AppCommand::CloseProjectsDialog => handlers::projects::close_dialog(state),
            AppCommand::LoadProject { id } => {
                handlers::projects::load(state, self.store.as_ref(), id)
            }
            AppCommand::DeleteProject { id } => {
                handlers::projects::delete(state, self.store.as_mut(), id)?
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenCoordinateTable => handlers::dialog::open_coordinate_table(state),
            AppCommand::CloseCoordinateTable => handlers::dialog::close_coordinate_table(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExportDirDialog => {
                handlers::dialog::request_export_dir_dialog(state)
            }
            AppCommand::SetExportDir { path } => handlers::dialog::set_export_dir(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
