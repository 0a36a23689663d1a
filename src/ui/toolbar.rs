//! Toolbar für Modus-Auswahl und Projekt-Aktionen.

use crate::app::{AppIntent, AppState};
use transform_lab_engine::TransformMode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.session.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            ui.separator();

            for mode in TransformMode::ALL {
                if ui
                    .add(egui::Button::new(mode.title()).selected(active == mode))
                    .clicked()
                    && active != mode
                {
                    events.push(AppIntent::ModeSelected { mode });
                }
            }

            ui.separator();

            if ui.button("💾 Save & Export").clicked() {
                events.push(AppIntent::SaveProjectRequested);
            }
            if ui.button("📂 My Projects").clicked() {
                events.push(AppIntent::ProjectsDialogRequested);
            }
            if ui
                .add(
                    egui::Button::new("Show Coordinate Mapping")
                        .selected(state.ui.show_coordinate_table),
                )
                .clicked()
            {
                events.push(if state.ui.show_coordinate_table {
                    AppIntent::CoordinateTableClosed
                } else {
                    AppIntent::CoordinateTableRequested
                });
            }
        });
    });

    events
}
