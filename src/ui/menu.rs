//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save & Export").clicked() {
                    events.push(AppIntent::SaveProjectRequested);
                    ui.close();
                }
                if ui.button("My Projects...").clicked() {
                    events.push(AppIntent::ProjectsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Export Folder...").clicked() {
                    events.push(AppIntent::ExportDirSelectionRequested);
                    ui.close();
                }
                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Show Coordinate Mapping").clicked() {
                    events.push(AppIntent::CoordinateTableRequested);
                    ui.close();
                }

                let mut show_coordinates = state.options.show_coordinates;
                if ui
                    .checkbox(&mut show_coordinates, "Show Point Coordinates")
                    .changed()
                {
                    let mut options = state.options.clone();
                    options.show_coordinates = show_coordinates;
                    events.push(AppIntent::OptionsChanged { options });
                }
            });
        });
    });

    events
}
