use crate::app::{AppIntent, UiState};
use crate::render::{paint_draw_list, thumbnail_draw_list, THUMBNAIL_SIZE};
use transform_lab_engine::Project;

/// Zeigt die Projektliste (neueste zuerst) und gibt erzeugte Events zurück.
pub fn show_projects_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let dialog = &ui_state.projects_dialog;

    if !dialog.visible {
        return events;
    }

    let mut open = true;
    egui::Window::new("My Projects")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Select a project to continue your work.");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Back").clicked() {
                        events.push(AppIntent::ProjectsDialogClosed);
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    let projects = dialog.projects.sorted_newest_first();
                    if projects.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.weak("No saved projects found.");
                            ui.weak("Create one from the main screen!");
                        });
                    }
                    for project in projects {
                        project_row(ui, project, &mut events);
                        ui.separator();
                    }
                });
        });

    if !open {
        events.push(AppIntent::ProjectsDialogClosed);
    }

    events
}

/// Eine Zeile: Vorschau, Titel/Beschreibung/Datum, Load/Delete.
fn project_row(ui: &mut egui::Ui, project: &Project, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        let size = egui::Vec2::splat(THUMBNAIL_SIZE as f32);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, egui::Color32::WHITE);
        painter.rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(220)),
            egui::StrokeKind::Inside,
        );
        paint_draw_list(&painter, rect.min, &thumbnail_draw_list(project));

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(project.title()).strong().size(16.0));
            ui.label(project.description());
            ui.small(&project.date);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !project.is_empty_project() && ui.button("Delete").clicked() {
                events.push(AppIntent::DeleteProjectRequested { id: project.id });
            }
            if ui.button("Load").clicked() {
                events.push(AppIntent::LoadProjectRequested { id: project.id });
            }
        });
    });
}
