//! Optionen-Dialog für Farben, Größen, Editor und Export.

use crate::app::{AppIntent, AppState};
use transform_lab_engine::CanvasSettings;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Colors", |ui| {
                        changed |= color_edit(ui, "Original:", &mut opts.original_color);
                        changed |= color_edit(ui, "Image:", &mut opts.transformed_color);
                        changed |= color_edit(ui, "Grid:", &mut opts.grid_color);
                        changed |= color_edit(ui, "Axes:", &mut opts.axis_color);
                        changed |= color_edit(ui, "Axis Labels:", &mut opts.tick_label_color);
                        changed |= color_edit(ui, "Reflection Line:", &mut opts.reflection_line_color);
                        changed |= color_edit(ui, "Rotation Center:", &mut opts.rotation_center_color);
                        changed |=
                            color_edit(ui, "Enlargement Center:", &mut opts.enlargement_center_color);
                    });

                    // ── Formen ──────────────────────────────────────
                    ui.collapsing("Shapes", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Fill Opacity:");
                            changed |= ui
                                .add(egui::Slider::new(&mut opts.fill_alpha, 0.0..=1.0))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Point Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius_px)
                                        .range(2.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Line Width (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.line_width_px)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.show_coordinates, "Show Point Coordinates")
                            .changed();
                    });

                    // ── Editor ──────────────────────────────────────
                    ui.collapsing("Editor", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Close Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.close_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Delete Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.delete_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Default Grid Range:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.default_canvas.range).range(
                                    CanvasSettings::RANGE_MIN..=CanvasSettings::RANGE_MAX,
                                ))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Default Canvas Size (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.default_canvas.zoom)
                                        .range(CanvasSettings::ZOOM_MIN..=CanvasSettings::ZOOM_MAX)
                                        .speed(f64::from(CanvasSettings::ZOOM_STEP)),
                                )
                                .changed();
                        });
                    });

                    // ── Export ──────────────────────────────────────
                    ui.collapsing("Export", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.export_on_save, "Export PNG on Save")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Folder:");
                            ui.monospace(opts.export_dir.display().to_string());
                            if ui.button("Choose...").clicked() {
                                events.push(AppIntent::ExportDirSelectionRequested);
                            }
                        });
                        ui.horizontal(|ui| {
                            ui.label("Margin (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.export_padding_px)
                                        .range(0..=200),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|v| f32::from(v) / 255.0);
            changed = true;
        }
    });
    changed
}
