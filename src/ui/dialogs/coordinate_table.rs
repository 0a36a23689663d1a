use crate::app::{coordinate_rows, AppIntent, AppState};
use egui_extras::{Column, TableBuilder};

/// Zeigt die Koordinaten-Tabelle (Original → transformiert) als Fenster.
pub fn show_coordinate_table(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_coordinate_table {
        return events;
    }

    let rows = coordinate_rows(&state.session);
    let highlight = crate::render::to_color32(state.options.transformed_color);

    let mut open = true;
    egui::Window::new("Coordinate Mapping")
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            if rows.is_empty() {
                ui.weak("Plot points on the grid to see coordinates.");
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(50.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Point");
                    });
                    header.col(|ui| {
                        ui.strong("Original (x, y)");
                    });
                    header.col(|ui| {
                        ui.strong("Transformed (x', y')");
                    });
                })
                .body(|mut body| {
                    for row in &rows {
                        body.row(18.0, |mut table_row| {
                            table_row.col(|ui| {
                                ui.label(&row.label);
                            });
                            table_row.col(|ui| {
                                ui.monospace(row.original_text());
                            });
                            table_row.col(|ui| {
                                let text = egui::RichText::new(row.transformed_text()).monospace();
                                if row.changed() {
                                    ui.label(text.color(highlight).strong());
                                } else {
                                    ui.label(text);
                                }
                            });
                        });
                    }
                });
        });

    if !open {
        events.push(AppIntent::CoordinateTableClosed);
    }

    events
}
