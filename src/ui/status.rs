//! Status-Bar am unteren Bildschirmrand.

use crate::app::{status_text, AppState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let text = status_text(state);
            if state.ui.status_message.is_some() {
                ui.label(egui::RichText::new(text).strong());
            } else {
                ui.label(text);
            }

            ui.separator();
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();
            ui.label(format!(
                "Grid: ±{} | Canvas: {} px",
                state.session.canvas.range, state.session.canvas.zoom
            ));

            // Letzter Export (rechts)
            if let Some(path) = &state.ui.last_export_path {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Export: {}", path.display()));
                });
            }
        });
    });
}
