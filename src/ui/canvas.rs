//! Zeichenfläche: Szene anzeigen und Klicks in Canvas-Pixeln melden.

use crate::app::{AppIntent, AppState};
use crate::render::{build_draw_list, paint_draw_list, RenderScene};
use glam::DVec2;

/// Rendert das Canvas im zentralen Bereich und gibt erzeugte Events zurück.
///
/// Größere Canvas-Einstellungen als das Fenster werden scrollbar.
pub fn render_canvas(ctx: &egui::Context, state: &AppState, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_gray(245)))
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let size = egui::Vec2::splat(scene.canvas.size_px() as f32);
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

                    let painter = ui.painter_at(rect);
                    painter.rect_filled(rect, 8.0, egui::Color32::WHITE);
                    paint_draw_list(&painter, rect.min, &build_draw_list(scene));

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let local = pos - rect.min;
                            events.push(AppIntent::CanvasClicked {
                                pos_px: DVec2::new(f64::from(local.x), f64::from(local.y)),
                            });
                        }
                    }

                    let cursor = if state.session.center_pick.is_some() {
                        egui::CursorIcon::Crosshair
                    } else {
                        egui::CursorIcon::PointingHand
                    };
                    response.on_hover_cursor(cursor);
                });
        });

    events
}
