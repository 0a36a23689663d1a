//! Koordinatengitter: Gitterlinien, Achsen, Achsenstriche und Beschriftung.

use crate::shared::AppOptions;
use glam::Vec2;
use transform_lab_engine::CanvasSettings;
use transform_lab_raster::{DrawList, TextAnchor};

/// Bis zu diesem Bereich wird jeder Achsenstrich beschriftet, darüber nur gerade Werte.
const DENSE_LABEL_RANGE: u32 = 15;
/// Minimale Länge eines Achsenstrichs in Pixeln.
const MIN_TICK_PX: f32 = 4.0;
/// Abstand zwischen Achsenstrich und Beschriftung.
const LABEL_GAP_PX: f32 = 4.0;

/// Schriftgröße der Achsenbeschriftung: wächst mit dem Zoom, mindestens 10 px.
pub(crate) fn tick_font_size(canvas: &CanvasSettings) -> f32 {
    (canvas.zoom / 60).max(10) as f32
}

/// Hängt Gitter und Achsen an die Zeichenliste an.
pub(crate) fn push_grid(list: &mut DrawList, canvas: &CanvasSettings, options: &AppOptions) {
    let size = canvas.size_px() as f32;
    let center = canvas.center_px().as_vec2();
    let unit = canvas.unit() as f32;
    let tick = MIN_TICK_PX.max(unit * 0.15);

    // Gitterlinien über die volle Canvasbreite
    for i in canvas.grid_values().filter(|&i| i != 0) {
        let x = center.x + i as f32 * unit;
        let y = center.y - i as f32 * unit;
        list.line(Vec2::new(x, 0.0), Vec2::new(x, size), 1.0, options.grid_color);
        list.line(Vec2::new(0.0, y), Vec2::new(size, y), 1.0, options.grid_color);
    }

    list.line(
        Vec2::new(0.0, center.y),
        Vec2::new(size, center.y),
        2.0,
        options.axis_color,
    );
    list.line(
        Vec2::new(center.x, 0.0),
        Vec2::new(center.x, size),
        2.0,
        options.axis_color,
    );

    let font = tick_font_size(canvas);
    let dense = canvas.range < DENSE_LABEL_RANGE;

    for i in canvas.grid_values().filter(|&i| i != 0) {
        let x = center.x + i as f32 * unit;
        let y = center.y - i as f32 * unit;
        list.line(
            Vec2::new(x, center.y - tick),
            Vec2::new(x, center.y + tick),
            2.0,
            options.axis_color,
        );
        list.line(
            Vec2::new(center.x - tick, y),
            Vec2::new(center.x + tick, y),
            2.0,
            options.axis_color,
        );

        if dense || i % 2 == 0 {
            list.bold_text(
                Vec2::new(x, center.y + tick + LABEL_GAP_PX),
                i.to_string(),
                font,
                options.tick_label_color,
                TextAnchor::CenterTop,
            );
            list.bold_text(
                Vec2::new(center.x - tick - LABEL_GAP_PX, y),
                i.to_string(),
                font,
                options.tick_label_color,
                TextAnchor::RightCenter,
            );
        }
    }

    list.bold_text(
        center + Vec2::new(-LABEL_GAP_PX, LABEL_GAP_PX),
        "0",
        font,
        options.tick_label_color,
        TextAnchor::RightTop,
    );
}
