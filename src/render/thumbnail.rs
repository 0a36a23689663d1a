//! Vorschaubild eines gespeicherten Projekts für den Projekt-Dialog.

use glam::Vec2;
use transform_lab_engine::{CanvasSettings, Project};
use transform_lab_raster::{hex_color, DrawList};

/// Kantenlänge des Vorschaubilds in Pixeln.
pub const THUMBNAIL_SIZE: u32 = 80;

/// Zeichenliste einer Projekt-Vorschau: Achsen plus Originalform, ohne Transformation.
pub fn thumbnail_draw_list(project: &Project) -> DrawList {
    let canvas = CanvasSettings::new(project.canvas_settings.range, THUMBNAIL_SIZE);
    let size = THUMBNAIL_SIZE as f32;
    let center = size / 2.0;
    let axis = hex_color("#e2e8f0", 1.0);
    let stroke = hex_color("#d81b60", 1.0);

    let mut list = DrawList::new();
    list.line(Vec2::new(0.0, center), Vec2::new(size, center), 1.0, axis);
    list.line(Vec2::new(center, 0.0), Vec2::new(center, size), 1.0, axis);

    if project.points.is_empty() {
        return list;
    }

    let pts: Vec<Vec2> = project
        .points
        .iter()
        .map(|p| canvas.to_px(*p).as_vec2())
        .collect();
    list.polyline(pts.clone(), project.is_shape_closed, 2.0, stroke);
    for p in pts {
        list.circle(p, 1.5, stroke);
    }
    list
}
