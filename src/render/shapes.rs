//! Formen: Füllung, Kantenzug, Eckpunkte und Punktnamen.

use glam::Vec2;
use transform_lab_engine::{point_label, CanvasSettings, Shape};
use transform_lab_raster::{with_alpha, DrawList, Rgba, TextAnchor};

const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Schriftgröße der Punktnamen.
const LABEL_SIZE: f32 = 12.0;
/// Schriftgröße der Überschrift über der Originalform.
const TITLE_SIZE: f32 = 14.0;
/// Versatz der Punktnamen rechts oberhalb des Punkts.
const LABEL_OFFSET: Vec2 = Vec2::new(8.0, -8.0);
/// Abstand der Überschrift über der höchsten Ecke.
const TITLE_GAP_PX: f32 = 20.0;

/// Darstellungsparameter einer Form.
pub(crate) struct ShapeStyle<'a> {
    /// Kanten-, Punkt- und Beschriftungsfarbe
    pub color: Rgba,
    /// Deckkraft der Füllung
    pub fill_alpha: f32,
    /// Linienstärke
    pub line_width: f32,
    /// Radius der Eckpunkte
    pub point_radius: f32,
    /// Anhang an die Punktnamen (`'` für Bildpunkte)
    pub label_suffix: &'a str,
    /// Koordinaten hinter den Punktnamen
    pub show_coordinates: bool,
    /// Überschrift über der Form
    pub title: Option<&'a str>,
}

/// Hängt eine Form an die Zeichenliste an. Leere Formen zeichnen nichts.
pub(crate) fn push_shape(
    list: &mut DrawList,
    shape: &Shape,
    canvas: &CanvasSettings,
    style: &ShapeStyle<'_>,
) {
    if shape.is_empty() {
        return;
    }

    let pts: Vec<Vec2> = shape
        .points
        .iter()
        .map(|p| canvas.to_px(*p).as_vec2())
        .collect();

    // Offene Kantenzüge werden wie geschlossene gefüllt
    list.polygon(pts.clone(), with_alpha(style.color, style.fill_alpha));
    list.polyline(pts.clone(), shape.draws_closed(), style.line_width, style.color);

    for (index, (point, px)) in shape.points.iter().zip(&pts).enumerate() {
        list.circle(*px, style.point_radius, style.color);
        list.circle(*px, style.point_radius / 3.0, WHITE);

        let mut label = format!("{}{}", point_label(index), style.label_suffix);
        if style.show_coordinates {
            label.push(' ');
            label.push_str(&point.to_string());
        }
        list.bold_text(
            *px + LABEL_OFFSET,
            label,
            LABEL_SIZE,
            style.color,
            TextAnchor::LeftBottom,
        );
    }

    if let Some(title) = style.title {
        let (min_x, max_x, top) = pts.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY),
            |(lo, hi, top), p| (lo.min(p.x), hi.max(p.x), top.min(p.y)),
        );
        list.bold_text(
            Vec2::new((min_x + max_x) / 2.0, top - TITLE_GAP_PX),
            title,
            TITLE_SIZE,
            style.color,
            TextAnchor::CenterBottom,
        );
    }
}
