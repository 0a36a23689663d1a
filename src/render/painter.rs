//! egui-Backend: überträgt eine `DrawList` auf einen `egui::Painter`.

use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Shape, Stroke};
use glam::Vec2;
use transform_lab_raster::{triangulate, DrawList, Primitive, Rgba, TextAnchor};

/// RGBA (0.0..=1.0) → `Color32`.
pub fn to_color32(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn anchor_align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::Center => Align2::CENTER_CENTER,
        TextAnchor::LeftCenter => Align2::LEFT_CENTER,
        TextAnchor::RightCenter => Align2::RIGHT_CENTER,
        TextAnchor::CenterBottom => Align2::CENTER_BOTTOM,
        TextAnchor::CenterTop => Align2::CENTER_TOP,
        TextAnchor::RightTop => Align2::RIGHT_TOP,
        TextAnchor::LeftBottom => Align2::LEFT_BOTTOM,
    }
}

/// Zeichnet alle Primitive; Pixel-Koordinaten gelten relativ zu `origin`.
///
/// Flächen werden in Dreiecke zerlegt und als Mesh gefüllt, damit auch
/// konkave Formen deckungsgleich mit dem PNG-Export erscheinen.
pub fn paint_draw_list(painter: &Painter, origin: Pos2, list: &DrawList) {
    let at = |p: Vec2| origin + egui::vec2(p.x, p.y);

    for primitive in list.items() {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
                dash,
            } => {
                let stroke = Stroke::new(*width, to_color32(*color));
                match dash {
                    Some(dash) => painter.extend(Shape::dashed_line(
                        &[at(*from), at(*to)],
                        stroke,
                        dash.on,
                        dash.off,
                    )),
                    None => {
                        painter.line_segment([at(*from), at(*to)], stroke);
                    }
                }
            }
            Primitive::Polyline {
                points,
                closed,
                width,
                color,
            } => {
                let pts: Vec<Pos2> = points.iter().map(|p| at(*p)).collect();
                let stroke = Stroke::new(*width, to_color32(*color));
                if *closed {
                    painter.add(Shape::closed_line(pts, stroke));
                } else {
                    painter.add(Shape::line(pts, stroke));
                }
            }
            Primitive::Polygon { points, fill } => {
                if points.len() < 3 {
                    continue;
                }
                let color = to_color32(*fill);
                let mut mesh = Mesh::default();
                for p in points {
                    mesh.colored_vertex(at(*p), color);
                }
                for [a, b, c] in triangulate(points) {
                    mesh.add_triangle(a, b, c);
                }
                painter.add(Shape::mesh(mesh));
            }
            Primitive::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(at(*center), *radius, to_color32(*fill));
            }
            Primitive::Text {
                pos,
                text,
                size,
                color,
                anchor,
                ..
            } => {
                // Die egui-Standardschrift hat keinen Fettschnitt
                painter.text(
                    at(*pos),
                    anchor_align(*anchor),
                    text,
                    FontId::proportional(*size),
                    to_color32(*color),
                );
            }
        }
    }
}
