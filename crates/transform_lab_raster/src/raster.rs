//! Software-Rasterizer: zeichnet Primitive auf ein `RgbaImage`.
//!
//! Kein Anti-Aliasing; ein Pixel gilt als getroffen, wenn sein Mittelpunkt
//! in der Form liegt. Alles außerhalb des Bildes wird verworfen.

use crate::primitive::{Dash, Primitive, Rgba, TextAnchor};
use crate::text;
use glam::Vec2;
use image::RgbaImage;

/// Rastert alle Primitive der Reihe nach auf ein neues Bild.
pub fn rasterize(primitives: &[Primitive], width: u32, height: u32, background: Rgba) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, image::Rgba(to_u8(background)));
    for primitive in primitives {
        draw_primitive(&mut image, primitive);
    }
    image
}

/// Zeichnet ein einzelnes Primitiv.
pub fn draw_primitive(image: &mut RgbaImage, primitive: &Primitive) {
    match primitive {
        Primitive::Line {
            from,
            to,
            width,
            color,
            dash,
        } => match dash {
            Some(dash) => draw_dashed_line(image, *from, *to, *width, *color, *dash),
            None => draw_line(image, *from, *to, *width, *color),
        },
        Primitive::Polyline {
            points,
            closed,
            width,
            color,
        } => {
            for pair in points.windows(2) {
                draw_line(image, pair[0], pair[1], *width, *color);
            }
            if *closed && points.len() > 2 {
                if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                    draw_line(image, last, first, *width, *color);
                }
            }
        }
        Primitive::Polygon { points, fill } => fill_polygon(image, points, *fill),
        Primitive::Circle {
            center,
            radius,
            fill,
        } => fill_circle(image, *center, *radius, *fill),
        Primitive::Text {
            pos,
            text,
            size,
            color,
            bold,
            anchor,
        } => draw_anchored_text(image, *pos, text, *size, *color, *bold, *anchor),
    }
}

/// Blendet eine Farbe auf einen Pixel (Quelle über Ziel).
pub(crate) fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let alpha = color[3].clamp(0.0, 1.0);
    let src = to_u8(color);
    let dst = image.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        dst.0[c] = blend_channel(dst.0[c], src[c], alpha);
    }
    dst.0[3] = blend_channel(dst.0[3], 255, alpha);
}

fn blend_channel(base: u8, overlay: u8, alpha: f32) -> u8 {
    let result = f32::from(base) * (1.0 - alpha) + f32::from(overlay) * alpha;
    result.round().clamp(0.0, 255.0) as u8
}

fn to_u8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Pixelbereich (inklusive), der ein Rechteck `min..max` überdeckt, auf das Bild begrenzt.
fn pixel_bounds(image: &RgbaImage, min: Vec2, max: Vec2) -> Option<(i32, i32, i32, i32)> {
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    let x0 = (min.x.floor() as i32).max(0);
    let y0 = (min.y.floor() as i32).max(0);
    let x1 = (max.x.ceil() as i32).min(image.width() as i32 - 1);
    let y1 = (max.y.ceil() as i32).min(image.height() as i32 - 1);
    (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
}

fn pixel_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Gefüllter Kreis.
pub fn fill_circle(image: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba) {
    let extent = Vec2::splat(radius);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, center - extent, center + extent) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if pixel_center(x, y).distance(center) <= radius {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

/// Durchgezogene Linie der Stärke `width` (mindestens 1 Pixel).
pub fn draw_line(image: &mut RgbaImage, from: Vec2, to: Vec2, width: f32, color: Rgba) {
    let half = width.max(1.0) / 2.0;
    let extent = Vec2::splat(half);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, from.min(to) - extent, from.max(to) + extent)
    else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if distance_to_segment(pixel_center(x, y), from, to) <= half {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

/// Gestrichelte Linie; das Muster beginnt am Startpunkt mit einem Strich.
pub fn draw_dashed_line(image: &mut RgbaImage, from: Vec2, to: Vec2, width: f32, color: Rgba, dash: Dash) {
    let length = from.distance(to);
    let period = dash.on + dash.off;
    if length <= f32::EPSILON || period <= 0.0 || dash.on <= 0.0 || !length.is_finite() {
        draw_line(image, from, to, width, color);
        return;
    }
    let dir = (to - from) / length;
    let mut start = 0.0;
    while start < length {
        let end = (start + dash.on).min(length);
        draw_line(image, from + dir * start, from + dir * end, width, color);
        start += period;
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Gefülltes Polygon (Even-Odd-Regel, Scanline über Pixelmittelpunkte).
pub fn fill_polygon(image: &mut RgbaImage, points: &[Vec2], color: Rgba) {
    if points.len() < 3 {
        return;
    }
    let min = points.iter().copied().fold(Vec2::splat(f32::INFINITY), Vec2::min);
    let max = points.iter().copied().fold(Vec2::splat(f32::NEG_INFINITY), Vec2::max);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, min, max) else {
        return;
    };

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in y0..=y1 {
        let sy = y as f32 + 0.5;
        crossings.clear();
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            // Halboffenes Intervall, damit Eckpunkte nicht doppelt zählen
            if (a.y <= sy) != (b.y <= sy) {
                crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            for x in x0..=x1 {
                let sx = x as f32 + 0.5;
                if sx >= span[0] && sx < span[1] {
                    blend_pixel(image, x, y, color);
                }
            }
        }
    }
}

/// Text mit Ankerpunkt; die Glyphengröße folgt `size` in ganzzahligen Stufen.
pub fn draw_anchored_text(
    image: &mut RgbaImage,
    pos: Vec2,
    content: &str,
    size: f32,
    color: Rgba,
    bold: bool,
    anchor: TextAnchor,
) {
    if !pos.is_finite() {
        return;
    }
    let scale = text::glyph_scale(size);
    let box_size = Vec2::new(
        text::text_width(content, scale, bold) as f32,
        text::text_height(scale) as f32,
    );
    let top_left = anchor.top_left(pos, box_size).round();
    text::draw_text(
        image,
        top_left.x as i32,
        top_left.y as i32,
        content,
        color,
        scale,
        bold,
    );
}
