//! Hilfsmarken: gestrichelte Spiegelachse und Dreh-/Streckzentrum.

use crate::shared::CenterMarker;
use glam::Vec2;
use transform_lab_engine::{CanvasSettings, Point, Reflection};
use transform_lab_raster::{Dash, DrawList, Rgba, TextAnchor};

const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
const AXIS_DASH: Dash = Dash { on: 8.0, off: 6.0 };
/// Außenradius des weißen Rings um das Zentrum.
const CENTER_RING_RADIUS: f32 = 9.0;
/// Radius des farbigen Zentrumspunkts.
const CENTER_DOT_RADIUS: f32 = 7.0;
/// Abstand der Zentrumsbeschriftung unterhalb des Punkts.
const CENTER_CAPTION_OFFSET: f32 = 20.0;

/// Gestrichelte Gerade y = mx + c über den gesamten Gitterbereich.
pub(crate) fn push_reflection_line(
    list: &mut DrawList,
    line: &Reflection,
    canvas: &CanvasSettings,
    color: Rgba,
) {
    let n = f64::from(canvas.range);
    let from = canvas.to_px(Point::new(-n, line.m * -n + line.c));
    let to = canvas.to_px(Point::new(n, line.m * n + line.c));
    list.dashed_line(from.as_vec2(), to.as_vec2(), 2.0, color, AXIS_DASH);
}

/// Zentrumspunkt mit weißem Ring und Koordinaten-Beschriftung.
pub(crate) fn push_center_marker(list: &mut DrawList, marker: &CenterMarker, canvas: &CanvasSettings) {
    let pos = canvas.to_px(marker.point).as_vec2();
    list.circle(pos, CENTER_RING_RADIUS, WHITE);
    list.circle(pos, CENTER_DOT_RADIUS, marker.color);
    list.bold_text(
        pos + Vec2::new(0.0, CENTER_CAPTION_OFFSET),
        marker.point.to_string(),
        12.0,
        marker.color,
        TextAnchor::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use transform_lab_engine::ReflectionAxis;
    use transform_lab_raster::Primitive;

    #[test]
    fn reflection_line_spans_grid_range() {
        let canvas = CanvasSettings::new(10, 400);
        let line = Reflection {
            axis: ReflectionAxis::Custom,
            m: 1.0,
            c: 2.0,
        };
        let mut list = DrawList::new();
        push_reflection_line(&mut list, &line, &canvas, [0.0, 0.0, 0.0, 1.0]);

        match list.items() {
            [Primitive::Line { from, to, dash, .. }] => {
                assert_eq!(*from, canvas.to_px(Point::new(-10.0, -8.0)).as_vec2());
                assert_eq!(*to, canvas.to_px(Point::new(10.0, 12.0)).as_vec2());
                assert_eq!(*dash, Some(AXIS_DASH));
            }
            other => panic!("Unerwartete Primitive: {other:?}"),
        }
    }

    #[test]
    fn center_marker_has_ring_dot_and_caption() {
        let canvas = CanvasSettings::default();
        let marker = CenterMarker {
            point: Point::new(2.0, -1.0),
            color: [0.5, 0.0, 0.5, 1.0],
        };
        let mut list = DrawList::new();
        push_center_marker(&mut list, &marker, &canvas);

        assert_eq!(list.len(), 3);
        assert!(matches!(
            &list.items()[2],
            Primitive::Text { text, .. } if text == "(2, -1)"
        ));
    }
}
