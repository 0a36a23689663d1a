//! Zeichnen der Szene: backend-neutrale Zeichenliste plus egui-Ausgabe.
//!
//! `build_draw_list` erzeugt aus einer `RenderScene` eine `DrawList` in
//! Canvas-Pixeln. Dieselbe Liste geht an `paint_draw_list` (Bildschirm)
//! und an den Software-Rasterizer (PNG-Export).

mod grid;
mod markers;
mod painter;
mod shapes;
mod thumbnail;

pub use crate::shared::RenderScene;
pub use painter::{paint_draw_list, to_color32};
pub use thumbnail::{thumbnail_draw_list, THUMBNAIL_SIZE};

use shapes::ShapeStyle;
use transform_lab_raster::DrawList;

/// Beschriftung über der Originalform.
const ORIGINAL_TITLE: &str = "Original";

/// Baut die vollständige Zeichenliste eines Frames.
///
/// Reihenfolge: Gitter, Originalform, Spiegelachse, Zentrum, Bildform.
pub fn build_draw_list(scene: &RenderScene) -> DrawList {
    let options = &scene.options;
    let canvas = &scene.canvas;
    let mut list = DrawList::new();

    grid::push_grid(&mut list, canvas, options);

    shapes::push_shape(
        &mut list,
        &scene.original,
        canvas,
        &ShapeStyle {
            color: options.original_color,
            fill_alpha: options.fill_alpha,
            line_width: options.line_width_px,
            point_radius: options.point_radius_px,
            label_suffix: "",
            show_coordinates: options.show_coordinates,
            title: Some(ORIGINAL_TITLE),
        },
    );

    if let Some(line) = &scene.reflection_line {
        markers::push_reflection_line(&mut list, line, canvas, options.reflection_line_color);
    }
    if let Some(marker) = &scene.center_marker {
        markers::push_center_marker(&mut list, marker, canvas);
    }

    if let Some(transformed) = &scene.transformed {
        shapes::push_shape(
            &mut list,
            transformed,
            canvas,
            &ShapeStyle {
                color: options.transformed_color,
                fill_alpha: options.fill_alpha,
                line_width: options.line_width_px,
                point_radius: options.point_radius_px,
                label_suffix: "'",
                show_coordinates: options.show_coordinates,
                title: None,
            },
        );
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::AppOptions;
    use std::sync::Arc;
    use transform_lab_engine::{CanvasSettings, Point, Shape};
    use transform_lab_raster::Primitive;

    fn scene(transformed: Option<Shape>) -> RenderScene {
        RenderScene {
            canvas: CanvasSettings::default(),
            original: Arc::new(Shape::new(
                vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)],
                true,
            )),
            transformed,
            reflection_line: None,
            center_marker: None,
            options: AppOptions::default(),
        }
    }

    fn texts(list: &DrawList) -> Vec<&str> {
        list.items()
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn original_only_scene_has_title_and_plain_labels() {
        let list = build_draw_list(&scene(None));
        let texts = texts(&list);

        assert!(texts.contains(&"Original"));
        assert!(texts.contains(&"A"));
        assert!(!texts.contains(&"A'"));
    }

    #[test]
    fn transformed_shape_is_drawn_last_with_primed_labels() {
        let image = Shape::new(vec![Point::new(5.0, 5.0)], false);
        let list = build_draw_list(&scene(Some(image)));

        match list.items().last() {
            Some(Primitive::Text { text, color, .. }) => {
                assert_eq!(text, "A'");
                assert_eq!(*color, AppOptions::default().transformed_color);
            }
            other => panic!("Unerwartetes letztes Primitiv: {other:?}"),
        }
    }
}
