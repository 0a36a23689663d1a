//! Use-Case PNG-Export: Szene rastern, Rand und Titel ergänzen, Datei schreiben.

use crate::app::{render_scene, AppState};
use crate::render::build_draw_list;
use crate::shared::RenderScene;
use std::path::{Path, PathBuf};
use transform_lab_engine::TransformMode;
use transform_lab_raster::{
    compose_export, export_file_name, export_title, rasterize, write_png, ExportLayout,
};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Rastert die Szene in Canvas-Größe und setzt sie mit Titel auf den Export-Rand.
pub fn render_export_image(scene: &RenderScene, mode: TransformMode) -> image::RgbaImage {
    let size = scene.canvas.zoom;
    let list = build_draw_list(scene);
    let canvas = rasterize(list.items(), size, size, WHITE);
    let layout = ExportLayout {
        padding: scene.options.export_padding_px,
        ..ExportLayout::default()
    };
    compose_export(&canvas, &export_title(mode.title()), &layout)
}

/// Exportiert die aktuelle Sitzung als `<modus>-shape-<id>.png` nach `dir`.
pub fn export_session_png(state: &AppState, project_id: u64, dir: &Path) -> anyhow::Result<PathBuf> {
    let mode = state.session.mode;
    let scene = render_scene::build(state);
    let image = render_export_image(&scene, mode);
    let path = write_png(&image, dir, &export_file_name(mode.slug(), project_id))?;
    Ok(path)
}
