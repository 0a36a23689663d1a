//! PNG-Export: Canvas-Bild mit weißem Rand und zentriertem Titel.

use crate::primitive::{Rgba, TextAnchor};
use crate::raster::draw_anchored_text;
use glam::Vec2;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fehler beim Erzeugen oder Schreiben eines Exports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// PNG-Kodierung fehlgeschlagen
    #[error("PNG-Kodierung fehlgeschlagen: {0}")]
    Encode(#[from] image::ImageError),
    /// Datei konnte nicht geschrieben werden
    #[error("Export nach {path} fehlgeschlagen: {source}")]
    Io {
        /// Zieldatei
        path: PathBuf,
        /// Ursache
        #[source]
        source: std::io::Error,
    },
}

/// Layout des Export-Bildes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportLayout {
    /// Weißer Rand auf jeder Seite in Pixeln
    pub padding: u32,
    /// Titelfarbe
    pub title_color: Rgba,
    /// Schrifthöhe des Titels in Pixeln
    pub title_size: f32,
    /// Vertikale Titelposition (Grundlinie) ab Bildoberkante
    pub title_baseline: f32,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            padding: 60,
            // #c2185b
            title_color: [0.761, 0.094, 0.357, 1.0],
            title_size: 24.0,
            title_baseline: 40.0,
        }
    }
}

/// Export-Titel für einen Modus-Titel, z.B. `Rotation of Shapes`.
pub fn export_title(mode_title: &str) -> String {
    format!("{mode_title} of Shapes")
}

/// Dateiname eines Exports, z.B. `rotation-shape-1700000000000.png`.
pub fn export_file_name(mode_slug: &str, project_id: u64) -> String {
    format!("{mode_slug}-shape-{project_id}.png")
}

/// Setzt das Canvas-Bild mittig auf einen weißen Rand und zeichnet den Titel.
pub fn compose_export(canvas: &RgbaImage, title: &str, layout: &ExportLayout) -> RgbaImage {
    let pad = layout.padding;
    let width = canvas.width() + 2 * pad;
    let height = canvas.height() + 2 * pad;
    let mut out = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut out, canvas, i64::from(pad), i64::from(pad));

    draw_anchored_text(
        &mut out,
        Vec2::new(width as f32 / 2.0, layout.title_baseline),
        title,
        layout.title_size,
        layout.title_color,
        true,
        TextAnchor::CenterBottom,
    );
    out
}

/// Kodiert ein Bild als PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Schreibt ein Bild als PNG nach `dir/file_name` und liefert den vollständigen Pfad.
pub fn write_png(image: &RgbaImage, dir: &Path, file_name: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(file_name);
    let bytes = encode_png(image)?;
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("Export geschrieben: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba as Pixel;

    #[test]
    fn file_name_and_title_follow_mode() {
        assert_eq!(export_file_name("reflection", 42), "reflection-shape-42.png");
        assert_eq!(export_title("Enlargement"), "Enlargement of Shapes");
    }

    #[test]
    fn compose_adds_padding_on_each_side() {
        let canvas = RgbaImage::from_pixel(100, 80, Pixel([0, 0, 255, 255]));
        let out = compose_export(&canvas, "Translation of Shapes", &ExportLayout::default());

        assert_eq!(out.dimensions(), (220, 200));
        assert_eq!(*out.get_pixel(60, 60), Pixel([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(159, 139), Pixel([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(59, 100), Pixel([255, 255, 255, 255]));
        assert_eq!(*out.get_pixel(219, 199), Pixel([255, 255, 255, 255]));
    }

    #[test]
    fn title_is_drawn_in_top_padding() {
        let canvas = RgbaImage::from_pixel(200, 200, Pixel([255, 255, 255, 255]));
        let layout = ExportLayout::default();
        let out = compose_export(&canvas, "Rotation of Shapes", &layout);

        let title_pixels = (0..layout.padding)
            .flat_map(|y| (0..out.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| out.get_pixel(x, y).0 != [255, 255, 255, 255])
            .count();
        assert!(title_pixels > 0, "Titel sollte im oberen Rand sichtbar sein");
    }

    #[test]
    fn write_png_creates_readable_file() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let img = RgbaImage::from_pixel(8, 8, Pixel([10, 20, 30, 255]));

        let path = write_png(&img, &dir.path().join("exporte"), "translation-shape-1.png")
            .expect("Export sollte klappen");

        let decoded = image::open(&path).expect("PNG lesbar").to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(*decoded.get_pixel(3, 3), Pixel([10, 20, 30, 255]));
    }
}
