//! `transform_lab_raster` — Zeichen-Primitive und Software-Rendering.
//!
//! - `primitive` — backend-neutrale Zeichenliste in Pixel-Koordinaten
//! - `raster` — Rasterizer auf `image::RgbaImage`
//! - `text` — eingebetteter 5×7 Bitmap-Font
//! - `triangulate` — Dreieckszerlegung für konkave Flächen
//! - `export` — Export-Bild (Rand + Titel) und PNG-Kodierung
//!
//! # Beispiel
//! ```
//! use glam::Vec2;
//! use transform_lab_raster::{rasterize, DrawList};
//!
//! let mut list = DrawList::new();
//! list.circle(Vec2::new(8.0, 8.0), 4.0, [1.0, 0.0, 0.0, 1.0]);
//! let image = rasterize(list.items(), 16, 16, [1.0, 1.0, 1.0, 1.0]);
//! assert_eq!(image.get_pixel(8, 8).0, [255, 0, 0, 255]);
//! ```

pub mod export;
pub mod primitive;
pub mod raster;
pub mod text;
pub mod triangulate;

pub use export::{
    compose_export, encode_png, export_file_name, export_title, write_png, ExportError,
    ExportLayout,
};
pub use primitive::{hex_color, with_alpha, Dash, DrawList, Primitive, Rgba, TextAnchor};
pub use raster::rasterize;
pub use triangulate::triangulate;
