//! Canvas-Einstellungen und Umrechnung Gitter ↔ Pixel.

use crate::point::Point;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Anzeige-Einstellungen des quadratischen Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Gitter-Halbbreite (sichtbar: -range..=range)
    pub range: u32,
    /// Kantenlänge des Canvas in Pixeln
    pub zoom: u32,
}

impl CanvasSettings {
    /// Standard-Gitterbereich.
    pub const DEFAULT_RANGE: u32 = 20;
    /// Standard-Canvasgröße in Pixeln.
    pub const DEFAULT_ZOOM: u32 = 600;
    /// Minimaler Gitterbereich.
    pub const RANGE_MIN: u32 = 5;
    /// Maximaler Gitterbereich.
    pub const RANGE_MAX: u32 = 50;
    /// Minimale Canvasgröße.
    pub const ZOOM_MIN: u32 = 400;
    /// Maximale Canvasgröße.
    pub const ZOOM_MAX: u32 = 2000;
    /// Schrittweite der Canvasgröße.
    pub const ZOOM_STEP: u32 = 50;

    /// Erstellt Einstellungen (ohne Begrenzung).
    pub const fn new(range: u32, zoom: u32) -> Self {
        Self { range, zoom }
    }

    /// Begrenzt Bereich und Größe auf die erlaubten Werte.
    ///
    /// Die Größe wird zusätzlich auf das 50er-Raster gerundet.
    pub fn clamped(self) -> Self {
        let range = self.range.clamp(Self::RANGE_MIN, Self::RANGE_MAX);
        let zoom = self.zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let zoom = ((zoom + Self::ZOOM_STEP / 2) / Self::ZOOM_STEP) * Self::ZOOM_STEP;
        Self { range, zoom }
    }

    /// Canvasgröße als Fließkommazahl.
    pub fn size_px(&self) -> f64 {
        f64::from(self.zoom)
    }

    /// Pixel pro Gittereinheit: `zoom / (2 · range)`.
    pub fn unit(&self) -> f64 {
        f64::from(self.zoom) / (2.0 * f64::from(self.range.max(1)))
    }

    /// Pixel-Mittelpunkt des Canvas (Lage des Ursprungs).
    pub fn center_px(&self) -> DVec2 {
        DVec2::splat(self.size_px() / 2.0)
    }

    /// Gitterpunkt → Pixel (y-Achse invertiert, Bildschirm-y wächst nach unten).
    pub fn to_px(&self, p: Point) -> DVec2 {
        let center = self.center_px();
        let unit = self.unit();
        DVec2::new(center.x + p.x * unit, center.y - p.y * unit)
    }

    /// Pixel → Gitterpunkt (ohne Einrasten).
    pub fn from_px(&self, px: DVec2) -> Point {
        let center = self.center_px();
        let unit = self.unit();
        Point::new((px.x - center.x) / unit, (center.y - px.y) / unit)
    }

    /// Pixel → auf ganze Gitterkoordinaten eingerasteter Punkt.
    pub fn snap(&self, px: DVec2) -> Point {
        self.from_px(px).rounded()
    }

    /// Ganzzahlige Gitterwerte von -range bis range.
    pub fn grid_values(&self) -> std::ops::RangeInclusive<i32> {
        let n = self.range as i32;
        -n..=n
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RANGE, Self::DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_canvas_center() {
        let canvas = CanvasSettings::default();
        let px = canvas.to_px(Point::ORIGIN);
        assert_relative_eq!(px.x, 300.0);
        assert_relative_eq!(px.y, 300.0);
    }

    #[test]
    fn unit_follows_zoom_and_range() {
        let canvas = CanvasSettings::new(20, 600);
        assert_relative_eq!(canvas.unit(), 15.0);
        let canvas = CanvasSettings::new(10, 1000);
        assert_relative_eq!(canvas.unit(), 50.0);
    }

    #[test]
    fn y_axis_is_inverted() {
        let canvas = CanvasSettings::default();
        let px = canvas.to_px(Point::new(2.0, 3.0));
        assert_relative_eq!(px.x, 330.0);
        assert_relative_eq!(px.y, 255.0);
    }

    #[test]
    fn from_px_inverts_to_px() {
        let canvas = CanvasSettings::new(13, 850);
        let p = Point::new(-4.25, 7.5);
        let back = canvas.from_px(canvas.to_px(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn snap_rounds_to_nearest_grid_point() {
        let canvas = CanvasSettings::default();
        // 7 px rechts und 8 px über dem Ursprung → (0.47, 0.53) → (0, 1)
        let snapped = canvas.snap(DVec2::new(307.0, 292.0));
        assert_eq!(snapped, Point::new(0.0, 1.0));
    }

    #[test]
    fn clamped_limits_range_and_zoom() {
        let canvas = CanvasSettings::new(80, 99).clamped();
        assert_eq!(canvas, CanvasSettings::new(50, 400));
        let canvas = CanvasSettings::new(2, 1234).clamped();
        assert_eq!(canvas, CanvasSettings::new(5, 1250));
    }

    #[test]
    fn grid_values_cover_both_sides() {
        let canvas = CanvasSettings::new(5, 600);
        let values: Vec<i32> = canvas.grid_values().collect();
        assert_eq!(values.first(), Some(&-5));
        assert_eq!(values.last(), Some(&5));
        assert_eq!(values.len(), 11);
    }
}
