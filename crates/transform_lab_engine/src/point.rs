//! 2D-Punkt in Gitter-Koordinaten und Beschriftungs-Helfer.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Punkt im Koordinatengitter (Einheiten = Gitterkästchen, y zeigt nach oben).
///
/// Der Editor rastet Klicks auf ganze Zahlen ein, der Rechenkern
/// akzeptiert aber beliebige reelle Werte.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-Koordinate
    pub x: f64,
    /// Y-Koordinate
    pub y: f64,
}

impl Point {
    /// Koordinatenursprung (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Erstellt einen neuen Punkt.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rundet beide Koordinaten auf die nächste ganze Zahl (Gitter-Snap).
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Euklidischer Abstand zu einem anderen Punkt.
    pub fn distance(self, other: Self) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_coordinate(self.x),
            format_coordinate(self.y)
        )
    }
}

/// Formatiert eine Koordinate mit höchstens zwei Nachkommastellen.
///
/// Nachgestellte Nullen entfallen, `-0` wird zu `0`. Ganze Zahlen erscheinen
/// ohne Dezimalpunkt. Nicht-endliche Werte werden unverändert ausgegeben.
pub fn format_coordinate(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Liefert die Beschriftung des Punkts mit Index `index` (A, B, …, Z, A1, B1, …).
pub fn point_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_coordinate_trims_trailing_zeros() {
        assert_eq!(format_coordinate(3.0), "3");
        assert_eq!(format_coordinate(-4.5), "-4.5");
        assert_eq!(format_coordinate(1.0 / 3.0), "0.33");
        assert_eq!(format_coordinate(2.999), "3");
    }

    #[test]
    fn format_coordinate_hides_negative_zero() {
        assert_eq!(format_coordinate(-0.0), "0");
        assert_eq!(format_coordinate(-1e-12), "0");
    }

    #[test]
    fn point_display_uses_trimmed_coordinates() {
        assert_eq!(Point::new(3.0, -4.0).to_string(), "(3, -4)");
        assert_eq!(Point::new(0.25, 6.1).to_string(), "(0.25, 6.1)");
    }

    #[test]
    fn point_labels_wrap_after_z() {
        assert_eq!(point_label(0), "A");
        assert_eq!(point_label(25), "Z");
        assert_eq!(point_label(26), "A1");
        assert_eq!(point_label(53), "B2");
    }

    #[test]
    fn rounded_snaps_to_grid() {
        assert_eq!(Point::new(2.4, -3.6).rounded(), Point::new(2.0, -4.0));
    }
}
