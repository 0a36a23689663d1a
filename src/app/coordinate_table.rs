//! Zeilen der Koordinaten-Tabelle (Original → transformiert).

use super::state::SessionState;
use transform_lab_engine::{apply, point_label, Point};

/// Abweichung, ab der ein Punkt als verändert gilt.
const CHANGE_THRESHOLD: f64 = 0.01;

/// Eine Tabellenzeile.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRow {
    /// Punktname (A, B, …)
    pub label: String,
    /// Originalpunkt
    pub original: Point,
    /// Bild unter der aktiven Transformation
    pub transformed: Point,
}

impl CoordinateRow {
    /// Ob sich der Punkt durch die Transformation sichtbar bewegt.
    pub fn changed(&self) -> bool {
        (self.original.x - self.transformed.x).abs() > CHANGE_THRESHOLD
            || (self.original.y - self.transformed.y).abs() > CHANGE_THRESHOLD
    }

    /// Originalkoordinaten als `(x, y)`.
    pub fn original_text(&self) -> String {
        self.original.to_string()
    }

    /// Transformierte Koordinaten mit höchstens zwei Nachkommastellen.
    pub fn transformed_text(&self) -> String {
        self.transformed.to_string()
    }
}

/// Berechnet alle Zeilen für die aktuelle Sitzung.
pub fn coordinate_rows(session: &SessionState) -> Vec<CoordinateRow> {
    let transformed = apply(&session.shape.points, &session.active_spec());
    session
        .shape
        .points
        .iter()
        .zip(transformed)
        .enumerate()
        .map(|(i, (&original, transformed))| CoordinateRow {
            label: point_label(i),
            original,
            transformed,
        })
        .collect()
}
