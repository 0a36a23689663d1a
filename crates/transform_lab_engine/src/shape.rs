//! Form-Datenmodell: geordnete Punktfolge plus Geschlossen-Flag.

use crate::point::Point;
use crate::transform::{apply, TransformSpec};
use serde::{Deserialize, Serialize};

/// Polygon oder Polylinie im Gitter.
///
/// Die Einfügereihenfolge ist die Zeichenreihenfolge. Änderungen erzeugen
/// immer einen neuen Wert, bestehende Formen bleiben unangetastet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Punkte in Zeichenreihenfolge
    pub points: Vec<Point>,
    /// Ob die Form geschlossen ist (Editor-Zustand)
    pub closed: bool,
}

impl Shape {
    /// Erstellt eine Form aus Punkten.
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Ob die Form keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Erster Punkt (Schließpunkt).
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Ob die Form geschlossen werden kann (offen und mindestens 3 Punkte).
    pub fn can_close(&self) -> bool {
        !self.closed && self.points.len() >= 3
    }

    /// Ob ein geschlossener Pfad gezeichnet wird (geschlossen und > 2 Punkte).
    pub fn draws_closed(&self) -> bool {
        self.closed && self.points.len() > 2
    }

    /// Neue Form mit angehängtem Punkt.
    pub fn with_point(&self, point: Point) -> Self {
        let mut points = self.points.clone();
        points.push(point);
        Self::new(points, self.closed)
    }

    /// Neue Form ohne den Punkt an `index`. Ungültige Indizes liefern eine Kopie.
    pub fn without_point(&self, index: usize) -> Self {
        let points = self
            .points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| *p)
            .collect();
        Self::new(points, self.closed)
    }

    /// Neue, geschlossene Form mit denselben Punkten.
    pub fn closed_copy(&self) -> Self {
        Self::new(self.points.clone(), true)
    }

    /// Transformierte Form (Geschlossen-Flag bleibt erhalten).
    pub fn transformed(&self, spec: &TransformSpec) -> Self {
        Self::new(apply(&self.points, spec), self.closed)
    }

    /// Achsenparalleles Begrenzungsrechteck als (min, max).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                )
            });
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Translation;

    fn triangle() -> Shape {
        Shape::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 3.0),
            ],
            false,
        )
    }

    #[test]
    fn with_point_leaves_original_untouched() {
        let shape = triangle();
        let extended = shape.with_point(Point::new(1.0, 1.0));
        assert_eq!(shape.len(), 3);
        assert_eq!(extended.len(), 4);
        assert_eq!(extended.points[3], Point::new(1.0, 1.0));
    }

    #[test]
    fn without_point_removes_by_index() {
        let shape = triangle().without_point(1);
        assert_eq!(shape.points, vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0)]);
        assert_eq!(triangle().without_point(9), triangle());
    }

    #[test]
    fn close_requires_three_points() {
        let shape = triangle();
        assert!(shape.can_close());
        assert!(!shape.without_point(0).can_close());
        assert!(!shape.closed_copy().can_close());
        assert!(shape.closed_copy().draws_closed());
    }

    #[test]
    fn transformed_keeps_closed_flag() {
        let shape = triangle().closed_copy();
        let moved = shape.transformed(&TransformSpec::Translation(Translation { dx: 1.0, dy: 1.0 }));
        assert!(moved.closed);
        assert_eq!(moved.points[1], Point::new(5.0, 1.0));
    }

    #[test]
    fn bounds_span_all_points() {
        let (min, max) = triangle().bounds().expect("Form hat Punkte");
        assert_eq!(min, Point::new(0.0, 0.0));
        assert_eq!(max, Point::new(4.0, 3.0));
        assert!(Shape::default().bounds().is_none());
    }
}
