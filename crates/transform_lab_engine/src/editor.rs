//! Auflösung von Canvas-Klicks im Form-Editor.
//!
//! Reihenfolge: Schließen vor Löschen vor Setzen. Ein Klick nahe dem ersten
//! Punkt einer offenen Form mit mindestens drei Punkten schließt die Form,
//! auch wenn derselbe Klick den ersten Punkt löschen könnte.

use crate::canvas::CanvasSettings;
use crate::point::Point;
use crate::shape::Shape;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pixel-Toleranzen für Klicks auf bestehende Punkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickTolerances {
    /// Radius um den ersten Punkt, in dem ein Klick die Form schließt
    pub close_radius_px: f64,
    /// Radius um einen Punkt, in dem ein Klick ihn löscht
    pub delete_radius_px: f64,
}

impl Default for ClickTolerances {
    fn default() -> Self {
        Self {
            close_radius_px: 12.0,
            delete_radius_px: 15.0,
        }
    }
}

/// Ergebnis eines Canvas-Klicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickAction {
    /// Form schließen
    CloseShape,
    /// Punkt mit Index löschen
    DeletePoint(usize),
    /// Eingerasteter Gitterpunkt; die Anwendung entscheidet über die Bedeutung
    Place(Point),
}

/// Bestimmt die Aktion für einen Klick an Pixelposition `click_px`.
pub fn resolve_click(
    shape: &Shape,
    click_px: DVec2,
    canvas: &CanvasSettings,
    tolerances: &ClickTolerances,
) -> ClickAction {
    if shape.can_close() {
        let near_first = shape
            .first()
            .is_some_and(|first| canvas.to_px(first).distance(click_px) <= tolerances.close_radius_px);
        if near_first {
            return ClickAction::CloseShape;
        }
    }

    if !shape.closed {
        if let Some(index) =
            nearest_point_within(shape, click_px, canvas, tolerances.delete_radius_px)
        {
            return ClickAction::DeletePoint(index);
        }
    }

    ClickAction::Place(canvas.snap(click_px))
}

/// Index des nächstgelegenen Punkts innerhalb von `radius_px`.
fn nearest_point_within(
    shape: &Shape,
    click_px: DVec2,
    canvas: &CanvasSettings,
    radius_px: f64,
) -> Option<usize> {
    shape
        .points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, canvas.to_px(p).distance(click_px)))
        .filter(|&(_, d)| d <= radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
