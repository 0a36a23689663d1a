//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::AppOptions;
use std::sync::Arc;
use transform_lab_engine::{CanvasSettings, Point, Reflection, Shape};

/// Markierung eines Dreh- oder Streckzentrums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterMarker {
    /// Zentrum im Gitter
    pub point: Point,
    /// Füllfarbe des Punkts und der Beschriftung
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Gittergröße und Pixelmaßstab
    pub canvas: CanvasSettings,
    /// Vom Benutzer gezeichnete Form (Arc für O(1)-Clone pro Frame)
    pub original: Arc<Shape>,
    /// Ergebnis der aktiven Transformation (None = nichts anzuzeigen)
    pub transformed: Option<Shape>,
    /// Benutzerdefinierte Spiegelachse y = mx + c
    pub reflection_line: Option<Reflection>,
    /// Dreh- oder Streckzentrum
    pub center_marker: Option<CenterMarker>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: AppOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine transformierte Form gezeichnet wird.
    pub fn has_transformed(&self) -> bool {
        self.transformed.is_some()
    }
}
