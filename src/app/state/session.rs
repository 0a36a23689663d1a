use std::sync::Arc;
use transform_lab_engine::{
    CanvasSettings, Point, Shape, TransformMode, TransformSettings, TransformSpec,
};

/// Ziel einer Zentrumswahl per Canvas-Klick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterTarget {
    /// Drehzentrum
    Rotation,
    /// Streckzentrum
    Enlargement,
}

impl CenterTarget {
    /// Modus, in dem diese Zentrumswahl gilt.
    pub fn mode(self) -> TransformMode {
        match self {
            Self::Rotation => TransformMode::Rotation,
            Self::Enlargement => TransformMode::Enlargement,
        }
    }

    /// Zentrumswahl des Modus (falls der Modus ein Zentrum hat).
    pub fn for_mode(mode: TransformMode) -> Option<Self> {
        match mode {
            TransformMode::Rotation => Some(Self::Rotation),
            TransformMode::Enlargement => Some(Self::Enlargement),
            TransformMode::Translation | TransformMode::Reflection => None,
        }
    }
}

/// Die aktuelle Arbeitssitzung: Form, Modus, Parameter und Canvas.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Gezeichnete Form (wird pro Änderung ersetzt, nie in-place verändert)
    pub shape: Arc<Shape>,
    /// Aktiver Transformationsmodus
    pub mode: TransformMode,
    /// Alle vier Parameter-Sätze
    pub settings: TransformSettings,
    /// Gitterbereich und Zoom
    pub canvas: CanvasSettings,
    /// Wartet der nächste Canvas-Klick auf ein Zentrum?
    pub center_pick: Option<CenterTarget>,
}

impl SessionState {
    /// Neue, leere Sitzung mit den gegebenen Canvas-Einstellungen.
    pub fn new(canvas: CanvasSettings) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Transformation des aktiven Modus.
    pub fn active_spec(&self) -> TransformSpec {
        self.settings.spec_for(self.mode)
    }

    /// Ob gerade ein Zentrum für `target` gewählt wird.
    pub fn is_picking(&self, target: CenterTarget) -> bool {
        self.center_pick == Some(target)
    }

    /// Aktuell gesetztes Zentrum für `target`.
    pub fn center(&self, target: CenterTarget) -> Option<Point> {
        match target {
            CenterTarget::Rotation => self.settings.rotation.center,
            CenterTarget::Enlargement => self.settings.enlargement.center,
        }
    }
}
