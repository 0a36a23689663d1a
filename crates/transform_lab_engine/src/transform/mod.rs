//! Transformations-Kern: reine Abbildungen einer Punktfolge.
//!
//! `apply` bildet jede Eingabe-Punktfolge auf eine neue Folge gleicher Länge
//! und gleicher Reihenfolge ab (Punkt i ↦ transformierter Punkt i). Die Eingabe
//! wird nie verändert. Für endliche Eingaben gibt es keine Fehlerfälle,
//! NaN/Unendlich werden rechnerisch durchgereicht.

use crate::point::{format_coordinate, Point};
use serde::{Deserialize, Serialize};


/// Wendet eine Transformation auf alle Punkte an.
pub fn apply(points: &[Point], spec: &TransformSpec) -> Vec<Point> {
    points.iter().map(|&p| spec.apply_point(p)).collect()
}

// ── Parameter-Sätze ─────────────────────────────────────────────────

/// Verschiebung um (dx, dy).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    /// Verschiebung in x-Richtung
    pub dx: f64,
    /// Verschiebung in y-Richtung
    pub dy: f64,
}

/// Spiegelachse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionAxis {
    /// Horizontale Achse (y → -y)
    #[default]
    X,
    /// Vertikale Achse (x → -x)
    Y,
    /// Beliebige Gerade y = m·x + c
    Custom,
}

/// Spiegelung an einer Achse oder an der Geraden y = m·x + c.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    /// Gewählte Achse
    pub axis: ReflectionAxis,
    /// Steigung (nur bei `Custom`)
    pub m: f64,
    /// y-Achsenabschnitt (nur bei `Custom`)
    pub c: f64,
}

impl Default for Reflection {
    fn default() -> Self {
        Self {
            axis: ReflectionAxis::X,
            m: 1.0,
            c: 0.0,
        }
    }
}

/// Drehrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    /// Im Uhrzeigersinn (negativer Winkel)
    Clockwise,
    /// Gegen den Uhrzeigersinn (positiver Winkel)
    #[default]
    Anticlockwise,
}

impl RotationDirection {
    /// Gegenrichtung.
    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::Anticlockwise,
            Self::Anticlockwise => Self::Clockwise,
        }
    }

    /// Vorzeichen des Drehwinkels.
    fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::Anticlockwise => 1.0,
        }
    }

    /// Anzeigename (klein geschrieben wie im Projekt-Format).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::Anticlockwise => "anticlockwise",
        }
    }
}

/// Drehung um `center` (None = Ursprung).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// Drehwinkel in Grad
    pub angle: f64,
    /// Drehzentrum
    pub center: Option<Point>,
    /// Drehrichtung
    pub direction: RotationDirection,
}

/// Zentrische Streckung um `center` (None = Ursprung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enlargement {
    /// Streckfaktor
    pub scale: f64,
    /// Streckzentrum
    pub center: Option<Point>,
}

impl Default for Enlargement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: None,
        }
    }
}

impl Translation {
    fn apply_point(&self, p: Point) -> Point {
        Point::new(p.x + self.dx, p.y + self.dy)
    }
}

impl Reflection {
    fn apply_point(&self, p: Point) -> Point {
        match self.axis {
            ReflectionAxis::X => Point::new(p.x, -p.y),
            ReflectionAxis::Y => Point::new(-p.x, p.y),
            ReflectionAxis::Custom => {
                let (m, c) = (self.m, self.c);
                let denom = 1.0 + m * m;
                // Für reelle m unerreichbar; Identität statt Division durch 0.
                if denom == 0.0 {
                    return p;
                }
                let x = (p.x * (1.0 - m * m) + p.y * 2.0 * m - 2.0 * m * c) / denom;
                let y = (p.x * 2.0 * m + p.y * (m * m - 1.0) + 2.0 * c) / denom;
                Point::new(x, y)
            }
        }
    }

    /// Beschriftung der Spiegelachse (`X-Axis`, `Y-Axis`, `y=mx+c`).
    pub fn line_label(&self) -> String {
        match self.axis {
            ReflectionAxis::X => "X-Axis".to_string(),
            ReflectionAxis::Y => "Y-Axis".to_string(),
            ReflectionAxis::Custom => format!(
                "y={}x+{}",
                format_coordinate(self.m),
                format_coordinate(self.c)
            ),
        }
    }
}

impl Rotation {
    fn apply_point(&self, p: Point) -> Point {
        let center = self.center.unwrap_or(Point::ORIGIN);
        let rad = self.angle * self.direction.sign() * std::f64::consts::PI / 180.0;
        let (sin, cos) = rad.sin_cos();
        let (dx, dy) = (p.x - center.x, p.y - center.y);
        Point::new(cos * dx - sin * dy + center.x, sin * dx + cos * dy + center.y)
    }
}

impl Enlargement {
    fn apply_point(&self, p: Point) -> Point {
        let center = self.center.unwrap_or(Point::ORIGIN);
        Point::new(
            center.x + self.scale * (p.x - center.x),
            center.y + self.scale * (p.y - center.y),
        )
    }
}

// ── Transformations-Auswahl ─────────────────────────────────────────

/// Eine konkrete Transformation mit ihren Parametern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformSpec {
    /// Verschiebung
    Translation(Translation),
    /// Spiegelung
    Reflection(Reflection),
    /// Drehung
    Rotation(Rotation),
    /// Zentrische Streckung
    Enlargement(Enlargement),
}

impl TransformSpec {
    /// Bildet einen einzelnen Punkt ab.
    pub fn apply_point(&self, p: Point) -> Point {
        match self {
            Self::Translation(t) => t.apply_point(p),
            Self::Reflection(r) => r.apply_point(p),
            Self::Rotation(r) => r.apply_point(p),
            Self::Enlargement(e) => e.apply_point(p),
        }
    }

    /// Modus-Tag dieser Transformation.
    pub fn mode(&self) -> TransformMode {
        match self {
            Self::Translation(_) => TransformMode::Translation,
            Self::Reflection(_) => TransformMode::Reflection,
            Self::Rotation(_) => TransformMode::Rotation,
            Self::Enlargement(_) => TransformMode::Enlargement,
        }
    }

    /// Anzeige-Policy: Ob die Transformation als „angewendet" dargestellt wird.
    ///
    /// Ändert nichts an `apply`, das auch Identitäten durchrechnet.
    pub fn is_effective(&self) -> bool {
        match self {
            Self::Translation(t) => t.dx != 0.0 || t.dy != 0.0,
            Self::Reflection(_) => true,
            Self::Rotation(r) => r.angle != 0.0,
            Self::Enlargement(e) => e.scale != 1.0,
        }
    }

    /// Menschenlesbare Beschreibung, z.B. `Translated by (+3, -1)`.
    pub fn describe(&self) -> String {
        match self {
            Self::Translation(t) => format!(
                "Translated by ({}, {})",
                signed(t.dx),
                signed(t.dy)
            ),
            Self::Reflection(r) => format!("Reflected on {}", r.line_label()),
            Self::Rotation(r) => format!(
                "{}° {} around {}",
                format_coordinate(r.angle),
                r.direction.as_str(),
                center_label(r.center)
            ),
            Self::Enlargement(e) => format!(
                "Enlarged by factor {} around {}",
                format_coordinate(e.scale),
                center_label(e.center)
            ),
        }
    }
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_coordinate(value))
    } else {
        format_coordinate(value)
    }
}

/// Beschriftung eines optionalen Zentrums (`Origin` oder `(x, y)`).
pub fn center_label(center: Option<Point>) -> String {
    center.map_or_else(|| "Origin".to_string(), |c| c.to_string())
}

/// Aktiver Transformationsmodus (nur das Tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Verschiebung
    #[default]
    Translation,
    /// Spiegelung
    Reflection,
    /// Drehung
    Rotation,
    /// Zentrische Streckung
    Enlargement,
}

impl TransformMode {
    /// Alle Modi in Anzeigereihenfolge.
    pub const ALL: [Self; 4] = [
        Self::Translation,
        Self::Reflection,
        Self::Rotation,
        Self::Enlargement,
    ];

    /// Titel mit großem Anfangsbuchstaben.
    pub fn title(self) -> &'static str {
        match self {
            Self::Translation => "Translation",
            Self::Reflection => "Reflection",
            Self::Rotation => "Rotation",
            Self::Enlargement => "Enlargement",
        }
    }

    /// Kleingeschriebenes Tag (Projekt-Format, Dateinamen).
    pub fn slug(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Reflection => "reflection",
            Self::Rotation => "rotation",
            Self::Enlargement => "enlargement",
        }
    }
}

// ── Alle Parameter-Sätze einer Sitzung ──────────────────────────────

/// Hält alle vier Parameter-Sätze gleichzeitig.
///
/// Sitzung und gespeicherte Projekte tragen immer alle vier Sätze,
/// unabhängig vom aktiven Modus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformSettings {
    /// Verschiebungs-Parameter
    pub translation: Translation,
    /// Spiegelungs-Parameter
    pub reflection: Reflection,
    /// Dreh-Parameter
    pub rotation: Rotation,
    /// Streckungs-Parameter
    pub enlargement: Enlargement,
}

impl TransformSettings {
    /// Zusätzlicher Verschiebe-Spielraum über den Gitterbereich hinaus.
    pub const TRANSLATION_MARGIN: f64 = 40.0;
    /// Maximaler Drehwinkel in Grad.
    pub const ANGLE_MAX: f64 = 360.0;
    /// Maximaler Streckfaktor.
    pub const SCALE_MAX: f64 = 10.0;

    /// Baut die Transformation für den gewählten Modus.
    pub fn spec_for(&self, mode: TransformMode) -> TransformSpec {
        match mode {
            TransformMode::Translation => TransformSpec::Translation(self.translation),
            TransformMode::Reflection => TransformSpec::Reflection(self.reflection),
            TransformMode::Rotation => TransformSpec::Rotation(self.rotation),
            TransformMode::Enlargement => TransformSpec::Enlargement(self.enlargement),
        }
    }

    /// Setzt den Parameter-Satz eines Modus auf Standardwerte zurück.
    pub fn reset(&mut self, mode: TransformMode) {
        match mode {
            TransformMode::Translation => self.translation = Translation::default(),
            TransformMode::Reflection => self.reflection = Reflection::default(),
            TransformMode::Rotation => self.rotation = Rotation::default(),
            TransformMode::Enlargement => self.enlargement = Enlargement::default(),
        }
    }

    /// Übernimmt den Parameter-Satz einer Transformation.
    pub fn set_spec(&mut self, spec: TransformSpec) {
        match spec {
            TransformSpec::Translation(t) => self.translation = t,
            TransformSpec::Reflection(r) => self.reflection = r,
            TransformSpec::Rotation(r) => self.rotation = r,
            TransformSpec::Enlargement(e) => self.enlargement = e,
        }
    }

    /// Begrenzt alle Werte auf die Schieberegler-Bereiche für den Gitterbereich `range`.
    ///
    /// dx/dy: ±(range + 40), m/c: ±range, Winkel 0..=360, Faktor 0..=10.
    pub fn clamped(mut self, range: u32) -> Self {
        let range = f64::from(range);
        let max_move = range + Self::TRANSLATION_MARGIN;
        self.translation.dx = self.translation.dx.clamp(-max_move, max_move);
        self.translation.dy = self.translation.dy.clamp(-max_move, max_move);
        self.reflection.m = self.reflection.m.clamp(-range, range);
        self.reflection.c = self.reflection.c.clamp(-range, range);
        self.rotation.angle = self.rotation.angle.clamp(0.0, Self::ANGLE_MAX);
        self.enlargement.scale = self.enlargement.scale.clamp(0.0, Self::SCALE_MAX);
        self
    }
}
