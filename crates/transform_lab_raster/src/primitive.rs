//! Backend-neutrale Zeichen-Primitive in Pixel-Koordinaten.
//!
//! Ursprung oben links, y wächst nach unten. Farben sind RGBA mit
//! Komponenten in 0.0..=1.0.

use glam::Vec2;

/// RGBA-Farbe (0.0..=1.0 pro Kanal).
pub type Rgba = [f32; 4];

/// Wandelt eine Hex-Farbe (`#rrggbb`) mit Deckkraft in RGBA um.
///
/// Ungültige Eingaben ergeben Schwarz.
pub fn hex_color(hex: &str, alpha: f32) -> Rgba {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map_or(0.0, |v| f32::from(v) / 255.0)
    };
    if digits.len() != 6 {
        return [0.0, 0.0, 0.0, alpha];
    }
    [channel(0), channel(2), channel(4), alpha]
}

/// Gleiche Farbe mit anderer Deckkraft.
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}

/// Strichmuster einer gestrichelten Linie (Strich, Lücke) in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    /// Strichlänge
    pub on: f32,
    /// Lückenlänge
    pub off: f32,
}

/// Ankerpunkt eines Texts relativ zu seiner Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Mittelpunkt des Texts
    #[default]
    Center,
    /// Linke Kante, vertikal mittig
    LeftCenter,
    /// Rechte Kante, vertikal mittig
    RightCenter,
    /// Untere Kante, horizontal mittig
    CenterBottom,
    /// Obere Kante, horizontal mittig
    CenterTop,
    /// Obere rechte Ecke
    RightTop,
    /// Untere linke Ecke
    LeftBottom,
}

impl TextAnchor {
    /// Obere linke Ecke eines Texts der Größe `size` mit Anker an `pos`.
    pub fn top_left(self, pos: Vec2, size: Vec2) -> Vec2 {
        match self {
            Self::Center => pos - size / 2.0,
            Self::LeftCenter => Vec2::new(pos.x, pos.y - size.y / 2.0),
            Self::RightCenter => Vec2::new(pos.x - size.x, pos.y - size.y / 2.0),
            Self::CenterBottom => Vec2::new(pos.x - size.x / 2.0, pos.y - size.y),
            Self::CenterTop => Vec2::new(pos.x - size.x / 2.0, pos.y),
            Self::RightTop => Vec2::new(pos.x - size.x, pos.y),
            Self::LeftBottom => Vec2::new(pos.x, pos.y - size.y),
        }
    }
}

/// Ein einzelnes Zeichen-Primitiv.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Linie (optional gestrichelt)
    Line {
        /// Startpunkt
        from: Vec2,
        /// Endpunkt
        to: Vec2,
        /// Linienstärke in Pixeln
        width: f32,
        /// Farbe
        color: Rgba,
        /// Strichmuster (None = durchgezogen)
        dash: Option<Dash>,
    },
    /// Offener oder geschlossener Linienzug
    Polyline {
        /// Eckpunkte
        points: Vec<Vec2>,
        /// Letzten mit erstem Punkt verbinden
        closed: bool,
        /// Linienstärke in Pixeln
        width: f32,
        /// Farbe
        color: Rgba,
    },
    /// Gefülltes Polygon ohne Rand
    Polygon {
        /// Eckpunkte
        points: Vec<Vec2>,
        /// Füllfarbe
        fill: Rgba,
    },
    /// Gefüllter Kreis
    Circle {
        /// Mittelpunkt
        center: Vec2,
        /// Radius in Pixeln
        radius: f32,
        /// Füllfarbe
        fill: Rgba,
    },
    /// Textzeile
    Text {
        /// Ankerposition
        pos: Vec2,
        /// Inhalt
        text: String,
        /// Schrifthöhe in Pixeln
        size: f32,
        /// Farbe
        color: Rgba,
        /// Fett
        bold: bool,
        /// Lage des Ankers
        anchor: TextAnchor,
    },
}

/// Geordnete Liste von Primitiven (später gezeichnete liegen oben).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<Primitive>,
}

impl DrawList {
    /// Leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Primitiv an.
    pub fn push(&mut self, primitive: Primitive) {
        self.items.push(primitive);
    }

    /// Durchgezogene Linie.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.push(Primitive::Line {
            from,
            to,
            width,
            color,
            dash: None,
        });
    }

    /// Gestrichelte Linie.
    pub fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, dash: Dash) {
        self.push(Primitive::Line {
            from,
            to,
            width,
            color,
            dash: Some(dash),
        });
    }

    /// Linienzug, optional geschlossen.
    pub fn polyline(&mut self, points: Vec<Vec2>, closed: bool, width: f32, color: Rgba) {
        self.push(Primitive::Polyline {
            points,
            closed,
            width,
            color,
        });
    }

    /// Gefülltes Polygon.
    pub fn polygon(&mut self, points: Vec<Vec2>, fill: Rgba) {
        self.push(Primitive::Polygon { points, fill });
    }

    /// Gefüllter Kreis.
    pub fn circle(&mut self, center: Vec2, radius: f32, fill: Rgba) {
        self.push(Primitive::Circle {
            center,
            radius,
            fill,
        });
    }

    /// Fette Textzeile.
    pub fn bold_text(&mut self, pos: Vec2, text: impl Into<String>, size: f32, color: Rgba, anchor: TextAnchor) {
        self.push(Primitive::Text {
            pos,
            text: text.into(),
            size,
            color,
            bold: true,
            anchor,
        });
    }

    /// Normale Textzeile.
    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, size: f32, color: Rgba, anchor: TextAnchor) {
        self.push(Primitive::Text {
            pos,
            text: text.into(),
            size,
            color,
            bold: false,
            anchor,
        });
    }

    /// Alle Primitive in Zeichenreihenfolge.
    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    /// Anzahl der Primitive.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Ob die Liste leer ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for DrawList {
    type Item = Primitive;
    type IntoIter = std::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
