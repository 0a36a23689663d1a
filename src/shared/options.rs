//! Zentrale Konfiguration für Transform Lab.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use transform_lab_engine::{CanvasSettings, ClickTolerances};

// ── Farben ──────────────────────────────────────────────────────────

/// Originalform (#be185d).
pub const ORIGINAL_COLOR: [f32; 4] = [0.745, 0.094, 0.365, 1.0];
/// Transformierte Form (#0ea5e9).
pub const TRANSFORMED_COLOR: [f32; 4] = [0.055, 0.647, 0.914, 1.0];
/// Gitterlinien (#f1f5f9).
pub const GRID_COLOR: [f32; 4] = [0.945, 0.961, 0.976, 1.0];
/// Achsen und Achsenstriche (#334155).
pub const AXIS_COLOR: [f32; 4] = [0.2, 0.255, 0.333, 1.0];
/// Achsenbeschriftung (#64748b).
pub const TICK_LABEL_COLOR: [f32; 4] = [0.392, 0.455, 0.545, 1.0];
/// Gestrichelte Spiegelachse (#607d8b).
pub const REFLECTION_LINE_COLOR: [f32; 4] = [0.376, 0.490, 0.545, 1.0];
/// Drehzentrum (#9c27b0).
pub const ROTATION_CENTER_COLOR: [f32; 4] = [0.612, 0.153, 0.690, 1.0];
/// Streckzentrum (#009688).
pub const ENLARGEMENT_CENTER_COLOR: [f32; 4] = [0.0, 0.588, 0.533, 1.0];

// ── Formen ──────────────────────────────────────────────────────────

/// Deckkraft der Flächenfüllung (Hex-Alpha 0x30).
pub const FILL_ALPHA: f32 = 48.0 / 255.0;
/// Radius der Eckpunkte in Pixeln.
pub const POINT_RADIUS_PX: f32 = 6.0;
/// Linienstärke der Formkanten in Pixeln.
pub const SHAPE_LINE_WIDTH_PX: f32 = 3.0;

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Exportverzeichnis (relativ zur Optionen-Datei).
pub const EXPORT_DIR: &str = "exports";
/// Weißer Rand um das exportierte Canvas in Pixeln.
pub const EXPORT_PADDING_PX: u32 = 60;

/// Dateiname der Optionen-Datei.
const CONFIG_FILE_NAME: &str = "transform_lab.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `transform_lab.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Originalform (RGBA)
    pub original_color: [f32; 4],
    /// Farbe der transformierten Form
    pub transformed_color: [f32; 4],
    /// Farbe der Gitterlinien
    pub grid_color: [f32; 4],
    /// Farbe der Achsen
    pub axis_color: [f32; 4],
    /// Farbe der Achsenbeschriftung
    pub tick_label_color: [f32; 4],
    /// Farbe der Spiegelachse y = mx + c
    pub reflection_line_color: [f32; 4],
    /// Farbe des Drehzentrums
    pub rotation_center_color: [f32; 4],
    /// Farbe des Streckzentrums
    pub enlargement_center_color: [f32; 4],

    // ── Formen ──────────────────────────────────────────────────
    /// Deckkraft der Flächenfüllung (0.0..=1.0)
    pub fill_alpha: f32,
    /// Radius der Eckpunkte in Pixeln
    pub point_radius_px: f32,
    /// Linienstärke der Formkanten in Pixeln
    pub line_width_px: f32,
    /// Koordinaten neben den Punktnamen anzeigen
    #[serde(default)]
    pub show_coordinates: bool,

    // ── Editor ──────────────────────────────────────────────────
    /// Fangradius zum Schließen der Form (Pixel)
    pub close_radius_px: f64,
    /// Fangradius zum Löschen eines Punkts (Pixel)
    pub delete_radius_px: f64,
    /// Canvas-Einstellungen für neue Sitzungen
    #[serde(default)]
    pub default_canvas: CanvasSettings,

    // ── Export ──────────────────────────────────────────────────
    /// PNG nach erfolgreichem Speichern exportieren
    #[serde(default = "default_export_on_save")]
    pub export_on_save: bool,
    /// Exportverzeichnis (relativ zur Optionen-Datei oder absolut)
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Weißer Rand um das Canvas in Pixeln
    #[serde(default = "default_export_padding")]
    pub export_padding_px: u32,
}

impl Default for AppOptions {
    fn default() -> Self {
        let tolerances = ClickTolerances::default();
        Self {
            original_color: ORIGINAL_COLOR,
            transformed_color: TRANSFORMED_COLOR,
            grid_color: GRID_COLOR,
            axis_color: AXIS_COLOR,
            tick_label_color: TICK_LABEL_COLOR,
            reflection_line_color: REFLECTION_LINE_COLOR,
            rotation_center_color: ROTATION_CENTER_COLOR,
            enlargement_center_color: ENLARGEMENT_CENTER_COLOR,

            fill_alpha: FILL_ALPHA,
            point_radius_px: POINT_RADIUS_PX,
            line_width_px: SHAPE_LINE_WIDTH_PX,
            show_coordinates: false,

            close_radius_px: tolerances.close_radius_px,
            delete_radius_px: tolerances.delete_radius_px,
            default_canvas: CanvasSettings::default(),

            export_on_save: true,
            export_dir: default_export_dir(),
            export_padding_px: EXPORT_PADDING_PX,
        }
    }
}

/// Serde-Default für `export_on_save` (Abwärtskompatibilität).
fn default_export_on_save() -> bool {
    true
}

/// Serde-Default für `export_dir`.
fn default_export_dir() -> PathBuf {
    PathBuf::from(EXPORT_DIR)
}

/// Serde-Default für `export_padding_px`.
fn default_export_padding() -> u32 {
    EXPORT_PADDING_PX
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Verzeichnis neben der Binary (Optionen, Projekte, Exporte).
    pub fn app_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        Self::app_dir().join(CONFIG_FILE_NAME)
    }

    /// Exportverzeichnis; relative Pfade gelten ab `base`.
    pub fn resolve_export_dir(&self, base: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            base.join(&self.export_dir)
        }
    }

    /// Fangradien für Canvas-Klicks.
    pub fn tolerances(&self) -> ClickTolerances {
        ClickTolerances {
            close_radius_px: self.close_radius_px,
            delete_radius_px: self.delete_radius_px,
        }
    }

    /// Füllfarbe zu einer Kantenfarbe.
    pub fn fill_color(&self, stroke: [f32; 4]) -> [f32; 4] {
        [stroke[0], stroke[1], stroke[2], self.fill_alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_click_tolerances() {
        let opts = AppOptions::default();
        assert_eq!(opts.tolerances(), ClickTolerances::default());
        assert_eq!(opts.default_canvas, CanvasSettings::default());
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut opts = AppOptions::default();
        opts.show_coordinates = true;
        opts.delete_radius_px = 20.0;
        opts.default_canvas = CanvasSettings::new(10, 800);

        opts.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = AppOptions::load_from_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "original_color = \"rot\"").expect("Schreiben");

        assert_eq!(AppOptions::load_from_file(&path), AppOptions::default());
    }

    #[test]
    fn relative_export_dir_is_resolved_against_base() {
        let opts = AppOptions::default();
        let base = Path::new("/opt/lab");
        assert_eq!(opts.resolve_export_dir(base), base.join(EXPORT_DIR));

        let absolute = AppOptions {
            export_dir: PathBuf::from("/tmp/png"),
            ..AppOptions::default()
        };
        assert_eq!(absolute.resolve_export_dir(base), PathBuf::from("/tmp/png"));
    }
}
