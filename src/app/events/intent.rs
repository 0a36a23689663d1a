use crate::app::state::CenterTarget;
use crate::shared::AppOptions;
use glam::DVec2;
use std::path::PathBuf;
use transform_lab_engine::{CanvasSettings, TransformMode, TransformSpec};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf das Canvas (Pixel relativ zur oberen linken Canvas-Ecke)
    CanvasClicked { pos_px: DVec2 },
    /// Transformationsmodus gewählt
    ModeSelected { mode: TransformMode },
    /// Parameter der aktiven Transformation geändert (ungeklemmt)
    TransformParamsChanged { spec: TransformSpec },
    /// Zentrumswahl per Canvas-Klick an-/ausschalten
    CenterPickToggled { target: CenterTarget },
    /// „Reset Values": Parameter des aktiven Modus zurücksetzen
    ResetValuesRequested,
    /// „Clear Canvas": alle Punkte entfernen
    ClearCanvasRequested,
    /// Gitterbereich oder Zoom geändert (ungeklemmt)
    CanvasSettingsChanged { canvas: CanvasSettings },
    /// „Save & Export"
    SaveProjectRequested,
    /// Projektliste öffnen
    ProjectsDialogRequested,
    /// Projektliste schließen
    ProjectsDialogClosed,
    /// Projekt laden
    LoadProjectRequested { id: u64 },
    /// Projekt löschen
    DeleteProjectRequested { id: u64 },
    /// Koordinaten-Tabelle öffnen
    CoordinateTableRequested,
    /// Koordinaten-Tabelle schließen
    CoordinateTableClosed,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Verzeichnis-Dialog für Exporte öffnen
    ExportDirSelectionRequested,
    /// Exportverzeichnis gewählt
    ExportDirSelected { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,
}
