use crate::app::state::CenterTarget;
use crate::shared::AppOptions;
use std::path::PathBuf;
use transform_lab_engine::{CanvasSettings, Point, TransformMode, TransformSpec};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt an offene Form anhängen
    AddPoint { point: Point },
    /// Punkt einer offenen Form entfernen
    DeletePoint { index: usize },
    /// Offene Form schließen
    CloseShape,
    /// Dreh- oder Streckzentrum setzen (beendet die Zentrumswahl)
    SetCenter { target: CenterTarget, center: Point },
    /// Zentrumswahl umschalten
    ToggleCenterPick { target: CenterTarget },
    /// Modus wechseln (setzt dessen Parameter zurück)
    SetMode { mode: TransformMode },
    /// Parameter-Satz übernehmen (bereits geklemmt)
    SetTransformParams { spec: TransformSpec },
    /// Parameter des aktiven Modus zurücksetzen
    ResetActiveMode,
    /// Alle Punkte entfernen und Form öffnen
    ClearCanvas,
    /// Canvas-Einstellungen übernehmen (bereits geklemmt)
    SetCanvasSettings { canvas: CanvasSettings },
    /// Aktuelle Sitzung als Projekt speichern
    SaveProject,
    /// Zuletzt gespeichertes Projekt als PNG exportieren
    ExportSavedProject,
    /// Projektliste öffnen (lädt die Liste neu)
    OpenProjectsDialog,
    /// Projektliste schließen
    CloseProjectsDialog,
    /// Projekt laden
    LoadProject { id: u64 },
    /// Projekt löschen
    DeleteProject { id: u64 },
    /// Koordinaten-Tabelle öffnen
    OpenCoordinateTable,
    /// Koordinaten-Tabelle schließen
    CloseCoordinateTable,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Verzeichnis-Dialog für Exporte anfordern
    RequestExportDirDialog,
    /// Exportverzeichnis setzen
    SetExportDir { path: PathBuf },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Ob der Command die angezeigte Sitzung verändert.
    ///
    /// Solche Commands verwerfen eine vorübergehende Statusmeldung, damit
    /// wieder der aus dem Zustand abgeleitete Hinweis erscheint.
    pub fn clears_status_message(&self) -> bool {
        match self {
            Self::AddPoint { .. }
            | Self::DeletePoint { .. }
            | Self::CloseShape
            | Self::SetCenter { .. }
            | Self::ToggleCenterPick { .. }
            | Self::SetMode { .. }
            | Self::ResetActiveMode
            | Self::ClearCanvas
            | Self::LoadProject { .. } => true,
            Self::SetTransformParams { spec } => spec.mode() == TransformMode::Reflection,
            _ => false,
        }
    }
}
