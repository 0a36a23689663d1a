use std::path::PathBuf;
use transform_lab_engine::ProjectCollection;

/// Zustand der Projektliste.
#[derive(Debug, Clone, Default)]
pub struct ProjectsDialogState {
    /// Ob die Projektliste angezeigt wird
    pub visible: bool,
    /// Beim Öffnen geladene Projekte
    pub projects: ProjectCollection,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Vorübergehende Statusmeldung (ersetzt den abgeleiteten Hinweis)
    pub status_message: Option<String>,
    /// Projektliste
    pub projects_dialog: ProjectsDialogState,
    /// Ob die Koordinaten-Tabelle angezeigt wird
    pub show_coordinate_table: bool,
    /// Ob der Verzeichnis-Dialog für Exporte geöffnet werden soll
    pub show_export_dir_dialog: bool,
    /// Id des zuletzt gespeicherten Projekts (Export-Quelle)
    pub last_saved_project: Option<u64>,
    /// Pfad des zuletzt geschriebenen PNG-Exports
    pub last_export_path: Option<PathBuf>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
