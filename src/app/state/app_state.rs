use crate::app::CommandLog;
use crate::shared::AppOptions;

use super::{SessionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Arbeitssitzung
    pub session: SessionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Export)
    pub options: AppOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren App-State; das Canvas folgt `options.default_canvas`.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            session: SessionState::new(options.default_canvas.clamped()),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl der Punkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.session.shape.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
