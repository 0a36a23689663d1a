//! Austauschbarer Projektspeicher.
//!
//! Lesen schlägt nie fehl: Fehlt die Datei oder ist sie beschädigt, liefert
//! `load_all` eine leere Sammlung und protokolliert den Grund.

use crate::project::{Project, ProjectCollection};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Dateiname des JSON-Projektspeichers.
pub const PROJECTS_FILE_NAME: &str = "transform_lab_projects.json";

/// Fehler beim Schreiben des Projektspeichers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dateisystem-Fehler
    #[error("Projektdatei {path} konnte nicht geschrieben werden: {source}")]
    Io {
        /// Betroffene Datei
        path: PathBuf,
        /// Ursache
        #[source]
        source: std::io::Error,
    },
    /// Serialisierung fehlgeschlagen
    #[error("Projekte konnten nicht serialisiert werden: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Speicher ist (absichtlich) nicht verfügbar
    #[error("Projektspeicher nicht verfügbar")]
    Unavailable,
}

/// Lese-/Schreibzugriff auf alle gespeicherten Projekte.
pub trait ProjectStore {
    /// Lädt alle Projekte. Fehler führen zu einer leeren Sammlung.
    fn load_all(&self) -> ProjectCollection;

    /// Ersetzt den gesamten Speicherinhalt.
    fn save_all(&mut self, projects: &ProjectCollection) -> Result<(), StoreError>;
}

/// Gespeichertes Format: Id-Map, Listen aus älteren Dateien werden ebenfalls gelesen.
///
/// Die Map-Schlüssel bleiben Strings, maßgeblich ist die Id im Datensatz.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredProjects {
    Map(IndexMap<String, Project>),
    List(Vec<Project>),
}

impl StoredProjects {
    fn into_collection(self) -> ProjectCollection {
        match self {
            Self::Map(map) => ProjectCollection::from_projects(map.into_values()),
            Self::List(list) => ProjectCollection::from_projects(list),
        }
    }
}

/// Parst den Inhalt einer Projektdatei.
pub fn parse_projects(json: &str) -> Result<ProjectCollection, serde_json::Error> {
    serde_json::from_str::<StoredProjects>(json).map(StoredProjects::into_collection)
}

/// Serialisiert Projekte als JSON-Objekt (Id → Projekt).
pub fn serialize_projects(projects: &ProjectCollection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(projects.as_map())
}

/// Projektspeicher in einer einzelnen JSON-Datei.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Speicher für eine bestimmte Datei.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Speicher mit Standard-Dateinamen im Verzeichnis `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PROJECTS_FILE_NAME))
    }

    /// Pfad der Projektdatei.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectStore for JsonFileStore {
    fn load_all(&self) -> ProjectCollection {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Keine Projektdatei unter {} gefunden", self.path.display());
                return ProjectCollection::new();
            }
            Err(e) => {
                log::warn!(
                    "Projektdatei {} nicht lesbar: {}",
                    self.path.display(),
                    e
                );
                return ProjectCollection::new();
            }
        };

        match parse_projects(&content) {
            Ok(projects) => {
                log::info!(
                    "{} Projekte aus {} geladen",
                    projects.len(),
                    self.path.display()
                );
                projects
            }
            Err(e) => {
                log::warn!(
                    "Projektdatei {} beschädigt, starte leer: {}",
                    self.path.display(),
                    e
                );
                ProjectCollection::new()
            }
        }
    }

    fn save_all(&mut self, projects: &ProjectCollection) -> Result<(), StoreError> {
        let json = serialize_projects(projects)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!(
            "{} Projekte nach {} geschrieben",
            projects.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Flüchtiger Speicher, z.B. für Tests.
///
/// Klone teilen sich denselben Inhalt.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<ProjectCollection>>,
    read_only: bool,
}

impl MemoryStore {
    /// Leerer Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Speicher mit vorbelegtem Inhalt.
    pub fn with_projects(projects: ProjectCollection) -> Self {
        Self {
            inner: Arc::new(Mutex::new(projects)),
            read_only: false,
        }
    }

    /// Speicher, dessen `save_all` immer fehlschlägt.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Aktueller Inhalt.
    pub fn snapshot(&self) -> ProjectCollection {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ProjectStore for MemoryStore {
    fn load_all(&self) -> ProjectCollection {
        self.snapshot()
    }

    fn save_all(&mut self, projects: &ProjectCollection) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = projects.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasSettings;
    use crate::point::Point;
    use crate::shape::Shape;
    use crate::transform::{TransformMode, TransformSettings};

    fn sample_collection() -> ProjectCollection {
        let mut projects = ProjectCollection::new();
        projects.ensure_empty_project("01.01.2026, 00:00:00".to_string());
        let mut settings = TransformSettings::default();
        settings.rotation.angle = 90.0;
        projects.insert(Project::snapshot(
            1_700_000_000_000,
            "02.01.2026, 10:00:00".to_string(),
            &Shape::new(vec![Point::new(1.0, 0.0), Point::new(0.0, 2.0)], false),
            TransformMode::Rotation,
            &settings,
            CanvasSettings::new(10, 800),
        ));
        projects
    }

    #[test]
    fn json_file_store_round_trips_collection() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let mut store = JsonFileStore::in_dir(dir.path());
        let projects = sample_collection();

        store.save_all(&projects).expect("Speichern sollte klappen");
        let loaded = store.load_all();

        assert_eq!(loaded, projects);
        assert!(store.path().ends_with(PROJECTS_FILE_NAME));
    }

    #[test]
    fn file_is_keyed_by_project_id() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let mut store = JsonFileStore::in_dir(dir.path());
        store.save_all(&sample_collection()).expect("Speichern");

        let raw = std::fs::read_to_string(store.path()).expect("Datei lesbar");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("gültiges JSON");
        assert!(value.get("0").is_some());
        assert_eq!(value["1700000000000"]["mode"], "rotation");
    }

    #[test]
    fn missing_file_yields_empty_collection() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let store = JsonFileStore::in_dir(dir.path().join("gibt_es_nicht"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_yields_empty_collection() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let store = JsonFileStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ kein json").expect("Schreiben");
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn list_format_is_accepted() {
        let json = r#"[{
            "id": 12, "date": "d", "points": [], "mode": "translation",
            "isShapeClosed": false, "translation": {"dx": 1, "dy": 2},
            "reflection": {"axis": "y", "m": 1, "c": 0},
            "rotation": {"angle": 0, "center": null, "direction": "anticlockwise"},
            "enlargement": {"scale": 2, "center": null},
            "canvasSettings": {"range": 20, "zoom": 600}
        }]"#;
        let projects = parse_projects(json).expect("Liste sollte parsen");
        assert_eq!(projects.get(12).map(|p| p.translation.dy), Some(2.0));
    }

    #[test]
    fn memory_store_clones_share_content() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.save_all(&sample_collection()).expect("Speichern");
        assert_eq!(store.load_all().len(), 2);
    }

    #[test]
    fn read_only_memory_store_rejects_writes() {
        let mut store = MemoryStore::read_only();
        let result = store.save_all(&sample_collection());
        assert!(matches!(result, Err(StoreError::Unavailable)));
    }
}
