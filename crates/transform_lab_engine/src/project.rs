//! Projekt-Snapshots und die geordnete Projektsammlung.

use crate::canvas::CanvasSettings;
use crate::point::Point;
use crate::shape::Shape;
use crate::transform::{
    Enlargement, Reflection, Rotation, TransformMode, TransformSettings, Translation,
};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Id des immer vorhandenen leeren Projekts.
pub const EMPTY_PROJECT_ID: u64 = 0;

/// Format des Anzeige-Datums.
const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Gespeicherter Sitzungs-Snapshot.
///
/// Feldnamen im JSON sind camelCase. Ältere Datensätze ohne `enlargement`
/// erhalten Faktor 1 um den Ursprung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 0 = leeres Projekt, sonst Erstellungszeitpunkt in Millisekunden
    pub id: u64,
    /// Anzeige-Datum
    pub date: String,
    /// Punkte der Originalform
    pub points: Vec<Point>,
    /// Aktiver Modus beim Speichern
    pub mode: TransformMode,
    /// Ob die Form geschlossen war
    pub is_shape_closed: bool,
    /// Verschiebungs-Parameter
    pub translation: Translation,
    /// Spiegelungs-Parameter
    pub reflection: Reflection,
    /// Dreh-Parameter
    pub rotation: Rotation,
    /// Streckungs-Parameter
    #[serde(default)]
    pub enlargement: Enlargement,
    /// Canvas-Einstellungen
    pub canvas_settings: CanvasSettings,
}

impl Project {
    /// Erstellt einen Snapshot der aktuellen Sitzung.
    pub fn snapshot(
        id: u64,
        date: String,
        shape: &Shape,
        mode: TransformMode,
        settings: &TransformSettings,
        canvas: CanvasSettings,
    ) -> Self {
        Self {
            id,
            date,
            points: shape.points.clone(),
            mode,
            is_shape_closed: shape.closed,
            translation: settings.translation,
            reflection: settings.reflection,
            rotation: settings.rotation,
            enlargement: settings.enlargement,
            canvas_settings: canvas,
        }
    }

    /// Das leere Projekt (Id 0) mit Standardwerten.
    pub fn empty(date: String) -> Self {
        Self::snapshot(
            EMPTY_PROJECT_ID,
            date,
            &Shape::default(),
            TransformMode::default(),
            &TransformSettings::default(),
            CanvasSettings::default(),
        )
    }

    /// Ob dies das leere Projekt ist.
    pub fn is_empty_project(&self) -> bool {
        self.id == EMPTY_PROJECT_ID
    }

    /// Die gespeicherte Form.
    pub fn shape(&self) -> Shape {
        Shape::new(self.points.clone(), self.is_shape_closed)
    }

    /// Alle vier gespeicherten Parameter-Sätze.
    pub fn settings(&self) -> TransformSettings {
        TransformSettings {
            translation: self.translation,
            reflection: self.reflection,
            rotation: self.rotation,
            enlargement: self.enlargement,
        }
    }

    /// Listen-Titel: `Empty Project` oder `<Mode> #id`.
    pub fn title(&self) -> String {
        if self.is_empty_project() {
            "Empty Project".to_string()
        } else {
            format!("{} #{}", self.mode.title(), self.id)
        }
    }

    /// Listen-Beschreibung der gespeicherten Transformation.
    pub fn description(&self) -> String {
        if self.is_empty_project() {
            "Start with a clean slate.".to_string()
        } else {
            self.settings().spec_for(self.mode).describe()
        }
    }
}

/// Formatiert einen Zeitpunkt als Anzeige-Datum.
pub fn format_date(time: DateTime<Local>) -> String {
    time.format(DATE_FORMAT).to_string()
}

/// Geordnete Sammlung aller Projekte (Id → Projekt).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCollection {
    projects: IndexMap<u64, Project>,
}

impl ProjectCollection {
    /// Leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Sammlung aus einer Projektliste. Doppelte Ids: das letzte gewinnt.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Stellt sicher, dass das leere Projekt existiert. Liefert `true`, wenn es ergänzt wurde.
    pub fn ensure_empty_project(&mut self, date: String) -> bool {
        if self.projects.contains_key(&EMPTY_PROJECT_ID) {
            return false;
        }
        self.projects
            .shift_insert(0, EMPTY_PROJECT_ID, Project::empty(date));
        true
    }

    /// Fügt ein Projekt ein oder ersetzt das mit derselben Id.
    pub fn insert(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Projekt nach Id.
    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Entfernt ein Projekt. Das leere Projekt bleibt immer erhalten.
    pub fn remove(&mut self, id: u64) -> Option<Project> {
        if id == EMPTY_PROJECT_ID {
            return None;
        }
        self.projects.shift_remove(&id)
    }

    /// Freie Id ab `candidate` (bei Kollision aufwärts zählend, nie 0).
    pub fn next_free_id(&self, candidate: u64) -> u64 {
        let mut id = candidate.max(1);
        while self.projects.contains_key(&id) {
            id += 1;
        }
        id
    }

    /// Anzahl der Projekte.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Ob die Sammlung leer ist.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projekte in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Projekte nach Id absteigend (neueste zuerst, leeres Projekt zuletzt).
    pub fn sorted_newest_first(&self) -> Vec<&Project> {
        let mut list: Vec<&Project> = self.projects.values().collect();
        list.sort_by(|a, b| b.id.cmp(&a.id));
        list
    }

    /// Interne Map (für die Serialisierung).
    pub(crate) fn as_map(&self) -> &IndexMap<u64, Project> {
        &self.projects
    }
}
