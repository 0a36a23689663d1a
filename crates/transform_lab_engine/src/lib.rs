//! `transform_lab_engine` — Rechenkern des Transform Lab.
//!
//! Enthält alles, was ohne UI auskommt:
//! - `transform` — reine Abbildungen (Verschiebung, Spiegelung, Drehung, Streckung)
//! - `point` / `shape` — Punkt- und Form-Datenmodell
//! - `canvas` — Umrechnung Gitter ↔ Pixel
//! - `editor` — Auflösung von Canvas-Klicks (Punkt setzen, löschen, Form schließen)
//! - `project` / `store` — Projekt-Snapshots und austauschbarer Projektspeicher
//!
//! # Beispiel
//! ```
//! use transform_lab_engine::{apply, Point, TransformSpec, Translation};
//!
//! let shape = [Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
//! let moved = apply(&shape, &TransformSpec::Translation(Translation { dx: 3.0, dy: -1.0 }));
//! assert_eq!(moved[1], Point::new(5.0, -1.0));
//! ```

pub mod canvas;
pub mod editor;
pub mod point;
pub mod project;
pub mod shape;
pub mod store;
pub mod transform;

pub use canvas::CanvasSettings;
pub use editor::{resolve_click, ClickAction, ClickTolerances};
pub use point::{format_coordinate, point_label, Point};
pub use project::{format_date, Project, ProjectCollection, EMPTY_PROJECT_ID};
pub use shape::Shape;
pub use store::{
    parse_projects, serialize_projects, JsonFileStore, MemoryStore, ProjectStore, StoreError,
    PROJECTS_FILE_NAME,
};
pub use transform::{
    apply, center_label, Enlargement, Reflection, ReflectionAxis, Rotation, RotationDirection, TransformMode,
    TransformSettings, TransformSpec, Translation,
};
