//! Transform Lab Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CenterTarget, SessionState, UiState,
};
pub use shared::{AppOptions, CenterMarker, RenderScene};
pub use transform_lab_engine::{
    apply, CanvasSettings, Point, Project, ProjectCollection, Shape, TransformMode,
    TransformSettings, TransformSpec,
};
