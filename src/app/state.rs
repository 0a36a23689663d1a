//! Application State — zentrale Datenhaltung.

mod app_state;
mod session;
mod ui;

pub use app_state::AppState;
pub use session::{CenterTarget, SessionState};
pub use ui::{ProjectsDialogState, UiState};
