//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;

pub use app_state::AppState;
pub use dialogs::{DialogsState, UiState};
