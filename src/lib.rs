//! Weld Feature Editor Library.
//! Feature-Dialoge, Host-State und egui-Oberfläche als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod dialog;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DialogsState, UiState};
pub use core::{FeatureFormData, FeatureId, FeatureList, FeatureRecord, FeatureUpdate};
pub use dialog::{
    CreateFeatureDialog, DialogKind, DismissTrigger, EditFeatureDialog, FormError, FormField,
    SubmitOutcome,
};
pub use shared::EditorOptions;
