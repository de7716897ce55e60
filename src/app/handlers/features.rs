//! Handler für Features und Feature-Dialoge.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{FeatureFormData, FeatureId, FeatureUpdate};
use crate::dialog::{DialogKind, DismissTrigger};

/// Öffnet den Add-Dialog.
pub fn open_create_dialog(state: &mut AppState) {
    use_cases::features::open_create_dialog(state);
}

/// Öffnet den Edit-Dialog für ein Feature.
pub fn open_edit_dialog(state: &mut AppState, id: &FeatureId) {
    use_cases::features::open_edit_dialog(state, id);
}

/// Schließt einen Dialog ohne Speichern.
pub fn dismiss_dialog(state: &mut AppState, kind: DialogKind, trigger: DismissTrigger) {
    use_cases::features::dismiss_dialog(state, kind, trigger);
}

/// Validiert und speichert einen Dialog.
pub fn submit_dialog(state: &mut AppState, kind: DialogKind) {
    use_cases::features::submit_dialog(state, kind);
}

pub fn acknowledge_alert(state: &mut AppState, kind: DialogKind) {
    use_cases::features::acknowledge_alert(state, kind);
}

/// Nimmt ein neues Feature in die Liste auf.
pub fn add(state: &mut AppState, data: FeatureFormData) {
    use_cases::features::add_feature(state, data);
}

/// Überschreibt ein Feature.
pub fn update(state: &mut AppState, update: &FeatureUpdate) {
    use_cases::features::update_feature(state, update);
}

/// Entfernt ein Feature.
pub fn remove(state: &mut AppState, id: &FeatureId) {
    use_cases::features::remove_feature(state, id);
}
