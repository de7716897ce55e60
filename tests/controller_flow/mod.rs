//! Controller-Flows rund um die Feature-Dialoge.

mod dialogs;
mod features;

use weld_feature_editor::dialog::FormField;
use weld_feature_editor::{AppController, AppIntent, AppState, DialogKind, FeatureId};

/// Öffnet den Add-Dialog, füllt die Pflichtfelder und speichert.
pub fn add_feature(
    controller: &mut AppController,
    state: &mut AppState,
    x_min: &str,
    x_max: &str,
    width: &str,
) -> FeatureId {
    controller
        .handle_intent(state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");

    let dialog = &mut state.dialogs.create;
    dialog.set_field(FormField::XMin, x_min);
    dialog.set_field(FormField::XMax, x_max);
    dialog.set_field(FormField::Width, width);

    controller
        .handle_intent(
            state,
            AppIntent::FeatureDialogSubmitted {
                kind: DialogKind::Create,
            },
        )
        .expect("FeatureDialogSubmitted sollte funktionieren");

    state
        .features
        .iter()
        .last()
        .map(|record| record.id.clone())
        .expect("Es sollte ein Feature angelegt sein")
}
