//! Use-Cases für Features und die zugehörigen Dialoge.

use crate::app::{AppIntent, AppState};
use crate::core::{FeatureFormData, FeatureId, FeatureUpdate};
use crate::dialog::{DialogKind, DismissTrigger, SubmitOutcome};

/// Öffnet den Add-Dialog. Gespeicherte Werte kommen als `FeatureCreated` zurück.
pub fn open_create_dialog(state: &mut AppState) {
    let outbox = state.outbox.clone();
    state
        .dialogs
        .create
        .show(move |data| outbox.push(AppIntent::FeatureCreated { data }));
    log::info!("Add-Dialog geöffnet");
}

/// Öffnet den Edit-Dialog für ein Feature. Gespeicherte Werte kommen als
/// `FeatureUpdated` zurück.
pub fn open_edit_dialog(state: &mut AppState, id: &FeatureId) {
    let Some(record) = state.features.get(id).cloned() else {
        log::warn!("Feature {} existiert nicht", id);
        return;
    };

    let outbox = state.outbox.clone();
    state
        .dialogs
        .edit
        .show(&record, move |update| outbox.push(AppIntent::FeatureUpdated { update }));
    log::info!("Edit-Dialog für Feature {} geöffnet", id);
}

/// Schließt einen Dialog ohne zu speichern.
pub fn dismiss_dialog(state: &mut AppState, kind: DialogKind, trigger: DismissTrigger) {
    match kind {
        DialogKind::Create => state.dialogs.create.dismiss(trigger),
        DialogKind::Edit => state.dialogs.edit.dismiss(trigger),
    }
}

/// Validiert und speichert einen Dialog.
pub fn submit_dialog(state: &mut AppState, kind: DialogKind) {
    let outcome = match kind {
        DialogKind::Create => state.dialogs.create.submit(),
        DialogKind::Edit => state.dialogs.edit.submit(),
    };

    match outcome {
        SubmitOutcome::Saved => log::debug!("{:?}-Dialog gespeichert", kind),
        SubmitOutcome::Rejected(err) => {
            log::info!("{:?}-Dialog abgelehnt: {}", kind, err);
        }
        SubmitOutcome::NotOpen => log::debug!("{:?}-Dialog war nicht offen", kind),
    }
}

/// Bestätigt den Fehlerhinweis eines Dialogs.
pub fn acknowledge_alert(state: &mut AppState, kind: DialogKind) {
    match kind {
        DialogKind::Create => state.dialogs.create.acknowledge_alert(),
        DialogKind::Edit => state.dialogs.edit.acknowledge_alert(),
    }
}

/// Legt ein neues Feature an.
pub fn add_feature(state: &mut AppState, data: FeatureFormData) {
    let id = state.features.add(data);
    log::info!(
        "Feature {} angelegt (x: {} .. {}, Breite: {})",
        id,
        data.x_min,
        data.x_max,
        data.width
    );
    state.ui.status_message = Some(format!("Feature {} added", id));
}

/// Überschreibt ein bestehendes Feature mit den Werten aus dem Edit-Dialog.
pub fn update_feature(state: &mut AppState, update: &FeatureUpdate) {
    if !state.features.apply_update(update) {
        log::warn!("Update für unbekanntes Feature {} verworfen", update.id);
        return;
    }
    log::info!("Feature {} aktualisiert", update.id);
    state.ui.status_message = Some(format!("Feature {} updated", update.id));
}

/// Entfernt ein Feature. Ein Edit-Dialog für dieses Feature wird geschlossen.
pub fn remove_feature(state: &mut AppState, id: &FeatureId) {
    if state.features.remove(id).is_none() {
        log::debug!("Kein Feature {} zum Entfernen", id);
        return;
    }

    if state.dialogs.edit.feature_id() == Some(id) {
        state.dialogs.edit.close();
    }

    log::info!("Feature {} entfernt", id);
    state.ui.status_message = Some(format!("Feature {} removed", id));
}
