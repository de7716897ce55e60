use approx::assert_relative_eq;
use weld_feature_editor::dialog::FormField;
use weld_feature_editor::{
    AppCommand, AppController, AppIntent, AppState, DialogKind, FeatureFormData, FeatureId,
    FeatureRecord,
};

use super::add_feature;

#[test]
fn test_add_feature_flow_creates_record_with_fresh_id() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");
    assert!(state.dialogs.create.is_open());
    assert_eq!(state.dialogs.create.field(FormField::XMin), Some(""));

    let dialog = &mut state.dialogs.create;
    dialog.set_field(FormField::XMin, "10");
    dialog.set_field(FormField::XMax, "12.5");
    dialog.set_field(FormField::Width, "4");

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureDialogSubmitted {
                kind: DialogKind::Create,
            },
        )
        .expect("FeatureDialogSubmitted sollte funktionieren");

    assert!(!state.dialogs.create.is_open());
    assert_eq!(state.feature_count(), 1);

    let record = state
        .features
        .get(&FeatureId::from(1))
        .expect("Feature 1 sollte existieren");
    assert_eq!(record.x_min, 10.0);
    assert_eq!(record.x_max, 12.5);
    assert_eq!(record.width, 4.0);
    assert_eq!(record.position_tolerance, 0.5);
    assert_eq!(record.width_tolerance, 0.3);
    assert_eq!(record.depth_tolerance, 0.2);
    assert_eq!(record.expected_depth, -1.0);
    assert_eq!(state.ui.status_message.as_deref(), Some("Feature 1 added"));

    // Submit → Callback → FeatureCreated → AddFeature im selben Aufruf
    let commands: Vec<&AppCommand> = state.command_log.entries().iter().collect();
    assert!(matches!(commands[0], AppCommand::OpenCreateFeatureDialog));
    assert!(matches!(
        commands[1],
        AppCommand::SubmitFeatureDialog {
            kind: DialogKind::Create
        }
    ));
    assert!(matches!(commands[2], AppCommand::AddFeature { .. }));
}

#[test]
fn test_second_feature_gets_next_id() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let first = add_feature(&mut controller, &mut state, "0", "1", "2");
    let second = add_feature(&mut controller, &mut state, "3", "4", "5");

    assert_eq!(first, FeatureId::from(1));
    assert_eq!(second, FeatureId::from(2));
    assert_eq!(state.feature_count(), 2);
}

#[test]
fn test_edit_feature_flow_prefills_and_updates_in_place() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = add_feature(&mut controller, &mut state, "1", "2", "3");

    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id: id.clone() })
        .expect("EditFeatureRequested sollte funktionieren");

    let dialog = &mut state.dialogs.edit;
    assert!(dialog.is_open());
    assert_eq!(dialog.feature_id(), Some(&id));
    assert_eq!(dialog.field(FormField::XMin), Some("1"));
    assert_eq!(dialog.field(FormField::Width), Some("3"));
    assert_eq!(dialog.field(FormField::PositionTolerance), Some("0.5"));
    assert_eq!(dialog.field(FormField::ExpectedDepth), Some("-1"));

    dialog.set_field(FormField::Width, "3.25");
    dialog.set_field(FormField::DepthTolerance, "0.15");

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureDialogSubmitted {
                kind: DialogKind::Edit,
            },
        )
        .expect("FeatureDialogSubmitted sollte funktionieren");

    assert!(!state.dialogs.edit.is_open());
    assert_eq!(state.feature_count(), 1);

    let record = state.features.get(&id).expect("Feature sollte bleiben");
    assert_eq!(record.id, id);
    assert_relative_eq!(record.width, 3.25);
    assert_relative_eq!(record.depth_tolerance, 0.15);
    assert_eq!(record.x_min, 1.0);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some(format!("Feature {} updated", id).as_str())
    );
}

#[test]
fn test_edit_unknown_feature_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditFeatureRequested {
                id: FeatureId::from(99),
            },
        )
        .expect("Unbekannte ID sollte keinen Fehler liefern");

    assert!(!state.dialogs.edit.is_open());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_update_for_unknown_feature_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_feature(&mut controller, &mut state, "1", "2", "3");

    let data = FeatureFormData {
        x_min: 5.0,
        x_max: 6.0,
        width: 7.0,
        position_tolerance: 0.5,
        width_tolerance: 0.3,
        depth_tolerance: 0.2,
        expected_depth: -1.0,
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureUpdated {
                update: weld_feature_editor::FeatureUpdate {
                    id: FeatureId::from("ghost"),
                    data,
                },
            },
        )
        .expect("FeatureUpdated sollte ohne Fehler durchlaufen");

    assert_eq!(state.feature_count(), 1);
    assert!(state.features.get(&FeatureId::from("ghost")).is_none());
}

#[test]
fn test_text_id_survives_edit_cycle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = FeatureId::from("seam-a");
    state.features.insert(FeatureRecord::from_form(
        id.clone(),
        FeatureFormData {
            x_min: 0.0,
            x_max: 100.0,
            width: 6.0,
            position_tolerance: 0.5,
            width_tolerance: 0.3,
            depth_tolerance: 0.2,
            expected_depth: -1.5,
        },
    ));

    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id: id.clone() })
        .expect("EditFeatureRequested sollte funktionieren");
    state.dialogs.edit.set_field(FormField::XMax, "90");
    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureDialogSubmitted {
                kind: DialogKind::Edit,
            },
        )
        .expect("FeatureDialogSubmitted sollte funktionieren");

    let record = state.features.get(&id).expect("Feature sollte bleiben");
    assert_eq!(record.x_max, 90.0);
    assert_eq!(record.expected_depth, -1.5);
}

#[test]
fn test_remove_feature_closes_its_edit_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = add_feature(&mut controller, &mut state, "1", "2", "3");

    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id: id.clone() })
        .expect("EditFeatureRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::RemoveFeatureRequested { id: id.clone() })
        .expect("RemoveFeatureRequested sollte funktionieren");

    assert!(state.features.is_empty());
    assert!(!state.dialogs.edit.is_open());
}

#[test]
fn test_remove_other_feature_keeps_edit_dialog_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let first = add_feature(&mut controller, &mut state, "1", "2", "3");
    let second = add_feature(&mut controller, &mut state, "4", "5", "6");

    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id: first.clone() })
        .expect("EditFeatureRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::RemoveFeatureRequested { id: second })
        .expect("RemoveFeatureRequested sollte funktionieren");

    assert_eq!(state.feature_count(), 1);
    assert_eq!(state.dialogs.edit.feature_id(), Some(&first));
}
