use weld_feature_editor::dialog::{FormField, INVALID_NUMERIC_MESSAGE};
use weld_feature_editor::{
    ui, AppCommand, AppController, AppIntent, AppState, DialogKind, DismissTrigger,
};

use super::add_feature;

fn submit(controller: &mut AppController, state: &mut AppState, kind: DialogKind) {
    controller
        .handle_intent(state, AppIntent::FeatureDialogSubmitted { kind })
        .expect("FeatureDialogSubmitted sollte funktionieren");
}

#[test]
fn test_invalid_input_shows_alert_and_keeps_dialog_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");
    state.dialogs.create.set_field(FormField::XMin, "1");
    state.dialogs.create.set_field(FormField::XMax, "2");
    state.dialogs.create.set_field(FormField::Width, "abc");

    submit(&mut controller, &mut state, DialogKind::Create);

    assert!(state.dialogs.create.is_open());
    assert!(state.features.is_empty());
    assert_eq!(
        state.dialogs.pending_alert(DialogKind::Create),
        Some(INVALID_NUMERIC_MESSAGE)
    );
    assert_eq!(state.dialogs.create.field(FormField::Width), Some("abc"));
    assert_eq!(state.dialogs.create.field(FormField::XMin), Some("1"));
}

#[test]
fn test_submit_is_blocked_until_alert_is_acknowledged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");
    submit(&mut controller, &mut state, DialogKind::Create);
    assert!(state.dialogs.pending_alert(DialogKind::Create).is_some());
    let logged = state.command_log.len();

    // Formular gesperrt: Submit erzeugt keinen Command
    state.dialogs.create.set_field(FormField::XMin, "1");
    state.dialogs.create.set_field(FormField::XMax, "2");
    state.dialogs.create.set_field(FormField::Width, "3");
    submit(&mut controller, &mut state, DialogKind::Create);
    assert_eq!(state.command_log.len(), logged);
    assert!(state.features.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureAlertAcknowledged {
                kind: DialogKind::Create,
            },
        )
        .expect("FeatureAlertAcknowledged sollte funktionieren");
    assert!(state.dialogs.pending_alert(DialogKind::Create).is_none());
    assert!(state.dialogs.create.is_open());

    submit(&mut controller, &mut state, DialogKind::Create);
    assert!(!state.dialogs.create.is_open());
    assert_eq!(state.feature_count(), 1);
}

#[test]
fn test_each_dismiss_trigger_closes_without_saving() {
    for trigger in [
        DismissTrigger::CloseControl,
        DismissTrigger::CancelControl,
        DismissTrigger::Backdrop,
    ] {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        controller
            .handle_intent(&mut state, AppIntent::AddFeatureRequested)
            .expect("AddFeatureRequested sollte funktionieren");
        state.dialogs.create.set_field(FormField::XMin, "1");
        state.dialogs.create.set_field(FormField::XMax, "2");
        state.dialogs.create.set_field(FormField::Width, "3");

        controller
            .handle_intent(
                &mut state,
                AppIntent::FeatureDialogDismissed {
                    kind: DialogKind::Create,
                    trigger,
                },
            )
            .expect("FeatureDialogDismissed sollte funktionieren");

        assert!(!state.dialogs.create.is_open(), "{trigger:?}");
        assert!(state.dialogs.create.view().is_none(), "{trigger:?}");
        assert!(state.features.is_empty(), "{trigger:?}");

        // Verspäteter Submit nach dem Schließen bleibt folgenlos
        submit(&mut controller, &mut state, DialogKind::Create);
        assert!(state.features.is_empty(), "{trigger:?}");
    }
}

#[test]
fn test_reopening_add_dialog_drops_previous_cycle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");
    state.dialogs.create.set_field(FormField::Width, "42");

    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");

    assert!(state.dialogs.create.is_open());
    assert_eq!(state.dialogs.create.field(FormField::Width), Some(""));
    assert_eq!(
        state.dialogs.create.field(FormField::PositionTolerance),
        Some("0.5")
    );
    assert!(state.features.is_empty());
    assert!(state.outbox.is_empty());
}

#[test]
fn test_create_and_edit_dialogs_are_independent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = add_feature(&mut controller, &mut state, "1", "2", "3");

    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id: id.clone() })
        .expect("EditFeatureRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::AddFeatureRequested)
        .expect("AddFeatureRequested sollte funktionieren");

    assert!(state.dialogs.is_open(DialogKind::Create));
    assert!(state.dialogs.is_open(DialogKind::Edit));

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeatureDialogDismissed {
                kind: DialogKind::Edit,
                trigger: DismissTrigger::Backdrop,
            },
        )
        .expect("FeatureDialogDismissed sollte funktionieren");

    assert!(state.dialogs.is_open(DialogKind::Create));
    assert!(!state.dialogs.is_open(DialogKind::Edit));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::DismissFeatureDialog {
            kind: DialogKind::Edit,
            trigger: DismissTrigger::Backdrop
        })
    ));
}

#[test]
fn test_full_ui_renders_headless_with_open_dialogs() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = add_feature(&mut controller, &mut state, "1", "2", "3");
    controller
        .handle_intent(&mut state, AppIntent::EditFeatureRequested { id })
        .expect("EditFeatureRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte funktionieren");

    let ctx = egui::Context::default();
    let mut events = Vec::new();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        events.extend(ui::render_menu(ctx, &state));
        ui::render_status_bar(ctx, &state);
        events.extend(ui::render_feature_list(ctx, &state));
        events.extend(ui::show_options_dialog(ctx, &state));
        let options = state.options.clone();
        events.extend(ui::show_feature_dialog(
            ctx,
            &mut state.dialogs.create,
            &options,
        ));
        events.extend(ui::show_feature_dialog(ctx, &mut state.dialogs.edit, &options));
    });

    assert!(events.is_empty());
    assert!(state.dialogs.edit.is_open());
}
