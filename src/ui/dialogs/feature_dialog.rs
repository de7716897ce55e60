use crate::app::AppIntent;
use crate::dialog::view::{ControlRole, ControlView, FormView, GroupView};
use crate::dialog::{DialogVariant, DismissTrigger, FeatureDialog, FormValues, OverlayView};
use crate::shared::EditorOptions;

/// Was der Benutzer in diesem Frame im Dialog ausgelöst hat.
#[derive(Default)]
struct DialogClicks {
    close: bool,
    submit: bool,
    cancel: bool,
}

/// Zeigt einen Feature-Dialog (Add oder Edit) als egui-Modal.
///
/// Die Eingaben werden direkt in den Formular-Puffern bearbeitet.
/// Submit und Dismiss laufen als Intents über den Controller.
pub fn show_feature_dialog<V: DialogVariant>(
    ctx: &egui::Context,
    dialog: &mut FeatureDialog<V>,
    options: &EditorOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let kind = dialog.kind();
    let alert = dialog.pending_alert().map(str::to_owned);

    let Some((overlay, form)) = dialog.parts_mut() else {
        return events;
    };

    let mut clicks = DialogClicks::default();
    let blocked = alert.is_some();

    let modal = egui::Modal::new(egui::Id::new(overlay.form().id)).show(ctx, |ui| {
        ui.set_min_width(options.dialog_min_width);
        ui.add_enabled_ui(!blocked, |ui| {
            render_overlay(ui, overlay, form, options, &mut clicks);
        });
    });

    // Backdrop-Klicks zählen nicht, solange der Hinweis darüber liegt
    if !blocked && modal.backdrop_response.clicked() {
        events.push(AppIntent::FeatureDialogDismissed {
            kind,
            trigger: DismissTrigger::Backdrop,
        });
    } else if clicks.close {
        events.push(AppIntent::FeatureDialogDismissed {
            kind,
            trigger: DismissTrigger::CloseControl,
        });
    } else if clicks.cancel {
        events.push(AppIntent::FeatureDialogDismissed {
            kind,
            trigger: DismissTrigger::CancelControl,
        });
    } else if clicks.submit {
        events.push(AppIntent::FeatureDialogSubmitted { kind });
    }

    if let Some(message) = alert {
        if show_alert(ctx, overlay.form().id, &message) {
            events.push(AppIntent::FeatureAlertAcknowledged { kind });
        }
    }

    events
}

fn render_overlay(
    ui: &mut egui::Ui,
    overlay: &OverlayView,
    form: &mut FormValues,
    options: &EditorOptions,
    clicks: &mut DialogClicks,
) {
    let header = &overlay.content.header;
    let form_id = overlay.form().id;
    egui::Sides::new().show(
        ui,
        |ui| ui.heading(header.title),
        |ui| clicks.close |= control_button(ui, form_id, &header.close),
    );
    ui.separator();

    render_form(ui, overlay.form(), form, options, clicks);
}

fn render_form(
    ui: &mut egui::Ui,
    view: &FormView,
    form: &mut FormValues,
    options: &EditorOptions,
    clicks: &mut DialogClicks,
) {
    for group in &view.groups {
        render_group(ui, view.id, group, form, options);
        ui.add_space(6.0);
    }

    ui.separator();
    ui.horizontal(|ui| {
        clicks.submit |= control_button(ui, view.id, &view.footer.submit);
        clicks.cancel |= control_button(ui, view.id, &view.footer.cancel);
    });
}

fn render_group(
    ui: &mut egui::Ui,
    form_id: &str,
    group: &GroupView,
    form: &mut FormValues,
    options: &EditorOptions,
) {
    ui.label(egui::RichText::new(group.label).strong());
    ui.horizontal(|ui| {
        for input in &group.inputs {
            if let Some(label) = input.label {
                ui.label(label);
            }
            ui.add(
                egui::TextEdit::singleline(form.get_mut(input.field))
                    .id(egui::Id::new((form_id, input.name)))
                    .desired_width(options.input_width)
                    .hint_text(input.name),
            );
        }
    });
}

/// Stabile egui-ID eines Bedien-Elements, unabhängig von der Layout-Position.
fn control_id(form_id: &str, role: ControlRole) -> egui::Id {
    egui::Id::new((form_id, role))
}

/// Stabile egui-ID des "OK"-Buttons im Fehlerhinweis.
fn alert_ok_id(form_id: &str) -> egui::Id {
    egui::Id::new((form_id, "alert_ok"))
}

fn control_button(ui: &mut egui::Ui, form_id: &str, control: &ControlView) -> bool {
    ui.scope_builder(
        egui::UiBuilder::new().id(control_id(form_id, control.role)),
        |ui| ui.button(control.label).clicked(),
    )
    .inner
}

/// Blockierender Hinweis über dem Dialog. Gibt `true` bei "OK" zurück.
fn show_alert(ctx: &egui::Context, form_id: &str, message: &str) -> bool {
    let mut acknowledged = false;

    egui::Modal::new(egui::Id::new((form_id, "alert"))).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.label(message);
        ui.add_space(8.0);
        acknowledged = ui
            .scope_builder(egui::UiBuilder::new().id(alert_ok_id(form_id)), |ui| {
                ui.button("OK").clicked()
            })
            .inner;
    });

    acknowledged
}
