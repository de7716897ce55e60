//! Optionen-Dialog für Fenster-, Dialog- und Listen-Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Fenster ─────────────────────────────────────────
            ui.collapsing("Fenster (ab nächstem Start)", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Breite:");
                    changed |= drag(ui, &mut opts.window_size[0], 480.0..=3840.0, 10.0);
                });
                ui.horizontal(|ui| {
                    ui.label("Höhe:");
                    changed |= drag(ui, &mut opts.window_size[1], 320.0..=2160.0, 10.0);
                });
            });

            // ── Feature-Dialoge ─────────────────────────────────
            ui.collapsing("Feature-Dialoge", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Mindestbreite:");
                    changed |= drag(ui, &mut opts.dialog_min_width, 200.0..=1000.0, 5.0);
                });
                ui.horizontal(|ui| {
                    ui.label("Input-Breite:");
                    changed |= drag(ui, &mut opts.input_width, 40.0..=240.0, 1.0);
                });
            });

            // ── Feature-Liste ───────────────────────────────────
            ui.collapsing("Feature-Liste", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Nachkommastellen:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.list_decimals).range(0..=6))
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag(
    ui: &mut egui::Ui,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.add(egui::DragValue::new(value).range(range).speed(speed))
        .changed()
}
