//! Top-Menü (File, Features, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Features", |ui| {
                if ui.button("Add Feature…").clicked() {
                    events.push(AppIntent::AddFeatureRequested);
                    ui.close();
                }

                ui.separator();

                // Schnellzugriff auf alle Features
                let has_features = !state.features.is_empty();
                ui.add_enabled_ui(has_features, |ui| {
                    ui.menu_button("Edit Feature", |ui| {
                        for record in state.features.iter() {
                            if ui.button(format!("Feature {}", record.id)).clicked() {
                                events.push(AppIntent::EditFeatureRequested {
                                    id: record.id.clone(),
                                });
                                ui.close();
                            }
                        }
                    });
                });
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
