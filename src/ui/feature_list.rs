//! Tabelle aller Features im zentralen Panel.

use crate::app::{AppIntent, AppState};

/// Spaltenköpfe in Formular-Reihenfolge.
const COLUMNS: [&str; 7] = [
    "X Min",
    "X Max",
    "Width",
    "Pos. Tol.",
    "Width Tol.",
    "Depth Tol.",
    "Exp. Depth",
];

/// Rendert die Feature-Liste mit Edit/Remove-Aktionen pro Zeile.
pub fn render_feature_list(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let decimals = state.options.list_decimals;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Features");
            if ui.button("Add Feature…").clicked() {
                events.push(AppIntent::AddFeatureRequested);
            }
        });
        ui.separator();

        if state.features.is_empty() {
            ui.label("No features yet. Use \"Add Feature…\" to create one.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("feature_list")
                .striped(true)
                .num_columns(COLUMNS.len() + 2)
                .show(ui, |ui| {
                    ui.strong("ID");
                    for column in COLUMNS {
                        ui.strong(column);
                    }
                    ui.label("");
                    ui.end_row();

                    for record in state.features.iter() {
                        ui.label(record.id.to_string());
                        for value in record.form_data().values() {
                            ui.label(format!("{:.*}", decimals, value));
                        }
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                events.push(AppIntent::EditFeatureRequested {
                                    id: record.id.clone(),
                                });
                            }
                            if ui.button("Remove").clicked() {
                                events.push(AppIntent::RemoveFeatureRequested {
                                    id: record.id.clone(),
                                });
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    });

    events
}
