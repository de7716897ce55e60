//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Features: {}", state.feature_count()));

            ui.separator();

            let dialog = if state.dialogs.create.is_open() {
                "Add New Feature"
            } else if state.dialogs.edit.is_open() {
                "Edit Feature"
            } else {
                "None"
            };
            ui.label(format!("Dialog: {}", dialog));

            if let Some(id) = state.dialogs.edit.feature_id() {
                ui.label(format!("(Feature {})", id));
            }

            // Statusnachricht (z.B. "Feature 3 updated")
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Commands: {}", state.command_log.len()));
            });
        });
    });
}
