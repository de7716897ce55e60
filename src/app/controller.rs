//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use std::collections::VecDeque;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Intents, die Dialog-Callbacks während eines Commands in die Outbox
    /// legen, werden im selben Aufruf direkt danach verarbeitet.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let mut pending = VecDeque::from([intent]);

        while let Some(intent) = pending.pop_front() {
            let commands = self.map_intent_to_commands(state, intent);
            for command in commands {
                self.handle_command(state, command)?;
                pending.extend(state.outbox.drain());
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Feature-Dialoge ===
            AppCommand::OpenCreateFeatureDialog => handlers::features::open_create_dialog(state),
            AppCommand::OpenEditFeatureDialog { id } => {
                handlers::features::open_edit_dialog(state, &id)
            }
            AppCommand::DismissFeatureDialog { kind, trigger } => {
                handlers::features::dismiss_dialog(state, kind, trigger)
            }
            AppCommand::SubmitFeatureDialog { kind } => {
                handlers::features::submit_dialog(state, kind)
            }
            AppCommand::AcknowledgeFeatureAlert { kind } => {
                handlers::features::acknowledge_alert(state, kind)
            }

            // === Feature-Liste ===
            AppCommand::AddFeature { data } => handlers::features::add(state, data),
            AppCommand::UpdateFeature { update } => handlers::features::update(state, &update),
            AppCommand::RemoveFeature { id } => handlers::features::remove(state, &id),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
