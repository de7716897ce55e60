//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::AddFeatureRequested => vec![AppCommand::OpenCreateFeatureDialog],
        AppIntent::EditFeatureRequested { id } => {
            if state.features.get(&id).is_none() {
                log::warn!("Feature {} existiert nicht, Edit-Dialog bleibt zu", id);
                return Vec::new();
            }
            vec![AppCommand::OpenEditFeatureDialog { id }]
        }
        AppIntent::RemoveFeatureRequested { id } => vec![AppCommand::RemoveFeature { id }],
        AppIntent::FeatureDialogDismissed { kind, trigger } => {
            vec![AppCommand::DismissFeatureDialog { kind, trigger }]
        }
        AppIntent::FeatureDialogSubmitted { kind } => {
            // Bei offenem Hinweis ist das Formular gesperrt
            if state.dialogs.pending_alert(kind).is_some() {
                return Vec::new();
            }
            vec![AppCommand::SubmitFeatureDialog { kind }]
        }
        AppIntent::FeatureAlertAcknowledged { kind } => {
            vec![AppCommand::AcknowledgeFeatureAlert { kind }]
        }
        AppIntent::FeatureCreated { data } => vec![AppCommand::AddFeature { data }],
        AppIntent::FeatureUpdated { update } => vec![AppCommand::UpdateFeature { update }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
