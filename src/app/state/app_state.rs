use crate::app::{CommandLog, IntentOutbox};
use crate::core::FeatureList;
use crate::shared::EditorOptions;

use super::{DialogsState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Vom Host verwaltete Features
    pub features: FeatureList,
    /// Add- und Edit-Dialog
    pub dialogs: DialogsState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Rückkanal der Dialog-Callbacks
    pub outbox: IntentOutbox,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            features: FeatureList::new(),
            dialogs: DialogsState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            outbox: IntentOutbox::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Features zurück (für UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
