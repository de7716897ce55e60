use crate::core::{FeatureFormData, FeatureId, FeatureUpdate};
use crate::dialog::{DialogKind, DismissTrigger};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Add-Dialog öffnen
    AddFeatureRequested,
    /// Edit-Dialog für ein bestehendes Feature öffnen
    EditFeatureRequested { id: FeatureId },
    /// Feature aus der Liste entfernen
    RemoveFeatureRequested { id: FeatureId },
    /// Dialog ohne Speichern geschlossen (Schließen, Abbrechen, Hintergrund)
    FeatureDialogDismissed {
        kind: DialogKind,
        trigger: DismissTrigger,
    },
    /// Save im Dialog gedrückt
    FeatureDialogSubmitted { kind: DialogKind },
    /// Fehlerhinweis im Dialog bestätigt
    FeatureAlertAcknowledged { kind: DialogKind },
    /// Add-Dialog hat gültige Werte geliefert
    FeatureCreated { data: FeatureFormData },
    /// Edit-Dialog hat gültige Werte geliefert
    FeatureUpdated { update: FeatureUpdate },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
