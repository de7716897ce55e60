use crate::core::{FeatureFormData, FeatureId, FeatureUpdate};
use crate::dialog::{DialogKind, DismissTrigger};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Add-Dialog öffnen (schließt einen offenen Add-Dialog vorher)
    OpenCreateFeatureDialog,
    /// Edit-Dialog für ein Feature öffnen
    OpenEditFeatureDialog { id: FeatureId },
    /// Dialog über einen Dismiss-Auslöser schließen
    DismissFeatureDialog {
        kind: DialogKind,
        trigger: DismissTrigger,
    },
    /// Dialog validieren und bei Erfolg speichern
    SubmitFeatureDialog { kind: DialogKind },
    /// Fehlerhinweis eines Dialogs bestätigen
    AcknowledgeFeatureAlert { kind: DialogKind },
    /// Neues Feature in die Liste aufnehmen
    AddFeature { data: FeatureFormData },
    /// Bestehendes Feature überschreiben
    UpdateFeature { update: FeatureUpdate },
    /// Feature entfernen
    RemoveFeature { id: FeatureId },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen und speichern
    ResetOptions,
}
