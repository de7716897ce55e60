use crate::dialog::{CreateFeatureDialog, DialogKind, EditFeatureDialog};

/// Die beiden Feature-Dialoge des Hosts.
///
/// Je Variante genau eine Instanz; jede Instanz sorgt selbst dafür, dass
/// höchstens ein Öffnungszyklus aktiv ist.
#[derive(Default)]
pub struct DialogsState {
    /// Dialog "Add New Feature"
    pub create: CreateFeatureDialog,
    /// Dialog "Edit Feature"
    pub edit: EditFeatureDialog,
}

impl DialogsState {
    /// Erstellt beide Dialoge im geschlossenen Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::Create => self.create.is_open(),
            DialogKind::Edit => self.edit.is_open(),
        }
    }

    /// Offener Fehlerhinweis des Dialogs `kind`.
    pub fn pending_alert(&self, kind: DialogKind) -> Option<&str> {
        match kind {
            DialogKind::Create => self.create.pending_alert(),
            DialogKind::Edit => self.edit.pending_alert(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. "Feature 3 gespeichert")
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            status_message: None,
            show_options_dialog: false,
        }
    }
}
