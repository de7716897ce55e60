//! Deklarativer Strukturbaum eines gemounteten Dialogs.
//!
//! Overlay → Content → (Header, Body → Form → Gruppen + Footer).
//! Der egui-Renderer läuft genau diesen Baum ab, Tests prüfen ihn direkt.

use super::schema::{FormField, FIELD_GROUPS, INPUT_STEP};

/// Beschriftung des Schließen-Controls im Header.
pub const CLOSE_LABEL: &str = "×";
/// Beschriftung des Submit-Controls.
pub const SUBMIT_LABEL: &str = "Save";
/// Beschriftung des Abbrechen-Controls.
pub const CANCEL_LABEL: &str = "Cancel";

/// Rolle eines Bedien-Elements im Dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    Close,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    pub role: ControlRole,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub field: FormField,
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub step: f64,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub label: &'static str,
    pub inputs: Vec<InputView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub submit: ControlView,
    pub cancel: ControlView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub id: &'static str,
    pub groups: Vec<GroupView>,
    pub footer: FooterView,
}

impl FormView {
    /// Alle Inputs über alle Gruppen in Formular-Reihenfolge.
    pub fn inputs(&self) -> impl Iterator<Item = &InputView> {
        self.groups.iter().flat_map(|g| g.inputs.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: &'static str,
    pub close: ControlView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub form: FormView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub header: HeaderView,
    pub body: BodyView,
}

/// Wurzel eines gemounteten Dialogs (modaler Hintergrund).
///
/// Klicks auf das Overlay außerhalb von `content` gelten als Backdrop-Klick.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub content: ContentView,
}

impl OverlayView {
    /// Baut den kompletten Baum für Titel und Formular-ID.
    pub fn build(title: &'static str, form_id: &'static str) -> Self {
        let groups = FIELD_GROUPS
            .iter()
            .map(|group| GroupView {
                label: group.label,
                inputs: group
                    .fields
                    .iter()
                    .map(|&field| InputView {
                        field,
                        name: field.input_name(),
                        label: field.label(),
                        step: INPUT_STEP,
                        required: true,
                    })
                    .collect(),
            })
            .collect();

        Self {
            content: ContentView {
                header: HeaderView {
                    title,
                    close: ControlView {
                        role: ControlRole::Close,
                        label: CLOSE_LABEL,
                    },
                },
                body: BodyView {
                    form: FormView {
                        id: form_id,
                        groups,
                        footer: FooterView {
                            submit: ControlView {
                                role: ControlRole::Submit,
                                label: SUBMIT_LABEL,
                            },
                            cancel: ControlView {
                                role: ControlRole::Cancel,
                                label: CANCEL_LABEL,
                            },
                        },
                    },
                },
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.content.header.title
    }

    pub fn form(&self) -> &FormView {
        &self.content.body.form
    }
}
