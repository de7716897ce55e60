//! Varianten-Deskriptoren: was Add- und Edit-Dialog unterscheidet.

use crate::core::{FeatureFormData, FeatureId, FeatureUpdate};
use serde::Serialize;
use std::fmt::Debug;

/// Art eines Feature-Dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Create,
    Edit,
}

/// Beschreibt eine Dialog-Variante: Titel, Formular-ID und Payload-Aufbau.
pub trait DialogVariant {
    /// Während eines Öffnungszyklus gehaltener Kontext (Edit: die Feature-ID).
    type Context: Clone + Debug;
    /// Typ, der an den Host-Callback übergeben wird.
    type Payload: Serialize + Debug;

    const KIND: DialogKind;
    const TITLE: &'static str;
    const FORM_ID: &'static str;

    /// Ergänzt die ausgelesenen Formularwerte um den Kontext.
    fn decorate(context: &Self::Context, data: FeatureFormData) -> Self::Payload;
}

/// "Add"-Variante: leeres Formular, Payload ohne ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateFeature;

impl DialogVariant for CreateFeature {
    type Context = ();
    type Payload = FeatureFormData;

    const KIND: DialogKind = DialogKind::Create;
    const TITLE: &'static str = "Add New Feature";
    const FORM_ID: &'static str = "addFeatureForm";

    fn decorate(_context: &(), data: FeatureFormData) -> FeatureFormData {
        data
    }
}

/// "Edit"-Variante: vorbefülltes Formular, Payload mit gehaltener ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditFeature;

impl DialogVariant for EditFeature {
    type Context = FeatureId;
    type Payload = FeatureUpdate;

    const KIND: DialogKind = DialogKind::Edit;
    const TITLE: &'static str = "Edit Feature";
    const FORM_ID: &'static str = "editFeatureForm";

    fn decorate(context: &FeatureId, data: FeatureFormData) -> FeatureUpdate {
        FeatureUpdate {
            id: context.clone(),
            data,
        }
    }
}
