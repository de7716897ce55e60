//! Modale Feature-Dialoge (Anlegen/Bearbeiten).
//!
//! Enthält Feldschema, Strukturbaum, Formularwerte und den gemeinsamen
//! Lebenszyklus. Die Darstellung mit egui liegt in `ui::dialogs`.

mod error;
mod feature_dialog;
mod form;
pub mod schema;
mod variant;
pub mod view;

pub use error::{FormError, INVALID_NUMERIC_MESSAGE};
pub use feature_dialog::{
    CreateFeatureDialog, DismissTrigger, EditFeatureDialog, FeatureDialog, SaveCallback,
    SubmitOutcome,
};
pub use form::FormValues;
pub use schema::FormField;
pub use variant::{CreateFeature, DialogKind, DialogVariant, EditFeature};
pub use view::OverlayView;
