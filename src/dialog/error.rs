//! Fehler beim Auslesen der Feature-Formulare.

use super::FormField;
use thiserror::Error;

/// Text des Hinweises bei ungültigen Zahlen.
pub const INVALID_NUMERIC_MESSAGE: &str = "Please enter valid numeric values";

/// Fehler beim Auslesen des Feature-Formulars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Mindestens ein Feld hat kein numerisches Präfix.
    #[error("{}", INVALID_NUMERIC_MESSAGE)]
    InvalidNumericInput {
        /// Betroffene Felder in Formular-Reihenfolge
        fields: Vec<FormField>,
    },
}

impl FormError {
    /// Input-Namen der betroffenen Felder (für Logs).
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            FormError::InvalidNumericInput { fields } => {
                fields.iter().map(|f| f.input_name()).collect()
            }
        }
    }
}
