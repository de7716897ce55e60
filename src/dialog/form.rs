//! Lebende Formularwerte und deren Umwandlung in typisierte Daten.

use super::{FormError, FormField};
use crate::core::{format_float, parse_float_prefix, FeatureFormData, FeatureRecord};

/// Rohtexte der sieben Inputs eines gemounteten Formulars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 7],
}

impl Default for FormValues {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FormValues {
    /// Formular im Mount-Zustand: Position/Breite leer, Toleranzen und Tiefe mit Default.
    pub fn with_defaults() -> Self {
        Self {
            values: FormField::ALL.map(|f| f.default_value().to_string()),
        }
    }

    /// Setzt alle Felder auf ihren Mount-Zustand zurück.
    pub fn reset(&mut self) {
        for field in FormField::ALL {
            self.set(field, field.default_value());
        }
    }

    /// Befüllt alle sieben Felder direkt aus einem Datensatz (ohne Defaults).
    pub fn populate_from(&mut self, record: &FeatureRecord) {
        let data = record.form_data();
        for (field, value) in FormField::ALL.into_iter().zip(data.values()) {
            self.set(field, format_float(value));
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Mutable Puffer eines Feldes (für Text-Edits).
    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        &mut self.values[field.index()]
    }

    /// Iteriert `(Feld, Text)` in Formular-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(move |f| (f, self.values[f.index()].as_str()))
    }

    /// Parst alle Felder tolerant. Felder ohne numerisches Präfix werden `NaN`.
    pub fn read_numbers(&self) -> FeatureFormData {
        let number = |field: FormField| parse_float_prefix(self.get(field));
        FeatureFormData {
            x_min: number(FormField::XMin),
            x_max: number(FormField::XMax),
            width: number(FormField::Width),
            position_tolerance: number(FormField::PositionTolerance),
            width_tolerance: number(FormField::WidthTolerance),
            depth_tolerance: number(FormField::DepthTolerance),
            expected_depth: number(FormField::ExpectedDepth),
        }
    }

    /// Liest das Formular aus und lehnt `NaN`-Werte ab.
    pub fn extract(&self) -> Result<FeatureFormData, FormError> {
        let data = self.read_numbers();
        let invalid: Vec<FormField> = FormField::ALL
            .into_iter()
            .zip(data.values())
            .filter(|(_, v)| v.is_nan())
            .map(|(f, _)| f)
            .collect();

        if invalid.is_empty() {
            Ok(data)
        } else {
            Err(FormError::InvalidNumericInput { fields: invalid })
        }
    }
}
