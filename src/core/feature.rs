//! Feature-Datentypen: gespeicherter Datensatz, Formular-Payload und Update.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaker Feature-Bezeichner.
///
/// Wird vom Host vergeben und vom Edit-Dialog unverändert zurückgereicht.
/// Zahl oder Text, je nachdem was der Host liefert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// Numerische ID (vom `FeatureList` vergeben)
    Number(u64),
    /// Beliebige Text-ID
    Text(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{}", n),
            FeatureId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        FeatureId::Number(value)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::Text(value.to_string())
    }
}

/// Typisierte Formularwerte eines Features (ohne ID).
///
/// Wird pro Submit frisch erzeugt. Keine Invariante `x_max > x_min`,
/// das prüft gegebenenfalls der Aufrufer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureFormData {
    /// Positionsbereich Anfang (mm)
    pub x_min: f64,
    /// Positionsbereich Ende (mm)
    pub x_max: f64,
    /// Breite (mm)
    pub width: f64,
    /// Positionstoleranz (mm)
    pub position_tolerance: f64,
    /// Breitentoleranz (mm)
    pub width_tolerance: f64,
    /// Tiefentoleranz (mm)
    pub depth_tolerance: f64,
    /// Solltiefe (mm)
    pub expected_depth: f64,
}

impl FeatureFormData {
    /// Liefert alle sieben Werte in Formular-Reihenfolge.
    pub fn values(&self) -> [f64; 7] {
        [
            self.x_min,
            self.x_max,
            self.width,
            self.position_tolerance,
            self.width_tolerance,
            self.depth_tolerance,
            self.expected_depth,
        ]
    }
}

/// Update-Payload des Edit-Dialogs: Formularwerte plus unveränderte ID.
///
/// Serialisiert flach als `{"id": .., "x_min": .., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureUpdate {
    /// ID des bearbeiteten Datensatzes
    pub id: FeatureId,
    /// Neue Werte
    #[serde(flatten)]
    pub data: FeatureFormData,
}

/// Vom Host gespeicherter Feature-Datensatz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: FeatureId,
    pub x_min: f64,
    pub x_max: f64,
    pub width: f64,
    pub position_tolerance: f64,
    pub width_tolerance: f64,
    pub depth_tolerance: f64,
    pub expected_depth: f64,
}

impl FeatureRecord {
    /// Baut einen Datensatz aus ID und Formularwerten.
    pub fn from_form(id: FeatureId, data: FeatureFormData) -> Self {
        Self {
            id,
            x_min: data.x_min,
            x_max: data.x_max,
            width: data.width,
            position_tolerance: data.position_tolerance,
            width_tolerance: data.width_tolerance,
            depth_tolerance: data.depth_tolerance,
            expected_depth: data.expected_depth,
        }
    }

    /// Gibt die Werte des Datensatzes ohne ID zurück.
    pub fn form_data(&self) -> FeatureFormData {
        FeatureFormData {
            x_min: self.x_min,
            x_max: self.x_max,
            width: self.width,
            position_tolerance: self.position_tolerance,
            width_tolerance: self.width_tolerance,
            depth_tolerance: self.depth_tolerance,
            expected_depth: self.expected_depth,
        }
    }

    /// Übernimmt neue Werte, die ID bleibt erhalten.
    pub fn apply(&mut self, data: FeatureFormData) {
        let id = self.id.clone();
        *self = Self::from_form(id, data);
    }
}
