//! Festes Feldschema der Feature-Dialoge.
//!
//! Die Input-Namen und Standardwerte sind der Bindungsvertrag mit dem Host
//! und dürfen nicht verändert werden.

/// Schrittweite aller numerischen Inputs (mm).
pub const INPUT_STEP: f64 = 0.1;

/// Eines der sieben numerischen Formularfelder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    XMin,
    XMax,
    Width,
    PositionTolerance,
    WidthTolerance,
    DepthTolerance,
    ExpectedDepth,
}

impl FormField {
    /// Alle Felder in Formular-Reihenfolge.
    pub const ALL: [FormField; 7] = [
        FormField::XMin,
        FormField::XMax,
        FormField::Width,
        FormField::PositionTolerance,
        FormField::WidthTolerance,
        FormField::DepthTolerance,
        FormField::ExpectedDepth,
    ];

    /// Position im Formular (0..7).
    pub fn index(self) -> usize {
        match self {
            FormField::XMin => 0,
            FormField::XMax => 1,
            FormField::Width => 2,
            FormField::PositionTolerance => 3,
            FormField::WidthTolerance => 4,
            FormField::DepthTolerance => 5,
            FormField::ExpectedDepth => 6,
        }
    }

    /// Name des Inputs im Formular (camelCase).
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::XMin => "xMin",
            FormField::XMax => "xMax",
            FormField::Width => "width",
            FormField::PositionTolerance => "positionTolerance",
            FormField::WidthTolerance => "widthTolerance",
            FormField::DepthTolerance => "depthTolerance",
            FormField::ExpectedDepth => "expectedDepth",
        }
    }

    /// Eigenes Label des Inputs innerhalb seiner Gruppe.
    ///
    /// Breite und Solltiefe haben nur das Gruppen-Label.
    pub fn label(self) -> Option<&'static str> {
        match self {
            FormField::XMin => Some("X Min:"),
            FormField::XMax => Some("X Max:"),
            FormField::PositionTolerance => Some("Position:"),
            FormField::WidthTolerance => Some("Width:"),
            FormField::DepthTolerance => Some("Depth:"),
            FormField::Width | FormField::ExpectedDepth => None,
        }
    }

    /// Anfangswert beim Mounten bzw. Zurücksetzen (leer = kein Default).
    pub fn default_value(self) -> &'static str {
        match self {
            FormField::XMin | FormField::XMax | FormField::Width => "",
            FormField::PositionTolerance => "0.5",
            FormField::WidthTolerance => "0.3",
            FormField::DepthTolerance => "0.2",
            FormField::ExpectedDepth => "-1.0",
        }
    }
}

/// Beschriftete Gruppe von Feldern im Formular.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroupSpec {
    pub label: &'static str,
    pub fields: &'static [FormField],
}

/// Gruppierung der Felder in Anzeige-Reihenfolge.
pub const FIELD_GROUPS: [FieldGroupSpec; 4] = [
    FieldGroupSpec {
        label: "Position (mm)",
        fields: &[FormField::XMin, FormField::XMax],
    },
    FieldGroupSpec {
        label: "Width (mm)",
        fields: &[FormField::Width],
    },
    FieldGroupSpec {
        label: "Tolerances (mm)",
        fields: &[
            FormField::PositionTolerance,
            FormField::WidthTolerance,
            FormField::DepthTolerance,
        ],
    },
    FieldGroupSpec {
        label: "Expected Depth (mm)",
        fields: &[FormField::ExpectedDepth],
    },
];
