//! Zentrale Konfiguration für den Weld Feature Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Start-Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];

// ── Feature-Dialoge ─────────────────────────────────────────────────

/// Mindestbreite der Feature-Dialoge in Pixeln.
pub const DIALOG_MIN_WIDTH: f32 = 360.0;
/// Breite eines numerischen Inputs in Pixeln.
pub const INPUT_WIDTH: f32 = 80.0;

// ── Feature-Liste ───────────────────────────────────────────────────

/// Nachkommastellen in der Feature-Tabelle.
pub const LIST_DECIMALS: usize = 2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `weld_feature_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Start-Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Mindestbreite der Feature-Dialoge
    pub dialog_min_width: f32,
    /// Breite der numerischen Inputs
    #[serde(default = "default_input_width")]
    pub input_width: f32,
    /// Nachkommastellen in der Feature-Tabelle
    #[serde(default = "default_list_decimals")]
    pub list_decimals: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            dialog_min_width: DIALOG_MIN_WIDTH,
            input_width: INPUT_WIDTH,
            list_decimals: LIST_DECIMALS,
        }
    }
}

/// Serde-Default für `input_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_input_width() -> f32 {
    INPUT_WIDTH
}

/// Serde-Default für `list_decimals` (Abwärtskompatibilität).
fn default_list_decimals() -> usize {
    LIST_DECIMALS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("weld_feature_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("weld_feature_editor.toml")
    }
}
