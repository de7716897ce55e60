//! Gemeinsamer Lebenszyklus der Feature-Dialoge.
//!
//! `FeatureDialog<V>` ist entweder geschlossen (nichts gemountet) oder offen
//! (Overlay gemountet, Formular lebt, Callback gehalten). `show` schließt
//! immer zuerst einen offenen Zyklus, dadurch gibt es pro Instanz höchstens
//! einen gemounteten Dialog.

use super::variant::{CreateFeature, DialogKind, DialogVariant, EditFeature};
use super::{FormError, FormField, FormValues, OverlayView};
use crate::core::{FeatureFormData, FeatureId, FeatureRecord, FeatureUpdate};

/// Host-Callback, der pro Öffnungszyklus höchstens einmal aufgerufen wird.
pub type SaveCallback<P> = Box<dyn FnOnce(P)>;

/// Auslöser eines Schließens ohne Speichern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissTrigger {
    /// Schließen-Control im Header
    CloseControl,
    /// Abbrechen-Control im Footer
    CancelControl,
    /// Klick auf den Overlay-Hintergrund außerhalb des Inhalts
    Backdrop,
}

/// Ergebnis eines Submit-Versuchs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Callback aufgerufen, Dialog geschlossen
    Saved,
    /// Ungültige Eingaben, Dialog bleibt offen und zeigt einen Hinweis
    Rejected(FormError),
    /// Dialog war nicht offen (z.B. verspätetes Event nach dem Schließen)
    NotOpen,
}

struct MountedDialog<V: DialogVariant> {
    overlay: OverlayView,
    form: FormValues,
    context: V::Context,
    on_save: Option<SaveCallback<V::Payload>>,
    pending_alert: Option<String>,
}

/// Modaler Feature-Dialog, parametrisiert über die Variante.
pub struct FeatureDialog<V: DialogVariant> {
    mounted: Option<MountedDialog<V>>,
}

/// Dialog zum Anlegen eines Features.
pub type CreateFeatureDialog = FeatureDialog<CreateFeature>;
/// Dialog zum Bearbeiten eines Features.
pub type EditFeatureDialog = FeatureDialog<EditFeature>;

impl<V: DialogVariant> Default for FeatureDialog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: DialogVariant> FeatureDialog<V> {
    /// Erstellt einen geschlossenen Dialog.
    pub fn new() -> Self {
        Self { mounted: None }
    }

    pub fn kind(&self) -> DialogKind {
        V::KIND
    }

    pub fn is_open(&self) -> bool {
        self.mounted.is_some()
    }

    /// Gemounteter Strukturbaum (nur wenn offen).
    pub fn view(&self) -> Option<&OverlayView> {
        self.mounted.as_ref().map(|m| &m.overlay)
    }

    /// Aktuelle Formularwerte (nur wenn offen).
    pub fn form(&self) -> Option<&FormValues> {
        self.mounted.as_ref().map(|m| &m.form)
    }

    /// Text eines Inputs (nur wenn offen).
    pub fn field(&self, field: FormField) -> Option<&str> {
        self.form().map(|form| form.get(field))
    }

    /// Setzt den Text eines Inputs wie eine Benutzereingabe.
    ///
    /// Gibt `false` zurück, wenn der Dialog geschlossen ist.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match self.mounted.as_mut() {
            Some(mounted) => {
                mounted.form.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Strukturbaum und editierbare Werte gleichzeitig (für den Renderer).
    pub fn parts_mut(&mut self) -> Option<(&OverlayView, &mut FormValues)> {
        self.mounted.as_mut().map(|m| (&m.overlay, &mut m.form))
    }

    /// Offener Fehlerhinweis, solange er nicht bestätigt wurde.
    pub fn pending_alert(&self) -> Option<&str> {
        self.mounted.as_ref().and_then(|m| m.pending_alert.as_deref())
    }

    /// Bestätigt den Fehlerhinweis. Der Dialog bleibt offen.
    pub fn acknowledge_alert(&mut self) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.pending_alert = None;
        }
    }

    /// Liest die Formularwerte aus (nur wenn offen).
    pub fn extract_form_data(&self) -> Option<Result<FeatureFormData, FormError>> {
        self.form().map(FormValues::extract)
    }

    /// Schließt den Dialog über einen der drei Dismiss-Auslöser.
    pub fn dismiss(&mut self, trigger: DismissTrigger) {
        if self.is_open() {
            log::debug!("{}: geschlossen über {:?}", V::TITLE, trigger);
        }
        self.close();
    }

    /// Entfernt den gemounteten Dialog und verwirft Callback und Kontext.
    ///
    /// Auf einem geschlossenen Dialog ein No-Op.
    pub fn close(&mut self) {
        if self.mounted.take().is_some() {
            log::debug!("{}: Dialog entfernt", V::TITLE);
        }
    }

    /// Validiert das Formular und übergibt die Payload an den Callback.
    ///
    /// Bei Erfolg wird danach geschlossen. Bei ungültigen Zahlen bleibt der
    /// Dialog mit den eingegebenen Werten offen und zeigt einen Hinweis.
    pub fn submit(&mut self) -> SubmitOutcome {
        let (on_save, payload) = {
            let Some(mounted) = self.mounted.as_mut() else {
                log::debug!("{}: Submit ohne offenen Dialog ignoriert", V::TITLE);
                return SubmitOutcome::NotOpen;
            };

            match mounted.form.extract() {
                Ok(data) => (
                    mounted.on_save.take(),
                    V::decorate(&mounted.context, data),
                ),
                Err(err) => {
                    log::warn!(
                        "{}: ungültige Eingaben in {:?}",
                        V::TITLE,
                        err.field_names()
                    );
                    mounted.pending_alert = Some(err.to_string());
                    return SubmitOutcome::Rejected(err);
                }
            }
        };

        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&payload) {
                Ok(json) => log::debug!("{}: Payload {}", V::TITLE, json),
                Err(e) => log::debug!("{}: Payload {:?} ({})", V::TITLE, payload, e),
            }
        }

        if let Some(on_save) = on_save {
            on_save(payload);
        }
        self.close();
        SubmitOutcome::Saved
    }

    fn mount(
        &mut self,
        context: V::Context,
        on_save: SaveCallback<V::Payload>,
    ) -> &mut FormValues {
        log::debug!("{}: Dialog gemountet ({})", V::TITLE, V::FORM_ID);
        let mounted = self.mounted.insert(MountedDialog {
            overlay: OverlayView::build(V::TITLE, V::FORM_ID),
            form: FormValues::with_defaults(),
            context,
            on_save: Some(on_save),
            pending_alert: None,
        });
        &mut mounted.form
    }
}

impl FeatureDialog<CreateFeature> {
    /// Öffnet den Add-Dialog mit leeren bzw. Standard-Werten.
    pub fn show(&mut self, on_save: impl FnOnce(FeatureFormData) + 'static) {
        self.close();
        let form = self.mount((), Box::new(on_save));
        // Singleton-Instanz: keine Reste aus einem früheren Zyklus übernehmen
        form.reset();
    }
}

impl FeatureDialog<EditFeature> {
    /// Öffnet den Edit-Dialog, vorbefüllt aus `record`.
    ///
    /// Die ID wird gehalten und an die Payload angehängt, nie aus dem
    /// Formular gelesen.
    pub fn show(
        &mut self,
        record: &FeatureRecord,
        on_save: impl FnOnce(FeatureUpdate) + 'static,
    ) {
        self.close();
        let form = self.mount(record.id.clone(), Box::new(on_save));
        form.populate_from(record);
    }

    /// ID des aktuell bearbeiteten Features (nur wenn offen).
    pub fn feature_id(&self) -> Option<&FeatureId> {
        self.mounted.as_ref().map(|m| &m.context)
    }
}
