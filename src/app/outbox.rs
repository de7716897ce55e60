//! Rückkanal von Dialog-Callbacks zum Controller.

use super::AppIntent;
use std::cell::RefCell;
use std::rc::Rc;

/// Geteilte Warteschlange für Intents, die aus Callbacks heraus entstehen.
///
/// Dialog-Callbacks halten einen Klon und legen gespeicherte Payloads hier
/// ab; der Controller leert die Warteschlange nach jedem Command.
#[derive(Clone, Default)]
pub struct IntentOutbox {
    queue: Rc<RefCell<Vec<AppIntent>>>,
}

impl IntentOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen Intent ab.
    pub fn push(&self, intent: AppIntent) {
        self.queue.borrow_mut().push(intent);
    }

    /// Entnimmt alle wartenden Intents in Ablage-Reihenfolge.
    pub fn drain(&self) -> Vec<AppIntent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
