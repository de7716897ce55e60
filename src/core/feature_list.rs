//! In-Memory-Liste der Features des Hosts.

use super::{FeatureFormData, FeatureId, FeatureRecord, FeatureUpdate};
use indexmap::IndexMap;

/// Geordnete Feature-Sammlung (Einfügereihenfolge bleibt erhalten).
#[derive(Debug, Clone, Default)]
pub struct FeatureList {
    records: IndexMap<FeatureId, FeatureRecord>,
    next_id: u64,
}

impl FeatureList {
    /// Erstellt eine leere Liste. Die erste vergebene ID ist 1.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Legt ein neues Feature mit frischer numerischer ID an.
    ///
    /// Ist der Zähler bei `u64::MAX` angekommen, wird ab 1 die nächste
    /// freie ID gesucht.
    pub fn add(&mut self, data: FeatureFormData) -> FeatureId {
        let mut n = self.next_id.max(1);
        while self.records.contains_key(&FeatureId::Number(n)) {
            n = n.checked_add(1).unwrap_or(1);
        }
        let id = FeatureId::Number(n);
        self.insert(FeatureRecord::from_form(id.clone(), data));
        id
    }

    /// Fügt einen vorhandenen Datensatz ein (ersetzt gleiche ID).
    ///
    /// Numerische IDs schieben den ID-Zähler nach, damit `add` keine
    /// Kollision erzeugt.
    pub fn insert(&mut self, record: FeatureRecord) {
        if let FeatureId::Number(n) = record.id {
            self.next_id = self.next_id.max(n.saturating_add(1));
        }
        self.records.insert(record.id.clone(), record);
    }

    /// Überschreibt die Werte des Datensatzes mit der Update-ID.
    ///
    /// Gibt `false` zurück, wenn keine solche ID existiert.
    pub fn apply_update(&mut self, update: &FeatureUpdate) -> bool {
        match self.records.get_mut(&update.id) {
            Some(record) => {
                record.apply(update.data);
                true
            }
            None => false,
        }
    }

    /// Entfernt ein Feature und behält die Reihenfolge der übrigen bei.
    pub fn remove(&mut self, id: &FeatureId) -> Option<FeatureRecord> {
        self.records.shift_remove(id)
    }

    /// Sucht ein Feature per ID.
    pub fn get(&self, id: &FeatureId) -> Option<&FeatureRecord> {
        self.records.get(id)
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
