//! Section registry - page sections keyed by id, listed by order

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One registered page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub order: i32,
    /// Name of the render unit that draws this section
    #[serde(default)]
    pub unit: String,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, order: i32, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order,
            unit: unit.into(),
        }
    }
}

/// Map of sections; registering an existing id overwrites it
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: HashMap<String, SectionEntry>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: SectionEntry) {
        if let Some(previous) = self.sections.insert(entry.id.clone(), entry) {
            tracing::debug!(target: "nav", id = %previous.id, "section re-registered");
        }
    }

    pub fn unregister(&mut self, id: &str) -> Option<SectionEntry> {
        self.sections.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&SectionEntry> {
        self.sections.get(id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// All sections sorted by `order`, ties broken by id
    pub fn ordered(&self) -> Vec<&SectionEntry> {
        let mut entries: Vec<_> = self.sections.values().collect();
        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        entries
    }

    /// Position of `id` in the ordered listing
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ordered().iter().position(|entry| entry.id == id)
    }
}

impl FromIterator<SectionEntry> for SectionRegistry {
    fn from_iter<I: IntoIterator<Item = SectionEntry>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.register(entry);
        }
        registry
    }
}
