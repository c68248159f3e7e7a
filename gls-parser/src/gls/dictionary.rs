//! Acronym dictionary
//!
//! Built in one pass over a [`Document`] before any reference is expanded, so
//! a reference may appear before its definition in the text. When a name is
//! defined more than once the last definition wins and the earlier ones leave
//! no trace.
//!
//! Each entry carries a `used` flag. Expansion flips it to `true` the first
//! time the name is referenced; it never goes back.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::gls::ast::{Definition, Document, Entry};

/// A definition and whether it has been referenced yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub definition: Definition,
    pub used: bool,
}

impl DictionaryEntry {
    fn new(definition: Definition) -> Self {
        DictionaryEntry {
            definition,
            used: false,
        }
    }

    /// Record a reference. Returns whether the entry had been used before.
    pub fn mark_used(&mut self) -> bool {
        std::mem::replace(&mut self.used, true)
    }
}

/// Name-keyed table of acronym definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every definition in `document`. Literals and references are
    /// skipped.
    pub fn build(document: &Document) -> Self {
        let mut dictionary = Dictionary::new();
        for entry in document {
            match entry {
                Entry::Definition(definition) => dictionary.insert(definition.clone()),
                Entry::Literal(_) | Entry::Reference(_) => {}
            }
        }
        debug!(definitions = dictionary.len(), "built dictionary");
        dictionary
    }

    /// Insert a definition, replacing any previous one with the same name.
    pub fn insert(&mut self, definition: Definition) {
        if definition.long_form.is_empty() {
            warn!(name = %definition.name, "acronym has an empty description");
        }
        let name = definition.name.clone();
        if let Some(previous) = self.entries.insert(name, DictionaryEntry::new(definition)) {
            debug!(
                name = %previous.definition.name,
                "acronym redefined; keeping the later definition"
            );
        }
    }

    pub fn get(&self, name: &str) -> Option<&DictionaryEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DictionaryEntry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Names whose definition has an empty long form.
    pub fn empty_descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.definition.long_form.is_empty())
            .map(|(name, _)| name.as_str())
    }
}
