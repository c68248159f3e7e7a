//! Document model produced by the glossary grammar
//!
//! A [`Document`] is the ordered list of [`Entry`] values found in the source:
//! literal text runs, acronym definitions and references. Order is the textual
//! order and is preserved by every pass.

use serde::Serialize;
use std::fmt;
use std::ops::BitOr;

/// An acronym definition introduced by `\newacronym{name}{short}{long}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub name: String,
    pub short_form: String,
    pub long_form: String,
}

impl Definition {
    pub fn new(
        name: impl Into<String>,
        short_form: impl Into<String>,
        long_form: impl Into<String>,
    ) -> Self {
        Definition {
            name: name.into(),
            short_form: short_form.into(),
            long_form: long_form.into(),
        }
    }
}

/// Rendering modifiers carried by a reference command.
///
/// `\gls` has none, `\glspl` is plural, `\Gls` is uppercase, `\Glspl` is
/// uppercase plural and `\Glsfirst` is uppercase and forces first-use form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Modifiers {
    pub plural: bool,
    pub uppercase: bool,
    pub first: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        plural: false,
        uppercase: false,
        first: false,
    };
    pub const PLURAL: Modifiers = Modifiers {
        plural: true,
        uppercase: false,
        first: false,
    };
    pub const UPPERCASE: Modifiers = Modifiers {
        plural: false,
        uppercase: true,
        first: false,
    };
    pub const FIRST: Modifiers = Modifiers {
        plural: false,
        uppercase: false,
        first: true,
    };

    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers {
            plural: self.plural || other.plural,
            uppercase: self.uppercase || other.uppercase,
            first: self.first || other.first,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Modifiers::NONE
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.uppercase {
            names.push("uppercase");
        }
        if self.plural {
            names.push("plural");
        }
        if self.first {
            names.push("first");
        }
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

/// A request to substitute a defined acronym at this point in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceMark {
    pub name: String,
    pub modifiers: Modifiers,
}

impl ReferenceMark {
    pub fn new(name: impl Into<String>, modifiers: Modifiers) -> Self {
        ReferenceMark {
            name: name.into(),
            modifiers,
        }
    }
}

/// One item of a tokenized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Entry {
    Literal(String),
    Definition(Definition),
    Reference(ReferenceMark),
}

/// The tokenized source: entries in textual order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new(entries: Vec<Entry>) -> Self {
        Document { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in textual order, including ones later overridden.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Definition(definition) => Some(definition),
            _ => None,
        })
    }

    /// References in textual order.
    pub fn references(&self) -> impl Iterator<Item = &ReferenceMark> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Reference(reference) => Some(reference),
            _ => None,
        })
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Document::new(entries)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A piece of the expanded text as seen by the addition grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Text outside any `\addition` block.
    Text(String),
    /// Content of an `\addition[..]{..}` block with its outer braces removed.
    Addition(String),
}
