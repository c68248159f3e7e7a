//! Dictionary stage
//!
//! Builds the acronym dictionary and pairs it with the document it came from,
//! since expansion needs both.

use serde::Serialize;

use crate::gls::ast::Document;
use crate::gls::dictionary::Dictionary;
use crate::gls::error::Error;
use crate::gls::transforms::Runnable;

/// A tokenized document together with its fully built dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glossary {
    pub document: Document,
    pub dictionary: Dictionary,
}

impl Glossary {
    pub fn new(document: Document) -> Self {
        let dictionary = Dictionary::build(&document);
        Glossary {
            document,
            dictionary,
        }
    }
}

/// Dictionary stage: [`Document`] → [`Glossary`]. Never fails.
pub struct BuildDictionary;

impl BuildDictionary {
    pub fn new() -> Self {
        BuildDictionary
    }
}

impl Default for BuildDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Glossary> for BuildDictionary {
    fn run(&self, input: Document) -> Result<Glossary, Error> {
        Ok(Glossary::new(input))
    }
}
