//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or string and runs the
//! standard transforms on it. Used by the CLI and by tests.
//!
//! ```rust,ignore
//! use gls_parser::gls::loader::DocumentLoader;
//!
//! let text = DocumentLoader::from_path("paper.tex")?.expand()?;
//! let doc = DocumentLoader::from_string("\\gls{cpu}").tokenize()?;
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::gls::ast::Document;
use crate::gls::dictionary::Dictionary;
use crate::gls::error::Error;
use crate::gls::expansion::ExpansionOptions;
use crate::gls::transforms::stages::Glossary;
use crate::gls::transforms::standard::{pipeline, DICTIONARY, FULL_EXPANSION, TOKENIZATION};
use crate::gls::transforms::Transform;

/// Source text with shortcuts for the standard transforms.
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load the whole file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), bytes = source.len(), "loaded input");
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// The loaded source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, Error> {
        transform.run(self.source.clone())
    }

    /// Tokenize the source into a [`Document`].
    pub fn tokenize(&self) -> Result<Document, Error> {
        self.with(&*TOKENIZATION)
    }

    /// Tokenize and build the [`Dictionary`], before any expansion.
    pub fn dictionary(&self) -> Result<Dictionary, Error> {
        self.with(&*DICTIONARY).map(|glossary: Glossary| glossary.dictionary)
    }

    /// Run all four passes with default options.
    pub fn expand(&self) -> Result<String, Error> {
        self.with(&*FULL_EXPANSION)
    }

    /// Run the text pipeline configured by `options`.
    pub fn expand_with(&self, options: &ExpansionOptions) -> Result<String, Error> {
        self.with(&pipeline(options))
    }
}
