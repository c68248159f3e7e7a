//! Tokenization stage
//!
//! Runs the glossary grammar over the raw source.

use tracing::debug;

use crate::gls::ast::Document;
use crate::gls::error::Error;
use crate::gls::parsing::parse_glossary;
use crate::gls::transforms::Runnable;

/// Tokenization stage
///
/// # Input
/// - `String` - raw source text
///
/// # Output
/// - [`Document`] - literals, definitions and references in textual order
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Document> for Tokenization {
    fn run(&self, input: String) -> Result<Document, Error> {
        Runnable::<&str, Document>::run(self, input.as_str())
    }
}

impl Runnable<&str, Document> for Tokenization {
    fn run(&self, input: &str) -> Result<Document, Error> {
        let document = parse_glossary(input)?;
        debug!(entries = document.len(), "tokenized source");
        Ok(document)
    }
}
