//! Grammars for glossary markup and addition wrappers
//!
//! Both grammars are chumsky parsers over `char` input. They are independent
//! of each other but share the balanced brace group primitive in [`groups`]:
//!
//! - [`glossary`] turns raw source into a [`Document`] of literals,
//!   definitions and references.
//! - [`addition`] splits already expanded text into plain text and
//!   `\addition[..]{..}` segments.
//!
//! A grammar either consumes its entire input or fails; there is no error
//! recovery and no partial result.

pub mod addition;
pub mod glossary;
pub mod groups;

use chumsky::prelude::*;
use tracing::debug;

use crate::gls::ast::{Document, Segment};
use crate::gls::error::{Grammar, SyntaxError};

/// Type alias for parser error
pub(crate) type ParserError = Simple<char>;

/// Parse raw source with the glossary grammar.
pub fn parse_glossary(source: &str) -> Result<Document, SyntaxError> {
    glossary::document()
        .parse(source)
        .map(Document::new)
        .map_err(|errors| to_syntax_error(Grammar::Glossary, errors))
}

/// Parse expanded text with the addition grammar.
pub fn parse_additions(text: &str) -> Result<Vec<Segment>, SyntaxError> {
    addition::segments()
        .parse(text)
        .map_err(|errors| to_syntax_error(Grammar::Addition, errors))
}

/// Collapse chumsky's error list into the first (earliest) failure.
fn to_syntax_error(grammar: Grammar, errors: Vec<ParserError>) -> SyntaxError {
    let error = errors.into_iter().min_by_key(|e| e.span().start);
    let (offset, found) = match error {
        Some(e) => (e.span().start, e.found().copied()),
        None => (0, None),
    };
    debug!(%grammar, offset, ?found, "grammar rejected input");
    SyntaxError::new(grammar, offset, found)
}
