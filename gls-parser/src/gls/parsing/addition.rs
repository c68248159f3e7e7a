//! Addition grammar
//!
//! Splits text into plain runs and `\addition[options]{content}` blocks. The
//! options bracket is required and skipped without inspection; it may not
//! contain `]`. The content is a balanced group, so only its outer braces are
//! removed. A nested `\addition` inside the content is not unwrapped.
//!
//! The keyword has no word boundary: any text starting with `\addition`,
//! `\additional` included, must be a complete addition or parsing fails.

use chumsky::prelude::*;

use super::groups::group;
use super::ParserError;
use crate::gls::ast::Segment;

const ADDITION: &str = "\\addition";

/// `[options]`, discarded
fn options() -> impl Parser<char, (), Error = ParserError> + Clone {
    none_of("]")
        .repeated()
        .delimited_by(just('['), just(']'))
        .ignored()
}

/// `\addition[options]{content}`
fn addition() -> impl Parser<char, String, Error = ParserError> + Clone {
    just(ADDITION).ignore_then(options()).ignore_then(group())
}

/// Text up to the next `\addition` keyword
fn text() -> impl Parser<char, String, Error = ParserError> + Clone {
    just(ADDITION)
        .not()
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Parse a complete text into segments.
pub(crate) fn segments() -> impl Parser<char, Vec<Segment>, Error = ParserError> {
    addition()
        .map(Segment::Addition)
        .or(text().map(Segment::Text))
        .repeated()
        .then_ignore(end())
}
