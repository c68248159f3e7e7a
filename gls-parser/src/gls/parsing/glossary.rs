//! Glossary grammar
//!
//! Recognizes, left to right:
//!
//! - `\newacronym{name}{short}{long}` as a [`Definition`]
//! - `\gls`, `\glspl`, `\Gls`, `\Glspl` and `\Glsfirst` followed by `{name}`
//!   as a [`ReferenceMark`]
//! - any other `\gls<letters>` command, which is consumed and dropped
//! - everything else as literal text, up to the next command keyword
//!
//! A command keyword that is not followed by its groups is a hard failure,
//! as is an unbalanced group.

use chumsky::prelude::*;

use super::groups::group;
use super::ParserError;
use crate::gls::ast::{Definition, Entry, Modifiers, ReferenceMark};

const NEWACRONYM: &str = "\\newacronym";

/// Reference commands and the modifiers each one carries.
const REFERENCE_COMMANDS: [(&str, Modifiers); 5] = [
    ("\\gls", Modifiers::NONE),
    ("\\glspl", Modifiers::PLURAL),
    ("\\Gls", Modifiers::UPPERCASE),
    ("\\Glsfirst", Modifiers::UPPERCASE.union(Modifiers::FIRST)),
    ("\\Glspl", Modifiers::UPPERCASE.union(Modifiers::PLURAL)),
];

/// `\newacronym{name}{short}{long}`
fn definition() -> impl Parser<char, Entry, Error = ParserError> + Clone {
    just(NEWACRONYM)
        .ignore_then(group())
        .then(group())
        .then(group())
        .map(|((name, short_form), long_form)| {
            Entry::Definition(Definition {
                name,
                short_form,
                long_form,
            })
        })
}

/// A single reference command such as `\Glspl{name}`
fn reference(
    keyword: &'static str,
    modifiers: Modifiers,
) -> impl Parser<char, Entry, Error = ParserError> + Clone {
    just(keyword)
        .ignore_then(group())
        .map(move |name| Entry::Reference(ReferenceMark { name, modifiers }))
}

/// Any recognized command
fn command() -> impl Parser<char, Entry, Error = ParserError> + Clone {
    let [gls, glspl, upper_gls, upper_glsfirst, upper_glspl] =
        REFERENCE_COMMANDS.map(|(keyword, modifiers)| reference(keyword, modifiers));

    choice((
        definition(),
        gls,
        glspl,
        upper_gls,
        upper_glsfirst,
        upper_glspl,
    ))
}

/// `\gls` followed by letters that did not match a known reference command.
fn unrecognized() -> impl Parser<char, (), Error = ParserError> + Clone {
    just("\\gls")
        .ignore_then(
            filter(|c: &char| c.is_ascii_alphabetic())
                .repeated()
                .at_least(1),
        )
        .ignored()
}

/// The prefixes that end a literal run. `\glspl` and friends share these.
fn keyword() -> impl Parser<char, &'static str, Error = ParserError> + Clone {
    choice((just(NEWACRONYM), just("\\gls"), just("\\Gls")))
}

/// A run of text that does not start a command keyword
fn literal() -> impl Parser<char, String, Error = ParserError> + Clone {
    keyword().not().repeated().at_least(1).collect::<String>()
}

/// Parse a complete document into entries.
pub(crate) fn document() -> impl Parser<char, Vec<Entry>, Error = ParserError> {
    choice((
        command().map(Some),
        unrecognized().to(None),
        literal().map(|text| Some(Entry::Literal(text))),
    ))
    .repeated()
    .then_ignore(end())
    .map(|entries| entries.into_iter().flatten().collect())
}
