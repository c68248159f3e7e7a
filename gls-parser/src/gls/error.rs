//! Error types for glossary expansion
//!
//! Every failure is fatal for the current run: there is no partial output and
//! nothing is retried.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two grammars rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Acronym definitions and references, run on the raw source.
    Glossary,
    /// `\addition[..]{..}` wrappers, run on the expanded text.
    Addition,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Glossary => write!(f, "glossary"),
            Grammar::Addition => write!(f, "addition"),
        }
    }
}

/// A grammar failed to consume its whole input.
///
/// The message is deliberately generic; `offset` (in characters) and `found`
/// are kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse the input")]
pub struct SyntaxError {
    pub grammar: Grammar,
    pub offset: usize,
    pub found: Option<char>,
}

impl SyntaxError {
    pub fn new(grammar: Grammar, offset: usize, found: Option<char>) -> Self {
        SyntaxError {
            grammar,
            offset,
            found,
        }
    }
}

/// The main error type for glossary expansion.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("failed to open input \"{}\": {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A reference names an acronym that is never defined.
    #[error("missing definition for {name}")]
    UndefinedReference { name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn undefined_reference(name: impl Into<String>) -> Self {
        Error::UndefinedReference { name: name.into() }
    }

    /// Short label for the error category, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io { .. } => "io",
            Error::Syntax(_) => "syntax",
            Error::UndefinedReference { .. } => "undefined-reference",
        }
    }
}
