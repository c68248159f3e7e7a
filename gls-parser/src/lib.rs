//! # gls-parser
//!
//! Expands glossary acronym markup (`\newacronym`, `\gls` and friends) and the
//! editorial `\addition[..]{..}` wrapper into plain text.
//!
//! Processing runs as four passes, each consuming the full output of the one
//! before it:
//!
//! 1. tokenizing the source into a [`Document`](gls::ast::Document)
//! 2. building the [`Dictionary`](gls::dictionary::Dictionary) of definitions
//! 3. expanding references against the dictionary
//! 4. unwrapping `\addition` blocks in the expanded text
//!
//! The passes are exposed individually and as composed pipelines in
//! [`gls::transforms`]. Most callers want [`gls::loader::DocumentLoader`].

pub mod gls;

pub use gls::error::{Error, Grammar, SyntaxError};
pub use gls::expansion::ExpansionOptions;
pub use gls::loader::DocumentLoader;
