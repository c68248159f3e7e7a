//! Standard transform definitions
//!
//! Pre-built pipelines for the common entry points, defined as static
//! references using `once_cell::sync::Lazy`. Use [`pipeline`] when the
//! expansion options differ from the defaults.

use once_cell::sync::Lazy;

use crate::gls::ast::Document;
use crate::gls::expansion::ExpansionOptions;
use crate::gls::transforms::stages::{
    BuildDictionary, Expansion, Glossary, Tokenization, UnwrapAdditions,
};
use crate::gls::transforms::Transform;

/// Type alias for the tokenizing transform
pub type DocumentTransform = Transform<String, Document>;

/// Type alias for the dictionary transform
pub type GlossaryTransform = Transform<String, Glossary>;

/// Type alias for transforms producing text
pub type TextTransform = Transform<String, String>;

/// Tokenization: String → Document
pub static TOKENIZATION: Lazy<DocumentTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// Tokenization and dictionary build: String → Glossary
pub static DICTIONARY: Lazy<GlossaryTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new())
        .then(BuildDictionary::new())
});

/// Glossary expansion without the addition pass: String → String
pub static GLOSSARY: Lazy<TextTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&*DICTIONARY)
        .then(Expansion::default())
});

/// All four passes with default options: String → String
pub static FULL_EXPANSION: Lazy<TextTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&*GLOSSARY)
        .then(UnwrapAdditions::new())
});

/// Build the text pipeline for `options`.
pub fn pipeline(options: &ExpansionOptions) -> TextTransform {
    let expanded = Transform::from_fn(Ok)
        .then_transform(&*DICTIONARY)
        .then(Expansion::new(options.plural_suffix.clone()));

    if options.unwrap_additions {
        expanded.then(UnwrapAdditions::new())
    } else {
        expanded
    }
}
