//! Individual transformation stages
//!
//! One stage per pass. Each stage implements `Runnable`.

pub mod dictionary;
pub mod expansion;
pub mod tokenization;
pub mod unwrapping;

pub use dictionary::{BuildDictionary, Glossary};
pub use expansion::Expansion;
pub use tokenization::Tokenization;
pub use unwrapping::UnwrapAdditions;
