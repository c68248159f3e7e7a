//! Main module for glossary expansion

pub mod ast;
pub mod dictionary;
pub mod error;
pub mod expansion;
pub mod loader;
pub mod parsing;
pub mod transforms;
pub mod unwrapping;
