//! Expansion stage
//!
//! Resolves references against the glossary's dictionary. The dictionary is
//! consumed: its `used` flags only matter for this one run.

use crate::gls::error::Error;
use crate::gls::expansion::{expand, ExpansionOptions, DEFAULT_PLURAL_SUFFIX};
use crate::gls::transforms::stages::Glossary;
use crate::gls::transforms::Runnable;

/// Expansion stage: [`Glossary`] → `String`.
pub struct Expansion {
    plural_suffix: String,
}

impl Expansion {
    pub fn new(plural_suffix: impl Into<String>) -> Self {
        Expansion {
            plural_suffix: plural_suffix.into(),
        }
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self::new(DEFAULT_PLURAL_SUFFIX)
    }
}

impl Runnable<Glossary, String> for Expansion {
    fn run(&self, input: Glossary) -> Result<String, Error> {
        let Glossary {
            document,
            mut dictionary,
        } = input;
        let options = ExpansionOptions {
            plural_suffix: self.plural_suffix.clone(),
            ..Default::default()
        };
        expand(&document, &mut dictionary, &options)
    }
}
