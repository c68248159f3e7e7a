//! Reference expansion
//!
//! Folds a [`Document`] into text against a fully built [`Dictionary`].
//! Literals are copied, definitions vanish and each reference is replaced by
//! its first-use or subsequent-use form:
//!
//! | modifiers         | first use              | subsequent use  |
//! |-------------------|------------------------|-----------------|
//! | none              | `long (short)`         | `short`         |
//! | plural            | `longs (shorts)`       | `shorts`        |
//! | uppercase         | `Long (short)`         | `Short`         |
//! | uppercase, plural | `Longs (shorts)`       | `Shorts`        |
//!
//! A reference renders in subsequent-use form when its entry has been used
//! and the reference is not `\Glsfirst`. Every reference marks its entry used,
//! `\Glsfirst` included.

use tracing::trace;

use crate::gls::ast::{Definition, Document, Entry, Modifiers, ReferenceMark};
use crate::gls::dictionary::Dictionary;
use crate::gls::error::Error;

pub const DEFAULT_PLURAL_SUFFIX: &str = "s";

/// Knobs for the expansion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Appended to short and long forms by plural references.
    pub plural_suffix: String,
    /// Run the addition pass after expansion.
    pub unwrap_additions: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        ExpansionOptions {
            plural_suffix: DEFAULT_PLURAL_SUFFIX.to_string(),
            unwrap_additions: true,
        }
    }
}

/// Expand every entry of `document` in order.
///
/// Fails on the first reference whose name is not in `dictionary`.
pub fn expand(
    document: &Document,
    dictionary: &mut Dictionary,
    options: &ExpansionOptions,
) -> Result<String, Error> {
    let mut output = String::new();
    for entry in document {
        match entry {
            Entry::Literal(text) => output.push_str(text),
            Entry::Definition(_) => {}
            Entry::Reference(reference) => {
                let text = resolve(reference, dictionary, &options.plural_suffix)?;
                output.push_str(&text);
            }
        }
    }
    Ok(output)
}

/// Render one reference and mark its entry used.
pub fn resolve(
    reference: &ReferenceMark,
    dictionary: &mut Dictionary,
    plural_suffix: &str,
) -> Result<String, Error> {
    let entry = dictionary
        .get_mut(&reference.name)
        .ok_or_else(|| Error::undefined_reference(&reference.name))?;

    let subsequent = entry.used && !reference.modifiers.first;
    let text = render(
        &entry.definition,
        reference.modifiers,
        subsequent,
        plural_suffix,
    );
    entry.mark_used();

    trace!(name = %reference.name, modifiers = %reference.modifiers, subsequent, "resolved reference");
    Ok(text)
}

/// Pick the output form for a definition.
pub fn render(
    definition: &Definition,
    modifiers: Modifiers,
    subsequent: bool,
    plural_suffix: &str,
) -> String {
    let suffix = if modifiers.plural { plural_suffix } else { "" };
    let cased = |text: &str| {
        if modifiers.uppercase {
            upper_first(text)
        } else {
            text.to_string()
        }
    };

    if subsequent {
        format!("{}{}", cased(&definition.short_form), suffix)
    } else {
        format!(
            "{}{} ({}{})",
            cased(&definition.long_form),
            suffix,
            definition.short_form,
            suffix
        )
    }
}

/// Uppercase the first character (ASCII only), leaving the rest untouched.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(text.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}
