//! Shared configuration loader for glsexpand.
//!
//! `defaults/gls.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer a user file and single-key
//! overrides on top via [`Loader`] before deserializing into [`GlsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use gls_parser::ExpansionOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/gls.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GlsConfig {
    pub expansion: ExpansionConfig,
    pub additions: AdditionsConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl GlsConfig {
    /// Options for the expansion pipeline.
    pub fn expansion_options(&self) -> ExpansionOptions {
        ExpansionOptions {
            plural_suffix: self.expansion.plural_suffix.clone(),
            unwrap_additions: self.additions.unwrap,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    pub plural_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdditionsConfig {
    pub unwrap: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `warn` or `gls_parser=debug`.
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// What the CLI prints on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The fully expanded text.
    Text,
    /// The tokenized document as JSON.
    Entries,
    /// The acronym dictionary as JSON.
    Dictionary,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "entries", "dictionary"];
}

/// Builds a [`GlsConfig`] from the embedded defaults plus caller layers.
///
/// Later layers win: a `--config` file overrides the defaults and flag
/// overrides win over both.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file. It must exist; `build` fails otherwise.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        Loader {
            builder: self.builder.add_source(file),
        }
    }

    /// Override one dotted key such as `expansion.plural_suffix`.
    pub fn set_override<V>(self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        Ok(Loader {
            builder: self.builder.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<GlsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
