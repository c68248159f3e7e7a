//! Command-line interface for glsexpand
//! Expands glossary acronym markup and addition wrappers in a text file.
//!
//! Usage:
//!   glsexpand `<path>`                              - Print the expanded text
//!   glsexpand `<path>` --format entries            - Print the tokenized document as JSON
//!   glsexpand `<path>` --format dictionary         - Print the acronym dictionary as JSON
//!   glsexpand `<path>` --config `<file>`             - Layer a TOML config over the defaults

use std::io::{self, IsTerminal, Write};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use gls_config::{ConfigError, GlsConfig, Loader, OutputFormat};
use gls_parser::{DocumentLoader, Error};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("error: invalid configuration: {}", e);
        process::exit(1);
    });
    init_logging(&config.logging.level);

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    match run(path, &config) {
        Ok(output) => {
            if let Err(e) = write_output(&mut io::stdout().lock(), &output) {
                eprintln!("error: failed to write output: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            debug!(kind = e.kind(), "expansion failed");
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("glsexpand")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand glossary acronyms and addition markup in a text file")
        .arg(
            Arg::new("path")
                .help("Path to the input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: text)")
                .value_parser(OutputFormat::NAMES),
        )
        .arg(
            Arg::new("plural-suffix")
                .long("plural-suffix")
                .help("Suffix appended by plural references (default: s)"),
        )
        .arg(
            Arg::new("keep-additions")
                .long("keep-additions")
                .help("Leave \\addition[..]{..} blocks in the output")
                .action(ArgAction::SetTrue),
        )
}

/// Defaults, then the `--config` file, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<GlsConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(suffix) = matches.get_one::<String>("plural-suffix") {
        loader = loader.set_override("expansion.plural_suffix", suffix.as_str())?;
    }
    if matches.get_flag("keep-additions") {
        loader = loader.set_override("additions.unwrap", false)?;
    }
    loader.build()
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

/// Load the input and produce the requested output.
fn run(path: &str, config: &GlsConfig) -> Result<String, Error> {
    let loader = DocumentLoader::from_path(path)?;

    match config.output.format {
        OutputFormat::Text => loader.expand_with(&config.expansion_options()),
        OutputFormat::Entries => Ok(to_json(&loader.tokenize()?)),
        OutputFormat::Dictionary => Ok(to_json(&loader.dictionary()?)),
    }
}

/// Write `output` and flush, so a closed stdout surfaces as an error.
fn write_output<W: Write>(out: &mut W, output: &str) -> io::Result<()> {
    out.write_all(output.as_bytes())?;
    out.flush()
}

fn to_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("error: failed to format output: {}", e);
        process::exit(1);
    });
    json.push('\n');
    json
}
