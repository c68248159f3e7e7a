//! End-to-end expansion scenarios
//!
//! Each test feeds a small source through all four passes via
//! `DocumentLoader` and checks the final text or the error.

use gls_parser::gls::ast::{Entry, Modifiers};
use gls_parser::{DocumentLoader, Error, ExpansionOptions, Grammar};
use rstest::rstest;

fn expand(source: &str) -> Result<String, Error> {
    DocumentLoader::from_string(source).expand()
}

#[test]
fn test_acronym_first_and_subsequent_use() {
    let output = expand(
        "\\newacronym{cpu}{CPU}{Central Processing Unit} \\gls{cpu} and \\gls{cpu} again \\Glspl{cpu}.",
    )
    .unwrap();
    // The space after the definition is literal text and survives.
    assert_eq!(output, " Central Processing Unit (CPU) and CPU again CPUs.");
}

#[test]
fn test_addition_after_acronym() {
    let output = expand(
        "\\newacronym{cpu}{CPU}{Central Processing Unit}The \\gls{cpu}. \\addition[new]{Central fact} stays.",
    )
    .unwrap();
    insta::assert_snapshot!(output, @"The Central Processing Unit (CPU). Central fact stays.");
}

#[test]
fn test_addition_wrapping_a_reference() {
    let output = expand(
        "\\newacronym{ram}{RAM}{random access memory}\\addition[rev2]{More \\gls{ram}.} Less \\gls{ram}.",
    )
    .unwrap();
    insta::assert_snapshot!(output, @"More random access memory (RAM). Less RAM.");
}

#[test]
fn test_reference_before_definition() {
    let output = expand("\\Gls{api} first. \\newacronym{api}{API}{application programming interface}")
        .unwrap();
    assert_eq!(output, "Application programming interface (API) first. ");
}

#[test]
fn test_redefinition_uses_last_definition_everywhere() {
    let output = expand(
        "\\newacronym{x}{X1}{first}\\gls{x} \\newacronym{x}{X2}{second}\\gls{x}",
    )
    .unwrap();
    assert_eq!(output, "second (X2) X2");
}

#[rstest]
#[case::plain("\\gls{nic}", "network interface card (NIC)")]
#[case::plural("\\glspl{nic}", "network interface cards (NICs)")]
#[case::upper("\\Gls{nic}", "Network interface card (NIC)")]
#[case::upper_plural("\\Glspl{nic}", "Network interface cards (NICs)")]
#[case::upper_first("\\Glsfirst{nic}", "Network interface card (NIC)")]
fn test_first_use_forms(#[case] reference: &str, #[case] expected: &str) {
    let source = format!("\\newacronym{{nic}}{{NIC}}{{network interface card}}{}", reference);
    assert_eq!(expand(&source).unwrap(), expected);
}

#[rstest]
#[case::plain("\\gls{nic}", "NIC")]
#[case::plural("\\glspl{nic}", "NICs")]
#[case::upper("\\Gls{nic}", "NIC")]
#[case::upper_plural("\\Glspl{nic}", "NICs")]
#[case::upper_first("\\Glsfirst{nic}", "Network interface card (NIC)")]
fn test_subsequent_use_forms(#[case] reference: &str, #[case] expected: &str) {
    let source = format!(
        "\\newacronym{{nic}}{{NIC}}{{network interface card}}\\gls{{nic}}|{}",
        reference
    );
    let output = expand(&source).unwrap();
    assert_eq!(output, format!("network interface card (NIC)|{}", expected));
}

#[test]
fn test_lowercase_short_form_is_capitalized_on_subsequent_use() {
    let output = expand("\\newacronym{eg}{e.g.}{for example}\\gls{eg}; \\Gls{eg}").unwrap();
    assert_eq!(output, "for example (e.g.); E.g.");
}

#[test]
fn test_unknown_gls_commands_vanish() {
    let output = expand("\\newacronym{a}{A}{alpha}\\glsreset{a} \\glsentryshort{a}!").unwrap();
    assert_eq!(output, "{a} {a}!");
}

#[test]
fn test_unterminated_group_is_syntax_error() {
    let err = expand("\\gls{cpu").unwrap_err();
    assert!(matches!(err, Error::Syntax(ref e) if e.grammar == Grammar::Glossary));
    assert_eq!(err.to_string(), "failed to parse the input");
}

#[test]
fn test_undefined_reference_names_the_acronym() {
    let err = expand("A \\gls{widget} here").unwrap_err();
    assert!(matches!(err, Error::UndefinedReference { ref name } if name == "widget"));
    assert_eq!(err.to_string(), "missing definition for widget");
}

#[test]
fn test_malformed_addition_is_syntax_error() {
    let err = expand("see \\addition{missing options}").unwrap_err();
    assert!(matches!(err, Error::Syntax(ref e) if e.grammar == Grammar::Addition));
}

#[test]
fn test_keeping_additions() {
    let options = ExpansionOptions {
        unwrap_additions: false,
        ..ExpansionOptions::default()
    };
    let output = DocumentLoader::from_string("\\addition[x]{kept}")
        .expand_with(&options)
        .unwrap();
    assert_eq!(output, "\\addition[x]{kept}");
}

#[test]
fn test_tokenize_exposes_entries() {
    let doc = DocumentLoader::from_string("\\newacronym{a}{A}{alpha} \\Glspl{a}")
        .tokenize()
        .unwrap();
    match &doc.entries()[2] {
        Entry::Reference(reference) => {
            assert_eq!(reference.name, "a");
            assert_eq!(reference.modifiers, Modifiers::UPPERCASE | Modifiers::PLURAL);
        }
        other => panic!("expected a reference, got {:?}", other),
    }
}

#[test]
fn test_entries_serialize_to_json() {
    let doc = DocumentLoader::from_string("x\\gls{a}").tokenize().unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "literal", "value": "x" },
            {
                "kind": "reference",
                "value": {
                    "name": "a",
                    "modifiers": { "plural": false, "uppercase": false, "first": false }
                }
            }
        ])
    );
}
