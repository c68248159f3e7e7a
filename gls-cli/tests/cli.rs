use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write input");
    file
}

#[test]
fn expands_acronyms_to_stdout() {
    let input = input_file(
        "\\newacronym{cpu}{CPU}{Central Processing Unit} \\gls{cpu} and \\gls{cpu} again \\Glspl{cpu}.",
    );
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path());

    cmd.assert()
        .success()
        .stdout(" Central Processing Unit (CPU) and CPU again CPUs.");
}

#[test]
fn unwraps_additions() {
    let input = input_file("\\newacronym{cpu}{CPU}{Central Processing Unit}\\addition[new]{Central fact}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path());

    cmd.assert().success().stdout("Central fact");
}

#[test]
fn keep_additions_flag_skips_unwrapping() {
    let input = input_file("\\addition[new]{Central fact}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("--keep-additions");

    cmd.assert()
        .success()
        .stdout("\\addition[new]{Central fact}");
}

#[test]
fn plural_suffix_flag() {
    let input = input_file("\\newacronym{box}{box}{bounding box}\\glspl{box}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("--plural-suffix").arg("es");

    cmd.assert().success().stdout("bounding boxes (boxes)");
}

#[test]
fn unterminated_group_fails_with_syntax_error() {
    let input = input_file("\\gls{cpu");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: failed to parse the input"));
}

#[test]
fn undefined_reference_fails_naming_it() {
    let input = input_file("Use the \\gls{widget}.");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing definition for widget"));
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg("/nonexistent/input.tex");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open input"));
}

#[test]
fn empty_description_warns_but_succeeds() {
    let input = input_file("\\newacronym{x}{X}{}\\gls{x}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(" (X)")
        .stderr(predicate::str::contains("acronym has an empty description"));
}

#[test]
fn entries_format_prints_json() {
    let input = input_file("\\newacronym{cpu}{CPU}{Central Processing Unit}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("--format").arg("entries");

    cmd.assert().success().stdout(
        predicate::str::contains("\"kind\": \"definition\"")
            .and(predicate::str::contains("\"long_form\": \"Central Processing Unit\"")),
    );
}

#[test]
fn dictionary_format_prints_json() {
    let input = input_file("\\newacronym{cpu}{CPU}{first}\\newacronym{cpu}{CPU}{second}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("-f").arg("dictionary");

    cmd.assert().success().stdout(
        predicate::str::contains("\"cpu\"")
            .and(predicate::str::contains("\"used\": false"))
            .and(predicate::str::contains("second"))
            .and(predicate::str::contains("first").not()),
    );
}

#[test]
fn config_file_is_layered() {
    let config = input_file("[additions]\nunwrap = false\n");
    let input = input_file("\\addition[a]{b}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("--config").arg(config.path());

    cmd.assert().success().stdout("\\addition[a]{b}");
}

#[test]
fn unknown_format_is_rejected() {
    let input = input_file("text");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path()).arg("--format").arg("yaml");

    cmd.assert().failure();
}

#[test]
fn flags_override_config_file() {
    let config = input_file("[expansion]\nplural_suffix = \"es\"\n");
    let input = input_file("\\newacronym{ox}{ox}{ox}\\glspl{ox}");
    let mut cmd = cargo_bin_cmd!("glsexpand");
    cmd.arg(input.path())
        .arg("-c")
        .arg(config.path())
        .arg("--plural-suffix")
        .arg("en");

    cmd.assert().success().stdout("oxen (oxen)");
}
