//! Tests for error messages, suggestions and exit codes.

mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{elemental, write};

#[test]
fn element_name_without_hyphen_is_a_user_error() {
    let home = TempDir::new().unwrap();
    let answers = write(&home, "answers.json", r#"{"name": "widget"}"#);

    elemental(&home)
        .arg("compile")
        .arg(&answers)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("widget"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("hyphen"));
}

#[test]
fn pascal_case_element_name_is_not_repaired() {
    let home = TempDir::new().unwrap();
    let answers = write(&home, "answers.json", r#"{"name": "MyWidget"}"#);

    elemental(&home)
        .arg("compile")
        .arg(&answers)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("MyWidget"));
}

#[test]
fn malformed_answers_file_is_a_user_error() {
    let home = TempDir::new().unwrap();
    let broken = write(&home, "broken.json", r#"{"name": "my-widget""#);
    let unknown = write(&home, "unknown.json", r#"{"name": "my-widget", "colour": "red"}"#);

    for answers in [broken, unknown] {
        elemental(&home)
            .arg("compile")
            .arg(&answers)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid answers"));
    }
}

#[test]
fn duplicate_property_is_a_user_error() {
    let home = TempDir::new().unwrap();
    let answers = write(
        &home,
        "answers.json",
        r#"{"name": "my-widget", "propsList": [{"name": "title"}, {"name": "title"}]}"#,
    );

    elemental(&home)
        .arg("compile")
        .arg(&answers)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("title"));
}

#[test]
fn missing_answers_file_is_not_found() {
    let home = TempDir::new().unwrap();
    elemental(&home)
        .args(["compile", "does-not-exist.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn bad_config_value_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    let config = write(&home, "elemental.toml", "[defaults]\nlicense = \"GPL\"\n");
    let answers = write(&home, "answers.json", r#"{"name": "my-widget"}"#);

    elemental(&home)
        .arg("--config")
        .arg(&config)
        .arg("compile")
        .arg(&answers)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("defaults.license"));
}

#[test]
fn missing_explicit_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    elemental(&home)
        .args(["--config", "nope.toml", "variants"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_config_key() {
    let home = TempDir::new().unwrap();
    elemental(&home)
        .args(["config", "get", "defaults.colour"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn out_pointing_at_a_file_is_rejected() {
    let home = TempDir::new().unwrap();
    let answers = write(&home, "answers.json", r#"{"name": "my-widget"}"#);
    let file = write(&home, "not-a-dir", "");

    elemental(&home)
        .arg("compile")
        .arg(&answers)
        .arg("--out")
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn bad_arguments_exit_two() {
    let home = TempDir::new().unwrap();
    elemental(&home)
        .args(["variants", "--format", "csv"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'csv'"));
}

#[test]
fn unknown_output_format_in_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    let config = write(&home, "elemental.toml", "[output]\nformat = \"yaml\"\n");

    elemental(&home)
        .arg("--config")
        .arg(&config)
        .arg("variants")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("output.format"));

    elemental(&home)
        .args(["--output-format", "plain", "--config"])
        .arg(&config)
        .arg("variants")
        .assert()
        .success();
}

#[test]
fn verbose_errors_drop_the_hint() {
    let home = TempDir::new().unwrap();
    elemental(&home)
        .args(["-v", "compile", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use -v").not());
}
