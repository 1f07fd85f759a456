//! Tests for CLI error reporting and exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();
    let missing = env.path().join("missing.yaml");
    env.command()
        .arg("--config")
        .arg(&missing)
        .args(["inspect", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("missing.yaml"));
}

#[test]
fn test_malformed_user_config_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("markdown_extensions: [md\n");
    env.command()
        .args(["classify", "a.md"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_config_field_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("image_extensions: [svg]\n");
    env.command()
        .args(["inspect", "a.svg"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_extension_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("wiki_page_extensions: [\"docs/md\"]\n");
    env.command()
        .args(["inspect", "a.md"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("wiki_page_extensions"));
}

#[test]
fn test_invalid_output_format_env_exit_code() {
    let env = TestEnv::new();
    env.command()
        .env("LINKINFO_OUTPUT_FORMAT", "csv")
        .args(["inspect", "a.md"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("LINKINFO_OUTPUT_FORMAT"));
}

#[test]
fn test_commands_without_config_ignore_bad_config() {
    let env = TestEnv::new();
    env.write_user_config("markdown_extensions: [md\n");
    env.command()
        .args(["normalize", "./a/"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_invalid_format_value() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect", "--format", "csv", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
