//! Integration tests for the optfile CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use optfile_test_utils::ConfigDir;
use predicates::prelude::*;

const SCHEMA: &str = r#"
[[option]]
key = "UDPPort"
type = "integer"
strategy = "replace"
default = 53

[[option]]
key = "UDPServer"
type = "string"
strategy = "append-discard-default"
default = "1.2.4.8"

[[option]]
key = "UseCache"
type = "boolean"
default = true

[[alias]]
key = "UDPGroup"
target = "UDPServer"
"#;

/// Get a Command for the optfile binary
fn optfile_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("optfile"))
}

fn fixture() -> ConfigDir {
    let dir = ConfigDir::new();
    dir.write("schema.toml", SCHEMA);
    dir.write_lines(
        "dns.conf",
        &["UDPPort 5353", "UDPServer 8.8.8.8", "UDPGroup 9.9.9.9, 1.1.1.1"],
    );
    dir
}

#[test]
fn test_help_output() {
    optfile_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("optfile"));
}

#[test]
fn test_show_text() {
    let dir = fixture();
    optfile_cmd()
        .env_remove("OPTFILE_SCHEMA")
        .env("NO_COLOR", "1")
        .arg("show")
        .arg("--schema")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 3 directive(s)"))
        .stdout(predicate::str::contains("UDPPort"))
        .stdout(predicate::str::contains("[8.8.8.8, 9.9.9.9, 1.1.1.1]"));
}

#[test]
fn test_show_json() {
    let dir = fixture();
    let output = optfile_cmd()
        .arg("show")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["applied"], 3);
    assert_eq!(report["options"]["UDPPort"]["value"], 5353);
    assert_eq!(report["options"]["UDPPort"]["status"], "specialized");
    assert_eq!(report["options"]["UseCache"]["status"], "default-value");
    assert_eq!(report["options"]["UseCache"]["value"], true);
    assert_eq!(report["options"]["UDPServer"]["strategy"], "append");
    assert_eq!(
        report["options"]["UDPServer"]["value"],
        serde_json::json!(["8.8.8.8", "9.9.9.9", "1.1.1.1"])
    );
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = fixture();
    optfile_cmd()
        .arg("--verbose")
        .arg("get")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .arg("UDPPort")
        .assert()
        .success()
        .stdout("5353\n")
        .stderr(predicate::str::contains("Verbose mode enabled"))
        .stderr(predicate::str::contains("Finished loading directives"));
}

#[test]
fn test_get_through_alias() {
    let dir = fixture();
    optfile_cmd()
        .arg("get")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .arg("UDPGroup")
        .assert()
        .success()
        .stdout("8.8.8.8\n9.9.9.9\n1.1.1.1\n");
}

#[test]
fn test_get_schema_from_env() {
    let dir = fixture();
    optfile_cmd()
        .env("OPTFILE_SCHEMA", dir.path("schema.toml"))
        .arg("get")
        .arg(dir.path("dns.conf"))
        .arg("UDPPort")
        .assert()
        .success()
        .stdout("5353\n");
}

#[test]
fn test_get_unknown_key_fails() {
    let dir = fixture();
    optfile_cmd()
        .arg("get")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .arg("Nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option: Nope"));
}

#[test]
fn test_missing_directive_file_fails() {
    let dir = fixture();
    optfile_cmd()
        .arg("show")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("absent.conf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.conf"));
}

#[test]
fn test_zero_line_length_rejected() {
    let dir = fixture();
    optfile_cmd()
        .arg("show")
        .arg("-s")
        .arg(dir.path("schema.toml"))
        .arg(dir.path("dns.conf"))
        .arg("--max-line-len")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_line_len"));
}
