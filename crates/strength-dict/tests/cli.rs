//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const EXPORT_NAMES: [&str; 6] = [
    "namedNumbers",
    "characterSets",
    "periods",
    "top10",
    "top10k",
    "patterns",
];

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("STRENGTH_DICT_DICTIONARY_DIR")
        .env_remove("STRENGTH_DICT_REQUIRE_ALL");
    cmd
}

fn stdout_json(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Write the embedded assets (via `dump`) into `dir` as individual files.
fn export_assets(dir: &std::path::Path) {
    let namespace = stdout_json(&["dump"]);
    for (key, file) in [
        ("namedNumbers", "named-numbers.json"),
        ("characterSets", "character-sets.json"),
        ("periods", "periods.json"),
        ("top10", "top10.json"),
        ("top10k", "top10k.json"),
        ("patterns", "patterns.json"),
    ] {
        fs::write(dir.join(file), namespace[key].to_string()).unwrap();
    }
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Dump
// =============================================================================

#[test]
fn dump_has_exactly_the_six_export_names() {
    let json = stdout_json(&["dump"]);
    let object = json.as_object().expect("dump should print an object");
    assert_eq!(object.len(), 6);
    for name in EXPORT_NAMES {
        let field = &object[name];
        assert!(!field.is_null(), "{name} should be populated");
        assert!(
            field.as_array().is_some_and(|entries| !entries.is_empty()),
            "{name} should have entries"
        );
    }
}

#[test]
fn dump_is_idempotent() {
    assert_eq!(stdout_json(&["dump"]), stdout_json(&["dump", "--compact"]));
}

// =============================================================================
// List / Show
// =============================================================================

#[test]
fn list_json_reports_every_asset() {
    let json = stdout_json(&["--json", "list"]);
    let rows = json.as_array().unwrap();
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, EXPORT_NAMES);
    assert_eq!(rows[3]["entries"], 10);
    assert_eq!(rows[2]["file"], "periods.json");
}

#[test]
fn list_describes_the_embedded_top10k_as_partial() {
    let json = stdout_json(&["--json", "list"]);
    let top10k = &json.as_array().unwrap()[4];
    assert_eq!(top10k["name"], "top10k");
    assert!(top10k["entries"].as_u64().unwrap() < 10_000);
    assert!(top10k["description"].as_str().unwrap().contains("curated head"));
}

#[test]
fn lookup_miss_reports_how_many_entries_were_checked() {
    cmd()
        .args(["--color", "never", "lookup", "zz-not-a-common-password-zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top10k entries checked"));
}

#[test]
fn list_text_shows_file_names() {
    cmd()
        .args(["--color", "never", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top10k.json"))
        .stdout(predicate::str::contains("characterSets"));
}

#[test]
fn show_top10_prints_ranked_words() {
    cmd()
        .args(["show", "top10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\t123456\n2\tpassword\n"));
}

#[test]
fn show_accepts_file_stem_and_any_case() {
    cmd()
        .args(["show", "NAMED-NUMBERS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10^6\tmillion"));
}

#[test]
fn show_json_matches_dump_field() {
    let shown = stdout_json(&["--json", "show", "periods"]);
    let dumped = stdout_json(&["dump"]);
    assert_eq!(shown, dumped["periods"]);
}

#[test]
fn show_unknown_name_fails() {
    cmd()
        .args(["show", "top100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("top100"));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn check_embedded_passes() {
    cmd()
        .args(["--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"))
        .stdout(predicate::str::contains("6 assets loaded from embedded"));
}

#[test]
fn check_with_full_directory_passes_strictly() {
    let tmp = TempDir::new().unwrap();
    export_assets(tmp.path());

    let json = stdout_json(&[
        "--json",
        "--require-all",
        "--dict-dir",
        tmp.path().to_str().unwrap(),
        "check",
    ]);
    assert_eq!(json["ok"], true);
    assert!(json["source"].as_str().unwrap().starts_with("dir:"));
    assert_eq!(json["assets"].as_array().unwrap().len(), 6);
}

#[test]
fn check_fails_naming_missing_periods() {
    let tmp = TempDir::new().unwrap();
    export_assets(tmp.path());
    fs::remove_file(tmp.path().join("periods.json")).unwrap();

    cmd()
        .args(["--require-all", "--dict-dir", tmp.path().to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("asset 'periods' not found"));
}

#[test]
fn check_fails_naming_corrupted_periods() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("periods.json"), "[{\"name\": 1}").unwrap();

    // Not strict: every other asset falls back, but a corrupt file stays fatal.
    cmd()
        .args(["--dict-dir", tmp.path().to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("asset 'periods' is malformed"));
}

#[test]
fn partial_directory_overrides_only_its_assets() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("top10.json"), r#"["hunter2"]"#).unwrap();

    let json = stdout_json(&["--dict-dir", tmp.path().to_str().unwrap(), "dump"]);
    assert_eq!(json["top10"], serde_json::json!(["hunter2"]));
    assert!(json["top10k"].as_array().unwrap().len() > 10);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn lookup_common_password() {
    let json = stdout_json(&["--json", "lookup", "password"]);
    assert_eq!(json["top10_rank"], 2);
    assert_eq!(json["top10k_rank"], 2);
}

#[test]
fn lookup_reports_patterns() {
    let json = stdout_json(&["--json", "lookup", "xxasdfghjklxx"]);
    assert!(json["top10k_rank"].is_null());
    assert_eq!(json["patterns"][0]["pattern"], "asdfghjkl");
    assert_eq!(json["patterns"][0]["start"], 2);
}

#[test]
fn lookup_text_output() {
    cmd()
        .args(["--color", "never", "lookup", "dragon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMON:"))
        .stdout(predicate::str::contains("top10 rank 10"));
}

// =============================================================================
// Info & Global Flags
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let json = stdout_json(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["source"], "embedded");
}

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "list"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn log_file_is_written_when_configured() {
    let tmp = TempDir::new().unwrap();
    let log_path = tmp.path().join("logs").join("run.log");

    cmd()
        .env("STRENGTH_DICT_LOG_PATH", &log_path)
        .args(["-v", "check"])
        .assert()
        .success();

    let log = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(log.contains("dictionaries loaded"));
}
