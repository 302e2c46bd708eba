//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("herohub").expect("Failed to find herohub binary")
}

/// Write a two-character catalog to a temporary file
fn small_catalog() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
        {"id":"frost-mage","name":"Frost Mage","description":"Cold.","role":"Mage","rarity":"Epic",
         "stats":{"attack":80,"defense":30,"speed":50,"hp":50}},
        {"id":"iron-guard","name":"Iron Guard","description":"Sturdy.","role":"Tank","rarity":"Common",
         "stats":{"attack":40,"defense":90,"speed":30,"hp":95}}
    ]"#,
    )
    .unwrap();
    file
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_all() {
    cli_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters (8 of 8):"))
        .stdout(predicate::str::contains("Aria Stormblade"))
        .stdout(predicate::str::contains("Tinker Bolt"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    cli_cmd()
        .args(["list", "--search", "MAGE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frost Mage"))
        .stdout(predicate::str::contains("Pyra").not());
}

#[test]
fn test_list_role_filter() {
    cli_cmd()
        .args(["list", "--role", "Tank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iron Guard"))
        .stdout(predicate::str::contains("Gorrak the Unbroken"))
        .stdout(predicate::str::contains("Frost Mage").not());
}

#[test]
fn test_list_empty_result() {
    cli_cmd()
        .args(["list", "--role", "Mage", "--rarity", "Legendary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters found"))
        .stdout(predicate::str::contains("Try adjusting your filters"));
}

#[test]
fn test_list_invalid_role() {
    cli_cmd()
        .args(["list", "--role", "Healer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role 'Healer'"));
}

#[test]
fn test_list_invalid_rarity() {
    cli_cmd()
        .args(["list", "--rarity", "Mythic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rarity 'Mythic'"))
        .stderr(predicate::str::contains("All, Common, Rare, Epic, Legendary"));
}

#[test]
fn test_verbose_logs_catalog_source() {
    cli_cmd()
        .args(["-v", "list"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Catalog ready"))
        .stderr(predicate::str::contains("built-in"));
}

#[test]
fn test_list_json() {
    let output = cli_cmd()
        .args(["list", "--search", "zz", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_list_custom_catalog_preserves_order() {
    let catalog = small_catalog();
    let output = cli_cmd()
        .arg("--catalog")
        .arg(catalog.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["frost-mage", "iron-guard"]);
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_character() {
    cli_cmd()
        .args(["show", "frost-mage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frost Mage"))
        .stdout(predicate::str::contains("Abilities:"))
        .stdout(predicate::str::contains("Absolute Zero"))
        .stdout(predicate::str::contains("How to Play Frost Mage:"))
        .stdout(predicate::str::contains("Glacier Pen"));
}

#[test]
fn test_show_without_fan_art() {
    cli_cmd()
        .args(["show", "pyra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no fan art yet)"));
}

#[test]
fn test_show_not_found() {
    cli_cmd()
        .args(["show", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Character not found: nobody"));
}

// ============================================================================
// Selector and Summary Tests
// ============================================================================

#[test]
fn test_roles_lists_all_first() {
    cli_cmd()
        .arg("roles")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\nTank\nDPS\nSupport\nMage\nAssassin"));
}

#[test]
fn test_rarities() {
    cli_cmd()
        .arg("rarities")
        .assert()
        .success()
        .stdout("All\nCommon\nRare\nEpic\nLegendary\n");
}

#[test]
fn test_stats_with_custom_catalog() {
    let catalog = small_catalog();
    cli_cmd()
        .arg("--catalog")
        .arg(catalog.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters: 2"))
        .stdout(predicate::str::contains("Fan art likes: 0"));
}

#[test]
fn test_missing_catalog_file() {
    cli_cmd()
        .args(["--catalog", "/definitely/not/here.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
