#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn redwood() -> Command {
    Command::cargo_bin("redwood").unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_content_directory() {
    let parent = TempDir::new().unwrap();
    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created bar 'mybar'"));

    assert!(parent.path().join("mybar/inventory.json").exists());
    assert!(parent.path().join("mybar/trees/barkeep.json").exists());
}

#[test]
fn init_fails_if_dir_exists() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("mybar")).unwrap();

    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_template_content() {
    let parent = TempDir::new().unwrap();
    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .success();

    redwood()
        .args(["check", "-d", parent.path().join("mybar").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_flags_broken_divert() {
    let parent = TempDir::new().unwrap();
    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .success();

    let bar = parent.path().join("mybar");
    fs::write(
        bar.join("trees/stranger.json"),
        r#"{ "title": "stranger", "root": { "node": "queue_divert", "path": "nowhere.at_all" } }"#,
    )
    .unwrap();

    redwood()
        .args(["check", "-d", bar.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.at_all"));
}

#[test]
fn check_fails_on_malformed_json() {
    let parent = TempDir::new().unwrap();
    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .success();

    let bar = parent.path().join("mybar");
    fs::write(bar.join("inventory.json"), "{broken").unwrap();

    redwood()
        .args(["check", "-d", bar.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inventory.json"));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_serves_an_ale() {
    redwood()
        .args(["run", "order_ale"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("> Order Ale")
                .and(predicate::str::contains("Barkeep:"))
                .and(predicate::str::contains("cash $18")),
        );
}

#[test]
fn run_reports_exhausted_stock() {
    // Only one whiskey in stock, so the second old fashioned names the
    // missing ingredient and the wallet stays at 14.
    redwood()
        .args(["run", "order_old_fashioned,order_old_fashioned"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("whiskey").and(predicate::str::contains("cash $14")),
        );
}

#[test]
fn run_is_deterministic() {
    let transcript = |seed: &str| {
        redwood()
            .args([
                "run",
                "-s",
                seed,
                "order_ale,order_gin_tonic,tip_2,ask_rumor",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(transcript("987654321"), transcript("987654321"));
}

#[test]
fn run_rejects_unknown_choice() {
    redwood()
        .args(["run", "order_mead"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown choice: order_mead"));
}

#[test]
fn run_uses_a_content_directory() {
    let parent = TempDir::new().unwrap();
    redwood()
        .args(["init", "mybar"])
        .current_dir(parent.path())
        .assert()
        .success();

    redwood()
        .args([
            "run",
            "-d",
            parent.path().join("mybar").to_str().unwrap(),
            "order_ale",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cash $18"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly() {
    let dir = TempDir::new().unwrap();
    redwood()
        .args(["play", "--save", dir.path().join("save.json").to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order Ale"));
}

#[test]
fn play_writes_a_save_after_a_tick() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    redwood()
        .args(["play", "--save", save.to_str().unwrap()])
        .write_stdin("1\nquit\n")
        .assert()
        .success();

    let raw = fs::read_to_string(&save).unwrap();
    assert!(raw.contains("\"wallet\": 18"));
}

#[test]
fn play_resumes_from_a_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    redwood()
        .args(["play", "--save", save.to_str().unwrap()])
        .write_stdin("1\nquit\n")
        .assert()
        .success();

    redwood()
        .args(["play", "--save", save.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cash $18"));
}

#[test]
fn play_fresh_ignores_the_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(&save, r#"{ "wallet": 3 }"#).unwrap();

    redwood()
        .args(["play", "--fresh", "--save", save.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cash $20"));
}

#[test]
fn play_survives_a_corrupt_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(&save, "{definitely not json").unwrap();

    redwood()
        .args(["play", "--save", save.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cash $20"));
}
