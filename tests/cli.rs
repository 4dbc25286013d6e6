//! Integration tests for the simmer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SOUP: &str = r"
title: Tomato Soup
cuisine: Italian
difficulty: Easy
ingredients:
  - { name: Tomato, quantity: 4, unit: pcs }
steps:
  - description: Chop the tomatoes
    durationMinutes: 1
    ingredients: [Tomato]
";

fn simmer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("simmer").unwrap();
    cmd.arg("--data-dir")
        .arg(home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add_soup(home: &TempDir) -> String {
    let file = home.path().join("soup.yaml");
    std::fs::write(&file, SOUP).unwrap();

    let output = simmer(home)
        .args(["add", "--output", "json", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["id"].as_str().unwrap().to_string()
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("simmer")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("cook"));
}

#[test]
fn test_list_empty_catalog() {
    let home = TempDir::new().unwrap();
    simmer(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_corrupt_catalog_lists_as_empty() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("recipes-v1.json"), "{ definitely not json").unwrap();

    simmer(&home)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_add_then_list_and_show() {
    let home = TempDir::new().unwrap();
    let id = add_soup(&home);

    simmer(&home)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("Tomato Soup"));

    simmer(&home)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chop the tomatoes"))
        .stdout(predicate::str::contains("uses Tomato"));
}

#[test]
fn test_favorite_toggles() {
    let home = TempDir::new().unwrap();
    let id = add_soup(&home);

    simmer(&home)
        .args(["favorite", &id, "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFavorite\": true"));

    simmer(&home)
        .args(["list", "--favorites", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"));

    simmer(&home)
        .args(["fav", &id, "--set", "false", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFavorite\": false"));
}

#[test]
fn test_show_unknown_recipe_fails() {
    let home = TempDir::new().unwrap();
    simmer(&home)
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_invalid_draft_is_rejected() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("bad.yaml");
    std::fs::write(&file, "title: Soup\ningredients: []\nsteps: []\n").unwrap();

    simmer(&home)
        .args(["add", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Add at least one ingredient"));

    simmer(&home)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_headless_cook_runs_to_completion() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "cooking:\n  tick_interval_ms: 1\n",
    )
    .unwrap();
    let id = add_soup(&home);

    simmer(&home)
        .args(["cook", &id, "--headless", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed\": true"))
        .stderr(predicate::str::contains("All steps complete! Great job!"));
}

#[test]
fn test_headless_requires_recipe() {
    let home = TempDir::new().unwrap();
    simmer(&home).args(["cook", "--headless"]).assert().failure();
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    simmer(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simmer"));
}
