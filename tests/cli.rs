use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn salesdash(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("salesdash").unwrap();
    cmd.env("SALESDASH_CONFIG_DIR", config_dir.path())
        .env_remove("SALESDASH_SEED")
        .env_remove("SALESDASH_LOG");
    cmd
}

#[test]
fn summary_prints_dashboard() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .args(["--seed", "7", "summary", "--chart", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales Dashboard"))
        .stdout(predicate::str::contains("Total Sales"))
        .stdout(predicate::str::contains("[Pie]"));
}

#[test]
fn summary_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let first = salesdash(&dir)
        .args(["--seed", "11", "summary"])
        .output()
        .unwrap();
    let second = salesdash(&dir)
        .args(["summary", "--seed", "11"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn summary_rejects_unknown_chart_type() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .args(["summary", "--chart", "radar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radar"));
}

#[test]
fn summary_rejects_unknown_year() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .args(["--seed", "1", "summary", "--year", "1900"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year not found: 1900"));
}

#[test]
fn export_json_contains_every_year() {
    let dir = TempDir::new().unwrap();
    let output = salesdash(&dir)
        .args(["--seed", "5", "export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 5);
    let years = value["years"].as_array().unwrap();
    assert_eq!(years.len(), 3);
    assert_eq!(years[0]["data"].as_array().unwrap().len(), 12);
}

#[test]
fn export_csv_has_header() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .args(["--seed", "5", "export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("year,month,sales,profit,orders"));
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));
    assert!(dir.path().join("config.json").exists());

    salesdash(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    salesdash(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file:"))
        .stdout(predicate::str::contains("Seed:            random"));
}
