//! Integration tests for the resilmap binary.

mod common;

use assert_cmd::Command;
use common::{write_fixture, COUNTIES_CSV, STATES_CSV};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn resilmap() -> Command {
    let mut cmd = Command::cargo_bin("resilmap").expect("binary should build");
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_rank_prints_full_ranking_then_views() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    let stdout = stdout_of(
        resilmap()
            .current_dir(dir.path())
            .args(["rank", "--top", "1", "--bottom", "1"])
            .arg(&path),
    );

    assert!(stdout.contains("5 states ranked"));
    assert!(stdout.contains("Utah"));
    assert!(stdout.contains("0.770"));
    assert!(stdout.contains("Mississippi"));

    let least = stdout.split("Least resilient").nth(1).unwrap();
    assert!(least.contains("Mississippi"));
    assert!(!least.contains("Minnesota"));
}

#[test]
fn test_export_csv_to_stdout() {
    let (dir, path) = write_fixture("counties.csv", COUNTIES_CSV);
    let stdout = stdout_of(
        resilmap()
            .current_dir(dir.path())
            .args(["export", "--county"])
            .arg(&path),
    );

    assert_eq!(
        stdout,
        indoc! {"
            County,Income_Norm,Unemployment_Norm,Cost_Norm,Resilience_Score,Rank
            Clark,0.9,0.1,0.2,0.87,1
            Adams,0.6,0.4,0.5,0.57,2
            Baker,0.6,0.4,0.5,0.57,3
            Essex,0.2,0.8,0.9,0.17,4
            Dodge,,0.3,0.3,,
        "}
    );
}

#[test]
fn test_export_json_to_file() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    let output = dir.path().join("report.json");

    resilmap()
        .current_dir(dir.path())
        .args(["export", "--format", "json", "--w-income", "1", "--w-unemployment", "0", "--w-cost", "0", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["granularity"], "state");
    assert_eq!(report["weights"]["income"], 1.0);
    assert_eq!(report["regions"][0]["region"]["name"], "California");
    assert_eq!(report["regions"].as_array().unwrap().len(), 5);
    assert!(report["generated_at"].is_string());
}

#[test]
fn test_show_region_detail() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    let stdout = stdout_of(
        resilmap()
            .current_dir(dir.path())
            .arg("show")
            .arg(&path)
            .arg("Ohio"),
    );

    assert!(stdout.contains("0.500"));
    assert!(stdout.contains("#3 out of 5"));
    assert!(stdout.contains("balanced factors across income, unemployment, and cost."));
}

#[test]
fn test_show_unknown_region_fails() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    let assert = resilmap()
        .current_dir(dir.path())
        .arg("show")
        .arg(&path)
        .arg("Atlantis")
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("region 'Atlantis' not found"));
}

#[test]
fn test_show_unscorable_region_fails() {
    let (dir, path) = write_fixture("counties.csv", COUNTIES_CSV);
    let assert = resilmap()
        .current_dir(dir.path())
        .args(["show", "--county"])
        .arg(&path)
        .arg("Dodge")
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("invalid indicator income_norm for region 'Dodge'"));
}

#[test]
fn test_missing_column_is_reported() {
    let (dir, path) = write_fixture("bad.csv", "State,Income_Norm\nUtah,0.8\n");
    let assert = resilmap()
        .current_dir(dir.path())
        .arg("rank")
        .arg(&path)
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("missing column Unemployment_Norm"));
}

#[test]
fn test_discovered_config_weights_apply() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    fs::write(
        dir.path().join(".resilmap.toml"),
        "[weights]\nincome = 1.0\nunemployment = 0.0\ncost = 0.0\n",
    )
    .unwrap();

    let stdout = stdout_of(resilmap().current_dir(dir.path()).arg("export").arg(&path));
    let first_row = stdout.lines().nth(1).unwrap();
    assert!(first_row.starts_with("California,"));
}

#[test]
fn test_explicit_invalid_config_is_error() {
    let (dir, path) = write_fixture("states.csv", STATES_CSV);
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[weights\n").unwrap();

    resilmap()
        .current_dir(dir.path())
        .arg("rank")
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    resilmap().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".resilmap.toml").exists());

    resilmap().current_dir(dir.path()).arg("init").assert().failure();
    resilmap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
