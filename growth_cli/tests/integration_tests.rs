//! Integration tests for the growth-compass binary.
//!
//! These tests verify end-to-end behavior including:
//! - Single-patient computation in text and JSON
//! - Age and implied birth date calculation
//! - Percentile curves and CSV batch evaluation

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from any user config
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("growth-compass"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run binary");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pediatric growth percentile calculator",
        ));
}

#[test]
fn test_compute_text_output() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args([
            "compute",
            "--sex",
            "male",
            "--age-months",
            "12",
            "--weight",
            "10",
            "--height",
            "75",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("GROWTH STATISTICS (male)"))
        .stdout(predicate::str::contains("Age: 12.0 months"))
        .stdout(predicate::str::contains("Percentile: 62.87"))
        .stdout(predicate::str::contains("Percentile: 37.63"));
}

#[test]
fn test_compute_json_matches_reference_values() {
    let temp_dir = setup_test_dir();
    let report = json_stdout(cli(&temp_dir).args([
        "compute",
        "--sex",
        "male",
        "--dob",
        "2023-01-15",
        "--measured",
        "2024-01-15",
        "--weight",
        "10",
        "--height",
        "75",
        "--format",
        "json",
    ]));

    let stats = &report["statistics"];
    assert_eq!(stats["age_in_months"].as_f64().unwrap(), 12.0);
    assert!((stats["weight"]["z"].as_f64().unwrap() - 0.328478004207202).abs() < 1e-6);
    assert!((stats["height"]["z"].as_f64().unwrap() + 0.31511970397655126).abs() < 1e-6);
    assert!((stats["bmi"]["value"].as_f64().unwrap() - 17.77777777777778).abs() < 1e-9);
    assert!((stats["bmi"]["percentile"].as_f64().unwrap() - 75.78979920805476).abs() < 1e-4);
    assert!(stats["head_circumference"].is_null());

    assert_eq!(report["patient"]["age"]["mode"], "from_dates");
    assert_eq!(report["interpretations"]["weight"]["risk_tier"], "green");
}

#[test]
fn test_compute_without_age_reports_no_result() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["compute", "--sex", "female", "--weight", "8", "--height", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No result yet"));
}

#[test]
fn test_compute_rejects_non_positive_weight() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args([
            "compute",
            "--sex",
            "male",
            "--age-months",
            "12",
            "--weight",
            "0",
            "--height",
            "75",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidMeasurement"));
}

#[test]
fn test_compute_rejects_unknown_sex() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args([
            "compute",
            "--sex",
            "other",
            "--age-months",
            "12",
            "--weight",
            "10",
            "--height",
            "75",
        ])
        .assert()
        .failure();
}

#[test]
fn test_imperial_units_convert_before_scoring() {
    let temp_dir = setup_test_dir();
    let report = json_stdout(cli(&temp_dir).args([
        "compute",
        "--sex",
        "male",
        "--age-months",
        "12",
        "--weight",
        "22.0462",
        "--height",
        "29.5276",
        "--units",
        "imperial",
        "--format",
        "json",
    ]));

    assert!((report["patient"]["weight_kg"].as_f64().unwrap() - 10.0).abs() < 1e-3);
    assert!((report["patient"]["height_cm"].as_f64().unwrap() - 75.0).abs() < 1e-3);
    let z = report["statistics"]["weight"]["z"].as_f64().unwrap();
    assert!((z - 0.328478004207202).abs() < 1e-3);
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

    let report = json_stdout(cli(&temp_dir).arg("--config").arg(&config_path).args([
        "compute",
        "--sex",
        "female",
        "--age-months",
        "6",
        "--weight",
        "7.297",
        "--height",
        "65.7311",
        "--head",
        "42.1995",
    ]));

    let stats = &report["statistics"];
    assert!(stats["weight"]["z"].as_f64().unwrap().abs() < 1e-9);
    assert!(stats["head_circumference"]["z"].as_f64().unwrap().abs() < 1e-9);
}

#[test]
fn test_age_from_dates() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["age", "--dob", "2023-01-15", "--measured", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.00 months"));
}

#[test]
fn test_implied_birth_date() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["age", "--age-months", "12", "--measured", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Implied birth date: 2023-01-15"));
}

#[test]
fn test_age_rejects_both_inputs() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["age", "--dob", "2023-01-15", "--age-months", "12"])
        .assert()
        .failure();
}

#[test]
fn test_curve_json() {
    let temp_dir = setup_test_dir();
    let report = json_stdout(cli(&temp_dir).args([
        "curve",
        "--sex",
        "male",
        "--metric",
        "weight",
        "--age-months",
        "12",
        "--window",
        "2",
        "--format",
        "json",
    ]));

    let points = report["points"].as_array().unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0]["month"], 10);
    assert_eq!(points[2]["month"], 12);
    assert!((points[2]["p50"].as_f64().unwrap() - 9.6479).abs() < 1e-9);
    assert_eq!(report["unit"], "kg");
}

#[test]
fn test_curve_text_table() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args([
            "curve",
            "--sex",
            "female",
            "--metric",
            "height",
            "--age-months",
            "3",
            "--window",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("female height reference curves (cm)"))
        .stdout(predicate::str::contains("P50"));
}

#[test]
fn test_curve_rejects_oversized_window() {
    let temp_dir = setup_test_dir();
    for window in ["241", "4294967295"] {
        cli(&temp_dir)
            .args([
                "curve",
                "--sex",
                "male",
                "--metric",
                "weight",
                "--age-months",
                "12",
                "--window",
                window,
            ])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn test_curve_accepts_widest_window() {
    let temp_dir = setup_test_dir();
    let report = json_stdout(cli(&temp_dir).args([
        "curve",
        "--sex",
        "male",
        "--metric",
        "weight",
        "--age-months",
        "12",
        "--window",
        "240",
        "--format",
        "json",
    ]));

    let points = report["points"].as_array().unwrap();
    assert_eq!(points.len(), 253);
    assert_eq!(points[252]["month"], 252);
}

#[test]
fn test_batch_to_output_file() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("patients.csv");
    let output = temp_dir.path().join("results.csv");
    fs::write(
        &input,
        "sex,birth_date,measurement_date,age_months,weight_kg,height_cm,head_circumference_cm\n\
         male,,,12,10,75,\n\
         female,2023-07-01,2024-01-01,,7.3,65.7,42.2\n\
         male,,,,10,75,\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("batch")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluated 3 rows (1 without result)"));

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("weight_z"));
    assert!(lines[3].contains("missing age"));
}

#[test]
fn test_batch_to_stdout() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("patients.csv");
    fs::write(
        &input,
        "sex,birth_date,measurement_date,age_months,weight_kg,height_cm,head_circumference_cm\n\
         female,,,24,12,86,\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("batch")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("row,sex,age_months"));
}

#[test]
fn test_batch_missing_file_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("batch")
        .arg("--input")
        .arg(temp_dir.path().join("nope.csv"))
        .assert()
        .failure();
}
