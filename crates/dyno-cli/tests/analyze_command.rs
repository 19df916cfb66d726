use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn cli() -> Command {
    cargo_bin_cmd!("dyno-cli")
}

fn analyze_m340i(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "analyze",
        "--brand",
        "BMW",
        "--model",
        "M340i",
        "--category",
        "Executive Sedan",
        "--cylinders",
        "6",
        "--horsepower",
        "374",
        "--torque",
        "500",
        "--drivetrain",
        "awd",
        "--stage",
        "stage2",
        "--induction",
        "turbo",
    ])
}

#[test]
fn prints_stock_and_tuned_summary() {
    let mut cmd = cli();
    analyze_m340i(&mut cmd);

    cmd.assert()
        .success()
        .stdout(contains("BMW M340I"))
        .stdout(contains("Stock:"))
        .stdout(contains("Tuned:"))
        .stdout(contains("Stage 2 Tune, Turbocharger Kit"));
}

#[test]
fn report_format_contains_comparison_table() {
    let mut cmd = cli();
    analyze_m340i(&mut cmd).args(["--format", "report"]);

    cmd.assert()
        .success()
        .stdout(contains("Vehicle Analysis Report"))
        .stdout(contains("Modifications installed:"))
        .stdout(contains("Curb weight (kg)"))
        .stdout(contains("Delta"));
}

#[test]
fn json_format_is_parseable() {
    let mut cmd = cli();
    analyze_m340i(&mut cmd).args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");

    assert_eq!(value["identity"], "BMW M340I");
    assert_eq!(value["drivetrain"], "AWD");
    assert!(value["tuned"]["performance"]["zero_to_hundred_s"].is_number());
}

#[test]
fn export_writes_report_file() {
    let temp_dir = tempdir().expect("create temp dir");
    let report_path = temp_dir.path().join("m340i.txt");

    let mut cmd = cli();
    analyze_m340i(&mut cmd)
        .arg("--export")
        .arg(&report_path);

    cmd.assert()
        .success()
        .stdout(contains("Report exported to"));

    let report = fs::read_to_string(&report_path).expect("report file written");
    assert!(report.contains("Vehicle Analysis Report"));
    assert!(report.contains("BMW M340I"));
    assert!(report.contains("Power-to-weight (hp/t)"));
}

#[test]
fn rejects_unknown_drivetrain_value() {
    let mut cmd = cli();
    cmd.args([
        "analyze",
        "--category",
        "Hatchback",
        "--cylinders",
        "3",
        "--horsepower",
        "70",
        "--torque",
        "89",
        "--drivetrain",
        "hovercraft",
    ]);

    cmd.assert().failure();
}

#[test]
fn rejects_unlisted_cylinder_count() {
    let mut cmd = cli();
    cmd.args([
        "analyze",
        "--category",
        "Hatchback",
        "--cylinders",
        "7",
        "--horsepower",
        "70",
        "--torque",
        "89",
        "--drivetrain",
        "fwd",
    ]);

    cmd.assert()
        .failure()
        .stderr(contains("cylinders"));
}

#[test]
fn weight_subcommand_pins_entry_hatchback_fixture() {
    let mut cmd = cli();
    cmd.args([
        "weight",
        "--brand",
        "Maruti",
        "--model",
        "Alto",
        "--category",
        "Hatchback",
        "--cylinders",
        "3",
        "--horsepower",
        "70",
        "--torque",
        "89",
        "--drivetrain",
        "fwd",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("MARUTI ALTO"))
        .stdout(contains("716 kg"));
}
