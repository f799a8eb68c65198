// tests/cli_test.rs

use std::path::PathBuf;
use std::process::Command;

fn labfit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_labfit"))
}

fn sample_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_cli_times() {
    let output = labfit()
        .arg("times")
        .arg(sample_data("dados.json"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mean times (s):"));
    assert_eq!(stdout.lines().filter(|l| l.contains("t = ")).count(), 4);
}

#[test]
fn test_cli_wire_exports_csv_without_plot() {
    let dir = tempfile::tempdir().unwrap();
    let output = labfit()
        .arg("wire")
        .arg(sample_data("wire_a.json"))
        .arg("--no-plot")
        .arg("--export-csv")
        .arg("--output-dir")
        .arg(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Elastic modulus E = "));

    let csv_path = dir.path().join("wire_a_strain_vs_force.csv");
    let table = std::fs::read_to_string(csv_path).unwrap();
    assert!(table.starts_with("x,x_err,y,y_err,y_fit"));
    assert_eq!(table.lines().count(), 6);
    assert!(!dir.path().join("wire_a_strain_vs_force.png").exists());
}

#[test]
fn test_cli_free_fall_writes_plot() {
    let dir = tempfile::tempdir().unwrap();
    let output = labfit()
        .arg("free-fall")
        .arg(sample_data("dados.json"))
        .arg("--output-dir")
        .arg(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fit: y = ("));
    assert!(stdout.contains("Gravitational acceleration g = "));

    let png = dir.path().join("dados_distance_vs_time_squared.png");
    assert!(stdout.contains(&format!("Plot: {}", png.display())));
    let size = std::fs::metadata(&png).unwrap().len();
    assert!(size > 0);
}

#[test]
fn test_cli_missing_key_fails() {
    let output = labfit()
        .arg("free-fall")
        .arg(sample_data("dados.json"))
        .arg("--key")
        .arg("no_such_set")
        .arg("--no-plot")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("measurement set 'no_such_set' not found"));
}

// tests/cli_test.rs
