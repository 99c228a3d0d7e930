// TuniFia ⚡ AGPL-3.0 License

//! Integration tests for the prediction pipeline, driven through the same
//! argument surface the spawning backend uses.

use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use energy_predictor::cli::args::Cli;
use energy_predictor::cli::predict::run_prediction;
use energy_predictor::{EnergyModel, InferenceRequest, Prediction, JSON_END, JSON_START};

/// Write the reference artifact the backend ships: raw amount column plus a
/// four-way one-hot energy column.
fn write_reference_artifact(dir: &TempDir) -> PathBuf {
    let artifact = json!({
        "format": 1,
        "metadata": {
            "name": "investment_energy_regression",
            "version": "2024.3",
            "trained_at": "2024-11-02T18:20:04Z",
            "target": "predicted_kwh"
        },
        "features": [
            {"kind": "numeric", "name": "amount_of_investment"},
            {"kind": "categorical", "name": "type_of_energy",
             "categories": ["Wind", "Solar", "Hydro", "Biomass"]}
        ],
        "coefficients": [1.2, 150.0, 90.0, 120.0, 60.0],
        "intercept": 50.0
    });
    let path = dir.path().join("investment_energy_regression.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&artifact).unwrap()).unwrap();
    path
}

fn cli(model: &str, amount: &str, energy_type: &str) -> Cli {
    Cli::parse_from([
        "energy-predictor",
        "--model",
        model,
        "--amount",
        amount,
        "--energy_type",
        energy_type,
    ])
}

/// Spawn the compiled binary the way the backend does, with a controlled
/// `ENERGY_MODEL` environment.
fn run_binary(args: &[&str], env_model: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_energy-predictor"));
    command.args(args).env_remove("ENERGY_MODEL");
    if let Some(path) = env_model {
        command.env("ENERGY_MODEL", path);
    }
    command.output().unwrap()
}

#[test]
fn test_predict_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);

    let prediction = run_prediction(&cli(path.to_str().unwrap(), "2500", "Solar")).unwrap();
    // 1.2 * 2500 + 90 (Solar) + 50
    assert!((prediction.predicted_kwh - 3140.0).abs() < 1e-9);
}

#[test]
fn test_framed_stdout_contract() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);

    let prediction = run_prediction(&cli(path.to_str().unwrap(), "10000", "Wind")).unwrap();
    let framed = prediction.to_framed().unwrap();

    let lines: Vec<&str> = framed.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], JSON_START);
    assert_eq!(lines[2], JSON_END);

    let payload: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    let kwh = payload["predicted_kwh"].as_f64().unwrap();
    assert!((kwh - 12200.0).abs() < 1e-9);
}

#[test]
fn test_repeat_runs_are_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);
    let args = cli(path.to_str().unwrap(), "7321.5", "Biomass");

    let first = run_prediction(&args).unwrap();
    let second = run_prediction(&args).unwrap();
    assert_eq!(
        first.predicted_kwh.to_bits(),
        second.predicted_kwh.to_bits()
    );
    assert_eq!(
        first.to_framed().unwrap(),
        second.to_framed().unwrap()
    );
}

#[test]
fn test_missing_model_file_maps_to_failure_line() {
    let err = run_prediction(&cli("does-not-exist.json", "2500", "Solar")).unwrap_err();
    let line = format!("Prediction failed: {err}");
    assert!(line.starts_with("Prediction failed: Model load error: Model file not found"));
    assert!(!line.contains('\n'));
}

#[test]
fn test_unknown_energy_type_maps_to_failure_line() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);

    let err = run_prediction(&cli(path.to_str().unwrap(), "2500", "Geothermal")).unwrap_err();
    let line = format!("Prediction failed: {err}");
    assert!(line.starts_with("Prediction failed: Inference error:"));
    assert!(line.contains("Geothermal"));
    assert!(line.contains("Wind, Solar, Hydro, Biomass"));
}

#[test]
fn test_corrupt_artifact_maps_to_failure_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, b"definitely not a model").unwrap();

    let err = run_prediction(&cli(path.to_str().unwrap(), "2500", "Solar")).unwrap_err();
    assert!(format!("Prediction failed: {err}")
        .starts_with("Prediction failed: Model load error: Failed to parse model artifact"));
}

#[test]
fn test_artifact_with_wrong_coefficient_count_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.json");
    let artifact = json!({
        "format": 1,
        "features": [
            {"kind": "numeric", "name": "amount_of_investment"},
            {"kind": "categorical", "name": "type_of_energy",
             "categories": ["Wind", "Solar", "Hydro", "Biomass"]}
        ],
        "coefficients": [1.2, 150.0, 90.0, 120.0],
        "intercept": 50.0
    });
    std::fs::write(&path, serde_json::to_vec(&artifact).unwrap()).unwrap();

    let err = EnergyModel::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("coefficient count"));
}

#[test]
fn test_scaled_artifact_standardizes_amount() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scaled.json");
    let artifact = json!({
        "format": 1,
        "features": [
            {"kind": "numeric", "name": "amount_of_investment",
             "mean": 1000.0, "std": 500.0},
            {"kind": "categorical", "name": "type_of_energy",
             "categories": ["Wind", "Solar"]}
        ],
        "coefficients": [600.0, 150.0, 90.0],
        "intercept": 50.0
    });
    std::fs::write(&path, serde_json::to_vec(&artifact).unwrap()).unwrap();

    let model = EnergyModel::from_file(&path).unwrap();
    // z = (2500 - 1000) / 500 = 3, so 600 * 3 + 90 + 50
    let kwh = model
        .predict(&InferenceRequest::new(2500.0, "Solar"))
        .unwrap();
    assert!((kwh - 1940.0).abs() < 1e-9);
}

#[test]
fn test_missing_flags_are_usage_errors() {
    assert!(Cli::try_parse_from(["energy-predictor"]).is_err());
    assert!(Cli::try_parse_from([
        "energy-predictor",
        "--model",
        "model.json",
        "--amount",
        "2500"
    ])
    .is_err());
}

#[test]
fn test_non_numeric_amount_never_reaches_inference() {
    assert!(Cli::try_parse_from([
        "energy-predictor",
        "--model",
        "model.json",
        "--amount",
        "many",
        "--energy_type",
        "Solar"
    ])
    .is_err());
}

#[test]
fn test_payload_survives_backend_style_extraction() {
    let framed = Prediction::new(3140.0).to_framed().unwrap();

    // The backend slices between the sentinels rather than parsing lines.
    let start = framed.find(JSON_START).unwrap() + JSON_START.len();
    let end = framed.find(JSON_END).unwrap();
    let payload: serde_json::Value = serde_json::from_str(framed[start..end].trim()).unwrap();
    assert_eq!(payload["predicted_kwh"].as_f64(), Some(3140.0));
}

#[test]
fn test_binary_success_writes_framed_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);
    let args = [
        "--model",
        path.to_str().unwrap(),
        "--amount",
        "2500",
        "--energy_type",
        "Solar",
    ];

    let output = run_binary(&args, None);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], JSON_START);
    assert_eq!(lines[2], JSON_END);
    let payload: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert!((payload["predicted_kwh"].as_f64().unwrap() - 3140.0).abs() < 1e-9);

    // The wire is byte-stable: a repeat run writes the identical frame.
    let again = run_binary(&args, None);
    assert_eq!(again.stdout, stdout.into_bytes());
}

#[test]
fn test_binary_failure_exits_one_with_single_stderr_line() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let output = run_binary(
        &[
            "--model",
            missing.to_str().unwrap(),
            "--amount",
            "2500",
            "--energy_type",
            "Solar",
        ],
        None,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("Prediction failed: Model load error: Model file not found"));
}

#[test]
fn test_binary_usage_errors_exit_two() {
    // A non-numeric --amount fails at argument parsing, before any model
    // I/O: the model path is never touched.
    let output = run_binary(
        &[
            "--model",
            "unused.json",
            "--amount",
            "a-lot",
            "--energy_type",
            "Solar",
        ],
        None,
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());

    // Missing required flags are usage errors too.
    let output = run_binary(&[], None);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_model_env_fallback() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);

    let output = run_binary(
        &["--amount", "1000", "--energy_type", "Wind"],
        Some(path.to_str().unwrap()),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let payload: serde_json::Value =
        serde_json::from_str(stdout.lines().nth(1).unwrap()).unwrap();
    // 1.2 * 1000 + 150 (Wind) + 50
    assert!((payload["predicted_kwh"].as_f64().unwrap() - 1400.0).abs() < 1e-9);
}

#[test]
fn test_binary_verbose_diagnostics_stay_on_stderr() {
    let dir = TempDir::new().unwrap();
    let path = write_reference_artifact(&dir);

    let output = run_binary(
        &[
            "--model",
            path.to_str().unwrap(),
            "--amount",
            "2500",
            "--energy_type",
            "Hydro",
            "--verbose",
        ],
        None,
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Speed:"));
}
