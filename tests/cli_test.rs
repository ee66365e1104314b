//! Runs the `mlp-forward` binary and checks its exit status and stdout.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mlp-forward"))
        .args(args)
        .output()
        .expect("failed to launch mlp-forward")
}

#[test]
fn prints_program_timers_and_exits_zero() {
    let out = run_cli(&["-i", "20", "-d", "4", "-o", "3", "--seed", "1"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Program timers:\n"));
    assert!(stdout.contains("  forward: "));
    assert!(stdout.contains("  model_building: "));
    assert!(stdout.contains("  total_time: "));
}

#[test]
fn long_option_names_are_accepted() {
    let out = run_cli(&["--input_size", "8", "--hidden_size", "2", "--output_size", "2"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn malformed_size_exits_two() {
    let out = run_cli(&["-i", "x"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn json_report_is_valid() {
    let out = run_cli(&["-i", "0", "-d", "5", "-o", "4", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["config"]["input_size"], 0);
    assert_eq!(json["output_shape"], serde_json::json!([4, 1]));
    assert!(json["timers"]["forward"].as_f64().is_some());
    assert!(json["timers"]["model_building"].as_f64().is_some());
}

#[test]
fn missing_config_file_exits_one() {
    let out = run_cli(&["--config", "/nonexistent/mlp-forward.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}
