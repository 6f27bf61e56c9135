use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::str;

use tempfile::NamedTempFile;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_readability"))
}

fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp input file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp input file");
    file
}

fn run_with_stdin(mut command: Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn readability");
    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write to stdin");
    child.wait_with_output().expect("Failed to wait for readability")
}

fn stdout_of(output: &Output) -> &str {
    str::from_utf8(&output.stdout).expect("stdout is not valid UTF-8")
}

fn stderr_of(output: &Output) -> &str {
    str::from_utf8(&output.stderr).expect("stderr is not valid UTF-8")
}

#[test]
fn test_cli_help_message() {
    let output = cli().arg("--help").output().expect("Failed to execute --help");
    assert!(output.status.success(), "--help exited with error: {:?}", output);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--metric"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_all_metrics_for_file_input() {
    let input = text_file("The cat sat.");
    let output = cli()
        .arg(input.path())
        .args(["--metric", "all"])
        .output()
        .expect("Failed to run readability");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with(
        "Words: 3\nSentences: 1\nCharacters: 10\nSyllables: 3.00\nPolysyllables: 0\n"
    ));
    assert!(stdout.contains("Automated Readability Index: -4.23 (about 0 year olds)."));
    assert!(stdout.contains("Flesch–Kincaid readability tests: -2.62 (about 0 year olds)."));
    assert!(stdout.contains("Simple Measure of Gobbledygook: 3.13 (about 9 year olds)."));
    assert!(stdout.contains("Coleman–Liau index: -6.07 (about 0 year olds)."));
    assert!(stdout.contains("This text should be understood in average by 2.25 year olds."));
}

#[test]
fn test_prompted_selector_is_read_from_stdin() {
    let input = text_file("The cat sat.");
    let mut command = cli();
    command.arg(input.path());
    let output = run_with_stdin(command, "SMOG\n");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Enter the score you want to calculate (ARI, FK, SMOG, CL, all): "));
    assert!(stdout.contains("Simple Measure of Gobbledygook: 3.13 (about 9 year olds)."));
    assert!(!stdout.contains("Coleman–Liau index"));
    assert!(stdout.contains("understood in average by 9.00 year olds."));
    // Counts are printed once, before the prompt.
    assert_eq!(stdout.matches("Words: 3").count(), 1);
}

#[test]
fn test_stdin_text_uses_default_metric_without_prompt() {
    let mut command = cli();
    command.arg("-");
    let output = run_with_stdin(command, "hello world");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("Enter the score"));
    assert!(stdout.contains("Sentences: 1"));
    assert!(stdout.contains("Coleman–Liau index:"));
}

#[test]
fn test_json_output() {
    let output = cli()
        .args(["--text", "The cat sat.", "--metric", "FK", "--format", "json"])
        .output()
        .expect("Failed to run readability");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value =
        serde_json::from_str(stdout_of(&output)).expect("stdout is not JSON");
    assert_eq!(value["statistics"]["character_count"], 10);
    assert_eq!(value["metrics"].as_array().map(|m| m.len()), Some(1));
    assert_eq!(value["metrics"][0]["metric"], "FK");
    assert_eq!(value["average_age"], 0.0);
}

#[test]
fn test_unknown_metric_prints_usage() {
    let output = cli()
        .args(["--text", "The cat sat.", "--metric", "XYZ"])
        .output()
        .expect("Failed to run readability");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("unknown metric 'XYZ'"), "stderr: {}", stderr);
    assert!(stderr.contains("Usage:"), "stderr: {}", stderr);
}

#[test]
fn test_empty_input_is_rejected() {
    let input = text_file("   \n");
    let output = cli()
        .arg(input.path())
        .args(["--metric", "all"])
        .output()
        .expect("Failed to run readability");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("invalid input"));
}

#[test]
fn test_missing_input_file_reports_cause() {
    let output = cli()
        .args(["does/not/exist.txt", "--metric", "all"])
        .output()
        .expect("Failed to run readability");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("failed to read does/not/exist.txt"), "stderr: {}", stderr);
    assert!(stderr.contains("Caused by:"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_sets_defaults() {
    let config = text_file(r#"{ "default_metric": "CL", "prompt": false }"#);
    let output = cli()
        .args(["--text", "The cat sat.", "--config"])
        .arg(config.path())
        .output()
        .expect("Failed to run readability");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Coleman–Liau index: -6.07 (about 0 year olds)."));
    assert!(!stdout.contains("Automated Readability Index"));
}
