//! Process-level tests for the boundary adapter: exit codes, the single
//! base64 line on stdout, and the no-output-on-failure guarantee.

use std::io::Write;
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::TempDir;

const VALID_PAYLOAD: &str = r#"{
    "communicationStyles": "Warm but guarded",
    "recurringPatterns": "Repeated withdrawal after conflict",
    "reflectiveFrameworks": "Attachment theory lens",
    "gettingInTheWay": "Avoidance",
    "constructiveFeedback": "Name needs directly",
    "outlook": "Cautiously optimistic",
    "optionalAppendix": "None"
}"#;

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lovelens-export"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn success_prints_one_base64_line() {
    let output = run_with_stdin(&[], VALID_PAYLOAD);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let bytes = STANDARD.decode(lines[0]).expect("stdout is not base64");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn missing_field_exits_nonzero_with_empty_stdout() {
    let payload = r#"{"communicationStyles": "x"}"#;
    let output = run_with_stdin(&[], payload);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("recurringPatterns"));
    assert!(stderr.contains("optionalAppendix"));
}

#[test]
fn malformed_json_exits_nonzero_with_empty_stdout() {
    let output = run_with_stdin(&[], "not json at all");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn non_object_payload_is_rejected() {
    let output = run_with_stdin(&[], "[\"an\", \"array\"]");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a JSON object"));
}

#[test]
fn output_flag_writes_raw_docx_instead_of_base64() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("analysis.docx");

    let output = run_with_stdin(&["--output", path.to_str().unwrap()], VALID_PAYLOAD);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
