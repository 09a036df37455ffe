use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tokentally_cli_{}_{name}", std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokentally"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch tokentally")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn reports_counts_and_indices() {
    let input = fixture("scenario_a.txt", "a,a,b,c,c,c");
    let output = run(&[input.to_str().unwrap()]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        serde_json::json!([
            { "b": { "count": 1, "indices": [2] } },
            { "a": { "count": 2, "indices": [0, 1] } },
            { "c": { "count": 3, "indices": [3, 4, 5] } },
        ])
    );

    fs::remove_file(&input).unwrap();
}

#[test]
fn drops_invalid_elements_silently() {
    let input = fixture("scenario_b.txt", "a, b!, c, 123, !!");
    let output = run(&[input.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        serde_json::json!([
            { "123": { "count": 1, "indices": [2] } },
            { "a": { "count": 1, "indices": [0] } },
            { "c": { "count": 1, "indices": [1] } },
        ])
    );

    fs::remove_file(&input).unwrap();
}

#[test]
fn empty_file_gives_empty_report() {
    let input = fixture("scenario_c.txt", "");
    let output = run(&[input.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[]\n");

    fs::remove_file(&input).unwrap();
}

#[test]
fn missing_file_reports_read_error() {
    let output = run(&["definitely_missing_tokentally_input.txt"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("Error: Error reading the file: "));
}

#[test]
fn wrong_argument_count_prints_usage() {
    let none = run(&[]);
    assert_eq!(none.status.code(), Some(1));
    assert!(none.stdout.is_empty());
    assert!(stderr(&none).contains("Usage"));

    let two = run(&["one.txt", "two.txt"]);
    assert_eq!(two.status.code(), Some(1));
    assert!(two.stdout.is_empty());
    assert!(stderr(&two).contains("Usage"));
}

#[test]
fn output_is_identical_across_runs() {
    let input = fixture("idempotent.txt", "z, y ,x,y,  z,z,Q,0\n");
    let first = run(&[input.to_str().unwrap()]);
    let second = run(&[input.to_str().unwrap()]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    fs::remove_file(&input).unwrap();
}

#[test]
fn hyphen_led_argument_is_the_input_path() {
    let output = run(&["-missing-tokentally-input.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("Error: Error reading the file: "));
}

#[test]
fn bom_and_invalid_utf8_do_not_abort() {
    let input = fixture("encoding.txt", b"\xef\xbb\xbfa,b,\xff,c");
    let output = run(&[input.to_str().unwrap()]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        serde_json::json!([
            { "a": { "count": 1, "indices": [0] } },
            { "b": { "count": 1, "indices": [1] } },
            { "c": { "count": 1, "indices": [2] } },
        ])
    );

    fs::remove_file(&input).unwrap();
}
