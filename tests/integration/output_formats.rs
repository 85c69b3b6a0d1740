use predicates::prelude::*;
use serde_json::Value;

use crate::common::{jsloc, sample_project};

fn stdout_for(format: &str, extra: &[&str]) -> String {
    let ws = sample_project();
    let output = jsloc().arg(ws.path()).args(["--format", format]).args(extra).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn jsonl_emits_one_record_per_file_then_summary() {
    let out = stdout_for("jsonl", &[]);
    let records: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["type"], "file");
    assert_eq!(records[1]["type"], "file");
    assert_eq!(records[2]["type"], "summary");
    assert_eq!(records[2]["SLOC"], 16);
}

#[test]
fn yaml_contains_summary_keys() {
    let out = stdout_for("yaml", &["--summary-only"]);
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["Directory Summary"]["Logical SLOC"].as_u64(), Some(13));
    assert!(value.get("Detailed Results").is_none());
}

#[test]
fn csv_has_header_rows_and_total() {
    let out = stdout_for("csv", &[]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("file,SLOC,"));
    assert!(lines[3].starts_with("TOTAL,16,3,16,13,5,31.25"));
}

#[test]
fn markdown_has_both_sections() {
    jsloc()
        .arg(sample_project().path())
        .args(["--format", "md", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Directory Summary"))
        .stdout(predicate::str::contains("### Detailed Results"))
        .stdout(predicate::str::contains("| dataDeclaration |"));
}
