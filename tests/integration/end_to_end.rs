use predicates::prelude::*;
use serde_json::Value;

use crate::common::{UTIL_JS, Workspace, jsloc, sample_project};

fn json_output(args: &[&str], ws: &Workspace) -> Value {
    let output = jsloc().arg(ws.path()).args(args).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn single_file_metrics() {
    let ws = Workspace::new();
    let path = ws.write_file("util.js", UTIL_JS);

    let output = jsloc().arg(&path).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["SLOC"], 13);
    assert_eq!(value["Blank LOCs"], 2);
    assert_eq!(value["Physical SLOC"], 13);
    assert_eq!(value["Logical SLOC"], 10);
    assert_eq!(value["CLOC, C & SLOC"], 5);
    assert_eq!(value["Comment Coverage %"], 38.46);
}

#[test]
fn uppercase_extension_is_accepted_for_explicit_file() {
    let ws = Workspace::new();
    let path = ws.write_file("LEGACY.JS", "var a = 1;\n");
    jsloc().arg(path).assert().success().stdout(predicate::str::contains("LEGACY.JS"));
}

#[test]
fn directory_summary_and_details() {
    let ws = sample_project();
    let value = json_output(&[], &ws);

    let summary = &value["Directory Summary"];
    assert_eq!(summary["Files"], 2);
    assert_eq!(summary["SLOC"], 16);
    assert_eq!(summary["Blank LOCs"], 3);
    assert_eq!(summary["Physical SLOC"], 16);
    assert_eq!(summary["Logical SLOC"], 13);
    assert_eq!(summary["CLOC, C & SLOC"], 5);
    assert_eq!(summary["KLOC"], 0.016);
    assert_eq!(summary["Average Comment Coverage"], 31.25);

    let files: Vec<String> = value["Detailed Results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["file"].as_str().unwrap().replace('\\', "/"))
        .collect();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("/index.js"));
    assert!(files[1].ends_with("lib/util.js"));
}

#[test]
fn table_output_lists_summary_first() {
    let ws = sample_project();
    jsloc()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory Summary:"))
        .stdout(predicate::str::contains("Detailed Results:"))
        .stdout(predicate::str::contains("util.min.js").not())
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn custom_rules_change_logical_counts() {
    let ws = Workspace::new();
    ws.write_file("gen.js", "function* g() {\n  yield 1;\n}\n");
    let rules = ws.write_file("rules.json", r#"{"jump": ["return", "yield"]}"#);

    let output = jsloc()
        .arg(ws.path())
        .args(["--format", "json", "--breakdown", "--rules"])
        .arg(&rules)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["Logical Breakdown"]["jump"], 1);
}

#[test]
fn extension_and_exclusion_flags() {
    let ws = Workspace::new();
    ws.write_file("a.js", "a();\n");
    ws.write_file("b.mjs", "b();\n");
    ws.write_file("dist/c.js", "c();\n");

    let value = json_output(&["--ext", "js,mjs", "--exclude-dir", "dist"], &ws);
    assert_eq!(value["Directory Summary"]["Files"], 2);
}

#[test]
fn empty_directory_has_zero_summary() {
    let ws = Workspace::new();
    let value = json_output(&[], &ws);
    assert_eq!(value["Directory Summary"]["Files"], 0);
    assert_eq!(value["Directory Summary"]["Average Comment Coverage"], 0.0);
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let ws = sample_project();
    jsloc()
        .arg(ws.path())
        .args(["-v", "--summary-only"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("analyzing 2 files"));
}
