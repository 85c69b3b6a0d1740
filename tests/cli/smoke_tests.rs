use predicates::prelude::*;

use crate::common::{Workspace, jsloc};

#[test]
fn shows_help() {
    jsloc().arg("--help").assert().success().stdout(predicate::str::contains("jsloc"));
}

#[test]
fn missing_path_is_a_usage_error() {
    jsloc().assert().failure().code(2).stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn nonexistent_path_reports_incorrect_path() {
    let ws = Workspace::new();
    jsloc()
        .arg(ws.path().join("nope"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Incorrect path"));
}

#[test]
fn non_js_file_is_rejected() {
    let ws = Workspace::new();
    let path = ws.write_file("notes.txt", "hello\n");
    jsloc()
        .arg(path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a JavaScript source file"));
}

#[test]
fn invalid_rules_file_fails() {
    let ws = Workspace::new();
    let file = ws.write_file("a.js", "let a = 1;\n");
    let rules = ws.write_file("rules.yaml", "callPlaceholder: \"two words\"\n");
    jsloc()
        .arg(file)
        .arg("--rules")
        .arg(rules)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid rule set"));
}

#[test]
fn zero_jobs_is_rejected() {
    let ws = Workspace::new();
    ws.write_file("a.js", "x();\n");
    jsloc()
        .arg(ws.path())
        .args(["-j", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--jobs"));
}
