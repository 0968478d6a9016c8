use crate::common::TempWorkspace;
use assert_cmd::Command;
use predicates::prelude::*;

fn codecount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_codecount"))
}

#[test]
fn csv_summary_is_exact() {
    let ws = TempWorkspace::with_mixed_sources();
    let output = codecount()
        .args(["--format", "csv", ws.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "type,files,total,code,comment,blank,comment_percent",
            "cpp,1,6,3,3,1,50.00%",
            "erlang,1,5,3,2,1,40.00%",
            "go,1,8,6,2,1,25.00%",
            "total,3,19,12,7,3,36.84%",
        ]
    );
}

#[test]
fn csv_with_files_section() {
    let ws = TempWorkspace::with_mixed_sources();
    codecount()
        .args(["--format", "csv", "--files", ws.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("path,type,total,code,comment,blank,comment_percent"))
        .stdout(predicate::str::contains("main.go,go,8,6,2,1,25.00%"));
}

#[test]
fn table_is_default() {
    let ws = TempWorkspace::with_mixed_sources();
    codecount()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMENT%"))
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains(
            "Total = 19, Code = 12, Comment = 7, Blank = 3, CommentPercent = 36.84%",
        ))
        .stdout(predicate::str::contains("1 files skipped"));
}

#[test]
fn table_for_empty_tree() {
    let ws = TempWorkspace::new();
    ws.create_file("README.md", "# nothing to count\n");
    codecount()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No source files found."));
}

#[test]
fn json_includes_files_on_request() {
    let ws = TempWorkspace::with_mixed_sources();
    let output = codecount()
        .args(["--format", "json", "--files", ws.path().to_str().unwrap()])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f["truncated"] == false));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
