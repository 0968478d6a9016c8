use crate::common::{TempWorkspace, CPP_SOURCE};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn codecount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_codecount"))
}

fn json_for(args: &[&str]) -> Value {
    let output = codecount().args(["--format", "json"]).args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn counts_mixed_tree() {
    let ws = TempWorkspace::with_mixed_sources();
    let json = json_for(&[ws.path().to_str().unwrap()]);

    assert_eq!(json["by_language"]["go"]["total"], 8);
    assert_eq!(json["by_language"]["go"]["code"], 6);
    assert_eq!(json["by_language"]["go"]["comment"], 2);
    assert_eq!(json["by_language"]["cpp"]["comment"], 3);
    assert_eq!(json["by_language"]["erlang"]["code"], 3);
    assert_eq!(json["total"]["total"], 19);
    assert_eq!(json["total"]["blank"], 3);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["errors"], 0);
}

#[test]
fn explicit_file_root() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("one.cc", CPP_SOURCE);
    let json = json_for(&[file.to_str().unwrap()]);
    assert_eq!(json["by_language"]["cpp"]["files"], 1);
    assert_eq!(json["total"]["total"], 6);
}

#[test]
fn ext_allow_list() {
    let ws = TempWorkspace::with_mixed_sources();
    let json = json_for(&["--ext", "erl", ws.path().to_str().unwrap()]);
    let languages = json["by_language"].as_object().unwrap();
    assert_eq!(languages.keys().collect::<Vec<_>>(), ["erlang"]);
    assert_eq!(json["skipped"], 0);
}

#[test]
fn map_ext_routes_to_existing_language() {
    let ws = TempWorkspace::new();
    ws.create_file("conf/app.config", "%% sys.config\n[{app, []}].\n");
    let json = json_for(&["--map-ext", "config=erlang", ws.path().to_str().unwrap()]);
    assert_eq!(json["by_language"]["erlang"]["comment"], 1);
    assert_eq!(json["by_language"]["erlang"]["code"], 1);
}

#[test]
fn map_ext_to_unknown_language_is_reported() {
    let ws = TempWorkspace::new();
    ws.create_file("a.cob", "DISPLAY 'HI'.\n");
    codecount()
        .args(["--map-ext", "cob=cobol", ws.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("cobol"));

    codecount()
        .args(["--strict", "--map-ext", "cob=cobol", ws.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn hidden_files_are_opt_in() {
    let ws = TempWorkspace::new();
    ws.create_file(".tools/gen.go", "package gen\n");
    ws.create_file("main.go", "package main\n");

    let json = json_for(&[ws.path().to_str().unwrap()]);
    assert_eq!(json["by_language"]["go"]["files"], 1);

    let json = json_for(&["--hidden", ws.path().to_str().unwrap()]);
    assert_eq!(json["by_language"]["go"]["files"], 2);
}

#[test]
fn missing_path_is_reported_not_fatal() {
    let ws = TempWorkspace::new();
    codecount()
        .arg(ws.path().join("nope"))
        .assert()
        .success()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn verbose_logs_on_stderr() {
    let ws = TempWorkspace::with_mixed_sources();
    codecount()
        .env_remove("RUST_LOG")
        .args(["-v", ws.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("counted 3 files"));
}
