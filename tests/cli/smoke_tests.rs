use assert_cmd::Command;
use predicates::prelude::*;

fn codecount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_codecount"))
}

#[test]
fn shows_help() {
    codecount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("codecount"))
        .stdout(predicate::str::contains("--map-ext"));
}

#[test]
fn shows_version() {
    codecount()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_format() {
    codecount()
        .args(["--format", "yaml", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn rejects_malformed_mapping() {
    codecount()
        .args(["--map-ext", "tpl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected ext=tag"));
}
