use codecount_engine::config::{Config, FilterConfig, WalkOptions};
use codecount_engine::{ClassifierRegistry, CodeStat, EngineError, run, run_with_registry};
use codecount_core::Language;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "cmd/main.go",
        "package main\n\n// doc\nvar s = `raw\n// not a comment\n`\n",
    );
    write(
        dir.path(),
        "src/lib.cpp",
        "/*\n * header\n */\nint f() { return 1; } // one\n\n",
    );
    write(dir.path(), "src/m.erl", "-module(m).\n% c\n");
    write(dir.path(), "README.md", "# readme\n");
    dir
}

fn config_for(root: &Path) -> Config {
    Config {
        walk: WalkOptions {
            roots: vec![root.to_path_buf()],
            ..Default::default()
        },
        jobs: Some(2),
        ..Default::default()
    }
}

#[test]
fn aggregates_by_language() {
    let dir = project();
    let result = run(&config_for(dir.path())).unwrap();

    assert_eq!(result.files.len(), 3);
    assert_eq!(result.skipped.len(), 1);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());

    let summary = &result.summary;
    assert_eq!(summary.get("go").unwrap().stat, CodeStat::new(6, 4, 1, 1));
    assert_eq!(summary.get("cpp").unwrap().stat, CodeStat::new(5, 1, 4, 1));
    assert_eq!(summary.get("erlang").unwrap().stat, CodeStat::new(2, 1, 1, 0));
    assert_eq!(summary.total, CodeStat::new(13, 6, 6, 2));
    assert_eq!(summary.files(), 3);
}

#[test]
fn files_are_sorted_by_path() {
    let dir = project();
    let result = run(&config_for(dir.path())).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn allow_list_restricts_walk() {
    let dir = project();
    let mut config = config_for(dir.path());
    config.filter = FilterConfig {
        allow_ext: vec!["go".to_owned()],
        ..Default::default()
    };
    let result = run(&config).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].language, "go");
    assert!(result.skipped.is_empty());
}

#[test]
fn unknown_mapping_is_collected_or_fatal() {
    let dir = project();
    write(dir.path(), "legacy.cob", "DISPLAY 'X'.\n");
    let mut config = config_for(dir.path());
    config.filter.map_ext.insert("cob".to_owned(), "cobol".to_owned());

    let result = run(&config).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0], EngineError::UnknownLanguage { .. }));
    assert_eq!(result.files.len(), 3);

    config.strict = true;
    let err = run(&config).unwrap_err();
    assert!(matches!(err, EngineError::UnknownLanguage { .. }));
}

#[test]
fn custom_registry_tag() {
    let dir = project();
    write(dir.path(), "tpl/page.tpl", "% comment\nok.\n");
    let mut config = config_for(dir.path());
    config.filter.map_ext.insert("tpl".to_owned(), "template".to_owned());

    let mut registry = ClassifierRegistry::new();
    registry.register("template", Language::Erlang);
    let result = run_with_registry(&config, &registry).unwrap();

    assert!(result.errors.is_empty());
    let bucket = result.summary.get("template").unwrap();
    assert_eq!(bucket.files, 1);
    assert_eq!(bucket.stat, CodeStat::new(2, 1, 1, 0));
}

#[test]
fn missing_root_is_collected() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(&config_for(&dir.path().join("absent"))).unwrap();
    assert!(result.files.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0], EngineError::Walk(_)));
}

#[test]
fn no_roots_is_config_error() {
    let err = run(&Config::default()).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}
