// tests/common/mod.rs
//! 共通テストユーティリティ

use std::fs;
use std::path::{Path, PathBuf};

/// Scratch source tree removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::Builder::new().prefix("codecount_test").tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを作成
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Go, C++ and Erlang sources plus one file of unknown language.
    pub fn with_mixed_sources() -> Self {
        let ws = Self::new();
        ws.create_file("cmd/app/main.go", GO_SOURCE);
        ws.create_file("native/widget.cpp", CPP_SOURCE);
        ws.create_file("server/srv.erl", ERLANG_SOURCE);
        ws.create_file("NOTES.txt", "just prose\n");
        ws
    }
}

/// total 8 / code 6 / comment 2 / blank 1
pub const GO_SOURCE: &str = "package main

// main is the entry point.
func main() {
\tmsg := `raw /* not a comment
still raw`
\tprintln(msg) /* trailing */
}
";

/// total 6 / code 3 / comment 3 / blank 1
pub const CPP_SOURCE: &str = "#include <cstdio>
/* widget
 * implementation */

int widget() { return '/'; } // slash char
const char *s = \"// not a comment\";
";

/// total 5 / code 3 / comment 2 / blank 1
pub const ERLANG_SOURCE: &str = "-module(srv).
%% exports
-export([start/0]).

start() -> io:format(\"100%~n\"). % prints
";
