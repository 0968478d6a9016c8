// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::AppConfig;
use crate::error::Result;
use codecount_engine::RunResult;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the engine and render the result to `out`.
///
/// Per-file warnings and errors go to stderr; they do not fail the run.
///
/// # Errors
/// Engine failures (bad configuration, strict-mode file errors) and output
/// write errors.
pub fn execute<W: Write>(config: &AppConfig, out: &mut W) -> Result<RunResult> {
    let result = codecount_engine::run(&config.engine)?;
    presentation::report_problems(&result);
    presentation::write_results(out, &result, config)?;
    out.flush()?;
    Ok(result)
}
