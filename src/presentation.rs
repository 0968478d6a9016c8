// src/presentation.rs
use crate::config::AppConfig;
use crate::error::Result;
use crate::options::OutputFormat;
use codecount_engine::{CodeStat, FileReport, RunResult, Summary};
use serde::Serialize;
use std::io::Write;

pub const CSV_HEADER: &str = "type,files,total,code,comment,blank,comment_percent";

/// Render `result` in the configured format.
///
/// # Errors
/// Fails only if writing to `out` fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &AppConfig) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_table(out, result, config.show_files),
        OutputFormat::Csv => write_csv(out, result, config.show_files),
        OutputFormat::Json => write_json(out, result, config.show_files),
    }
}

/// Print per-file problems to stderr.
pub fn report_problems(result: &RunResult) {
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &result.errors {
        eprintln!("error: {error}");
    }
}

fn write_table<W: Write>(out: &mut W, result: &RunResult, show_files: bool) -> Result<()> {
    let summary = &result.summary;
    if summary.is_empty() {
        writeln!(out, "No source files found.")?;
        return Ok(());
    }

    if show_files {
        writeln!(out, "{:>9}{:>9}{:>9}{:>9}  {:<8}  FILE", "TOTAL", "CODE", "COMMENT", "BLANK", "TYPE")?;
        writeln!(out, "{}", "-".repeat(64))?;
        for file in &result.files {
            let s = &file.stat;
            writeln!(
                out,
                "{:>9}{:>9}{:>9}{:>9}  {:<8}  {}{}",
                s.total,
                s.code,
                s.comment,
                s.blank,
                file.language,
                file.path.display(),
                if file.truncated { " (truncated)" } else { "" }
            )?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{:<10}{:>7}{:>9}{:>9}{:>9}{:>9}{:>10}",
        "TYPE", "FILES", "TOTAL", "CODE", "COMMENT", "BLANK", "COMMENT%"
    )?;
    writeln!(out, "{}", "-".repeat(63))?;
    for (tag, totals) in summary.iter() {
        write_summary_row(out, tag, totals.files, &totals.stat)?;
    }
    writeln!(out, "---")?;
    write_summary_row(out, "TOTAL", summary.files(), &summary.total)?;

    writeln!(out)?;
    writeln!(out, "{}", summary.total)?;
    if !result.skipped.is_empty() {
        writeln!(out, "({} files skipped: unknown language)", result.skipped.len())?;
    }
    Ok(())
}

fn write_summary_row<W: Write>(out: &mut W, label: &str, files: usize, stat: &CodeStat) -> Result<()> {
    let [total, code, comment, blank, percent] = stat.to_fields();
    writeln!(out, "{label:<10}{files:>7}{total:>9}{code:>9}{comment:>9}{blank:>9}{percent:>10}")?;
    Ok(())
}

/// CSV の1フィールドをエスケープする
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

fn write_csv_row<W: Write>(out: &mut W, label: &str, files: usize, stat: &CodeStat) -> Result<()> {
    writeln!(out, "{},{files},{}", csv_field(label), stat.to_fields().join(","))?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, result: &RunResult, show_files: bool) -> Result<()> {
    let summary = &result.summary;
    writeln!(out, "{CSV_HEADER}")?;
    for (tag, totals) in summary.iter() {
        write_csv_row(out, tag, totals.files, &totals.stat)?;
    }
    write_csv_row(out, "total", summary.files(), &summary.total)?;

    if show_files {
        writeln!(out)?;
        writeln!(out, "path,type,{}", CodeStat::FIELD_NAMES.join(","))?;
        for file in &result.files {
            writeln!(
                out,
                "{},{},{}",
                csv_field(&file.path.display().to_string()),
                csv_field(&file.language),
                file.stat.to_fields().join(",")
            )?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    #[serde(flatten)]
    summary: &'a Summary,
    skipped: usize,
    errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileReport]>,
}

fn write_json<W: Write>(out: &mut W, result: &RunResult, show_files: bool) -> Result<()> {
    let doc = JsonOutput {
        version: crate::VERSION,
        summary: &result.summary,
        skipped: result.skipped.len(),
        errors: result.errors.len(),
        files: show_files.then_some(result.files.as_slice()),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
