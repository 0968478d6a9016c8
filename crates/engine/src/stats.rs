use crate::aggregate::Summary;
use crate::error::EngineError;
use codecount_core::CodeStat;
use serde::Serialize;
use std::path::PathBuf;

/// Counts for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Language tag the file was classified under.
    pub language: String,
    #[serde(flatten)]
    pub stat: CodeStat,
    /// The read stopped early and `stat` holds only the lines before the failure.
    pub truncated: bool,
}

impl FileReport {
    #[must_use]
    pub fn new(path: PathBuf, language: impl Into<String>, stat: CodeStat) -> Self {
        Self {
            path,
            language: language.into(),
            stat,
            truncated: false,
        }
    }
}

/// Everything one engine run produced.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Per-file reports, sorted by path.
    pub files: Vec<FileReport>,
    pub summary: Summary,
    /// Files whose extension maps to no registered language.
    pub skipped: Vec<PathBuf>,
    /// Non-fatal problems; the affected file is still counted.
    pub warnings: Vec<EngineError>,
    /// Files (or walk entries) that produced no counts.
    pub errors: Vec<EngineError>,
}

impl RunResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
