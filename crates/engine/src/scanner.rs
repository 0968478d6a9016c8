// crates/engine/src/scanner.rs
//! 行単位のファイル走査
//!
//! A file is a lazy sequence of `\n`-terminated lines folded into one
//! [`CodeStat`]; the only residual state is inside the classifier.

use crate::error::{EngineError, Result};
use crate::options::ReadFailurePolicy;
use codecount_core::{CodeStat, LineClassifier};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Result of scanning one input.
#[derive(Debug)]
pub struct ScanOutcome {
    pub stat: CodeStat,
    /// Set when a read error cut the input short and the partial counts were
    /// kept ([`ReadFailurePolicy::Truncate`]).
    pub interruption: Option<EngineError>,
}

impl ScanOutcome {
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.interruption.is_some()
    }
}

/// Fold every line of `reader` through `classifier`.
///
/// The classifier is reset before the first line. `path` is only used for
/// error reporting.
///
/// # Errors
/// Returns [`EngineError::PartialRead`] when reading fails and `policy` is
/// [`ReadFailurePolicy::Discard`].
pub fn scan_reader<R, C>(
    reader: R,
    classifier: &mut C,
    policy: ReadFailurePolicy,
    path: &Path,
) -> Result<ScanOutcome>
where
    R: BufRead,
    C: LineClassifier + ?Sized,
{
    classifier.reset();
    let mut stat = CodeStat::zero();

    for line in reader.split(b'\n') {
        match line {
            Ok(bytes) => stat += classifier.classify_line(&String::from_utf8_lossy(&bytes)),
            Err(source) => {
                let error = EngineError::PartialRead {
                    path: path.to_path_buf(),
                    lines_read: stat.total,
                    source,
                };
                return match policy {
                    ReadFailurePolicy::Truncate => {
                        log::warn!("{error}; keeping {} counted lines", stat.total);
                        Ok(ScanOutcome {
                            stat,
                            interruption: Some(error),
                        })
                    }
                    ReadFailurePolicy::Discard => Err(error),
                };
            }
        }
    }

    Ok(ScanOutcome {
        stat,
        interruption: None,
    })
}

/// Open `path` and scan it.
///
/// # Errors
/// [`EngineError::FileOpen`] if the file cannot be opened, plus whatever
/// [`scan_reader`] reports.
pub fn scan_file<C>(path: &Path, classifier: &mut C, policy: ReadFailurePolicy) -> Result<ScanOutcome>
where
    C: LineClassifier + ?Sized,
{
    let file = File::open(path).map_err(|source| EngineError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    scan_reader(BufReader::new(file), classifier, policy, path)
}
