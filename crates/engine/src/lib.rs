// crates/engine/src/lib.rs
use rayon::prelude::*;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod scanner;
pub mod stats;

pub use aggregate::{LanguageTotals, Summary};
pub use codecount_core::{ClassifierRegistry, CodeStat};
pub use config::Config;
pub use error::{EngineError, Result};
pub use options::ReadFailurePolicy;
pub use stats::{FileReport, RunResult};

use crate::filesystem::WalkItem;
use crate::processor::{FileOutcome, process_file};

/// Run the counting engine with the built-in languages.
///
/// # Errors
/// See [`run_with_registry`].
pub fn run(config: &Config) -> Result<RunResult> {
    run_with_registry(config, &ClassifierRegistry::new())
}

/// Walk `config.walk.roots`, classify every file and aggregate the counts.
///
/// Per-file problems are collected in [`RunResult::errors`] /
/// [`RunResult::warnings`] unless `config.strict` is set.
///
/// # Errors
/// Invalid configuration, or in strict mode the first per-file error.
pub fn run_with_registry(config: &Config, registry: &ClassifierRegistry) -> Result<RunResult> {
    if config.walk.roots.is_empty() {
        return Err(EngineError::Config("no input paths".to_owned()));
    }

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = config.jobs {
        pool = pool.num_threads(jobs);
    }
    let pool = pool.build().map_err(|e| EngineError::Config(e.to_string()))?;

    let (tx, rx) = crossbeam_channel::bounded::<WalkItem>(1024);
    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();
    let walker = std::thread::spawn(move || filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx));

    let scan = |item: WalkItem| item.and_then(|path| process_file(path, config, registry));
    let outcomes = pool.install(|| -> Result<Vec<Result<FileOutcome>>> {
        let results = rx.into_iter().par_bridge().map(scan);
        if config.strict {
            // fail on first error
            results
                .collect::<Result<Vec<_>>>()
                .map(|ok| ok.into_iter().map(Ok).collect())
        } else {
            Ok(results.collect())
        }
    })?;
    join_walker(walker)?;

    Ok(collect_outcomes(outcomes))
}

fn join_walker(walker: std::thread::JoinHandle<Result<()>>) -> Result<()> {
    match walker.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Single accumulation point: fold per-file outcomes into a [`RunResult`].
fn collect_outcomes(outcomes: Vec<Result<FileOutcome>>) -> RunResult {
    let mut result = RunResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(FileOutcome::Counted { report, warning }) => {
                result.files.push(report);
                result.warnings.extend(warning);
            }
            Ok(FileOutcome::Skipped(path)) => result.skipped.push(path),
            Err(e) => {
                if matches!(e, EngineError::Walk(_)) {
                    log::error!("{e}");
                } else {
                    log::warn!("{e}");
                }
                result.errors.push(e);
            }
        }
    }

    result.files.sort_by(|a, b| a.path.cmp(&b.path));
    result.skipped.sort();
    for report in &result.files {
        result.summary.record(&report.language, report.stat);
    }
    log::info!(
        "counted {} files ({} skipped, {} errors)",
        result.files.len(),
        result.skipped.len(),
        result.errors.len()
    );
    result
}
