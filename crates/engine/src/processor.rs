use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::scanner::scan_file;
use crate::stats::FileReport;
use codecount_core::ClassifierRegistry;
use std::path::{Path, PathBuf};

/// What happened to one walked file.
#[derive(Debug)]
pub enum FileOutcome {
    Counted {
        report: FileReport,
        /// Read error that truncated `report`, if any.
        warning: Option<EngineError>,
    },
    /// No language is known for the file's extension.
    Skipped(PathBuf),
}

/// 拡張子から言語を決める（`--map-ext` の上書きを優先）
///
/// Extensions are lowercased before lookup, so override keys must be
/// lowercase. `Ok(None)` means the file is not source code we know about; an
/// explicit mapping to a tag the registry does not know is an error.
pub fn resolve_language<'a>(
    path: &Path,
    registry: &ClassifierRegistry,
    config: &'a Config,
) -> Result<Option<&'a str>> {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return Ok(None);
    };
    let ext = ext.to_ascii_lowercase();
    let map_ext = &config.filter.map_ext;
    if let Some(tag) = registry.resolve_extension(&ext, map_ext) {
        return Ok(Some(tag));
    }
    if let Some(tag) = map_ext.get(&ext) {
        return Err(EngineError::UnknownLanguage {
            path: path.to_path_buf(),
            tag: tag.clone(),
        });
    }
    Ok(None)
}

/// Classify and count a single file.
pub fn process_file(path: PathBuf, config: &Config, registry: &ClassifierRegistry) -> Result<FileOutcome> {
    let Some(tag) = resolve_language(&path, registry, config)? else {
        log::debug!("skipping {}: unknown language", path.display());
        return Ok(FileOutcome::Skipped(path));
    };
    let Some(mut classifier) = registry.classifier(tag) else {
        return Err(EngineError::UnknownLanguage {
            path,
            tag: tag.to_owned(),
        });
    };

    let outcome = scan_file(&path, &mut classifier, config.read_failure)?;
    log::debug!("{} [{tag}]: {}", path.display(), outcome.stat);

    let mut report = FileReport::new(path, tag, outcome.stat);
    report.truncated = outcome.is_truncated();
    Ok(FileOutcome::Counted {
        report,
        warning: outcome.interruption,
    })
}
