use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::{DirEntry, WalkBuilder};
use std::path::PathBuf;

/// Walk item: a file to scan, or an entry the walker could not read.
pub type WalkItem = Result<PathBuf>;

/// Extension allow-list check (ASCII case-insensitive). An empty list allows
/// everything.
#[must_use]
pub fn extension_allowed(filters: &FilterConfig, path: &std::path::Path) -> bool {
    if filters.allow_ext.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| filters.allow_ext.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Parallel recursive directory walk.
///
/// Every regular file that passes the filters is sent on `tx`; walker errors
/// are sent as [`EngineError::Walk`] and the walk continues.
///
/// # Errors
/// Returns an error if no root was given.
pub fn walk_parallel(options: &WalkOptions, filters: &FilterConfig, tx: &Sender<WalkItem>) -> Result<()> {
    let Some((first, rest)) = options.roots.split_first() else {
        return Err(EngineError::Config("no input paths".to_owned()));
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .git_global(options.git_ignore)
        .git_exclude(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let filters = filters.clone();
    builder.filter_entry(move |entry: &DirEntry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        extension_allowed(&filters, entry.path())
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let item = match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => Ok(entry.into_path()),
                Ok(_) => return ignore::WalkState::Continue,
                Err(e) => Err(EngineError::Walk(e)),
            };
            if tx.send(item).is_err() {
                // receiver gone
                return ignore::WalkState::Quit;
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}
