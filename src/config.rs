// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::{self, OutputFormat};
pub use codecount_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use codecount_engine::options as engine_options;
use log::LevelFilter;
use std::path::PathBuf;

/// Engine configuration plus what the CLI needs to render and log.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub format: OutputFormat,
    /// Emit per-file rows as well as the summary.
    pub show_files: bool,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let walk = walk_options_from_args(&args)?;
        let filter = filter_config_from_args(&args)?;
        let read_failure: engine_options::ReadFailurePolicy = args.behavior.read_failure.into();

        let engine = ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .read_failure(read_failure)
            .strict(args.behavior.strict)
            .jobs(args.scan.jobs)
            .build()?;

        Ok(Self {
            engine,
            format: args.output.format,
            show_files: args.output.files,
            log_level: log_level(args.behavior.verbose, args.behavior.quiet),
        })
    }
}

/// `-q` / `-v` / `-vv` をログレベルに変換する（既定は warn）
#[must_use]
pub const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let walk = WalkOptionsBuilder::default()
        .roots(roots)
        .threads(scan.jobs.unwrap_or_else(num_cpus::get))
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .build()?;
    Ok(walk)
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig> {
    let opts = &args.filter;
    let map_ext: hashbrown::HashMap<String, String> = opts.map_ext.iter().cloned().collect();
    let allow_ext: Vec<String> = opts
        .ext
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_owned())
        .filter(|e| !e.is_empty())
        .collect();

    let filter = FilterConfigBuilder::default()
        .allow_ext(allow_ext)
        .map_ext(map_ext)
        .build()?;
    Ok(filter)
}

// CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::ReadFailure,
    engine_options::ReadFailurePolicy,
    Truncate,
    Discard
);
