// crates/engine/src/config.rs
use crate::options::ReadFailurePolicy;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Only walk files with these extensions (empty = all).
    #[builder(default)]
    pub allow_ext: Vec<String>,
    /// Extension → language tag overrides.
    #[builder(default)]
    pub map_ext: hashbrown::HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,
    #[builder(default)]
    pub read_failure: ReadFailurePolicy,
    /// Abort on the first per-file error instead of collecting it.
    #[builder(default)]
    pub strict: bool,
    /// Scanner threads (`None` = one per core).
    #[builder(default)]
    pub jobs: Option<usize>,
}
