#![cfg_attr(not(test), no_std)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod counter;
pub mod language;
pub mod stats;

pub use counter::{count_bytes, count_text};
pub use language::{Classifier, ClassifierRegistry, Language, LineClassifier};
pub use stats::{CodeStat, LineClass};
