// crates/core/src/language/classifier_trait.rs
//! 行分類トレイト
//!
//! 各言語の分類器に共通のインターフェースを提供します。
//!
//! # Example
//!
//! ```rust
//! use codecount_core::language::{LineClassifier, Language};
//!
//! let mut classifier = Language::CFamily.classifier();
//! let class = classifier.classify_line("int x = 1; // note");
//! assert!(class.has_code && class.has_comment);
//! ```

use alloc::boxed::Box;

use crate::stats::LineClass;

/// Stateful per-line classifier.
///
/// Implementations carry residual state from one line to the next (open block
/// comments, open multi-line strings), so one instance must only ever see the
/// lines of a single file, in order.
pub trait LineClassifier: Send {
    /// Classify one physical line. A trailing newline is tolerated.
    fn classify_line(&mut self, line: &str) -> LineClass;

    /// Return to the between-tokens state. Call before feeding a new file.
    fn reset(&mut self);

    /// Whether the previous line left a construct open (block comment,
    /// multi-line string, ...).
    fn is_in_spanning_construct(&self) -> bool {
        false
    }
}

impl LineClassifier for Box<dyn LineClassifier> {
    fn classify_line(&mut self, line: &str) -> LineClass {
        (**self).classify_line(line)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn is_in_spanning_construct(&self) -> bool {
        (**self).is_in_spanning_construct()
    }
}
