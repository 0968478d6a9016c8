pub mod classifier_trait;
pub mod extension;
pub mod machine;
pub mod processors;
pub mod registry;

pub use classifier_trait::LineClassifier;
pub use extension::tag_for_extension;
pub use registry::ClassifierRegistry;

use processors::{CFamilyClassifier, ErlangClassifier, GoClassifier};

use crate::stats::LineClass;

/// 字句ファミリー
///
/// Several language tags may share one family (C, C++ and Java are all
/// [`Language::CFamily`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// `//`, `/* */`, `"..."`, `'...'`
    CFamily,
    /// C-family plus backtick raw strings
    Go,
    /// `%` line comments, `"..."` strings, `'...'` atoms
    Erlang,
}

impl Language {
    /// A fresh classifier in its initial state.
    #[must_use]
    pub fn classifier(self) -> Classifier {
        match self {
            Self::CFamily => Classifier::CFamily(CFamilyClassifier::new()),
            Self::Go => Classifier::Go(GoClassifier::new()),
            Self::Erlang => Classifier::Erlang(ErlangClassifier::new()),
        }
    }
}

/// 言語ごとの分類器
///
/// Closed set of classifiers dispatched by `match`; callers that need an open
/// set can still box any [`LineClassifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classifier {
    CFamily(CFamilyClassifier),
    Go(GoClassifier),
    Erlang(ErlangClassifier),
}

impl Classifier {
    #[must_use]
    pub const fn language(&self) -> Language {
        match self {
            Self::CFamily(_) => Language::CFamily,
            Self::Go(_) => Language::Go,
            Self::Erlang(_) => Language::Erlang,
        }
    }
}

impl LineClassifier for Classifier {
    fn classify_line(&mut self, line: &str) -> LineClass {
        match self {
            Self::CFamily(c) => c.classify_line(line),
            Self::Go(c) => c.classify_line(line),
            Self::Erlang(c) => c.classify_line(line),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::CFamily(c) => c.reset(),
            Self::Go(c) => c.reset(),
            Self::Erlang(c) => c.reset(),
        }
    }

    fn is_in_spanning_construct(&self) -> bool {
        match self {
            Self::CFamily(c) => c.is_in_spanning_construct(),
            Self::Go(c) => c.is_in_spanning_construct(),
            Self::Erlang(c) => c.is_in_spanning_construct(),
        }
    }
}
