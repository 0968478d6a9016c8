//! 言語タグ → 分類器のレジストリ

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use super::{Classifier, Language, tag_for_extension};

/// Built-in tag bindings.
const BUILTIN: &[(&str, Language)] = &[
    ("go", Language::Go),
    ("c", Language::CFamily),
    ("cpp", Language::CFamily),
    ("java", Language::CFamily),
    ("erlang", Language::Erlang),
];

/// Maps language tags to classifier families.
///
/// Every lookup hands out a new classifier in its initial state, so callers
/// never need to reset what they receive and two files never share state.
#[derive(Debug, Clone)]
pub struct ClassifierRegistry {
    languages: HashMap<String, Language>,
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierRegistry {
    /// Registry with the built-in tags (`go`, `c`, `cpp`, `java`, `erlang`).
    #[must_use]
    pub fn new() -> Self {
        let languages = BUILTIN
            .iter()
            .map(|&(tag, language)| (String::from(tag), language))
            .collect();
        Self { languages }
    }

    /// Registry with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// Bind (or rebind) `tag` to `language`.
    pub fn register(&mut self, tag: impl Into<String>, language: Language) -> &mut Self {
        self.languages.insert(tag.into(), language);
        self
    }

    #[must_use]
    pub fn language(&self, tag: &str) -> Option<Language> {
        self.languages.get(tag).copied()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.languages.contains_key(tag)
    }

    /// A freshly reset classifier for `tag`, or `None` for an unknown tag.
    #[must_use]
    pub fn classifier(&self, tag: &str) -> Option<Classifier> {
        self.language(tag).map(Language::classifier)
    }

    /// Resolve an extension to a registered tag.
    ///
    /// `overrides` (extension → tag) is consulted before the built-in table.
    #[must_use]
    pub fn resolve_extension<'a>(
        &self,
        ext: &str,
        overrides: &'a HashMap<String, String>,
    ) -> Option<&'a str> {
        let tag = overrides
            .get(ext)
            .map(String::as_str)
            .or_else(|| tag_for_extension(ext))?;
        self.contains(tag).then_some(tag)
    }

    /// Known tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}
