//! 言語別の集計
//!
//! A [`Summary`] is a commutative monoid over [`CodeStat`]: per-file results
//! can be recorded in any order and partial summaries merged in any grouping.

use codecount_core::CodeStat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Per-language bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageTotals {
    pub files: usize,
    #[serde(flatten)]
    pub stat: CodeStat,
}

impl AddAssign for LanguageTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.files += rhs.files;
        self.stat += rhs.stat;
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum over every language.
    pub total: CodeStat,
    pub by_language: BTreeMap<String, LanguageTotals>,
}

impl Summary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's counts into the `tag` bucket and the grand total.
    pub fn record(&mut self, tag: &str, stat: CodeStat) {
        let bucket = match self.by_language.get_mut(tag) {
            Some(bucket) => bucket,
            None => self.by_language.entry(tag.to_owned()).or_default(),
        };
        bucket.files += 1;
        bucket.stat += stat;
        self.total += stat;
    }

    /// Field-wise sum with `other`.
    pub fn merge(&mut self, other: Self) {
        self.total += other.total;
        for (tag, totals) in other.by_language {
            *self.by_language.entry(tag).or_default() += totals;
        }
    }

    /// Number of files recorded.
    #[must_use]
    pub fn files(&self) -> usize {
        self.by_language.values().map(|t| t.files).sum()
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&LanguageTotals> {
        self.by_language.get(tag)
    }

    /// Buckets in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageTotals)> {
        self.by_language.iter().map(|(tag, totals)| (tag.as_str(), totals))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }
}

impl<'a> Extend<(&'a str, CodeStat)> for Summary {
    fn extend<I: IntoIterator<Item = (&'a str, CodeStat)>>(&mut self, iter: I) {
        for (tag, stat) in iter {
            self.record(tag, stat);
        }
    }
}

impl<'a> FromIterator<(&'a str, CodeStat)> for Summary {
    fn from_iter<I: IntoIterator<Item = (&'a str, CodeStat)>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}
