//! 行分類の結果と集計値
//!
//! [`LineClass`] is the verdict for one physical line; [`CodeStat`] is the
//! additive aggregate that per-line verdicts, files and language buckets fold
//! into.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Classification of a single line.
///
/// `is_blank` is exclusive with the other two flags. `has_code` and
/// `has_comment` are independent: `x = 1; // note` sets both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineClass {
    pub is_blank: bool,
    pub has_code: bool,
    pub has_comment: bool,
}

impl LineClass {
    pub const BLANK: Self = Self {
        is_blank: true,
        has_code: false,
        has_comment: false,
    };

    pub const CODE: Self = Self {
        is_blank: false,
        has_code: true,
        has_comment: false,
    };

    pub const COMMENT: Self = Self {
        is_blank: false,
        has_code: false,
        has_comment: true,
    };

    #[must_use]
    pub const fn new(has_code: bool, has_comment: bool) -> Self {
        Self {
            is_blank: false,
            has_code,
            has_comment,
        }
    }
}

/// Line counts for a file, a language bucket or a whole run.
///
/// `total` is the number of lines seen. A line may count as both code and
/// comment, so `code + comment` can exceed `total`; `blank` never overlaps
/// with either.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeStat {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl CodeStat {
    /// CSV/表形式の列名（`to_fields` と同じ順序）
    pub const FIELD_NAMES: [&'static str; 5] = ["total", "code", "comment", "blank", "comment_percent"];

    #[must_use]
    pub const fn new(total: usize, code: usize, comment: usize, blank: usize) -> Self {
        Self {
            total,
            code,
            comment,
            blank,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Comment lines as a percentage of lines carrying code or comment.
    ///
    /// Returns `0.0` when there is neither code nor comment.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn comment_percent(&self) -> f64 {
        let denominator = self.code + self.comment;
        if denominator == 0 {
            return 0.0;
        }
        self.comment as f64 / denominator as f64 * 100.0
    }

    /// `comment_percent` rendered with two decimals and a trailing `%`.
    #[must_use]
    pub fn comment_percent_display(&self) -> String {
        format!("{:.2}%", self.comment_percent())
    }

    /// `[total, code, comment, blank, "P%"]` for tabular export.
    #[must_use]
    pub fn to_fields(&self) -> [String; 5] {
        [
            self.total.to_string(),
            self.code.to_string(),
            self.comment.to_string(),
            self.blank.to_string(),
            self.comment_percent_display(),
        ]
    }
}

impl From<LineClass> for CodeStat {
    fn from(class: LineClass) -> Self {
        if class.is_blank {
            return Self::new(1, 0, 0, 1);
        }
        Self::new(1, usize::from(class.has_code), usize::from(class.has_comment), 0)
    }
}

impl Add for CodeStat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total: self.total + rhs.total,
            code: self.code + rhs.code,
            comment: self.comment + rhs.comment,
            blank: self.blank + rhs.blank,
        }
    }
}

impl AddAssign for CodeStat {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<LineClass> for CodeStat {
    fn add_assign(&mut self, rhs: LineClass) {
        *self += Self::from(rhs);
    }
}

impl Sum for CodeStat {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a CodeStat> for CodeStat {
    fn sum<I: Iterator<Item = &'a CodeStat>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for CodeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total = {}, Code = {}, Comment = {}, Blank = {}, CommentPercent = {:.2}%",
            self.total,
            self.code,
            self.comment,
            self.blank,
            self.comment_percent()
        )
    }
}
