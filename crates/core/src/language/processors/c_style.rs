// crates/core/src/language/processors/c_style.rs
//! # C-Family Line Classifier
//!
//! Transition table for C, C++ and Java.
//!
//! ## Supported Syntax
//!
//! - **Line comments**: `//`
//! - **Block comments**: `/* */` (not nested)
//! - **String literals**: `"..."` with backslash escapes; an unterminated
//!   string carries over to the next line
//! - **Character literals**: `'...'` with backslash escapes
//!
//! ## Usage Example
//!
//! ```rust
//! use codecount_core::language::processors::CFamilyClassifier;
//! use codecount_core::language::LineClassifier;
//!
//! let mut classifier = CFamilyClassifier::new();
//! assert!(classifier.classify_line("int x = 1;").has_code);
//! assert!(classifier.classify_line("/* open").has_comment);
//! assert!(classifier.is_in_spanning_construct());
//! ```

use crate::language::machine::{LineFlags, StateMachine, TransitionTable};
use crate::stats::LineClass;

/// C系言語の字句状態
///
/// Shared with the Go table, which adds [`CState::RawString`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CState {
    /// Between tokens.
    #[default]
    Init,
    /// Saw `/`, waiting to know whether a comment starts.
    Slash,
    /// Inside a bare code token.
    Code,
    /// After `//`; the rest of the line is comment.
    LineComment,
    BlockComment,
    /// Saw `*` inside a block comment.
    BlockCommentClosing,
    String,
    StringEscape,
    Char,
    CharEscape,
    /// Backtick literal (Go only).
    RawString,
}

impl CState {
    pub(crate) const fn in_block_comment(self) -> bool {
        matches!(self, Self::BlockComment | Self::BlockCommentClosing)
    }
}

/// C / C++ / Java の遷移表
#[derive(Debug, Clone, Copy)]
pub struct CFamily;

/// C系言語の分類器
pub type CFamilyClassifier = StateMachine<CFamily>;

impl CFamily {
    /// Transition from a between-tokens or code position.
    pub(crate) fn token_start(ch: char, flags: &mut LineFlags) -> Option<CState> {
        match ch {
            '/' => Some(CState::Slash),
            '"' => {
                flags.code();
                Some(CState::String)
            }
            '\'' => {
                flags.code();
                Some(CState::Char)
            }
            c if c.is_whitespace() => Some(CState::Init),
            _ => None,
        }
    }
}

impl TransitionTable for CFamily {
    type State = CState;

    fn step(state: CState, ch: char, flags: &mut LineFlags) -> CState {
        match state {
            CState::Init | CState::Code => Self::token_start(ch, flags).unwrap_or_else(|| {
                flags.code();
                CState::Code
            }),
            CState::Slash => match ch {
                '*' => {
                    flags.comment();
                    CState::BlockComment
                }
                '/' => {
                    flags.comment();
                    CState::LineComment
                }
                // the slash was an operator
                _ => {
                    flags.code();
                    Self::step(CState::Code, ch, flags)
                }
            },
            CState::BlockComment => {
                flags.comment();
                if ch == '*' { CState::BlockCommentClosing } else { CState::BlockComment }
            }
            CState::BlockCommentClosing => {
                flags.comment();
                match ch {
                    '/' => CState::Init,
                    '*' => CState::BlockCommentClosing,
                    _ => CState::BlockComment,
                }
            }
            CState::String => {
                flags.code();
                match ch {
                    '\\' => CState::StringEscape,
                    '"' => CState::Code,
                    _ => CState::String,
                }
            }
            CState::StringEscape => {
                flags.code();
                CState::String
            }
            CState::Char => {
                flags.code();
                match ch {
                    '\\' => CState::CharEscape,
                    '\'' => CState::Code,
                    _ => CState::Char,
                }
            }
            CState::CharEscape => {
                flags.code();
                CState::Char
            }
            CState::LineComment => CState::LineComment,
            // not reachable from this table
            CState::RawString => CState::RawString,
        }
    }

    fn ends_line(state: CState) -> bool {
        state == CState::LineComment
    }

    fn finish(state: CState, flags: &mut LineFlags) -> CState {
        match state {
            CState::BlockComment | CState::BlockCommentClosing => CState::BlockComment,
            // `\` before the newline escapes the newline itself
            CState::String | CState::StringEscape => CState::String,
            CState::Slash => {
                flags.code();
                CState::Init
            }
            _ => CState::Init,
        }
    }

    fn empty_line(state: CState) -> LineClass {
        match state {
            s if s.in_block_comment() => LineClass::COMMENT,
            CState::String | CState::StringEscape => LineClass::CODE,
            _ => LineClass::BLANK,
        }
    }
}
