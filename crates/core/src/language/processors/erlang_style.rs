// crates/core/src/language/processors/erlang_style.rs
//! Erlang のコメント処理
//!
//! 対象: Erlang (.erl, .hrl)
//! コメント: `%` から行末まで（ブロックコメントなし）
//!
//! `"..."` strings and `'...'` quoted atoms are closed only by their matching
//! quote; a backslash has no special meaning here. Both may span lines.

use crate::language::machine::{LineFlags, StateMachine, TransitionTable};
use crate::stats::LineClass;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErlangState {
    #[default]
    Init,
    Code,
    LineComment,
    String,
    Atom,
}

#[derive(Debug, Clone, Copy)]
pub struct ErlangFamily;

pub type ErlangClassifier = StateMachine<ErlangFamily>;

impl TransitionTable for ErlangFamily {
    type State = ErlangState;

    fn step(state: ErlangState, ch: char, flags: &mut LineFlags) -> ErlangState {
        match state {
            ErlangState::Init | ErlangState::Code => match ch {
                '%' => {
                    flags.comment();
                    ErlangState::LineComment
                }
                '"' => {
                    flags.code();
                    ErlangState::String
                }
                '\'' => {
                    flags.code();
                    ErlangState::Atom
                }
                c if c.is_whitespace() => state,
                _ => {
                    flags.code();
                    ErlangState::Code
                }
            },
            ErlangState::String => {
                flags.code();
                if ch == '"' { ErlangState::Code } else { ErlangState::String }
            }
            ErlangState::Atom => {
                flags.code();
                if ch == '\'' { ErlangState::Code } else { ErlangState::Atom }
            }
            ErlangState::LineComment => ErlangState::LineComment,
        }
    }

    fn ends_line(state: ErlangState) -> bool {
        state == ErlangState::LineComment
    }

    fn finish(state: ErlangState, _flags: &mut LineFlags) -> ErlangState {
        match state {
            ErlangState::String | ErlangState::Atom => state,
            _ => ErlangState::Init,
        }
    }

    fn empty_line(state: ErlangState) -> LineClass {
        match state {
            ErlangState::String | ErlangState::Atom => LineClass::CODE,
            _ => LineClass::BLANK,
        }
    }
}
