// crates/core/src/language/processors/go_style.rs
//! Go のコメント処理
//!
//! C-family vocabulary plus backtick raw strings. Raw strings have no escape
//! sequences, may span lines, and everything inside them (including `/*` and
//! empty lines) is code. Interpreted `"..."` strings and rune literals end
//! with the line.

use crate::language::machine::{LineFlags, StateMachine, TransitionTable};
use crate::stats::LineClass;

use super::c_style::{CFamily, CState};

#[derive(Debug, Clone, Copy)]
pub struct GoFamily;

pub type GoClassifier = StateMachine<GoFamily>;

impl TransitionTable for GoFamily {
    type State = CState;

    fn step(state: CState, ch: char, flags: &mut LineFlags) -> CState {
        match (state, ch) {
            (CState::RawString, '`') => {
                flags.code();
                CState::Code
            }
            (CState::RawString, _) => {
                flags.code();
                CState::RawString
            }
            (CState::Init | CState::Code | CState::Slash, '`') => {
                flags.code();
                CState::RawString
            }
            _ => CFamily::step(state, ch, flags),
        }
    }

    fn ends_line(state: CState) -> bool {
        CFamily::ends_line(state)
    }

    fn finish(state: CState, flags: &mut LineFlags) -> CState {
        match state {
            CState::RawString => CState::RawString,
            CState::BlockComment | CState::BlockCommentClosing => CState::BlockComment,
            CState::Slash => {
                flags.code();
                CState::Init
            }
            _ => CState::Init,
        }
    }

    fn empty_line(state: CState) -> LineClass {
        match state {
            CState::RawString => LineClass::CODE,
            s if s.in_block_comment() => LineClass::COMMENT,
            _ => LineClass::BLANK,
        }
    }
}
