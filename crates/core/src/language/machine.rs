// crates/core/src/language/machine.rs
//! Generic line-scanning state machine.
//!
//! Every language family shares the same driver: trim the line, short-circuit
//! empty lines, feed characters one by one through a transition table and
//! normalise the state at end of line. Only the table differs per family.

use crate::stats::LineClass;

use super::classifier_trait::LineClassifier;

/// Flags raised while scanning one line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineFlags {
    pub has_code: bool,
    pub has_comment: bool,
}

impl LineFlags {
    #[inline]
    pub fn code(&mut self) {
        self.has_code = true;
    }

    #[inline]
    pub fn comment(&mut self) {
        self.has_comment = true;
    }
}

impl From<LineFlags> for LineClass {
    fn from(flags: LineFlags) -> Self {
        Self::new(flags.has_code, flags.has_comment)
    }
}

/// Per-family transition table.
pub trait TransitionTable {
    type State: Copy + Default + PartialEq + core::fmt::Debug + Send;

    /// Consume one character.
    fn step(state: Self::State, ch: char, flags: &mut LineFlags) -> Self::State;

    /// A state that swallows the rest of the physical line (line comment).
    fn ends_line(state: Self::State) -> bool;

    /// End-of-line normalisation: spanning states survive (possibly collapsed),
    /// everything else returns to the initial state.
    fn finish(state: Self::State, flags: &mut LineFlags) -> Self::State;

    /// Verdict for a line that is empty after trimming.
    fn empty_line(state: Self::State) -> LineClass;
}

/// A classifier driven by a [`TransitionTable`].
pub struct StateMachine<T: TransitionTable> {
    state: T::State,
}

// Not derived: `T` is only a marker.
impl<T: TransitionTable> Default for StateMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransitionTable> Clone for StateMachine<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TransitionTable> Copy for StateMachine<T> {}

impl<T: TransitionTable> PartialEq for StateMachine<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: TransitionTable> core::fmt::Debug for StateMachine<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateMachine").field("state", &self.state).finish()
    }
}

impl<T: TransitionTable> StateMachine<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: T::State::default(),
        }
    }

    /// Residual state carried into the next line.
    #[must_use]
    pub fn state(&self) -> T::State {
        self.state
    }
}

impl<T: TransitionTable> LineClassifier for StateMachine<T> {
    fn classify_line(&mut self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return T::empty_line(self.state);
        }

        let mut flags = LineFlags::default();
        for ch in trimmed.chars() {
            self.state = T::step(self.state, ch, &mut flags);
            if T::ends_line(self.state) {
                break;
            }
        }
        self.state = T::finish(self.state, &mut flags);
        flags.into()
    }

    fn reset(&mut self) {
        self.state = T::State::default();
    }

    fn is_in_spanning_construct(&self) -> bool {
        self.state != T::State::default()
    }
}
